pub mod aggregate;
pub mod swipe;
