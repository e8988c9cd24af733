pub mod aggregate;
pub mod scan;
