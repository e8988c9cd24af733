pub mod assets;
pub mod site_config;
