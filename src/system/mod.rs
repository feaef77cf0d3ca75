// System Layer
pub mod config;
pub mod logging;
pub mod resources;

pub use config::AppConfig;
