mod error;
mod loader;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{load_config, load_config_or_default};
pub use types::TrafficlensConfig;
pub use validate::validate_config;
