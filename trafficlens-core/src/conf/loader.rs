use crate::conf::error::ConfigError;
use crate::conf::types::{CONFIG_FILE_NAME, TrafficlensConfig};
use crate::conf::validate::validate_config;

use std::fs;
use std::path::Path;

/// Load and validate `trafficlens.hcl` from a config directory.
pub fn load_config(root: &Path) -> Result<TrafficlensConfig, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let cfg: TrafficlensConfig =
        hcl::from_str(&contents).map_err(|e| ConfigError::parse(&path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation
    //--------------------------------------------------------------------------
    validate_config(&cfg)?;

    tracing::debug!(path = %path.display(), "config loaded");

    Ok(cfg)
}

/// Built-in defaults when no directory is given, otherwise [`load_config`].
pub fn load_config_or_default(root: Option<&Path>) -> Result<TrafficlensConfig, ConfigError> {
    match root {
        Some(root) => load_config(root),
        None => Ok(TrafficlensConfig::default()),
    }
}
