pub mod compare;
pub mod config;

use seqdiff_core::{EngineConfig, Result};
use std::path::Path;

/// Load the config file when given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path),
        None => Ok(EngineConfig::default()),
    }
}
