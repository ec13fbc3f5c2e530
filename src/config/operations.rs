use crate::config::types::StoreConfig;
use crate::error::{Result, SaveError};
use crate::paths::PATH_CONFIG;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the config from its default location.
pub fn load_default_cfg() -> StoreConfig {
    load_cfg(&PATH_CONFIG)
}

/// Load a config file, falling back to defaults if it is missing or unreadable.
pub fn load_cfg(path: &Path) -> StoreConfig {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            log::debug!("No config at {}, using defaults", path.display());
            return StoreConfig::default();
        }
    };

    match serde_json::from_reader::<_, StoreConfig>(BufReader::new(file)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
            StoreConfig::default()
        }
    }
}

pub fn save_cfg(path: &Path, config: &StoreConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SaveError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| SaveError::io(path, e))?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
