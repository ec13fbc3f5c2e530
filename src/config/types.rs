use crate::directories::Directories;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted store settings.
///
/// Every directory is optional; unset ones fall back to the defaults under
/// [`crate::paths::PATH_DATA`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saves_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_states_dir: Option<PathBuf>,
    /// Write through a temp file and rename instead of truncating in place.
    #[serde(default = "default_atomic_writes")]
    pub atomic_writes: bool,
}

fn default_atomic_writes() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            saves_dir: None,
            states_dir: None,
            deprecated_states_dir: None,
            atomic_writes: default_atomic_writes(),
        }
    }
}

impl StoreConfig {
    pub fn directories(&self) -> Directories {
        let defaults = Directories::default();
        Directories {
            saves: self.saves_dir.clone().unwrap_or(defaults.saves),
            states: self.states_dir.clone().unwrap_or(defaults.states),
            deprecated_states: self
                .deprecated_states_dir
                .clone()
                .unwrap_or(defaults.deprecated_states),
        }
    }
}
