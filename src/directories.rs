//! Where saves live on disk.
//!
//! The store never decides its own roots; it asks a [`DirectoriesProvider`] on
//! every call, so a provider backed by mutable settings takes effect immediately.

use std::path::{Path, PathBuf};

use crate::paths::{PATH_SAVES, PATH_STATES, PATH_STATES_LEGACY};

pub trait DirectoriesProvider {
    /// Flat directory for battery RAM saves.
    fn saves_directory(&self) -> PathBuf;
    /// Root of the per-core state directories.
    fn states_directory(&self) -> PathBuf;
    /// Flat states directory from the old layout. Only ever read.
    fn deprecated_states_directory(&self) -> PathBuf;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directories {
    pub saves: PathBuf,
    pub states: PathBuf,
    pub deprecated_states: PathBuf,
}

impl Directories {
    pub fn new(
        saves: impl Into<PathBuf>,
        states: impl Into<PathBuf>,
        deprecated_states: impl Into<PathBuf>,
    ) -> Self {
        Self {
            saves: saves.into(),
            states: states.into(),
            deprecated_states: deprecated_states.into(),
        }
    }

    /// `saves/`, `states/` and `states-legacy/` under one base directory.
    pub fn under(base: &Path) -> Self {
        Self::new(
            base.join("saves"),
            base.join("states"),
            base.join("states-legacy"),
        )
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new(
            PATH_SAVES.clone(),
            PATH_STATES.clone(),
            PATH_STATES_LEGACY.clone(),
        )
    }
}

impl DirectoriesProvider for Directories {
    fn saves_directory(&self) -> PathBuf {
        self.saves.clone()
    }

    fn states_directory(&self) -> PathBuf {
        self.states.clone()
    }

    fn deprecated_states_directory(&self) -> PathBuf {
        self.deprecated_states.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_lays_out_three_roots() {
        let dirs = Directories::under(Path::new("/data"));
        assert_eq!(dirs.saves_directory(), PathBuf::from("/data/saves"));
        assert_eq!(dirs.states_directory(), PathBuf::from("/data/states"));
        assert_eq!(
            dirs.deprecated_states_directory(),
            PathBuf::from("/data/states-legacy")
        );
    }

    #[test]
    fn default_roots_share_data_dir() {
        let dirs = Directories::default();
        assert_eq!(dirs.saves.parent(), dirs.states.parent());
        assert_eq!(dirs.states.parent(), dirs.deprecated_states.parent());
    }
}
