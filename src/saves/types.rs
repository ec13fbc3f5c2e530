use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Number of manual state slots per game and core.
pub const MAX_STATES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaveCategory {
    BatteryRam,
    AutoState,
    /// Zero based slot index, below [`MAX_STATES`].
    SlotState(usize),
}

impl SaveCategory {
    pub fn is_state(&self) -> bool {
        !matches!(self, SaveCategory::BatteryRam)
    }

    /// Every slot category in index order.
    pub fn slots() -> impl Iterator<Item = SaveCategory> {
        (0..MAX_STATES).map(SaveCategory::SlotState)
    }
}

/// Listing entry for one slot. `last_modified` is milliseconds since the Unix
/// epoch and is 0 when the slot is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSlotInfo {
    pub exists: bool,
    pub last_modified: u64,
}

/// Where a state read should go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateLocation {
    /// `<states>/<core>/<file>`, the only place states are written.
    Namespaced(PathBuf),
    /// A file left in the flat legacy directory with no namespaced counterpart yet.
    Legacy(PathBuf),
}

impl StateLocation {
    pub fn path(&self) -> &Path {
        match self {
            StateLocation::Namespaced(path) | StateLocation::Legacy(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            StateLocation::Namespaced(path) | StateLocation::Legacy(path) => path,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, StateLocation::Legacy(_))
    }
}
