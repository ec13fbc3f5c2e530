// Pure functions for save paths
// No side effects - only naming and path computation

use crate::error::{Result, SaveError};
use crate::game::GameIdentity;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::types::{MAX_STATES, SaveCategory, StateLocation};

/// Everything before the last `.`, or the whole name if there is none.
pub fn strip_last_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// `mario.nes` -> `mario.srm`. Matches what RetroArch expects so users can sync
/// battery saves between the two.
pub fn ram_file_name(game: &impl GameIdentity) -> String {
    format!("{}.srm", strip_last_extension(game.file_name()))
}

pub fn auto_state_file_name(game: &impl GameIdentity) -> String {
    format!("{}.state", game.file_name())
}

/// Slot files are numbered from 1 on disk while `index` is zero based.
pub fn slot_state_file_name(game: &impl GameIdentity, index: usize) -> Result<String> {
    check_slot(index)?;
    Ok(format!("{}.slot{}", game.file_name(), index + 1))
}

pub fn state_file_name(game: &impl GameIdentity, category: SaveCategory) -> Result<String> {
    match category {
        SaveCategory::BatteryRam => Err(SaveError::NotAState),
        SaveCategory::AutoState => Ok(auto_state_file_name(game)),
        SaveCategory::SlotState(index) => slot_state_file_name(game, index),
    }
}

pub fn check_slot(index: usize) -> Result<()> {
    if index < MAX_STATES {
        Ok(())
    } else {
        Err(SaveError::InvalidSlot { index })
    }
}

pub fn save_path(saves_root: &Path, file_name: &str) -> PathBuf {
    saves_root.join(file_name)
}

pub fn state_dir(states_root: &Path, core_name: &str) -> PathBuf {
    states_root.join(core_name)
}

pub fn state_path(states_root: &Path, core_name: &str, file_name: &str) -> PathBuf {
    state_dir(states_root, core_name).join(file_name)
}

pub fn deprecated_state_path(deprecated_root: &Path, file_name: &str) -> PathBuf {
    deprecated_root.join(file_name)
}

/// Legacy wins only when it is the sole existing file. When neither exists the
/// namespaced path is returned so "not found" is reported against it.
pub fn choose_state_location(
    namespaced: PathBuf,
    namespaced_exists: bool,
    legacy: PathBuf,
    legacy_exists: bool,
) -> StateLocation {
    if namespaced_exists || !legacy_exists {
        StateLocation::Namespaced(namespaced)
    } else {
        StateLocation::Legacy(legacy)
    }
}

/// State file names a game can have in the flat legacy directory.
pub fn all_state_file_names(game: &impl GameIdentity) -> Vec<String> {
    let mut names = vec![auto_state_file_name(game)];
    names.extend((0..MAX_STATES).map(|i| format!("{}.slot{}", game.file_name(), i + 1)));
    names
}

pub fn millis_since_epoch(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
