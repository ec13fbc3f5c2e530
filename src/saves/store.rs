use crate::config::StoreConfig;
use crate::directories::{Directories, DirectoriesProvider};
use crate::error::Result;
use crate::game::GameIdentity;
use std::path::PathBuf;

use super::operations::{
    ensure_directory, exists, find_files_named, read_if_exists, resolve_read_location, slot_info,
    write_bytes,
};
use super::pure::{
    all_state_file_names, check_slot, ram_file_name, save_path, state_dir, state_file_name,
};
use super::types::{SaveCategory, SaveSlotInfo, StateLocation};

/// Reads and writes battery RAM saves and states.
///
/// Holds no cached state: every call resolves paths through the
/// [`DirectoriesProvider`] and goes to disk. Calls are independent and may run on
/// any thread. Concurrent writes to the same game and category are not
/// coordinated; the last writer wins.
#[derive(Clone, Debug)]
pub struct SaveStore<D = Directories> {
    dirs: D,
    atomic_writes: bool,
}

impl SaveStore<Directories> {
    pub fn from_config(config: &StoreConfig) -> Self {
        SaveStore::new(config.directories()).with_atomic_writes(config.atomic_writes)
    }
}

impl<D: DirectoriesProvider> SaveStore<D> {
    pub fn new(dirs: D) -> Self {
        Self {
            dirs,
            atomic_writes: true,
        }
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn directories(&self) -> &D {
        &self.dirs
    }

    // ── battery RAM ─────────────────────────────────────────────────

    pub fn read_ram(&self, game: &impl GameIdentity) -> Result<Option<Vec<u8>>> {
        let path = save_path(&self.dirs.saves_directory(), &ram_file_name(game));
        read_if_exists(&path)
    }

    pub fn write_ram(&self, game: &impl GameIdentity, data: &[u8]) -> Result<()> {
        let saves = self.dirs.saves_directory();
        ensure_directory(&saves)?;
        write_bytes(&save_path(&saves, &ram_file_name(game)), data, self.atomic_writes)
    }

    // ── states ──────────────────────────────────────────────────────

    /// Where a read of this state would go right now.
    pub fn resolve_state_location(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        category: SaveCategory,
    ) -> Result<StateLocation> {
        let file_name = state_file_name(game, category)?;
        resolve_read_location(
            &self.dirs.states_directory(),
            &self.dirs.deprecated_states_directory(),
            core_name,
            &file_name,
        )
    }

    /// Falls back to the legacy flat directory until the state is written once.
    pub fn read_state(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        category: SaveCategory,
    ) -> Result<Option<Vec<u8>>> {
        let location = self.resolve_state_location(game, core_name, category)?;
        read_if_exists(location.path())
    }

    /// Always writes the namespaced file. Legacy files are left untouched.
    pub fn write_state(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        category: SaveCategory,
        data: &[u8],
    ) -> Result<()> {
        let file_name = state_file_name(game, category)?;
        let dir = state_dir(&self.dirs.states_directory(), core_name);
        ensure_directory(&dir)?;
        write_bytes(&dir.join(file_name), data, self.atomic_writes)
    }

    /// One entry per slot, slot 0 first.
    pub fn list_slot_info(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
    ) -> Result<Vec<SaveSlotInfo>> {
        SaveCategory::slots()
            .map(|slot| {
                let location = self.resolve_state_location(game, core_name, slot)?;
                slot_info(location.path())
            })
            .collect()
    }

    /// Legacy state files of this game that still shadow a missing namespaced
    /// state for `core_name`.
    pub fn legacy_states(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
    ) -> Result<Vec<PathBuf>> {
        let states = self.dirs.states_directory();
        let names = all_state_file_names(game);
        let legacy = find_files_named(&self.dirs.deprecated_states_directory(), &names)?;

        let mut shadowing = Vec::new();
        for path in legacy {
            let Some(name) = path.file_name() else {
                continue;
            };
            if !exists(&state_dir(&states, core_name).join(name))? {
                shadowing.push(path);
            }
        }
        Ok(shadowing)
    }

    // ── any category ────────────────────────────────────────────────

    pub fn read(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        category: SaveCategory,
    ) -> Result<Option<Vec<u8>>> {
        match category {
            SaveCategory::BatteryRam => self.read_ram(game),
            _ => self.read_state(game, core_name, category),
        }
    }

    pub fn write(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        category: SaveCategory,
        data: &[u8],
    ) -> Result<()> {
        match category {
            SaveCategory::BatteryRam => self.write_ram(game, data),
            _ => self.write_state(game, core_name, category, data),
        }
    }

    // ── shorthands ──────────────────────────────────────────────────

    pub fn auto_save(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
    ) -> Result<Option<Vec<u8>>> {
        self.read_state(game, core_name, SaveCategory::AutoState)
    }

    pub fn set_auto_save(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        data: &[u8],
    ) -> Result<()> {
        self.write_state(game, core_name, SaveCategory::AutoState, data)
    }

    pub fn slot_save(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        index: usize,
    ) -> Result<Option<Vec<u8>>> {
        check_slot(index)?;
        self.read_state(game, core_name, SaveCategory::SlotState(index))
    }

    pub fn set_slot_save(
        &self,
        game: &impl GameIdentity,
        core_name: &str,
        index: usize,
        data: &[u8],
    ) -> Result<()> {
        check_slot(index)?;
        self.write_state(game, core_name, SaveCategory::SlotState(index), data)
    }
}
