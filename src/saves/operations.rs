// Single filesystem actions for saves
// Each function touches disk once (or as little as it can) and reports the path on failure

use crate::error::{Result, SaveError};
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::pure::{choose_state_location, deprecated_state_path, millis_since_epoch, state_path};
use super::types::{SaveSlotInfo, StateLocation};

/// Create `dir` and its parents. Existing directories are fine.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| SaveError::io(dir, e))?;
    log::info!("Created save directory {}", dir.display());
    Ok(())
}

pub fn exists(path: &Path) -> Result<bool> {
    path.try_exists().map_err(|e| SaveError::io(path, e))
}

/// Read a whole file. A missing file is `None`, not an error.
pub fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(data) => {
            log::debug!("Read {} bytes from {}", data.len(), path.display());
            Ok(Some(data))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SaveError::io(path, e)),
    }
}

/// Replace the contents of `path` with `data`.
///
/// With `atomic` the bytes go to a sibling `.tmp` file that is synced, renamed
/// over the target, and the directory is synced after the rename, so a crash
/// leaves either the old or the new save.
pub fn write_bytes(path: &Path, data: &[u8], atomic: bool) -> Result<()> {
    if !atomic {
        std::fs::write(path, data).map_err(|e| SaveError::io(path, e))?;
        log::info!("Wrote {} bytes to {}", data.len(), path.display());
        return Ok(());
    }

    let tmp_path = tmp_path_for(path);
    if let Err(e) = write_synced(&tmp_path, data) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(SaveError::io(path, e));
    }
    if let Some(dir) = path.parent() {
        sync_directory(dir);
    }

    log::info!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn write_synced(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| SaveError::io(path, e))?;
    file.write_all(data).map_err(|e| SaveError::io(path, e))?;
    file.sync_all().map_err(|e| SaveError::io(path, e))?;
    Ok(())
}

// Directories cannot be opened for syncing on every platform; best effort.
fn sync_directory(dir: &Path) {
    if let Ok(dir) = File::open(dir) {
        let _ = dir.sync_all();
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Decide between the namespaced and the legacy state file by what is on disk.
pub fn resolve_read_location(
    states_root: &Path,
    deprecated_root: &Path,
    core_name: &str,
    file_name: &str,
) -> Result<StateLocation> {
    let namespaced = state_path(states_root, core_name, file_name);
    let legacy = deprecated_state_path(deprecated_root, file_name);

    let namespaced_exists = exists(&namespaced)?;
    // The legacy directory is only probed when it could matter.
    let legacy_exists = !namespaced_exists && exists(&legacy)?;

    let location = choose_state_location(namespaced, namespaced_exists, legacy, legacy_exists);
    if location.is_legacy() {
        log::warn!(
            "Reading legacy state {} (no {} state yet)",
            location.path().display(),
            core_name
        );
    } else {
        log::debug!("Resolved state {}", location.path().display());
    }
    Ok(location)
}

/// Existence and modification time of a save file without reading it.
pub fn slot_info(path: &Path) -> Result<SaveSlotInfo> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SaveSlotInfo::default()),
        Err(e) => return Err(SaveError::io(path, e)),
    };
    if !metadata.is_file() {
        let e = std::io::Error::new(ErrorKind::IsADirectory, "save path is not a regular file");
        return Err(SaveError::io(path, e));
    }
    let last_modified = metadata
        .modified()
        .map(millis_since_epoch)
        .map_err(|e| SaveError::io(path, e))?;
    Ok(SaveSlotInfo {
        exists: true,
        last_modified,
    })
}

/// Files in `dir` (not recursive) whose names are in `names`, sorted by path.
pub fn find_files_named(dir: &Path, names: &[String]) -> Result<Vec<PathBuf>> {
    if !exists(dir)? {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            SaveError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| names.iter().any(|n| n == name));
        if matches {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}
