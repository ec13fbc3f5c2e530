//! Per-game scratch files, e.g. ROMs extracted from archives.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::game::GameIdentity;
use crate::paths::PATH_CACHE;
use crate::saves::operations::ensure_directory;

/// `<cache_root>/<folder>/<system>/<file_name>`, creating the directory chain.
/// The file itself is not created.
pub fn cache_file_for_game(
    cache_root: &Path,
    folder_name: &str,
    game: &impl GameIdentity,
) -> Result<PathBuf> {
    let dir = cache_root.join(folder_name).join(game.system_id());
    ensure_directory(&dir)?;
    Ok(dir.join(game.file_name()))
}

/// [`cache_file_for_game`] under the default cache directory.
pub fn default_cache_file_for_game(folder_name: &str, game: &impl GameIdentity) -> Result<PathBuf> {
    cache_file_for_game(&PATH_CACHE, folder_name, game)
}
