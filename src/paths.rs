use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir())
});

pub static PATH_LOCAL_SHARE: LazyLock<PathBuf> = LazyLock::new(|| PATH_HOME.join(".local/share"));

/// Root for saves, states and the config file.
pub static PATH_DATA: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("retrosaves");
    }
    PATH_LOCAL_SHARE.join("retrosaves")
});

pub static PATH_CACHE: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_cache_home) = env::var("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache_home).join("retrosaves");
    }
    PATH_HOME.join(".cache/retrosaves")
});

pub static PATH_SAVES: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("saves"));

pub static PATH_STATES: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("states"));

/// Flat states directory used before states were split per core. Read only.
pub static PATH_STATES_LEGACY: LazyLock<PathBuf> =
    LazyLock::new(|| PATH_DATA.join("states-legacy"));

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| PATH_DATA.join("settings.json"));
