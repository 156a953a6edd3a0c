use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Per-library folder holding app manifests and `libraryfolders.vdf`
pub const DIR_STEAMAPPS: &str = "steamapps";

/// Install folders live under `steamapps/common/<installdir>`
pub const DIR_COMMON: &str = "common";

pub const FILE_LIBRARYFOLDERS: &str = "libraryfolders.vdf";

pub const EXT_MANIFEST: &str = "acf";

pub static PATH_CONFIG_DIR: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config_home).join("gamepath"));
    }
    if let Ok(home) = env::var("HOME") {
        return Some(PathBuf::from(home).join(".config/gamepath"));
    }
    env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join("gamepath"))
});

/// Default settings file, if any home-like directory could be found
pub fn default_settings_path() -> Option<PathBuf> {
    PATH_CONFIG_DIR
        .as_ref()
        .map(|dir| dir.join("settings.json"))
}
