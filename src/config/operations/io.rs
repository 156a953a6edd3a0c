use crate::config::types::GamepathConfig;
use crate::paths::default_settings_path;

use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Load settings from the default location
pub fn load_cfg() -> GamepathConfig {
    match default_settings_path() {
        Some(path) => load_cfg_from(&path),
        None => GamepathConfig::default(),
    }
}

pub fn load_cfg_from(path: &Path) -> GamepathConfig {
    let Ok(file) = File::open(path) else {
        log::debug!("No settings at {}, using defaults", path.display());
        return GamepathConfig::default();
    };

    match serde_json::from_reader::<_, GamepathConfig>(BufReader::new(file)) {
        Ok(config) => config,
        Err(e) => {
            // Return default settings if the file has an error
            log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
            GamepathConfig::default()
        }
    }
}

pub fn save_cfg(config: &GamepathConfig, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
