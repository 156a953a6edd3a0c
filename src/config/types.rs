use crate::store::MemoryStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One registry location to read a value from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegistryValue {
    pub key: String,
    pub value: String,
}

impl RegistryValue {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

fn default_steam_seed_keys() -> Vec<RegistryValue> {
    vec![
        // Per-user client install, stored with forward slashes
        RegistryValue::new(r"HKEY_CURRENT_USER\Software\Valve\Steam", "SteamPath"),
        // Machine-wide install written by the Steam installer
        RegistryValue::new(r"HKEY_LOCAL_MACHINE\SOFTWARE\Wow6432Node\Valve\Steam", "InstallPath"),
    ]
}

fn default_gog_games_key() -> String {
    r"HKEY_LOCAL_MACHINE\SOFTWARE\WOW6432Node\GOG.com\Games".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GamepathConfig {
    /// Count the Steam install directory itself as a library root
    #[serde(default = "default_true")]
    pub include_seed_root: bool,
    /// Fail on the first library whose steamapps folder can't be listed
    #[serde(default)]
    pub strict_library_scan: bool,
    /// Where to read the Steam install path, tried in order
    #[serde(default = "default_steam_seed_keys")]
    pub steam_seed_keys: Vec<RegistryValue>,
    /// Parent key of the per-game GOG keys
    #[serde(default = "default_gog_games_key")]
    pub gog_games_key: String,
    /// key path -> value name -> value, consulted before the OS store
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for GamepathConfig {
    fn default() -> Self {
        Self {
            include_seed_root: true,
            strict_library_scan: false,
            steam_seed_keys: default_steam_seed_keys(),
            gog_games_key: default_gog_games_key(),
            overrides: BTreeMap::new(),
        }
    }
}

impl GamepathConfig {
    pub fn override_store(&self) -> MemoryStore {
        MemoryStore::from(&self.overrides)
    }
}
