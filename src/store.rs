//! Platform configuration store - WHERE store clients record their paths
//!
//! On Windows this is the registry. Everything else (tests, the settings
//! file overrides, non-Windows hosts) goes through `MemoryStore`.

use std::collections::BTreeMap;

/// Hierarchical key/value store queried by key path plus value name
pub trait ConfigStore {
    /// Read a string value; `None` when the key or the value is missing
    fn read_value(&self, key_path: &str, value_name: &str) -> Option<String>;
}

/// Registry key paths are case-insensitive and tolerate a trailing separator
fn normalize_key(key_path: &str) -> String {
    key_path
        .trim_end_matches(['\\', '/'])
        .replace('/', "\\")
        .to_ascii_lowercase()
}

/// In-memory store keyed by normalized key path
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    keys: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key_path: &str, value_name: &str, value: impl Into<String>) {
        self.keys
            .entry(normalize_key(key_path))
            .or_default()
            .insert(value_name.to_ascii_lowercase(), value.into());
    }

    #[cfg(test)]
    pub fn with(mut self, key_path: &str, value_name: &str, value: impl Into<String>) -> Self {
        self.insert(key_path, value_name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<&BTreeMap<String, BTreeMap<String, String>>> for MemoryStore {
    fn from(map: &BTreeMap<String, BTreeMap<String, String>>) -> Self {
        let mut store = MemoryStore::new();
        for (key_path, values) in map {
            for (name, value) in values {
                store.insert(key_path, name, value.clone());
            }
        }
        store
    }
}

impl ConfigStore for MemoryStore {
    fn read_value(&self, key_path: &str, value_name: &str) -> Option<String> {
        self.keys
            .get(&normalize_key(key_path))?
            .get(&value_name.to_ascii_lowercase())
            .cloned()
    }
}

/// Stores consulted in order; the first one holding the value wins
pub struct LayeredStore {
    layers: Vec<Box<dyn ConfigStore>>,
}

impl LayeredStore {
    pub fn new(layers: Vec<Box<dyn ConfigStore>>) -> Self {
        Self { layers }
    }
}

impl ConfigStore for LayeredStore {
    fn read_value(&self, key_path: &str, value_name: &str) -> Option<String> {
        self.layers
            .iter()
            .find_map(|layer| layer.read_value(key_path, value_name))
    }
}

/// The Windows registry, addressed as `HKEY_...\Sub\Key`
#[cfg(windows)]
pub struct WindowsRegistry;

#[cfg(windows)]
impl ConfigStore for WindowsRegistry {
    fn read_value(&self, key_path: &str, value_name: &str) -> Option<String> {
        use winreg::RegKey;
        use winreg::enums::*;

        let key_path = key_path.trim_end_matches('\\');
        let (hive, subkey) = key_path.split_once('\\').unwrap_or((key_path, ""));
        let hive = match hive.to_ascii_uppercase().as_str() {
            "HKEY_CURRENT_USER" | "HKCU" => HKEY_CURRENT_USER,
            "HKEY_LOCAL_MACHINE" | "HKLM" => HKEY_LOCAL_MACHINE,
            "HKEY_CLASSES_ROOT" | "HKCR" => HKEY_CLASSES_ROOT,
            "HKEY_USERS" | "HKU" => HKEY_USERS,
            _ => {
                log::warn!("Unknown registry hive in {}", key_path);
                return None;
            }
        };

        let key = RegKey::predef(hive).open_subkey(subkey).ok()?;
        key.get_value::<String, _>(value_name).ok()
    }
}

/// The OS store for this host, with `overrides` consulted first
pub fn host_store(overrides: MemoryStore) -> LayeredStore {
    #[allow(unused_mut)]
    let mut layers: Vec<Box<dyn ConfigStore>> = vec![Box::new(overrides)];
    #[cfg(windows)]
    layers.push(Box::new(WindowsRegistry));
    LayeredStore::new(layers)
}
