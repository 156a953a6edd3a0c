use crate::config::{GamepathConfig, RegistryValue};

/// How libraries are discovered and walked
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryPolicy {
    /// Ordered sources for the Steam install path
    pub seed_keys: Vec<RegistryValue>,
    /// The Steam install directory is itself a library root
    pub include_seed_root: bool,
    /// An unlistable `steamapps` aborts the walk instead of being skipped
    pub strict: bool,
}

impl Default for LibraryPolicy {
    fn default() -> Self {
        LibraryPolicy::from(&GamepathConfig::default())
    }
}

impl From<&GamepathConfig> for LibraryPolicy {
    fn from(config: &GamepathConfig) -> Self {
        Self {
            seed_keys: config.steam_seed_keys.clone(),
            include_seed_root: config.include_seed_root,
            strict: config.strict_library_scan,
        }
    }
}
