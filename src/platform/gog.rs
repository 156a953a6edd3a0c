//! GOG platform implementation
//!
//! GOG Galaxy records each installed game under
//! `<games key>\<product id>` with the install directory in `Path`.

use super::{LookupContext, Platform};
use crate::error::{LocateError, LocateResult};
use crate::store::ConfigStore;
use std::path::PathBuf;

const VALUE_PATH: &str = "Path";

/// Read the install path GOG stored for `gog_id`
pub fn find_game_path(store: &dyn ConfigStore, games_key: &str, gog_id: &str) -> LocateResult<PathBuf> {
    let key = format!("{}\\{}", games_key.trim_end_matches('\\'), gog_id);

    match store.read_value(&key, VALUE_PATH) {
        Some(path) => {
            log::info!("GOG game {} resolved to {}", gog_id, path);
            Ok(PathBuf::from(path))
        }
        None => Err(LocateError::NotConfigured {
            key: format!("{}\\{}", key, VALUE_PATH),
        }),
    }
}

pub struct GogPlatform {
    pub gog_id: String,
}

impl GogPlatform {
    pub fn new(gog_id: &str) -> Self {
        Self {
            gog_id: gog_id.to_string(),
        }
    }
}

impl Platform for GogPlatform {
    fn name(&self) -> &str {
        "gog"
    }

    fn game_root_path(&self, ctx: &LookupContext) -> LocateResult<PathBuf> {
        find_game_path(ctx.store, &ctx.config.gog_games_key, &self.gog_id)
    }

    fn app_identifier(&self) -> Option<String> {
        Some(self.gog_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const GAMES_KEY: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\WOW6432Node\GOG.com\Games";

    #[test]
    fn test_reads_path_value() {
        let store = MemoryStore::new().with(
            r"HKEY_LOCAL_MACHINE\SOFTWARE\WOW6432Node\GOG.com\Games\1423049311\",
            "Path",
            r"D:\GOG Games\Witcher 3",
        );

        assert_eq!(
            find_game_path(&store, GAMES_KEY, "1423049311").unwrap(),
            PathBuf::from(r"D:\GOG Games\Witcher 3")
        );
    }

    #[test]
    fn test_missing_game_is_not_configured() {
        let store = MemoryStore::new();

        let err = find_game_path(&store, GAMES_KEY, "1423049311").unwrap_err();
        assert!(matches!(err, LocateError::NotConfigured { ref key } if key.ends_with(r"1423049311\Path")));
    }
}
