//! App ID (or name) -> install directory
//!
//! libraries -> manifest -> installdir -> `<steamapps>/common/<installdir>`.
//! Nothing is cached; every call re-reads the store and the disk.

use crate::error::LocateResult;
use crate::fs::Filesystem;
use crate::paths::DIR_COMMON;
use crate::platform::steam::operations::{
    extract_install_folder, find_install_by_name, find_manifest, list_library_roots,
};
use crate::platform::steam::types::LibraryPolicy;
use crate::store::ConfigStore;
use std::path::PathBuf;

pub struct SteamLocator<'a> {
    fs: &'a dyn Filesystem,
    store: &'a dyn ConfigStore,
    policy: LibraryPolicy,
}

impl<'a> SteamLocator<'a> {
    pub fn new(fs: &'a dyn Filesystem, store: &'a dyn ConfigStore, policy: LibraryPolicy) -> Self {
        Self { fs, store, policy }
    }

    pub fn library_roots(&self) -> LocateResult<Vec<PathBuf>> {
        list_library_roots(self.fs, self.store, &self.policy)
    }

    /// Manifest file for `app_id` across all libraries
    pub fn find_manifest(&self, app_id: &str) -> LocateResult<PathBuf> {
        let roots = self.library_roots()?;
        find_manifest(self.fs, &roots, app_id, self.policy.strict)
    }

    /// Install directory of `app_id`; existence is not checked
    pub fn resolve_game_path(&self, app_id: &str) -> LocateResult<PathBuf> {
        let manifest = self.find_manifest(app_id)?;
        let install_dir = extract_install_folder(self.fs, &manifest)?;

        // Manifests sit directly in steamapps
        let steamapps = manifest.parent().unwrap_or(manifest.as_path());
        let path = steamapps.join(DIR_COMMON).join(install_dir);

        log::info!("Steam app {} resolved to {}", app_id, path.display());
        Ok(path)
    }

    /// Install directory of the first game whose name contains `name`
    pub fn find_game_by_name(&self, name: &str) -> LocateResult<PathBuf> {
        let roots = self.library_roots()?;
        let path = find_install_by_name(self.fs, &roots, name, self.policy.strict)?;

        log::info!("Steam game {:?} resolved to {}", name, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LocateError, absent_as_none};
    use crate::fs::OsFilesystem;
    use crate::fs::memory::MemoryFilesystem;
    use crate::store::MemoryStore;
    use std::fs;

    const STEAM_KEY: &str = r"HKEY_CURRENT_USER\Software\Valve\Steam";

    fn library_vdf(paths: &[&str]) -> String {
        let mut out = String::from("\"libraryfolders\"\n{\n");
        for (i, path) in paths.iter().enumerate() {
            out.push_str(&format!("\t\"{}\"\n\t{{\n\t\t\"path\"\t\t\"{}\"\n\t}}\n", i, path));
        }
        out.push_str("}\n");
        out
    }

    fn manifest(app_id: &str, install_dir: &str) -> String {
        format!(
            "\"AppState\"\n{{\n\t\"appid\"\t\t\"{}\"\n\t\"installdir\"\t\t\"{}\"\n}}\n",
            app_id, install_dir
        )
    }

    fn steam_store(seed: &str) -> MemoryStore {
        MemoryStore::new().with(STEAM_KEY, "SteamPath", seed)
    }

    #[test]
    fn test_resolves_install_dir_under_common() {
        let fs = MemoryFilesystem::new()
            .with_file("/steam/steamapps/libraryfolders.vdf", &library_vdf(&["/steam"]))
            .with_file("/steam/steamapps/_123.acf", "\"appid\" \"123\" \"installdir\" \"MyGame\"");
        let store = steam_store("/steam");
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        assert_eq!(
            locator.resolve_game_path("123").unwrap(),
            PathBuf::from("/steam/steamapps/common/MyGame")
        );
    }

    #[test]
    fn test_second_library_holds_the_game() {
        let fs = MemoryFilesystem::new()
            .with_file(
                "/steam/steamapps/libraryfolders.vdf",
                &library_vdf(&["/steam", "/mnt/games"]),
            )
            .with_file("/steam/steamapps/appmanifest_228980.acf", &manifest("228980", "Steamworks Shared"))
            .with_file("/mnt/games/steamapps/appmanifest_730.acf", &manifest("730", "Counter-Strike Global Offensive"));
        let store = steam_store("/steam");
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        assert_eq!(
            locator.resolve_game_path("730").unwrap(),
            PathBuf::from("/mnt/games/steamapps/common/Counter-Strike Global Offensive")
        );
    }

    #[test]
    fn test_substring_app_id_resolves_to_its_own_game() {
        let fs = MemoryFilesystem::new()
            .with_file("/steam/steamapps/libraryfolders.vdf", &library_vdf(&[]))
            .with_file("/steam/steamapps/appmanifest_976730.acf", &manifest("976730", "Halo The Master Chief Collection"))
            .with_file("/steam/steamapps/appmanifest_730.acf", &manifest("730", "Counter-Strike Global Offensive"));
        let store = steam_store("/steam");
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        assert_eq!(
            locator.resolve_game_path("730").unwrap(),
            PathBuf::from("/steam/steamapps/common/Counter-Strike Global Offensive")
        );
        assert_eq!(
            locator.resolve_game_path("976730").unwrap(),
            PathBuf::from("/steam/steamapps/common/Halo The Master Chief Collection")
        );
    }

    #[test]
    fn test_unconfigured_steam_touches_no_files() {
        let fs = MemoryFilesystem::new();
        let store = MemoryStore::new();
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        let err = locator.resolve_game_path("730").unwrap_err();
        assert!(matches!(err, LocateError::NotConfigured { .. }));
        assert!(matches!(absent_as_none(locator.resolve_game_path("730")), Ok(None)));
        assert_eq!(fs.accesses.get(), 0);
    }

    #[test]
    fn test_unknown_app_is_absent() {
        let fs = MemoryFilesystem::new()
            .with_file("/steam/steamapps/libraryfolders.vdf", &library_vdf(&["/steam"]))
            .with_file("/steam/steamapps/appmanifest_730.acf", &manifest("730", "csgo"));
        let store = steam_store("/steam");
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        assert!(matches!(absent_as_none(locator.resolve_game_path("440")), Ok(None)));
    }

    #[test]
    fn test_seed_root_excluded_by_policy() {
        let fs = MemoryFilesystem::new()
            .with_file("/steam/steamapps/libraryfolders.vdf", &library_vdf(&["/mnt/games"]))
            .with_file("/steam/steamapps/appmanifest_730.acf", &manifest("730", "csgo"))
            .with_file("/mnt/games/steamapps/appmanifest_440.acf", &manifest("440", "Team Fortress 2"));
        let store = steam_store("/steam");
        let policy = LibraryPolicy {
            include_seed_root: false,
            ..Default::default()
        };
        let locator = SteamLocator::new(&fs, &store, policy);

        assert!(matches!(absent_as_none(locator.resolve_game_path("730")), Ok(None)));
        assert_eq!(
            locator.resolve_game_path("440").unwrap(),
            PathBuf::from("/mnt/games/steamapps/common/Team Fortress 2")
        );
    }

    #[test]
    fn test_resolves_manifest_with_non_utf8_name() {
        let fs = MemoryFilesystem::new()
            .with_file("/steam/steamapps/libraryfolders.vdf", &library_vdf(&["/steam"]))
            .with_bytes(
                "/steam/steamapps/appmanifest_620.acf",
                b"\"AppState\"\n{\n\t\"appid\"\t\t\"620\"\n\t\"name\"\t\t\"Portal 2 \xe9dition\"\n\t\"installdir\"\t\t\"Portal 2\"\n}\n",
            );
        let store = steam_store("/steam");
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        assert_eq!(
            locator.resolve_game_path("620").unwrap(),
            PathBuf::from("/steam/steamapps/common/Portal 2")
        );
    }

    #[test]
    fn test_find_game_by_name() {
        let fs = MemoryFilesystem::new()
            .with_file("/steam/steamapps/libraryfolders.vdf", &library_vdf(&[]))
            .with_file(
                "/steam/steamapps/appmanifest_440.acf",
                "\"AppState\"\n{\n\t\"name\"\t\t\"Team Fortress 2\"\n\t\"installdir\"\t\t\"Team Fortress 2\"\n}\n",
            );
        let store = steam_store("/steam");
        let locator = SteamLocator::new(&fs, &store, LibraryPolicy::default());

        assert_eq!(
            locator.find_game_by_name("Fortress").unwrap(),
            PathBuf::from("/steam/steamapps/common/Team Fortress 2")
        );
        assert!(matches!(absent_as_none(locator.find_game_by_name("Portal")), Ok(None)));
    }

    #[test]
    fn test_resolves_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let steam = dir.path().join("Steam");
        let library = dir.path().join("Library");
        fs::create_dir_all(steam.join("steamapps")).unwrap();
        fs::create_dir_all(library.join("steamapps")).unwrap();
        let listed = [
            steam.to_string_lossy().into_owned(),
            library.to_string_lossy().into_owned(),
        ];
        fs::write(
            steam.join("steamapps/libraryfolders.vdf"),
            library_vdf(&[listed[0].as_str(), listed[1].as_str()]),
        )
        .unwrap();
        fs::write(
            library.join("steamapps/appmanifest_620.acf"),
            manifest("620", "Portal 2"),
        )
        .unwrap();

        let store = steam_store(&steam.to_string_lossy());
        let locator = SteamLocator::new(&OsFilesystem, &store, LibraryPolicy::default());

        let path = locator.resolve_game_path("620").unwrap();
        assert_eq!(path, library.join("steamapps/common/Portal 2"));
        assert!(!path.exists());
    }
}
