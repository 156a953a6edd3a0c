//! Steam library root discovery
//!
//! The seed path comes from the configuration store; every other root is
//! listed in `<seed>/steamapps/libraryfolders.vdf`.

use crate::config::RegistryValue;
use crate::error::{LocateError, LocateResult};
use crate::fs::{Filesystem, lossy_lines};
use crate::paths::{DIR_STEAMAPPS, FILE_LIBRARYFOLDERS};
use crate::platform::steam::pure::{split_by_quotes, strip_quotes, unescape_vdf};
use crate::platform::steam::types::LibraryPolicy;
use crate::store::ConfigStore;
use std::io::BufRead;
use std::path::PathBuf;

/// Read the Steam install path from the first seed source that has one
pub fn read_seed_path(store: &dyn ConfigStore, seed_keys: &[RegistryValue]) -> LocateResult<PathBuf> {
    for source in seed_keys {
        if let Some(path) = store.read_value(&source.key, &source.value) {
            log::debug!("Steam seed path {} from {}\\{}", path, source.key, source.value);
            return Ok(PathBuf::from(path));
        }
    }

    Err(LocateError::NotConfigured {
        key: seed_keys
            .iter()
            .map(|s| format!("{}\\{}", s.key, s.value))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Every library root, seed first when the policy counts it
///
/// Order follows the file; duplicates are kept.
pub fn list_library_roots(
    fs: &dyn Filesystem,
    store: &dyn ConfigStore,
    policy: &LibraryPolicy,
) -> LocateResult<Vec<PathBuf>> {
    let seed = read_seed_path(store, &policy.seed_keys)?;
    let vdf = seed.join(DIR_STEAMAPPS).join(FILE_LIBRARYFOLDERS);

    let reader = fs.open(&vdf).map_err(|e| LocateError::io(&vdf, e))?;
    let listed = parse_library_folders(reader).map_err(|e| LocateError::io(&vdf, e))?;

    let mut roots = Vec::with_capacity(listed.len() + 1);
    if policy.include_seed_root {
        roots.push(seed);
    }
    roots.extend(listed);

    log::debug!("Steam library roots: {:?}", roots);
    Ok(roots)
}

/// Library paths listed in a `libraryfolders.vdf`
///
/// Current files hold one `"path"` line per library. Matching lines are
/// joined and tokenized together; tokens alternate key/value, so every
/// second one is a path. Files written before mid-2021 have no `"path"`
/// keys and list each library as `"<n>"  "<path>"` instead.
fn parse_library_folders(reader: Box<dyn BufRead>) -> std::io::Result<Vec<PathBuf>> {
    let mut path_lines = String::new();
    let mut numbered = Vec::new();
    for line in lossy_lines(reader) {
        let line = line?;
        if line.contains("\"path\"") {
            path_lines.push_str(&line);
        } else if let Some(path) = numbered_entry(&line) {
            numbered.push(path);
        }
    }

    if path_lines.is_empty() {
        return Ok(numbered);
    }

    Ok(split_by_quotes(&path_lines)
        .into_iter()
        .skip(1)
        .step_by(2)
        .map(|token| PathBuf::from(unescape_vdf(strip_quotes(token))))
        .collect())
}

/// `"1"  "E:\\Games"` -> `E:\Games`; block openers like `"0"` alone don't count
fn numbered_entry(line: &str) -> Option<PathBuf> {
    let tokens = split_by_quotes(line);
    let [key, value] = tokens.as_slice() else {
        return None;
    };
    let key = strip_quotes(key);
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(PathBuf::from(unescape_vdf(strip_quotes(value))))
}
