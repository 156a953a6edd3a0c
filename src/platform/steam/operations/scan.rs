//! Walking the `steamapps` folder of each library root

use crate::error::{LocateError, LocateResult};
use crate::fs::Filesystem;
use crate::paths::DIR_STEAMAPPS;
use std::path::PathBuf;

/// Visit each root's `steamapps` entries in root order until `visit` yields
///
/// Returns `Ok(None)` when nothing matched. An unlistable `steamapps` is
/// skipped unless `strict`; if every root was unlistable the first failure
/// is returned instead.
pub fn scan_steamapps<T>(
    fs: &dyn Filesystem,
    roots: &[PathBuf],
    strict: bool,
    mut visit: impl FnMut(Vec<PathBuf>) -> LocateResult<Option<T>>,
) -> LocateResult<Option<T>> {
    let mut first_failure = None;
    let mut any_listed = false;

    for root in roots {
        let steamapps = root.join(DIR_STEAMAPPS);
        let entries = match fs.list_dir(&steamapps) {
            Ok(entries) => entries,
            Err(e) if strict => return Err(LocateError::io(steamapps, e)),
            Err(e) => {
                log::warn!("Skipping library {}: {}", root.display(), e);
                if first_failure.is_none() {
                    first_failure = Some(LocateError::io(steamapps, e));
                }
                continue;
            }
        };
        any_listed = true;

        if let Some(found) = visit(entries)? {
            return Ok(Some(found));
        }
    }

    match first_failure {
        Some(e) if !any_listed => Err(e),
        _ => Ok(None),
    }
}
