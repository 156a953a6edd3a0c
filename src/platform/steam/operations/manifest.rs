//! App manifest lookup (`steamapps/appmanifest_<appid>.acf`)

use super::scan::scan_steamapps;
use crate::error::{LocateError, LocateResult};
use crate::fs::{Filesystem, lossy_lines};
use crate::paths::{DIR_COMMON, EXT_MANIFEST};
use crate::platform::steam::pure::{split_by_quotes, strip_quotes, unescape_vdf};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Filename fragment identifying an app's manifest
///
/// The leading `_` and trailing extension keep `730` from matching
/// `appmanifest_976730.acf`.
pub fn manifest_token(app_id: &str) -> String {
    format!("_{}.{}", app_id, EXT_MANIFEST)
}

/// First manifest for `app_id`, searching roots in order
pub fn find_manifest(
    fs: &dyn Filesystem,
    roots: &[PathBuf],
    app_id: &str,
    strict: bool,
) -> LocateResult<PathBuf> {
    let token = manifest_token(app_id);

    let found = scan_steamapps(fs, roots, strict, |entries| {
        Ok(entries.into_iter().find(|entry| {
            entry
                .file_name()
                .is_some_and(|name| name.to_string_lossy().contains(&token))
        }))
    })?;

    found.ok_or_else(|| LocateError::ManifestNotFound {
        app_id: app_id.to_string(),
    })
}

/// The `installdir` value of a manifest
///
/// Only the first line mentioning `"installdir"` is considered.
pub fn extract_install_folder(fs: &dyn Filesystem, manifest: &Path) -> LocateResult<String> {
    let reader = fs.open(manifest).map_err(|e| LocateError::io(manifest, e))?;
    let fields = read_fields(reader, manifest, false)?;

    fields.install_dir.ok_or_else(|| LocateError::FieldNotFound {
        field: "installdir",
        manifest: manifest.to_path_buf(),
    })
}

/// Install path of the first manifest whose `name` contains `name`
///
/// Store names get renamed; prefer app IDs where one is known.
pub fn find_install_by_name(
    fs: &dyn Filesystem,
    roots: &[PathBuf],
    name: &str,
    strict: bool,
) -> LocateResult<PathBuf> {
    let found = scan_steamapps(fs, roots, strict, |entries| {
        for manifest in entries {
            if manifest.extension().is_none_or(|ext| ext != EXT_MANIFEST) {
                continue;
            }

            let reader = match fs.open(&manifest) {
                Ok(reader) => reader,
                Err(e) if strict => return Err(LocateError::io(&manifest, e)),
                Err(e) => {
                    log::warn!("Skipping manifest {}: {}", manifest.display(), e);
                    continue;
                }
            };

            let fields = match read_fields(reader, &manifest, true) {
                Ok(fields) => fields,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    log::warn!("Skipping manifest: {}", e);
                    continue;
                }
            };
            let matches = fields.name.is_some_and(|n| n.contains(name));
            if let (true, Some(install_dir), Some(steamapps)) =
                (matches, fields.install_dir, manifest.parent())
            {
                return Ok(Some(steamapps.join(DIR_COMMON).join(install_dir)));
            }
        }
        Ok(None)
    })?;

    found.ok_or_else(|| LocateError::GameNotFound {
        name: name.to_string(),
    })
}

#[derive(Default)]
struct ManifestFields {
    name: Option<String>,
    install_dir: Option<String>,
}

/// Scan a manifest for `installdir` (and `name` when asked)
///
/// Stops at the first `"installdir"` line, or once both fields are seen.
fn read_fields(
    reader: Box<dyn BufRead>,
    manifest: &Path,
    want_name: bool,
) -> LocateResult<ManifestFields> {
    let mut fields = ManifestFields::default();
    let mut seen_install_dir = false;

    for line in lossy_lines(reader) {
        let line = line.map_err(|e| LocateError::io(manifest, e))?;

        if want_name && fields.name.is_none() && line.contains("\"name\"") {
            fields.name = value_after(&line, "\"name\"");
        }

        if !seen_install_dir && line.contains("\"installdir\"") {
            seen_install_dir = true;
            fields.install_dir = value_after(&line, "\"installdir\"");
        }

        if seen_install_dir && (!want_name || fields.name.is_some()) {
            break;
        }
    }

    Ok(fields)
}

/// Quoted token following `key` on a line, unquoted
///
/// Usually index 1 of a `"key" "value"` line; a short line gives `None`.
fn value_after(line: &str, key: &str) -> Option<String> {
    let tokens = split_by_quotes(line);
    let key_at = tokens.iter().position(|token| *token == key)?;
    tokens
        .get(key_at + 1)
        .map(|token| unescape_vdf(strip_quotes(token)))
}
