//! Lookup errors
//!
//! Every kind except `Io` means "the game is not there"; callers that only
//! care about presence collapse those into `None` with [`absent_as_none`].

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("no configuration value at {key}")]
    NotConfigured { key: String },

    #[error("no manifest for app {app_id} in any library")]
    ManifestNotFound { app_id: String },

    #[error("manifest {} has no {field} entry", manifest.display())]
    FieldNotFound { field: &'static str, manifest: PathBuf },

    #[error("no installed game named {name:?}")]
    GameNotFound { name: String },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LocateError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocateError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error only says the game (or its store) is missing
    pub fn is_absent(&self) -> bool {
        !matches!(self, LocateError::Io { .. })
    }
}

pub type LocateResult<T> = Result<T, LocateError>;

/// Turn "not found" kinds into `Ok(None)`, keeping I/O failures as errors
pub fn absent_as_none<T>(result: LocateResult<T>) -> LocateResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_absent() => {
            log::debug!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
