//! Steam platform implementation
//!
//! Resolves an app ID to its install directory by reading the Steam
//! library list and the per-app manifests.
//!
//! ## Module Structure
//! - `types.rs`: LibraryPolicy
//! - `pure/`: Pure functions (quote tokenizer)
//! - `operations/`: Atomic I/O operations (library roots, manifest lookup)
//! - `pipelines/`: High-level orchestration (SteamLocator)

use super::{LookupContext, Platform};
use crate::error::LocateResult;
use std::path::PathBuf;

mod operations;
mod pipelines;
mod pure;
mod types;

pub use pipelines::SteamLocator;
pub use types::LibraryPolicy;

/// Steam platform implementation
pub struct SteamPlatform {
    pub app_id: String,
}

impl SteamPlatform {
    pub fn new(app_id: &str) -> Self {
        Self {
            app_id: app_id.to_string(),
        }
    }
}

impl Platform for SteamPlatform {
    fn name(&self) -> &str {
        "steam"
    }

    fn game_root_path(&self, ctx: &LookupContext) -> LocateResult<PathBuf> {
        SteamLocator::new(ctx.fs, ctx.store, LibraryPolicy::from(ctx.config))
            .resolve_game_path(&self.app_id)
    }

    fn app_identifier(&self) -> Option<String> {
        Some(self.app_id.clone())
    }
}
