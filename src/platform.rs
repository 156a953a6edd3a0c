//! Platform abstraction - WHERE games come from
//!
//! Platforms represent different game distribution services:
//! - Steam: Valve's platform, resolved through library manifests
//! - GOG: CD Projekt's DRM-free platform, one registry value per game

use crate::config::GamepathConfig;
use crate::error::LocateResult;
use crate::fs::Filesystem;
use crate::store::ConfigStore;
use std::path::PathBuf;

/// What a lookup may read
pub struct LookupContext<'a> {
    pub fs: &'a dyn Filesystem,
    pub store: &'a dyn ConfigStore,
    pub config: &'a GamepathConfig,
}

/// Platform trait - represents where a game comes from
pub trait Platform {
    /// Platform name for identification
    fn name(&self) -> &str;

    /// Get the game's root directory path
    fn game_root_path(&self, ctx: &LookupContext) -> LocateResult<PathBuf>;

    /// Platform-specific identifier (appid, product id, etc.)
    fn app_identifier(&self) -> Option<String> {
        None
    }
}

/// Enum for serde deserialization of platform configs
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "platform")]
pub enum PlatformConfig {
    #[serde(rename = "steam")]
    Steam { steam_appid: String },

    #[serde(rename = "gog")]
    Gog { gog_id: String },
}

impl PlatformConfig {
    /// Convert platform config enum to a trait object
    pub fn as_platform(&self) -> Box<dyn Platform> {
        match self {
            PlatformConfig::Steam { steam_appid } => Box::new(SteamPlatform::new(steam_appid)),
            PlatformConfig::Gog { gog_id } => Box::new(GogPlatform::new(gog_id)),
        }
    }
}

mod gog;
mod steam;

pub use gog::GogPlatform;
pub use steam::{LibraryPolicy, SteamLocator, SteamPlatform};
