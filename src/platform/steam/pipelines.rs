//! High-level orchestration for the Steam locator

mod resolve;

pub use resolve::SteamLocator;
