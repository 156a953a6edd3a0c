//! Atomic I/O operations for the Steam locator

mod libraries;
mod manifest;
mod scan;

pub use libraries::list_library_roots;
pub use manifest::{extract_install_folder, find_install_by_name, find_manifest};
