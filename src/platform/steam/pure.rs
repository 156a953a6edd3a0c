//! Pure functions for the Steam locator
//!
//! These functions have no side effects and are deterministic.

mod tokenizer;

pub use tokenizer::{split_by_quotes, strip_quotes, unescape_vdf};
