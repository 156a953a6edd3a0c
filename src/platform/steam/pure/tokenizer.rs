//! Quote-delimited tokens of Valve's KeyValues text (`.vdf`, `.acf`)
//!
//! Only ever applied to single lines (or concatenations of them) that carry
//! `"key"   "value"` pairs. Nesting, comments and escaped quotes are not
//! understood; the fields read here never contain them.

use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// Every `"..."` run in order of appearance, quotes included
///
/// An unmatched quote yields no token for its run, so callers index the
/// result with `get`.
pub fn split_by_quotes(text: &str) -> Vec<&str> {
    QUOTED.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn strip_quotes(token: &str) -> &str {
    token.trim_matches('"')
}

/// Collapse the doubled backslashes Steam writes into path values
pub fn unescape_vdf(value: &str) -> String {
    value.replace(r"\\", r"\")
}
