//! Whitespace normalization
//!
//! Every piece of text that is compared, measured or stored goes through
//! `normalize` first.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to one space and trim both ends
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Length in characters, not bytes
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
