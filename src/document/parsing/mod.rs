//! docx-rs extraction utilities
//!
//! This module contains the functions that read run text, run formatting
//! and paragraph style names out of docx-rs elements.

pub(crate) mod formatting;
pub(crate) mod style;
