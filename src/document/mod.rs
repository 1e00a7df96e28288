//! Document loading and data structures module
//!
//! This module reads Word (.docx) documents, or previously dumped paragraph
//! streams, into the ordered paragraph records the card engine consumes.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use io::{InputError, InputKind};
pub use loader::{load_document, paragraphs_from_docx_bytes};
pub use models::*;
