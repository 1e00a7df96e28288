//! review-cards: turn structured .docx study notes into review cards
//!
//! This library reads the paragraphs of a Word document, classifies them
//! into topics, directions and content, and segments them into cards with
//! highlight phrases ready for masking.

pub mod cards;
pub mod config;
pub mod document;
pub mod export;

/// JSON output layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

// Re-export commonly used types
pub use cards::{Card, CardDeck, Rules, build_cards, build_deck};
pub use config::Config;
pub use document::{Paragraph, Run, RunFormatting, SourceDocument, load_document};
