//! JSON export for card decks and paragraph streams

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::JsonFormat;
use crate::cards::CardDeck;
use crate::document::Paragraph;

/// Serialize a deck
pub fn deck_to_json(deck: &CardDeck, format: JsonFormat) -> Result<String> {
    to_json(deck, format).context("failed to serialize cards")
}

/// Serialize a paragraph stream in the format `load_document` reads back
pub fn paragraphs_to_json(paragraphs: &[Paragraph], format: JsonFormat) -> Result<String> {
    to_json(paragraphs, format).context("failed to serialize paragraphs")
}

fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> serde_json::Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    }
}

/// Write output to a file, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
