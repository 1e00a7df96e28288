//! Card deck data structures
//!
//! These are the records handed to the JSON writer. Field order here is the
//! field order in the written file.

use serde::{Deserialize, Serialize};

pub const CARD_TYPE: &str = "direction";
pub const SCHEMA_VERSION: &str = "direction-v1";

/// One paragraph of reviewable text under a direction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    /// Bold or colored phrases, unique ignoring case, in encounter order
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    /// `d` followed by a zero-padded 5 digit counter, e.g. `d00042`
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub topic: String,
    pub direction: String,
    pub blocks: Vec<Block>,
}

/// Format the public id of the `n`th emitted card (1-based)
pub fn card_id(n: usize) -> String {
    format!("d{n:05}")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckMeta {
    pub generated_at: String,
    pub source_file: String,
    pub card_count: usize,
    /// Distinct topic labels in first-occurrence order
    pub topics: Vec<String>,
    pub types: Vec<String>,
    pub schema: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDeck {
    pub meta: DeckMeta,
    pub cards: Vec<Card>,
}
