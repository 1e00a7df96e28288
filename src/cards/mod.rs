//! Card engine
//!
//! This module classifies paragraphs into topics, directions and content,
//! then segments the stream into review cards:
//!
//! ```text
//! Heading 1 "Physics"          -> topic
//!   **Definition**             -> direction, opens card d00001
//!     Energy is conserved.     -> block
//!   **Future research**        -> direction, opens card d00002
//!     ...
//! ```

pub mod classify;
pub mod deck;
pub mod filter;
pub mod highlight;
pub mod models;
pub mod normalize;
pub mod rules;
pub mod segment;

pub use classify::{Role, classify, classify_with};
pub use deck::{build_deck, build_deck_with};
pub use filter::{clean_text, included_runs, is_struck};
pub use highlight::{extract_highlights, extract_highlights_with};
pub use models::*;
pub use normalize::normalize;
pub use rules::Rules;
pub use segment::{CardAccumulator, Segmenter, build_cards, build_cards_with};
