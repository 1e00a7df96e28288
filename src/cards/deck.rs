//! Deck assembly: cards plus bookkeeping metadata

use chrono::{Local, SecondsFormat};

use super::models::{CARD_TYPE, CardDeck, DeckMeta, SCHEMA_VERSION};
use super::rules::Rules;
use super::segment::Segmenter;
use crate::document::{Paragraph, SourceDocument};

/// Build the full deck for a loaded document with the default thresholds
pub fn build_deck(document: &SourceDocument) -> CardDeck {
    build_deck_with(&document.paragraphs, &document.source_file, &Rules::default())
}

pub fn build_deck_with(paragraphs: &[Paragraph], source_file: &str, rules: &Rules) -> CardDeck {
    let mut segmenter = Segmenter::new(rules);
    for paragraph in paragraphs {
        segmenter.push(paragraph);
    }
    let (cards, topics) = segmenter.finish();

    log::info!(
        "built {} cards across {} topics from {}",
        cards.len(),
        topics.len(),
        source_file
    );

    CardDeck {
        meta: DeckMeta {
            generated_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            source_file: source_file.to_string(),
            card_count: cards.len(),
            topics,
            types: vec![CARD_TYPE.to_string()],
            schema: SCHEMA_VERSION.to_string(),
        },
        cards,
    }
}
