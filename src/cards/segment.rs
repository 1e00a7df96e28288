//! Card segmentation
//!
//! A single forward pass over the paragraph stream. Topics open a section,
//! directions open a card within it, and content paragraphs fill the open
//! card with blocks. A card is emitted only once it has a topic, a direction
//! and at least one block.

use super::classify::{Role, classify_with};
use super::filter::clean_text;
use super::highlight::extract_highlights_with;
use super::models::{Block, CARD_TYPE, Card, card_id};
use super::normalize::normalize;
use super::rules::Rules;
use crate::document::Paragraph;

/// The card under construction
#[derive(Debug, Default)]
pub struct CardAccumulator {
    topic: Option<String>,
    direction: Option<String>,
    blocks: Vec<Block>,
}

impl CardAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }

    /// Close the open direction
    ///
    /// Returns the topic, direction and blocks when all three are present.
    /// The direction and blocks are cleared either way; the topic stays.
    pub fn finalize(&mut self) -> Option<(String, String, Vec<Block>)> {
        let direction = self.direction.take();
        let blocks = std::mem::take(&mut self.blocks);

        match (&self.topic, direction) {
            (Some(topic), Some(direction)) if !blocks.is_empty() => {
                Some((topic.clone(), direction, blocks))
            }
            (_, Some(direction)) => {
                log::debug!("dropping direction {direction:?}: no content blocks");
                None
            }
            _ => None,
        }
    }

    fn start_topic(&mut self, topic: String) {
        self.topic = Some(topic);
    }

    fn start_direction(&mut self, direction: String) {
        self.direction = Some(direction);
    }

    fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// Drives the accumulator and numbers the emitted cards
#[derive(Debug)]
pub struct Segmenter<'a> {
    rules: &'a Rules,
    state: CardAccumulator,
    cards: Vec<Card>,
    topics: Vec<String>,
}

impl<'a> Segmenter<'a> {
    pub fn new(rules: &'a Rules) -> Self {
        Self {
            rules,
            state: CardAccumulator::new(),
            cards: Vec::new(),
            topics: Vec::new(),
        }
    }

    /// Feed the next paragraph in document order
    pub fn push(&mut self, paragraph: &Paragraph) {
        match classify_with(paragraph, self.rules) {
            Role::Blank => {}
            Role::Topic => {
                self.flush();
                let topic = normalize(&paragraph.text());
                if !self.topics.contains(&topic) {
                    self.topics.push(topic.clone());
                }
                self.state.start_topic(topic);
            }
            Role::Direction => {
                if self.state.topic().is_none() {
                    log::debug!("ignoring direction before first topic");
                    return;
                }
                self.flush();
                self.state.start_direction(normalize(&paragraph.text()));
            }
            Role::Content => {
                if self.state.direction().is_none() {
                    return;
                }
                let text = clean_text(paragraph);
                if text.is_empty() {
                    return;
                }
                self.state.push_block(Block {
                    text,
                    highlights: extract_highlights_with(paragraph, self.rules),
                });
            }
        }
    }

    /// Close the stream and return the cards and topics seen
    pub fn finish(mut self) -> (Vec<Card>, Vec<String>) {
        self.flush();
        (self.cards, self.topics)
    }

    fn flush(&mut self) {
        if let Some((topic, direction, blocks)) = self.state.finalize() {
            self.cards.push(Card {
                id: card_id(self.cards.len() + 1),
                kind: CARD_TYPE.to_string(),
                topic,
                direction,
                blocks,
            });
        }
    }
}

/// Segment a whole paragraph stream with the default thresholds
pub fn build_cards(paragraphs: &[Paragraph]) -> Vec<Card> {
    build_cards_with(paragraphs, &Rules::default())
}

pub fn build_cards_with(paragraphs: &[Paragraph], rules: &Rules) -> Vec<Card> {
    let mut segmenter = Segmenter::new(rules);
    for paragraph in paragraphs {
        segmenter.push(paragraph);
    }
    segmenter.finish().0
}
