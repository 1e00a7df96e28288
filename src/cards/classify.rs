//! Paragraph role classification
//!
//! Every paragraph plays exactly one role in the card grammar:
//!
//! - `Topic`: a "Heading 1" paragraph
//! - `Direction`: a short, (almost) entirely bold paragraph such as
//!   "Definition" or "Future research"
//! - `Content`: anything else with visible text
//! - `Blank`: nothing but whitespace

use super::filter::included_runs;
use super::normalize::{char_len, normalize};
use super::rules::Rules;
use crate::document::Paragraph;

pub const TOPIC_STYLE: &str = "Heading 1";
pub const DIRECTION_MAX_CHARS: usize = 60;
pub const DIRECTION_MAX_WORDS: usize = 8;
pub const DIRECTION_BOLD_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Topic,
    Direction,
    Content,
    Blank,
}

/// Classify with the default thresholds
pub fn classify(paragraph: &Paragraph) -> Role {
    classify_with(paragraph, &Rules::default())
}

pub fn classify_with(paragraph: &Paragraph, rules: &Rules) -> Role {
    let text = normalize(&paragraph.text());
    if text.is_empty() {
        return Role::Blank;
    }

    if paragraph.style_name.trim() == rules.topic_style.trim() {
        return Role::Topic;
    }

    if is_direction(paragraph, &text, rules) {
        return Role::Direction;
    }

    Role::Content
}

/// Short and almost entirely bold
///
/// The bold share is counted over included runs only, so struck runs never
/// dilute it. With no included runs the paragraph is never a direction.
fn is_direction(paragraph: &Paragraph, text: &str, rules: &Rules) -> bool {
    if char_len(text) > rules.direction_max_chars
        || text.split_whitespace().count() > rules.direction_max_words
    {
        return false;
    }

    let runs = included_runs(paragraph);
    if runs.is_empty() {
        return false;
    }

    let bold = runs.iter().filter(|run| run.is_bold()).count();
    bold as f64 / runs.len() as f64 >= rules.direction_bold_ratio
}
