//! Highlight extraction
//!
//! Highlights are the bold or colored phrases of a content paragraph. The
//! review tooling masks them to build hints, so they are kept short, unique
//! and few.

use std::collections::HashSet;

use super::filter::is_struck;
use super::normalize::{char_len, normalize};
use super::rules::Rules;
use crate::document::Paragraph;

pub const HIGHLIGHT_MAX_RUN_CHARS: usize = 40;
pub const HIGHLIGHT_MIN_CHARS: usize = 2;
pub const HIGHLIGHT_MAX_COUNT: usize = 12;

/// Characters trimmed from both ends of a candidate
const EDGE_PUNCTUATION: &[char] = &[' ', ',', '.', ';', ':', '(', ')', '[', ']'];

/// Extract highlights with the default thresholds
pub fn extract_highlights(paragraph: &Paragraph) -> Vec<String> {
    extract_highlights_with(paragraph, &Rules::default())
}

pub fn extract_highlights_with(paragraph: &Paragraph, rules: &Rules) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut highlights = Vec::new();

    for run in &paragraph.runs {
        // Struck runs are out before any other test
        if is_struck(run) {
            continue;
        }
        let text = normalize(&run.text);
        if text.is_empty() || !(run.is_bold() || run.has_color()) {
            continue;
        }
        if char_len(&text) > rules.highlight_max_run_chars {
            continue;
        }

        let stripped = text.trim_matches(EDGE_PUNCTUATION);
        if char_len(stripped) < rules.highlight_min_chars {
            continue;
        }
        if seen.insert(stripped.to_lowercase()) {
            highlights.push(stripped.to_string());
        }
    }

    highlights.truncate(rules.highlight_max_count);
    highlights
}
