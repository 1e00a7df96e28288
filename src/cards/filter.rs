//! Run filtering
//!
//! Struck-through text is "do not review": it never reaches a card. These
//! helpers decide which runs of a paragraph are visible.

use super::normalize::normalize;
use crate::document::{Paragraph, Run};

/// Single- or double-strikethrough
pub fn is_struck(run: &Run) -> bool {
    run.is_struck()
}

/// Runs with visible text that are not struck, in paragraph order
pub fn included_runs(paragraph: &Paragraph) -> Vec<&Run> {
    paragraph
        .runs
        .iter()
        .filter(|run| !is_struck(run) && !normalize(&run.text).is_empty())
        .collect()
}

/// Paragraph text with struck runs removed, normalized
pub fn clean_text(paragraph: &Paragraph) -> String {
    let kept: String = paragraph
        .runs
        .iter()
        .filter(|run| !is_struck(run))
        .map(|run| run.text.as_str())
        .collect();
    normalize(&kept)
}
