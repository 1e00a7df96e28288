//! Classification and highlight thresholds

use serde::{Deserialize, Serialize};

use super::classify::{
    DIRECTION_BOLD_RATIO, DIRECTION_MAX_CHARS, DIRECTION_MAX_WORDS, TOPIC_STYLE,
};
use super::highlight::{HIGHLIGHT_MAX_COUNT, HIGHLIGHT_MAX_RUN_CHARS, HIGHLIGHT_MIN_CHARS};

/// Tunable thresholds, defaulting to the built-in constants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Rules {
    /// Exact paragraph style name that marks a topic
    pub topic_style: String,
    pub direction_max_chars: usize,
    pub direction_max_words: usize,
    /// Minimum share of visible runs that must be bold
    pub direction_bold_ratio: f64,
    /// Longest run (normalized) that may become a highlight
    pub highlight_max_run_chars: usize,
    /// Shortest highlight after punctuation is stripped
    pub highlight_min_chars: usize,
    pub highlight_max_count: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            topic_style: TOPIC_STYLE.to_string(),
            direction_max_chars: DIRECTION_MAX_CHARS,
            direction_max_words: DIRECTION_MAX_WORDS,
            direction_bold_ratio: DIRECTION_BOLD_RATIO,
            highlight_max_run_chars: HIGHLIGHT_MAX_RUN_CHARS,
            highlight_min_chars: HIGHLIGHT_MIN_CHARS,
            highlight_max_count: HIGHLIGHT_MAX_COUNT,
        }
    }
}
