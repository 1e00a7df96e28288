//! Core data structures for the paragraph stream
//!
//! This module defines the public types a loader hands to the card engine:
//! formatted runs, paragraphs carrying their style name, and the loaded
//! source document.

use serde::{Deserialize, Deserializer, Serialize};

/// Read a field, falling back to its default on `null` or a mistyped value
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Value(T),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => value,
        Some(Lenient::Other(_)) | None => T::default(),
    })
}

/// Direct formatting of a single run.
///
/// Every attribute is optional on the wire, and `null` or mistyped values
/// read as absent. A run whose formatting could not be read degrades to
/// plain text: not bold, not struck, no color.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RunFormatting {
    #[serde(deserialize_with = "lenient")]
    pub bold: bool,
    /// Single or double strikethrough
    #[serde(deserialize_with = "lenient")]
    pub strikethrough: bool,
    /// Explicit font color (hex), `None` when the run inherits its color
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Run {
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub formatting: RunFormatting,
}

impl Run {
    /// Plain run with no direct formatting
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: RunFormatting::default(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::plain(text).with_bold()
    }

    pub fn with_bold(mut self) -> Self {
        self.formatting.bold = true;
        self
    }

    pub fn with_strikethrough(mut self) -> Self {
        self.formatting.strikethrough = true;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.formatting.color = Some(color.into());
        self
    }

    pub fn is_struck(&self) -> bool {
        self.formatting.strikethrough
    }

    pub fn is_bold(&self) -> bool {
        self.formatting.bold
    }

    pub fn has_color(&self) -> bool {
        self.formatting.color.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    /// Display name of the paragraph style, e.g. "Heading 1". May be empty.
    #[serde(default, deserialize_with = "lenient")]
    pub style_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(style_name: impl Into<String>, runs: Vec<Run>) -> Self {
        Self {
            style_name: style_name.into(),
            runs,
        }
    }

    /// Paragraph with no style name
    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self::new(String::new(), runs)
    }

    /// Raw paragraph text: every run, struck or not
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A loaded document, reduced to its ordered body paragraphs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub source_file: String,
    pub paragraphs: Vec<Paragraph>,
}
