//! Paragraph style name resolution
//!
//! Paragraphs reference their style by id (`Heading1`), while classification
//! works on the display name (`Heading 1`). The styles part maps one to the
//! other.

use std::collections::HashMap;

use super::formatting::debug_string_field;

/// Built-in styles whose stored names are lowercase in styles.xml
const BUILTIN_UI_NAMES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
];

/// Convert a stored style name to the name Word shows in its UI
pub(crate) fn ui_style_name(stored: &str) -> String {
    BUILTIN_UI_NAMES
        .iter()
        .find(|(internal, _)| *internal == stored)
        .map(|(_, ui)| ui.to_string())
        .unwrap_or_else(|| stored.to_string())
}

/// Lookup table from style id to display name
#[derive(Debug, Default)]
pub(crate) struct StyleNames {
    names: HashMap<String, String>,
}

impl StyleNames {
    pub(crate) fn from_styles(styles: &docx_rs::Styles) -> Self {
        let mut names = HashMap::new();

        for style in &styles.styles {
            match debug_string_field(&style.name, "name") {
                Some(name) if !name.is_empty() => {
                    names
                        .entry(style.style_id.clone())
                        .or_insert_with(|| ui_style_name(&name));
                }
                _ => {
                    log::debug!("style {} has no readable name", style.style_id);
                }
            }
        }

        Self { names }
    }

    /// Display name for a paragraph's style; empty when it has none
    pub(crate) fn paragraph_style_name(&self, para: &docx_rs::Paragraph) -> String {
        match &para.property.style {
            Some(style) => self.resolve(&style.val),
            None => String::new(),
        }
    }

    /// Unknown ids resolve to themselves
    pub(crate) fn resolve(&self, style_id: &str) -> String {
        self.names
            .get(style_id)
            .cloned()
            .unwrap_or_else(|| style_id.to_string())
    }
}
