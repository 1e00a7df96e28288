//! Document loading
//!
//! This module contains `load_document()`, which turns an input file into the
//! ordered paragraph stream the card engine consumes. Word documents are
//! read with docx-rs; `.json` inputs are paragraph streams written earlier
//! with `--dump-paragraphs`.

use anyhow::{Context, Result};
use std::path::Path;

use super::io::{InputKind, detect_input_kind, validate_docx_file};
use super::models::*;
use super::parsing::formatting::extract_paragraph_runs;
use super::parsing::style::StyleNames;

/// Load any supported input into a `SourceDocument`
pub async fn load_document(file_path: &Path) -> Result<SourceDocument> {
    let paragraphs = match detect_input_kind(file_path)? {
        InputKind::Docx => load_docx_paragraphs(file_path).await?,
        InputKind::ParagraphJson => load_paragraphs_json(file_path).await?,
    };

    log::info!(
        "loaded {} paragraphs from {}",
        paragraphs.len(),
        file_path.display()
    );

    Ok(SourceDocument {
        source_file: source_label(file_path),
        paragraphs,
    })
}

/// Read the body paragraphs of a .docx file in document order
///
/// Tables and other block-level children are skipped. Blank paragraphs are
/// kept; dropping them is the card engine's job.
pub async fn load_docx_paragraphs(file_path: &Path) -> Result<Vec<Paragraph>> {
    validate_docx_file(file_path)?;

    let file_data = tokio::fs::read(file_path)
        .await
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    paragraphs_from_docx_bytes(&file_data)
}

/// Parse an in-memory .docx package
pub fn paragraphs_from_docx_bytes(bytes: &[u8]) -> Result<Vec<Paragraph>> {
    let docx = docx_rs::read_docx(bytes)?;
    let style_names = StyleNames::from_styles(&docx.styles);

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(Paragraph {
                style_name: style_names.paragraph_style_name(para),
                runs: extract_paragraph_runs(para),
            }),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

/// Read a serialized paragraph stream
pub async fn load_paragraphs_json(file_path: &Path) -> Result<Vec<Paragraph>> {
    let content = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let paragraphs: Vec<Paragraph> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a paragraph stream", file_path.display()))?;
    Ok(paragraphs)
}

/// File name used as the deck's source identifier
pub fn source_label(file_path: &Path) -> String {
    file_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| file_path.to_string_lossy().to_string())
}
