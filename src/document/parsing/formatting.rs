//! Run text and formatting extraction
//!
//! This module turns docx-rs paragraph and run elements into the loader's
//! `Run` records. Anything it cannot read falls back to plain formatting.

use super::super::models::*;

/// Collect the runs of a paragraph in document order
///
/// Runs inside tracked insertions and hyperlinks count as visible text;
/// tracked deletions are skipped.
pub(crate) fn extract_paragraph_runs(para: &docx_rs::Paragraph) -> Vec<Run> {
    let mut runs = Vec::new();
    collect_runs(&para.children, &mut runs);
    runs
}

fn collect_runs(children: &[docx_rs::ParagraphChild], runs: &mut Vec<Run>) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => runs.push(extract_run(run)),
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        runs.push(extract_run(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => collect_runs(&link.children, runs),
            // Deletions, bookmarks, comments, fields
            _ => {}
        }
    }
}

pub(crate) fn extract_run(run: &docx_rs::Run) -> Run {
    Run {
        text: extract_run_text(run),
        formatting: extract_run_formatting(run),
    }
}

/// Extract text from a run: text nodes, tabs and line breaks
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Extract direct formatting from a run
pub(crate) fn extract_run_formatting(run: &docx_rs::Run) -> RunFormatting {
    let props = &run.run_property;

    let bold = props.bold.as_ref().is_some_and(toggle_is_on);
    let strikethrough = props.strike.as_ref().is_some_and(toggle_is_on)
        || props.dstrike.as_ref().is_some_and(toggle_is_on);

    // "auto" means inherit, the same as no explicit color
    let color = props
        .color
        .as_ref()
        .and_then(|color| debug_string_field(color, "val"))
        .filter(|val| !val.is_empty() && !val.eq_ignore_ascii_case("auto"));

    RunFormatting {
        bold,
        strikethrough,
        color,
    }
}

/// A toggle property (`w:b`, `w:strike`, ...) is on unless explicitly off
fn toggle_is_on<T: std::fmt::Debug>(prop: &T) -> bool {
    !format!("{prop:?}").contains("val: false")
}

/// Read a private string field through debug formatting
///
/// docx-rs keeps several property values private; their `Debug` output is
/// the only stable way to get at them.
pub(crate) fn debug_string_field<T: std::fmt::Debug>(value: &T, field: &str) -> Option<String> {
    let debug = format!("{value:?}");
    let marker = format!("{field}: \"");
    let start = debug.find(&marker)? + marker.len();
    let end = debug[start..].find('"')?;
    Some(debug[start..start + end].to_string())
}
