//! Input validation
//!
//! This module checks that an input file is something the loader can read
//! before any parsing starts.

use std::fs::File;
use std::path::Path;

use anyhow::Result;
use thiserror::Error;
use zip::ZipArchive;

/// Kind of input the loader accepts, decided by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Docx,
    /// Serialized paragraph stream
    ParagraphJson,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error(
        "Invalid file format. Expected .docx or .json file, got .{0}\n\
        Note: only Word .docx files (not .doc, .xlsx, .zip, etc.) and paragraph dumps are supported"
    )]
    UnsupportedExtension(String),

    #[error("Expected a .docx file, got .{0}")]
    NotDocx(String),

    #[error("This appears to be an Excel file (.xlsx).\nOnly Word documents (.docx) are supported.")]
    Spreadsheet,

    #[error(
        "Invalid .docx file: missing word/document.xml\n\
        This file may be corrupted or is not a valid Word document."
    )]
    MissingDocumentPart,
}

pub(crate) fn detect_input_kind(file_path: &Path) -> Result<InputKind, InputError> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "docx" => Ok(InputKind::Docx),
        "json" => Ok(InputKind::ParagraphJson),
        _ => Err(InputError::UnsupportedExtension(extension)),
    }
}

/// Validates that the file is a legitimate .docx package
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    if detect_input_kind(file_path)? != InputKind::Docx {
        let extension = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();
        return Err(InputError::NotDocx(extension).into());
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(InputError::Spreadsheet.into());
        }
        return Err(InputError::MissingDocumentPart.into());
    }

    Ok(())
}
