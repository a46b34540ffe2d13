//! Text extraction from uploaded CV documents.
//!
//! Supported formats are PDF and DOCX, keyed off the filename the user's
//! client declared for the upload. Extraction produces plain text only;
//! deciding what to do with an empty result is left to the caller.

use std::path::Path;

use docx_rs::{read_docx, DocumentChild};
use lopdf::Document;
use tracing::debug;

use crate::extraction_errors::ExtractionError;

/// Document formats accepted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Infer the document kind from the declared filename.
    ///
    /// The match on the `.pdf` / `.docx` suffix is case-insensitive. Any
    /// other suffix is not an error, just an unsupported upload the caller
    /// reports back to the user.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

/// Extract plain text from a downloaded document.
///
/// Returns an empty string when the document parses but contains no
/// extractable text; the caller treats that as the unreadable-file case.
pub fn extract_text(path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => extract_text_from_pdf(path),
        DocumentKind::Docx => extract_text_from_docx(path),
    }
}

/// Extract text from a PDF, page by page, skipping pages with no text.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, ExtractionError> {
    let doc = Document::load(path).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut pages_text = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        // Pages without extractable text (scanned pages, pure graphics)
        // are skipped rather than failing the whole document.
        if let Ok(text) = doc.extract_text(&[page_num]) {
            if !text.trim().is_empty() {
                pages_text.push(text.trim_end().to_string());
            }
        }
    }

    debug!(pages_with_text = pages_text.len(), "PDF text extraction completed");

    Ok(pages_text.join("\n"))
}

/// Extract text from a DOCX, paragraph by paragraph, skipping paragraphs
/// that are empty or whitespace-only.
pub fn extract_text_from_docx(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::Io(e.to_string()))?;
    let docx = read_docx(&bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => {
                let text = para.raw_text();
                if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            _ => None,
        })
        .collect();

    debug!(paragraphs_with_text = paragraphs.len(), "DOCX text extraction completed");

    Ok(paragraphs.join("\n"))
}
