//! # Extraction Error Types Module
//!
//! This module defines custom error types used while extracting text from
//! uploaded CV documents. It provides structured error handling for the
//! supported document formats and their failure modes.

/// Custom error types for document text extraction
#[derive(Debug, Clone)]
pub enum ExtractionError {
    /// File read errors
    Io(String),
    /// PDF loading or parsing errors
    Pdf(String),
    /// DOCX loading or parsing errors
    Docx(String),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::Io(msg) => write!(f, "File read error: {msg}"),
            ExtractionError::Pdf(msg) => write!(f, "PDF error: {msg}"),
            ExtractionError::Docx(msg) => write!(f, "DOCX error: {msg}"),
        }
    }
}

impl std::error::Error for ExtractionError {}
