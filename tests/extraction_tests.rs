//! # Extraction Tests Module
//!
//! Test suite for document text extraction: filename-based kind detection,
//! PDF and DOCX extraction, and the empty-document behavior the handlers
//! rely on.

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tempfile::tempdir;

use cvlens::analysis::build_prompt;
use cvlens::extraction::{extract_text, DocumentKind};
use cvlens::extraction_errors::ExtractionError;

/// Write a one-page PDF containing `text` to `path`
fn write_pdf_with_text(path: &Path, text: &str) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode page content"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save pdf");
}

/// Write a PDF whose page tree contains no pages at all
fn write_empty_pdf(path: &Path) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save pdf");
}

/// Test suffix matching for supported document kinds
#[test]
fn test_document_kind_from_filename() {
    assert_eq!(DocumentKind::from_filename("resume.pdf"), Some(DocumentKind::Pdf));
    assert_eq!(DocumentKind::from_filename("resume.docx"), Some(DocumentKind::Docx));

    // Case-insensitive
    assert_eq!(DocumentKind::from_filename("RESUME.PDF"), Some(DocumentKind::Pdf));
    assert_eq!(DocumentKind::from_filename("Resume.DocX"), Some(DocumentKind::Docx));
}

/// Test that any other suffix is rejected as unsupported
#[test]
fn test_document_kind_rejects_unsupported_suffixes() {
    assert_eq!(DocumentKind::from_filename("resume.txt"), None);
    assert_eq!(DocumentKind::from_filename("resume.doc"), None);
    assert_eq!(DocumentKind::from_filename("resume.pdf.txt"), None);
    assert_eq!(DocumentKind::from_filename("resume"), None);
    assert_eq!(DocumentKind::from_filename(""), None);
}

/// Test PDF extraction of a document with one text-bearing page
#[test]
fn test_extract_text_from_pdf() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("resume.pdf");
    write_pdf_with_text(&path, "John Doe Engineer");

    let text = extract_text(&path, DocumentKind::Pdf).expect("extract pdf text");
    assert!(text.contains("John Doe Engineer"));
}

/// Test that a PDF without pages yields an empty string, not an error
#[test]
fn test_extract_text_from_pdf_without_pages() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("empty.pdf");
    write_empty_pdf(&path);

    let text = extract_text(&path, DocumentKind::Pdf).expect("extract pdf text");
    assert!(text.is_empty());
}

/// Test that a corrupt PDF surfaces a load error
#[test]
fn test_extract_text_from_corrupt_pdf() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"not a pdf at all").expect("write file");

    let result = extract_text(&path, DocumentKind::Pdf);
    assert!(matches!(result, Err(ExtractionError::Pdf(_))));
}

/// Test DOCX extraction with blank paragraphs interleaved
#[test]
fn test_extract_text_from_docx_skips_blank_paragraphs() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("resume.docx");
    let file = File::create(&path).expect("create docx");
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("John Doe")))
        .add_paragraph(Paragraph::new())
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("   ")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Engineer")))
        .build()
        .pack(file)
        .expect("pack docx");

    let text = extract_text(&path, DocumentKind::Docx).expect("extract docx text");
    assert_eq!(text, "John Doe\nEngineer");
}

/// Test that a DOCX with no text content yields an empty string
#[test]
fn test_extract_text_from_empty_docx() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("empty.docx");
    let file = File::create(&path).expect("create docx");
    Docx::new()
        .add_paragraph(Paragraph::new())
        .build()
        .pack(file)
        .expect("pack docx");

    let text = extract_text(&path, DocumentKind::Docx).expect("extract docx text");
    assert!(text.is_empty());
}

/// Test that a file with a DOCX name but non-DOCX content surfaces an error
#[test]
fn test_extract_text_from_corrupt_docx() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"not a zip archive").expect("write file");

    let result = extract_text(&path, DocumentKind::Docx);
    assert!(matches!(result, Err(ExtractionError::Docx(_))));
}

/// Extracted text must flow verbatim into the analysis prompt
#[test]
fn test_extracted_text_feeds_the_prompt() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("resume.pdf");
    write_pdf_with_text(&path, "John Doe Engineer");

    let text = extract_text(&path, DocumentKind::Pdf).expect("extract pdf text");
    let prompt = build_prompt(&text);
    assert!(prompt.contains("John Doe Engineer"));
}

/// Test error message formatting
#[test]
fn test_extraction_error_formatting() {
    let pdf_error = ExtractionError::Pdf("bad xref".to_string());
    assert_eq!(format!("{pdf_error}"), "PDF error: bad xref");

    let docx_error = ExtractionError::Docx("bad archive".to_string());
    assert_eq!(format!("{docx_error}"), "DOCX error: bad archive");

    let io_error = ExtractionError::Io("permission denied".to_string());
    assert_eq!(format!("{io_error}"), "File read error: permission denied");
}
