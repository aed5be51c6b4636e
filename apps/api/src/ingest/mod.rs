//! Source-document text extraction.
//!
//! The pipeline only ever sees `extract_text(bytes, kind) -> text | failure`;
//! everything past this boundary (PDF internals, OOXML parsing, encodings)
//! stays here.

pub mod handlers;

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::errors::AppError;
use crate::models::request::DocumentKind;

/// Extracts plain text from document bytes according to the declared kind.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, AppError> {
    let text = match kind {
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Extraction(format!("File is not valid UTF-8 text: {e}")))?,
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("Could not extract text from PDF: {e}")))?,
        DocumentKind::WordProcessor => extract_docx_text(bytes)?,
    };

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "Document contained no extractable text".to_string(),
        ));
    }

    debug!("Extracted {} chars from {:?} document", text.len(), kind);
    Ok(text)
}

/// Pulls the body text out of an OOXML word-processor document.
///
/// A `.docx` file is a zip archive whose body lives in `word/document.xml`:
/// text sits in `w:t` runs, grouped into `w:p` paragraphs. Paragraphs and
/// explicit `w:br` breaks become newlines in the extracted text.
fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("File is not a valid Word document: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::Extraction(format!("Word document has no body part: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("Could not read Word document body: {e}")))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"br" => text.push('\n'),
            Ok(Event::Text(t)) if in_text_run => {
                let run = t.unescape().map_err(|e| {
                    AppError::Extraction(format!("Malformed text run in Word document: {e}"))
                })?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Extraction(format!(
                    "Malformed Word document XML: {e}"
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Builds an in-memory `.docx` (zip archive) around the given body XML.
    fn docx_with_body(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(
                "word/document.xml",
                zip::write::SimpleFileOptions::default(),
            )
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = extract_text("Senior Rust Engineer\n5+ years".as_bytes(), DocumentKind::PlainText)
            .unwrap();
        assert!(text.contains("Senior Rust Engineer"));
    }

    #[test]
    fn test_invalid_utf8_is_extraction_failure() {
        let err = extract_text(&[0xFF, 0xFE, 0x00], DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_whitespace_only_document_is_extraction_failure() {
        let err = extract_text("   \n\n  ".as_bytes(), DocumentKind::PlainText).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_word_document_paragraphs_become_lines() {
        let bytes = docx_with_body(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Senior Rust Engineer</w:t></w:r></w:p>
                <w:p><w:r><w:t>Chennai, 5+ years</w:t></w:r></w:p>
              </w:body>
            </w:document>"#,
        );
        let text = extract_text(&bytes, DocumentKind::WordProcessor).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Senior Rust Engineer", "Chennai, 5+ years"]);
    }

    #[test]
    fn test_word_document_unescapes_entities_and_joins_runs() {
        let bytes = docx_with_body(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Fintech &amp; </w:t></w:r><w:r><w:t>Payments</w:t></w:r></w:p>
              </w:body>
            </w:document>"#,
        );
        let text = extract_text(&bytes, DocumentKind::WordProcessor).unwrap();
        assert!(text.contains("Fintech & Payments"));
    }

    #[test]
    fn test_garbage_word_document_is_extraction_failure() {
        let err = extract_text(b"PK\x03\x04 not really a zip", DocumentKind::WordProcessor)
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_word_document_without_body_part_is_extraction_failure() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text(&bytes, DocumentKind::WordProcessor).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_garbage_pdf_is_extraction_failure() {
        let err = extract_text(b"not a pdf at all", DocumentKind::Pdf).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
