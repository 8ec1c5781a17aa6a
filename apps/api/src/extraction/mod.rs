//! Document text extraction — pluggable, trait-based reader for uploaded files.
//!
//! Default: `DocumentTextExtractor` (PDF via `pdf-extract`, DOCX via a zip +
//! WordprocessingML scan). `AppState` holds an `Arc<dyn TextExtractor>`, so a
//! different backend can be swapped in at startup without touching handlers.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors surfaced by text extraction. `UnsupportedFormat` is a caller error;
/// the other variants mean the file claimed a supported format but could not
/// be decoded.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Only PDF or DOCX files are supported")]
    UnsupportedFormat,

    #[error("Failed to read PDF content: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX content: {0}")]
    Docx(String),
}

/// The text extraction trait. Implement this to swap document backends
/// without touching the endpoint, handler, or analysis code.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, filename: &str, data: &[u8]) -> Result<String, ExtractionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// DocumentTextExtractor — default PDF/DOCX implementation
// ────────────────────────────────────────────────────────────────────────────

/// Default extractor. Dispatches on the (case-insensitive) file extension:
/// `.pdf` and `.docx` are the only accepted formats.
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, filename: &str, data: &[u8]) -> Result<String, ExtractionError> {
        let lower = filename.to_lowercase();

        if lower.ends_with(".pdf") {
            extract_pdf(data)
        } else if lower.ends_with(".docx") {
            extract_docx(data)
        } else {
            Err(ExtractionError::UnsupportedFormat)
        }
    }
}

fn extract_pdf(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

// Decompression cap for the document part. Uploads are size-limited, but a
// small archive can still declare an arbitrarily large entry.
const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

// Matches either a single text run or a paragraph close. Runs contribute
// their text; each `</w:p>` contributes a newline, mirroring how word
// processors terminate paragraphs.
static RE_DOCX_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>|</w:p>").unwrap());

fn extract_docx(data: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut document_xml = String::new();
    entry
        .take(MAX_DOCUMENT_XML_BYTES + 1)
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;
    if document_xml.len() as u64 > MAX_DOCUMENT_XML_BYTES {
        return Err(ExtractionError::Docx(format!(
            "word/document.xml exceeds {MAX_DOCUMENT_XML_BYTES} bytes"
        )));
    }

    let mut text = String::with_capacity(document_xml.len() / 4);
    for caps in RE_DOCX_RUN.captures_iter(&document_xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&decode_xml_entities(run.as_str())),
            None => text.push('\n'),
        }
    }

    Ok(text)
}

/// Decodes the five predefined XML entities plus numeric character
/// references. Anything unrecognized is passed through untouched.
fn decode_xml_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        // Entity names are short; a distant or missing ';' means a bare '&'.
        let end = match rest.find(';') {
            Some(end) if end <= 10 => end,
            _ => {
                out.push('&');
                rest = &rest[1..];
                continue;
            }
        };

        match &rest[1..end] {
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "amp" => out.push('&'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            entity => {
                let code = entity
                    .strip_prefix("#x")
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()));
                match code.and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => out.push_str(&rest[..=end]),
                }
            }
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn docx_with_document_xml(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let err = DocumentTextExtractor
            .extract("resume.txt", b"plain text")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let err = DocumentTextExtractor.extract("resume", b"").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let data = docx_with_document_xml(
            "<w:document><w:body><w:p><w:r><w:t>Skills</w:t></w:r></w:p></w:body></w:document>",
        );
        let text = DocumentTextExtractor.extract("RESUME.DOCX", &data).unwrap();
        assert_eq!(text, "Skills\n");
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let data = docx_with_document_xml(
            "<w:document><w:body>\
             <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Second</w:t></w:r><w:r><w:t> paragraph</w:t></w:r></w:p>\
             </w:body></w:document>",
        );
        let text = DocumentTextExtractor.extract("resume.docx", &data).unwrap();
        assert_eq!(text, "First paragraph\nSecond paragraph\n");
    }

    #[test]
    fn test_docx_run_attributes_are_ignored() {
        let data = docx_with_document_xml(
            "<w:document><w:body>\
             <w:p><w:r><w:t xml:space=\"preserve\">spaced text </w:t></w:r></w:p>\
             </w:body></w:document>",
        );
        let text = DocumentTextExtractor.extract("resume.docx", &data).unwrap();
        assert_eq!(text, "spaced text \n");
    }

    #[test]
    fn test_docx_entities_are_decoded() {
        let data = docx_with_document_xml(
            "<w:document><w:body>\
             <w:p><w:r><w:t>R&amp;D &lt;lead&gt; &#8226; on call</w:t></w:r></w:p>\
             </w:body></w:document>",
        );
        let text = DocumentTextExtractor.extract("resume.docx", &data).unwrap();
        assert_eq!(text, "R&D <lead> \u{2022} on call\n");
    }

    #[test]
    fn test_docx_not_a_zip_fails() {
        let err = DocumentTextExtractor
            .extract("resume.docx", b"definitely not a zip archive")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_docx_without_document_xml_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:document/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        let err = DocumentTextExtractor
            .extract("resume.docx", &data)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_docx_oversized_document_part_fails() {
        // Compresses to a few kilobytes but inflates past the read cap.
        let huge = "a".repeat(MAX_DOCUMENT_XML_BYTES as usize + 1024);
        let data = docx_with_document_xml(&huge);

        let err = DocumentTextExtractor
            .extract("resume.docx", &data)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }

    #[test]
    fn test_pdf_garbage_bytes_fail() {
        let err = DocumentTextExtractor
            .extract("resume.pdf", b"not a pdf at all")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_decode_passes_plain_text_through() {
        assert_eq!(decode_xml_entities("no entities here"), "no entities here");
    }

    #[test]
    fn test_decode_handles_bare_ampersand() {
        assert_eq!(decode_xml_entities("AT&T and more"), "AT&T and more");
    }

    #[test]
    fn test_decode_hex_reference() {
        assert_eq!(decode_xml_entities("bullet &#x2022; here"), "bullet \u{2022} here");
    }

    #[test]
    fn test_decode_unknown_entity_is_preserved() {
        assert_eq!(decode_xml_entities("&nbsp;"), "&nbsp;");
    }
}
