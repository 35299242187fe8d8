//! Structured-paragraph reader
//!
//! A `docx` file is a ZIP container of XML parts; docx-rs parses it
//! into a typed tree. Text lives at the leaves of
//! Document -> Paragraph -> Run -> Text. This reader walks paragraphs
//! in document order and joins their run text with newlines, so an
//! empty paragraph contributes an empty line.

use super::ReadError;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;

/// Reader for the paragraph-structured rich-text format
#[derive(Debug, Clone, Default)]
pub struct DocxReader;

impl DocxReader {
    pub fn new() -> Self {
        Self
    }

    /// Extract paragraph text from a docx container, one line per
    /// paragraph in document order.
    pub fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = fs::read(path)?;

        let docx = read_docx(&bytes).map_err(|e| ReadError::Container {
            reason: format!("{e:?}"),
        })?;

        let mut paragraphs = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(para) = child {
                paragraphs.push(paragraph_text(para));
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

/// Concatenate the text runs of one paragraph. Runs within a paragraph
/// are parts of the same sentence, so no separator is inserted.
fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    out.push_str(&t.text);
                }
            }
        }
    }
    out
}
