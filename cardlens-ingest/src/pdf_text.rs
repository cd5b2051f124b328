//! PDF to plain text.
//!
//! Pages are visited in page order; each page that yields text contributes
//! that text followed by a newline. Pages without text contribute nothing.

use std::io::Read;

use log::{debug, warn};
use lopdf::Document;

use crate::error::ParseError;

/// Read a whole PDF stream and return its concatenated page text.
pub fn extract_text<R: Read>(mut reader: R) -> Result<String, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    extract_text_from_bytes(&bytes)
}

pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, ParseError> {
    let doc = Document::load_mem(bytes).map_err(ParseError::UnreadableContainer)?;

    let pages = doc.get_pages();
    debug!("loaded PDF with {} page(s)", pages.len());

    let mut page_texts = Vec::with_capacity(pages.len());
    for page in pages.keys().copied() {
        let text = doc
            .extract_text(&[page])
            .map_err(|source| ParseError::PageText { page, source })?;
        page_texts.push(text);
    }

    let text = join_pages(page_texts);
    if text.is_empty() {
        warn!("PDF has no text layer; every field will use its default");
    }
    Ok(text)
}

/// Join per-page text, dropping pages that are empty or whitespace-only.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        out.push_str(page);
        out.push('\n');
    }
    out
}
