//! Structural failures that abort a parse.
//!
//! Pattern misses never surface here; they fall back to placeholder values.

/// Errors that mean the input could not be processed at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The byte stream could not be read.
    #[error("failed to read statement: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a loadable PDF container.
    #[error("not a readable PDF: {0}")]
    UnreadableContainer(#[source] lopdf::Error),

    /// A page's content stream could not be decoded into text.
    #[error("failed to extract text from page {page}: {source}")]
    PageText {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
}
