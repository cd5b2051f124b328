//! End-to-end statement parsing: PDF bytes -> text -> [`StatementData`].

use std::io::Read;

use cardlens_core::{StatementData, UNKNOWN_ISSUER};
use log::info;

use crate::error::ParseError;
use crate::fields::{
    extract_card_last_four, extract_minimum_amount_due, extract_payment_due_date,
    extract_statement_period, extract_total_amount_due,
};
use crate::issuer::identify_issuer;
use crate::pdf_text;
use crate::transactions::extract_transactions;

/// Holds the text and issuer of the document currently being parsed.
///
/// Every `parse_*` call starts from a clean state, so an instance can be
/// reused for several documents one after another. It has no internal
/// locking; concurrent callers should each own a parser.
#[derive(Debug)]
pub struct StatementParser {
    text: String,
    issuer: &'static str,
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            issuer: UNKNOWN_ISSUER,
        }
    }

    /// Text extracted from the most recent document.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn issuer(&self) -> &str {
        self.issuer
    }

    /// Parse a PDF from any reader.
    ///
    /// `Err` means the input could not be processed at all. `Ok` may still be
    /// entirely placeholders if nothing recognisable was found.
    pub fn parse_pdf<R: Read>(&mut self, reader: R) -> Result<StatementData, ParseError> {
        self.reset();
        let text = pdf_text::extract_text(reader)?;
        Ok(self.parse_text(text))
    }

    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<StatementData, ParseError> {
        self.reset();
        let text = pdf_text::extract_text_from_bytes(bytes)?;
        Ok(self.parse_text(text))
    }

    /// Run the extractors on already-extracted statement text.
    pub fn parse_text(&mut self, text: impl Into<String>) -> StatementData {
        self.text = text.into();
        self.issuer = identify_issuer(&self.text);

        let data = StatementData {
            issuer: self.issuer.to_string(),
            card_last_four: extract_card_last_four(&self.text),
            statement_period: extract_statement_period(&self.text),
            payment_due_date: extract_payment_due_date(&self.text),
            total_amount_due: extract_total_amount_due(&self.text),
            minimum_amount_due: extract_minimum_amount_due(&self.text),
            transactions: extract_transactions(&self.text),
        };

        info!(
            "parsed {} statement: card {}, {} transaction(s), total due {:.2}",
            data.issuer,
            data.card_last_four,
            data.transactions.len(),
            data.total_amount_due
        );
        data
    }

    fn reset(&mut self) {
        self.text.clear();
        self.issuer = UNKNOWN_ISSUER;
    }
}

/// Parse one PDF statement with a fresh parser.
pub fn parse_statement_pdf<R: Read>(reader: R) -> Result<StatementData, ParseError> {
    StatementParser::new().parse_pdf(reader)
}

/// Parse already-extracted statement text with a fresh parser.
pub fn parse_statement_text(text: &str) -> StatementData {
    StatementParser::new().parse_text(text)
}
