//! cardlens-ingest: text extraction and heuristic field/transaction parsing
//! for Indian credit-card statement PDFs.

pub mod error;
pub mod fields;
pub mod issuer;
pub mod parser;
pub mod pdf_text;
pub mod transactions;

pub use error::ParseError;
pub use issuer::identify_issuer;
pub use parser::{StatementParser, parse_statement_pdf, parse_statement_text};
pub use transactions::extract_transactions;
