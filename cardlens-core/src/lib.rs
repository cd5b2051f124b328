//! cardlens-core: record types shared by the statement parser and its callers

pub mod statement;

pub use statement::{
    MASKED_CARD, NOT_FOUND, StatementData, Transaction, TransactionType, UNKNOWN_ISSUER,
};
