//! Labeled header fields: card digits, statement period, due date and the
//! two amounts due.
//!
//! Each field owns an ordered list of label phrasings seen across bank
//! layouts. Patterns are tried in order and the first one that matches wins;
//! later patterns are never consulted.

use std::sync::LazyLock;

use cardlens_core::{MASKED_CARD, NOT_FOUND};
use log::{debug, warn};
use regex::{Captures, Regex};

const DATE: &str = r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}";
const AMOUNT: &str = r"(?:Rs\.?|INR|₹)?\s*([\d,]+\.?\d*)";

static CARD_LAST_FOUR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"card\s*number[:\s]+[xX*]+\s*(\d{4})".to_string(),
        r"card\s*ending\s*(?:in|with)[:\s]*(\d{4})".to_string(),
        r"xxxx\s*xxxx\s*xxxx\s*(\d{4})".to_string(),
        r"[xX*]{4}[\s\-]?[xX*]{4}[\s\-]?[xX*]{4}[\s\-]?(\d{4})".to_string(),
    ])
});

static STATEMENT_PERIOD: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"statement\s*period[:\s]+({DATE})\s*(?:to|-)\s*({DATE})"),
        format!(r"billing\s*period[:\s]+({DATE})\s*(?:to|-)\s*({DATE})"),
        format!(r"from\s+({DATE})\s+to\s+({DATE})"),
    ])
});

static PAYMENT_DUE_DATE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"payment\s*due\s*date[:\s]+({DATE})"),
        format!(r"due\s*date[:\s]+({DATE})"),
        format!(r"pay\s*by[:\s]+({DATE})"),
    ])
});

static TOTAL_AMOUNT_DUE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"total\s*amount\s*due[:\s]+{AMOUNT}"),
        format!(r"total\s*due[:\s]+{AMOUNT}"),
        format!(r"amount\s*due[:\s]+{AMOUNT}"),
        format!(r"outstanding\s*balance[:\s]+{AMOUNT}"),
        format!(r"closing\s*balance[:\s]+{AMOUNT}"),
    ])
});

static MINIMUM_AMOUNT_DUE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"minimum\s*amount\s*due[:\s]+{AMOUNT}"),
        format!(r"minimum\s*due[:\s]+{AMOUNT}"),
        format!(r"min\.?\s*amount\s*due[:\s]+{AMOUNT}"),
    ])
});

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("field pattern is valid"))
        .collect()
}

/// First pattern (in list order) that matches anywhere in `text`.
fn first_match<'t>(field: &str, patterns: &[Regex], text: &'t str) -> Option<Captures<'t>> {
    patterns.iter().enumerate().find_map(|(idx, re)| {
        let caps = re.captures(text)?;
        debug!("{field}: matched pattern #{idx}");
        Some(caps)
    })
}

/// First pattern whose captured amount also parses as a number.
///
/// A match whose digits fail to parse is skipped, not treated as an error.
fn first_amount(field: &str, patterns: &[Regex], text: &str) -> Option<f64> {
    patterns.iter().enumerate().find_map(|(idx, re)| {
        let caps = re.captures(text)?;
        match parse_amount(&caps[1]) {
            Some(amount) => {
                debug!("{field}: matched pattern #{idx} -> {amount}");
                Some(amount)
            }
            None => {
                warn!("{field}: pattern #{idx} captured unparseable amount {:?}", &caps[1]);
                None
            }
        }
    })
}

/// Strip thousands separators and parse as a decimal amount.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

pub fn extract_card_last_four(text: &str) -> String {
    first_match("card_last_four", &CARD_LAST_FOUR, text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| MASKED_CARD.to_string())
}

/// `"<start> to <end>"` for the first period phrasing found.
pub fn extract_statement_period(text: &str) -> String {
    first_match("statement_period", &STATEMENT_PERIOD, text)
        .map(|caps| format!("{} to {}", &caps[1], &caps[2]))
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_payment_due_date(text: &str) -> String {
    first_match("payment_due_date", &PAYMENT_DUE_DATE, text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_total_amount_due(text: &str) -> f64 {
    first_amount("total_amount_due", &TOTAL_AMOUNT_DUE, text).unwrap_or(0.0)
}

pub fn extract_minimum_amount_due(text: &str) -> f64 {
    first_amount("minimum_amount_due", &MINIMUM_AMOUNT_DUE, text).unwrap_or(0.0)
}
