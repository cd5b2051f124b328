//! Free-form transaction lines.
//!
//! Expected shape after PDF-to-text (line breaks are not required):
//!   12/03/2024   SWIGGY BANGALORE                 Rs. 450.00
//!   14/03/2024   PAYMENT RECEIVED - THANK YOU     5,000.00 Cr
//!
//! One composite pattern is scanned across the whole text. The description
//! class is permissive, so boundaries between neighbouring rows are
//! best-effort.

use std::collections::HashSet;
use std::sync::LazyLock;

use cardlens_core::{Transaction, TransactionType};
use log::{debug, trace};
use regex::Regex;

use crate::fields::parse_amount;

/// Transactions beyond this many (in scan order) are dropped.
pub const MAX_TRANSACTIONS: usize = 50;
/// Descriptions are cut to this many characters.
pub const MAX_DESCRIPTION_CHARS: usize = 60;

/// Descriptions containing any of these are credits even without a `Cr` marker.
pub const CREDIT_KEYWORDS: [&str; 4] = ["payment", "credit", "reversal", "refund"];
/// Descriptions containing any of these are summary lines, not transactions.
pub const NOISE_KEYWORDS: [&str; 5] = ["total", "balance", "summary", "page", "statement"];

static TXN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?P<date>\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?)\s+",
        r"(?P<desc>[A-Za-z0-9\s.\-'&@*/,]+?)\s+",
        r"(?:Rs\.?|INR|₹)?\s*(?P<amt>[\d,]+\.?\d*)",
        r"\s*(?:(?P<marker>Dr|Cr)\b)?"
    ))
    .expect("transaction pattern is valid")
});

fn contains_any(haystack_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack_lower.contains(k))
}

fn classify(description_lower: &str, marker: Option<&str>) -> TransactionType {
    let cr_marker = marker.is_some_and(|m| m.eq_ignore_ascii_case("cr"));
    if cr_marker || contains_any(description_lower, &CREDIT_KEYWORDS) {
        TransactionType::Credit
    } else {
        TransactionType::Debit
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Scan `text` for date/description/amount rows.
///
/// Rows that look like summary lines, have a too-short description or a
/// non-positive amount are dropped. Repeats of an earlier
/// (date, description, amount) are dropped. At most [`MAX_TRANSACTIONS`]
/// are returned, in first-seen order.
pub fn extract_transactions(text: &str) -> Vec<Transaction> {
    let mut seen: HashSet<(String, String, u64)> = HashSet::new();
    let mut out = Vec::new();

    for caps in TXN_RE.captures_iter(text) {
        let date = &caps["date"];
        let description = caps["desc"].trim();

        let amount = match parse_amount(&caps["amt"]) {
            Some(a) => a,
            None => {
                trace!("skipping row with unparseable amount {:?}", &caps["amt"]);
                continue;
            }
        };

        let desc_lower = description.to_lowercase();
        let transaction_type = classify(&desc_lower, caps.name("marker").map(|m| m.as_str()));

        if description.chars().count() <= 3
            || amount <= 0.0
            || contains_any(&desc_lower, &NOISE_KEYWORDS)
        {
            trace!("rejecting row {date} {description:?} {amount}");
            continue;
        }

        let description = truncate_chars(description, MAX_DESCRIPTION_CHARS);
        if !seen.insert((date.to_string(), description.clone(), amount.to_bits())) {
            trace!("dropping duplicate row {date} {description:?} {amount}");
            continue;
        }

        out.push(Transaction {
            date: date.to_string(),
            description,
            amount,
            transaction_type,
        });
    }

    if out.len() > MAX_TRANSACTIONS {
        debug!("capping {} transactions at {}", out.len(), MAX_TRANSACTIONS);
        out.truncate(MAX_TRANSACTIONS);
    }

    out
}
