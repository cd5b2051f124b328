//! Issuing bank detection.
//!
//! Table order decides ties: when a statement mentions several banks, the
//! earliest entry that matches wins.

use std::sync::LazyLock;

use cardlens_core::UNKNOWN_ISSUER;
use regex::Regex;

const ISSUERS: [(&str, &str); 5] = [
    ("HDFC Bank", r"hdfc\s*bank|hdfc\s*credit\s*card"),
    ("ICICI Bank", r"icici\s*bank|icici\s*credit\s*card"),
    ("SBI Card", r"sbi\s*card|state bank|sbi\s*credit"),
    ("Axis Bank", r"axis\s*bank|axis\s*credit\s*card"),
    ("Kotak Mahindra", r"kotak|kotak\s*mahindra"),
];

static ISSUER_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ISSUERS
        .iter()
        .map(|(name, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("issuer pattern is valid");
            (*name, re)
        })
        .collect()
});

/// Name of the first issuer in table order whose pattern occurs in `text`.
pub fn identify_issuer(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    ISSUER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&lower))
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_ISSUER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_issuer() {
        assert_eq!(identify_issuer("Welcome to HDFC Bank"), "HDFC Bank");
        assert_eq!(identify_issuer("ICICI Credit Card statement"), "ICICI Bank");
        assert_eq!(identify_issuer("SBICard monthly"), "SBI Card");
        assert_eq!(identify_issuer("State Bank of India"), "SBI Card");
        assert_eq!(identify_issuer("AXIS BANK LTD"), "Axis Bank");
        assert_eq!(identify_issuer("Kotak Mahindra Bank"), "Kotak Mahindra");
    }

    #[test]
    fn test_unknown_without_bank_keywords() {
        assert_eq!(identify_issuer("Statement of account for card 1234"), "Unknown");
        assert_eq!(identify_issuer(""), "Unknown");
    }

    #[test]
    fn test_table_order_beats_position_and_frequency() {
        let text = "Kotak Kotak Kotak. Axis Bank. Transfer from ICICI Bank. Paid via hdfcbank";
        assert_eq!(identify_issuer(text), "HDFC Bank");

        let text = "AXIS BANK AXIS BANK AXIS BANK ... sbi card";
        assert_eq!(identify_issuer(text), "SBI Card");
    }
}
