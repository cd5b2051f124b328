//! Statement record types produced by the extraction pipeline

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issuer name used when no bank pattern matches
pub const UNKNOWN_ISSUER: &str = "Unknown";
/// Card digits placeholder when no masked card number is found
pub const MASKED_CARD: &str = "****";
/// Placeholder for date-like fields that could not be located
pub const NOT_FOUND: &str = "Not found";

/// Direction of a statement line from the cardholder's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Charge to the card
    #[serde(rename = "debit")]
    Debit,
    /// Payment, refund or reversal reducing the balance
    #[serde(rename = "credit")]
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }
}

/// A single transaction line recovered from statement text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date exactly as printed (e.g. `12/03/2024` or `12-03`)
    pub date: String,
    /// Trimmed merchant/narration text, at most 60 characters
    pub description: String,
    /// Always positive; direction lives in `transaction_type`
    pub amount: f64,
    pub transaction_type: TransactionType,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }

    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        to_map(self)
    }
}

/// Everything extracted from one statement.
///
/// Every field always carries a value: anything the extractors could not
/// locate holds its placeholder (see [`StatementData::default`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementData {
    pub issuer: String,
    pub card_last_four: String,
    /// `"<start> to <end>"` or [`NOT_FOUND`]
    pub statement_period: String,
    pub payment_due_date: String,
    pub total_amount_due: f64,
    pub minimum_amount_due: f64,
    /// First-seen order, capped by the extractor
    pub transactions: Vec<Transaction>,
}

impl Default for StatementData {
    fn default() -> Self {
        Self {
            issuer: UNKNOWN_ISSUER.to_string(),
            card_last_four: MASKED_CARD.to_string(),
            statement_period: NOT_FOUND.to_string(),
            payment_due_date: NOT_FOUND.to_string(),
            total_amount_due: 0.0,
            minimum_amount_due: 0.0,
            transactions: Vec::new(),
        }
    }
}

impl StatementData {
    /// Plain key/value form handed across the boundary.
    ///
    /// Keys follow field order: `issuer` first, `transactions` last.
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        to_map(self)
    }

    pub fn debit_count(&self) -> usize {
        self.transactions.iter().filter(|t| !t.is_credit()).count()
    }

    pub fn credit_count(&self) -> usize {
        self.transactions.iter().filter(|t| t.is_credit()).count()
    }

    pub fn total_debits(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| !t.is_credit())
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_credits(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.is_credit())
            .map(|t| t.amount)
            .sum()
    }
}

fn to_map<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::to_value(value).and_then(serde_json::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn txn(desc: &str, amount: f64, kind: TransactionType) -> Transaction {
        Transaction {
            date: "01/02/2024".to_string(),
            description: desc.to_string(),
            amount,
            transaction_type: kind,
        }
    }

    #[test]
    fn test_default_is_fully_filled() {
        let data = StatementData::default();
        assert_eq!(data.issuer, "Unknown");
        assert_eq!(data.card_last_four, "****");
        assert_eq!(data.statement_period, "Not found");
        assert_eq!(data.payment_due_date, "Not found");
        assert_eq!(data.total_amount_due, 0.0);
        assert_eq!(data.minimum_amount_due, 0.0);
        assert!(data.transactions.is_empty());
    }

    #[test]
    fn test_to_map_shape() {
        let data = StatementData {
            issuer: "HDFC Bank".to_string(),
            card_last_four: "4321".to_string(),
            transactions: vec![txn("SWIGGY BANGALORE", 450.0, TransactionType::Debit)],
            ..StatementData::default()
        };

        let map = data.to_map().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "issuer",
                "card_last_four",
                "statement_period",
                "payment_due_date",
                "total_amount_due",
                "minimum_amount_due",
                "transactions",
            ]
        );
        assert_eq!(map["issuer"], json!("HDFC Bank"));

        let txns = map["transactions"].as_array().unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0]["transaction_type"], json!("debit"));
        assert_eq!(txns[0]["amount"], json!(450.0));

        let txn_keys: Vec<&str> = txns[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(txn_keys, ["date", "description", "amount", "transaction_type"]);
    }

    #[test]
    fn test_default_json_starts_with_issuer() {
        let map = StatementData::default().to_map().unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"issuer":"Unknown","card_last_four":"****""#));
    }

    #[test]
    fn test_transaction_type_serializes_lowercase() {
        let t = txn("REFUND AMAZON", 99.0, TransactionType::Credit);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["transaction_type"], json!("credit"));
        assert_eq!(Value::Object(t.to_map().unwrap()), v);
    }

    #[test]
    fn test_debit_credit_totals() {
        let data = StatementData {
            transactions: vec![
                txn("FLIPKART", 1200.0, TransactionType::Debit),
                txn("ZOMATO", 300.5, TransactionType::Debit),
                txn("PAYMENT RECEIVED", 5000.0, TransactionType::Credit),
            ],
            ..StatementData::default()
        };
        assert_eq!(data.debit_count(), 2);
        assert_eq!(data.credit_count(), 1);
        assert_eq!(data.total_debits(), 1500.5);
        assert_eq!(data.total_credits(), 5000.0);
    }
}
