//! Human-readable statement summary for the terminal.

use cardlens_core::StatementData;
use std::fmt::{self, Write};

/// Format as rupees with Indian digit grouping, e.g. `₹1,23,456.78`.
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if int_part.len() <= 3 {
        int_part.to_string()
    } else {
        let (head, last3) = int_part.split_at(int_part.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (h, t) = rest.split_at(rest.len() - 2);
            groups.push(t);
            rest = h;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), last3)
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}₹{grouped}.{frac_part}")
}

pub fn render_summary(data: &StatementData) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Statement Summary")?;
    writeln!(out, "  Issuer:              {}", data.issuer)?;
    writeln!(out, "  Card Number:         **** {}", data.card_last_four)?;
    writeln!(out, "  Statement Period:    {}", data.statement_period)?;
    writeln!(out, "  Payment Due Date:    {}", data.payment_due_date)?;
    writeln!(out, "  Total Amount Due:    {}", format_inr(data.total_amount_due))?;
    writeln!(out, "  Minimum Amount Due:  {}", format_inr(data.minimum_amount_due))?;
    writeln!(out)?;

    writeln!(out, "Transactions")?;
    writeln!(out, "Total Transactions: {}", data.transactions.len())?;
    if data.transactions.is_empty() {
        return Ok(out);
    }

    writeln!(out, "{:<12} {:<60} {:>16} {:<6}", "Date", "Description", "Amount", "Type")?;
    for t in &data.transactions {
        writeln!(
            out,
            "{:<12} {:<60} {:>16} {:<6}",
            t.date,
            t.description,
            format_inr(t.amount),
            t.transaction_type.as_str().to_uppercase()
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Debits: {} ({})  Credits: {} ({})",
        data.debit_count(),
        format_inr(data.total_debits()),
        data.credit_count(),
        format_inr(data.total_credits())
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlens_core::{Transaction, TransactionType};

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.5), "₹999.50");
        assert_eq!(format_inr(1000.0), "₹1,000.00");
        assert_eq!(format_inr(12345.67), "₹12,345.67");
        assert_eq!(format_inr(123456.78), "₹1,23,456.78");
        assert_eq!(format_inr(12345678.0), "₹1,23,45,678.00");
        assert_eq!(format_inr(-1500.0), "-₹1,500.00");
    }

    #[test]
    fn test_render_summary_defaults() {
        let out = render_summary(&StatementData::default()).unwrap();
        assert!(out.contains("Issuer:              Unknown"));
        assert!(out.contains("**** ****"));
        assert!(out.contains("Total Transactions: 0"));
        assert!(!out.contains("Description"));
    }

    #[test]
    fn test_render_summary_rows() {
        let data = StatementData {
            issuer: "SBI Card".to_string(),
            transactions: vec![Transaction {
                date: "02/03/2024".to_string(),
                description: "PAYMENT RECEIVED".to_string(),
                amount: 25000.0,
                transaction_type: TransactionType::Credit,
            }],
            ..StatementData::default()
        };
        let out = render_summary(&data).unwrap();
        assert!(out.contains("₹25,000.00"));
        assert!(out.contains("CREDIT"));
        assert!(out.contains("Total Transactions: 1"));
        assert!(out.contains("Credits: 1 (₹25,000.00)"));
    }
}
