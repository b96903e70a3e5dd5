//! Transaction display formatting

use super::render_table;
use crate::models::{format_date_ymd, Transaction};

/// Format a numbered list of transactions
///
/// Row numbers are 1-based and match the selectors accepted by edit and
/// delete.
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let headers: Vec<String> = ["#", "id", "date", "amount", "category", "description"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    let rows: Vec<Vec<String>> = transactions
        .iter()
        .enumerate()
        .map(|(i, txn)| {
            vec![
                (i + 1).to_string(),
                txn.id.to_string(),
                format_date_ymd(txn.date),
                txn.amount.to_string(),
                txn.category.clone(),
                txn.description.clone(),
            ]
        })
        .collect();

    let mut output = render_table(&headers, &rows);
    output.push('\n');
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", format_date_ymd(txn.date)));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let txn = Transaction::parse("20240101", "12.50", "food", "lunch", None).unwrap();
        let output = format_transaction_table(&[txn.clone()]);

        assert!(output.contains("category"));
        assert!(output.contains(txn.id.as_str()));
        assert!(output.contains("20240101"));
        assert!(output.contains("12.50"));
        assert!(output.contains("lunch"));
    }

    #[test]
    fn test_details_skip_empty_description() {
        let txn = Transaction::parse("20240101", "1", "food", "", None).unwrap();
        let output = format_transaction_details(&txn);
        assert!(output.contains("Category:    food"));
        assert!(!output.contains("Description"));
    }
}
