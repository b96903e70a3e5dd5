//! Report formatting for terminal output

use super::render_table;
use crate::reports::Report;

/// Format a report as a table, or a notice when it has no rows
pub fn format_report(report: &impl Report) -> String {
    let rows = report.rows();
    if rows.is_empty() {
        return "No rows.\n".to_string();
    }

    let mut output = render_table(&report.headers(), &rows);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::reports::MonthlyReport;

    #[test]
    fn test_format_monthly() {
        let txn = Transaction::parse("20240101", "100.00", "food", "", None).unwrap();
        let output = format_report(&MonthlyReport::generate(&[txn]).unwrap());

        assert!(output.contains("month"));
        assert!(output.contains("202401"));
        assert!(output.contains("100.00"));
    }

    #[test]
    fn test_format_empty_report() {
        assert_eq!(format_report(&MonthlyReport::default()), "No rows.\n");
    }
}
