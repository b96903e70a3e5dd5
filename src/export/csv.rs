//! CSV Export functionality
//!
//! Exports report rows under a caller-supplied header row.

use std::path::Path;

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::Report;
use crate::storage::write_csv_atomic;

/// Atomically write `headers` followed by `rows` to `path`
///
/// Every row must have as many cells as there are headers; a mismatch is a
/// validation error raised before the filesystem is touched.
pub fn export_csv<P, H, R, C>(path: P, rows: &[R], headers: &[H]) -> ExpenseResult<()>
where
    P: AsRef<Path>,
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let path = path.as_ref();

    if headers.is_empty() {
        return Err(ExpenseError::validation("export requires at least one header"));
    }
    for (index, row) in rows.iter().enumerate() {
        let width = row.as_ref().len();
        if width != headers.len() {
            return Err(ExpenseError::validation(format!(
                "row {} has {} cells but {} headers were given",
                index + 1,
                width,
                headers.len()
            )));
        }
    }

    write_csv_atomic(path, |writer| {
        writer.write_record(headers.iter().map(|h| h.as_ref()))?;
        for row in rows {
            writer.write_record(row.as_ref().iter().map(|c| c.as_ref()))?;
        }
        Ok(())
    })?;

    info!(file = %path.display(), rows = rows.len(), "exported report");
    Ok(())
}

/// Export a generated report under its own headers
pub fn export_report<P: AsRef<Path>>(path: P, report: &impl Report) -> ExpenseResult<()> {
    export_csv(path, &report.rows(), &report.headers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::reports::{CategoryReport, MonthlyReport};
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::parse("20240101", "100.00", "food", "lunch", None).unwrap(),
            Transaction::parse("20240215", "50.00", "food", "", None).unwrap(),
        ]
    }

    #[test]
    fn test_export_writes_headers_then_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("monthly.csv");

        export_csv(
            &path,
            &[vec!["202401", "100.00"], vec!["202402", "50.00"]],
            &["month", "total"],
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "month,total\n202401,100.00\n202402,50.00\n"
        );
    }

    #[test]
    fn test_export_quotes_cells() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        export_csv(&path, &[["eat, drink", "1"]], &["category", "total"]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "category,total\n\"eat, drink\",1\n"
        );
    }

    #[test]
    fn test_arity_mismatch_leaves_target_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        fs::write(&path, "old\n").unwrap();

        let err = export_csv(&path, &[vec!["only-one"]], &["category", "total"]).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn test_export_reports() {
        let temp_dir = TempDir::new().unwrap();
        let monthly = temp_dir.path().join("monthly.csv");
        let category = temp_dir.path().join("category.csv");

        let by_month = MonthlyReport::generate(&sample()).unwrap();
        let by_category = CategoryReport::generate(&sample(), None, None).unwrap();
        export_report(&monthly, &by_month).unwrap();
        export_report(&category, &by_category).unwrap();

        assert_eq!(
            fs::read_to_string(&monthly).unwrap(),
            "month,total\n202401,100.00\n202402,50.00\n"
        );
        assert_eq!(
            fs::read_to_string(&category).unwrap(),
            "category,total\nfood,150.00\n"
        );
    }

    #[test]
    fn test_export_to_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = export_csv(temp_dir.path(), &[["a"]], &["h"]).unwrap_err();
        assert!(err.is_storage());
    }
}
