use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use csv::WriterBuilder;
use tracing::info;

use super::{Result, TransactionStore};
use crate::ledger::{LedgerTotals, Transaction};
use crate::utils::ensure_dir;

const HEADER: [&str; 4] = ["Type", "Amount", "Category", "Remaining"];

/// Append-only record log.
///
/// Each accepted transaction becomes one appended row stamped with the
/// remaining balance at submission time; earlier rows are never revisited.
/// Replaying the same logical transaction appends a duplicate row.
#[derive(Debug, Clone)]
pub struct CsvAppendStore {
    path: PathBuf,
}

impl CsvAppendStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionStore for CsvAppendStore {
    fn record(&mut self, txn: &Transaction, _totals: LedgerTotals, remaining: f64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_new {
            writer.write_record(HEADER)?;
        }
        let amount = format!("{:.2}", txn.amount);
        let remaining = format!("{:.2}", remaining);
        writer.write_record([
            txn.kind.as_str(),
            amount.as_str(),
            txn.category.as_str(),
            remaining.as_str(),
        ])?;
        writer.flush()?;
        info!(path = %self.path.display(), kind = %txn.kind, "appended transaction row");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use std::fs;
    use tempfile::tempdir;

    fn totals() -> LedgerTotals {
        LedgerTotals {
            income: 0.0,
            expenses: 0.0,
        }
    }

    #[test]
    fn first_write_creates_directory_and_header() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("data").join("transactions.csv");
        let mut store = CsvAppendStore::new(&path);

        let txn = Transaction::new(TransactionKind::Expense, 50.0, "Food");
        store.record(&txn, totals(), 450.0).expect("record");

        let contents = fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Type,Amount,Category,Remaining");
        assert_eq!(lines[1], "Expense,50.00,Food,450.00");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn header_is_not_repeated_across_store_instances() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.csv");

        let txn = Transaction::new(TransactionKind::Income, 10.25, "Other");
        CsvAppendStore::new(&path)
            .record(&txn, totals(), 10.25)
            .unwrap();
        CsvAppendStore::new(&path)
            .record(&txn, totals(), 20.5)
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let headers = contents
            .lines()
            .filter(|line| line.starts_with("Type,"))
            .count();
        assert_eq!(headers, 1);
        assert_eq!(contents.lines().count(), 3);
    }
}
