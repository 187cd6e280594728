use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::info;

use super::{tmp_path, Result, TransactionStore, SUMMARY_MARKER};
use crate::ledger::{LedgerTotals, Transaction};
use crate::utils::ensure_dir;

const HEADER: [&str; 4] = ["Category", "Description", "Amount", "Type"];

/// Resynchronizing record log.
///
/// Every accepted transaction triggers a full read-filter-rewrite cycle so
/// the file always ends with exactly one summary row reflecting the
/// cumulative totals. The rewrite stages into a `.tmp` sibling and renames
/// over the original, so a failed write leaves the previous file intact.
/// Cost is O(n) per transaction; single-writer access is assumed.
#[derive(Debug, Clone)]
pub struct CsvResyncStore {
    path: PathBuf,
}

impl CsvResyncStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads surviving transaction rows, dropping any stale summary rows.
    fn read_transactions(&self) -> Result<Vec<StringRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.get(0) == Some(SUMMARY_MARKER) {
                continue;
            }
            rows.push(record);
        }
        Ok(rows)
    }
}

impl TransactionStore for CsvResyncStore {
    fn record(&mut self, txn: &Transaction, totals: LedgerTotals, _remaining: f64) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let prior = self.read_transactions()?;

        let tmp = tmp_path(&self.path);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&tmp)?;
        writer.write_record(HEADER)?;
        for row in &prior {
            writer.write_record(row)?;
        }
        let amount = format!("{:.2}", txn.amount);
        writer.write_record([
            txn.category.as_str(),
            txn.description.as_deref().unwrap_or(""),
            amount.as_str(),
            txn.kind.as_str(),
        ])?;
        let income = format!("Income: {:.2}", totals.income);
        let expenses = format!("Expenses: {:.2}", totals.expenses);
        let balance = format!("Balance: {:.2}", totals.balance());
        writer.write_record([
            SUMMARY_MARKER,
            income.as_str(),
            expenses.as_str(),
            balance.as_str(),
        ])?;
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp, &self.path)?;
        info!(
            path = %self.path.display(),
            rows = prior.len() + 1,
            "rewrote transaction log with refreshed summary"
        );
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
