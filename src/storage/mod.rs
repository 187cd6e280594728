pub mod append_log;
pub mod resync_log;

use std::path::{Path, PathBuf};

use crate::errors::PersistenceError;
use crate::ledger::{LedgerTotals, Transaction};

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// First field of the synthesized trailing summary row.
pub const SUMMARY_MARKER: &str = "Totals";

/// Abstraction over persistence strategies for the transaction record file.
///
/// Implementations create the containing directory on first use and tolerate
/// the file not existing; callers never manage file handles themselves.
pub trait TransactionStore {
    /// Persists one accepted transaction along with the ledger snapshot
    /// taken at the moment it was accepted.
    fn record(
        &mut self,
        txn: &Transaction,
        totals: LedgerTotals,
        remaining: f64,
    ) -> Result<()>;

    /// Location of the record file.
    fn path(&self) -> &Path;
}

impl TransactionStore for Box<dyn TransactionStore> {
    fn record(&mut self, txn: &Transaction, totals: LedgerTotals, remaining: f64) -> Result<()> {
        (**self).record(txn, totals, remaining)
    }

    fn path(&self) -> &Path {
        (**self).path()
    }
}

pub use append_log::CsvAppendStore;
pub use resync_log::CsvResyncStore;

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}
