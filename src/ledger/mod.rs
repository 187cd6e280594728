//! Ledger domain models and input validation helpers.

pub mod amount;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use amount::{parse_amount, ValidationPolicy};
pub use ledger::Ledger;
pub use transaction::{LedgerTotals, Transaction, TransactionKind, DEFAULT_CATEGORIES};
