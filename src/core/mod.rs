//! Form-facing service: validates raw input, updates the ledger, persists.

use tracing::warn;

use crate::config::{PersistenceStrategy, TrackerConfig};
use crate::errors::ValidationError;
use crate::ledger::{parse_amount, Ledger, Transaction, TransactionKind};
use crate::storage::{CsvAppendStore, CsvResyncStore, TransactionStore};

/// Message/style pair rendered by the form layer after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub style: FeedbackStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    Green,
    Red,
}

impl Feedback {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: FeedbackStyle::Green,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: FeedbackStyle::Red,
        }
    }

    pub fn ok(&self) -> bool {
        self.style == FeedbackStyle::Green
    }
}

/// Drives one tracking session: a ledger plus the store persisting it.
///
/// Validation failures abort before any mutation. Persistence failures are
/// reported after the ledger has already been updated; the in-memory totals
/// are not rolled back, so the displayed balance can run ahead of the
/// on-disk history.
pub struct BudgetTracker<S: TransactionStore> {
    ledger: Ledger,
    store: S,
}

impl BudgetTracker<Box<dyn TransactionStore>> {
    /// Builds a tracker whose store and validation policy follow `config`.
    pub fn from_config(config: &TrackerConfig) -> Self {
        let path = config.record_path();
        let store: Box<dyn TransactionStore> = match config.strategy {
            PersistenceStrategy::Resync => Box::new(CsvResyncStore::new(path)),
            PersistenceStrategy::AppendOnly => Box::new(CsvAppendStore::new(path)),
        };
        Self::new(Ledger::new(config.validation), store)
    }
}

impl<S: TransactionStore> BudgetTracker<S> {
    pub fn new(ledger: Ledger, store: S) -> Self {
        Self { ledger, store }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Remaining balance formatted for display with two decimal places.
    pub fn remaining_display(&self) -> String {
        format!("{:.2}", self.ledger.remaining())
    }

    /// Handles the budget form field.
    pub fn submit_budget(&mut self, raw: &str) -> Feedback {
        let value = match parse_amount(raw) {
            Ok(value) => value,
            Err(err) => return Feedback::failure(err.to_string()),
        };
        match self.ledger.set_budget(value) {
            Ok(()) => Feedback::success("Budget set successfully."),
            Err(err) => Feedback::failure(err.to_string()),
        }
    }

    /// Handles the transaction form: validate, accumulate, persist.
    pub fn submit_transaction(
        &mut self,
        raw_amount: &str,
        kind: TransactionKind,
        category: &str,
        description: Option<&str>,
    ) -> Feedback {
        let category = category.trim();
        if category.is_empty() {
            return Feedback::failure(ValidationError::EmptyField("category").to_string());
        }
        let amount = match parse_amount(raw_amount) {
            Ok(value) => value,
            Err(err) => return Feedback::failure(err.to_string()),
        };
        if let Err(err) = self.ledger.record(kind, amount) {
            return Feedback::failure(err.to_string());
        }

        let mut txn = Transaction::new(kind, amount, category);
        if let Some(text) = description.map(str::trim).filter(|text| !text.is_empty()) {
            txn = txn.with_description(text);
        }

        match self
            .store
            .record(&txn, self.ledger.totals(), self.ledger.remaining())
        {
            Ok(()) => Feedback::success(format!("{} of ${:.2} added.", kind, amount)),
            Err(err) => {
                warn!(error = %err, "transaction accepted but could not be persisted");
                Feedback::failure("Could not write to the transaction log.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ValidationPolicy;
    use std::fs;
    use tempfile::tempdir;

    fn tracker_at(path: std::path::PathBuf) -> BudgetTracker<CsvResyncStore> {
        BudgetTracker::new(
            Ledger::new(ValidationPolicy::Strict),
            CsvResyncStore::new(path),
        )
    }

    #[test]
    fn budget_then_expense_updates_remaining() {
        let temp = tempdir().unwrap();
        let mut tracker = tracker_at(temp.path().join("transactions.csv"));

        assert!(tracker.submit_budget("500.00").ok());
        let feedback =
            tracker.submit_transaction("50.00", TransactionKind::Expense, "Food", None);
        assert!(feedback.ok());
        assert_eq!(feedback.message, "Expense of $50.00 added.");
        assert_eq!(tracker.remaining_display(), "450.00");
    }

    #[test]
    fn validation_failure_produces_red_feedback_and_no_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("transactions.csv");
        let mut tracker = tracker_at(path.clone());

        let negative = tracker.submit_transaction("-5", TransactionKind::Expense, "Food", None);
        assert_eq!(negative.style, FeedbackStyle::Red);

        let precise = tracker.submit_transaction("12.345", TransactionKind::Income, "Food", None);
        assert_eq!(precise.style, FeedbackStyle::Red);

        let blank = tracker.submit_transaction("10.00", TransactionKind::Income, "  ", None);
        assert_eq!(blank.style, FeedbackStyle::Red);

        assert_eq!(tracker.ledger().total_income(), 0.0);
        assert_eq!(tracker.ledger().total_expenses(), 0.0);
        assert!(!path.exists(), "no rows may be written for rejected input");
    }

    #[test]
    fn persistence_failure_keeps_in_memory_totals() {
        let temp = tempdir().unwrap();
        // The record path is a directory, so every write attempt fails.
        let path = temp.path().join("transactions.csv");
        fs::create_dir_all(&path).unwrap();
        let mut tracker = tracker_at(path);

        let feedback =
            tracker.submit_transaction("25.50", TransactionKind::Income, "Other", None);
        assert_eq!(feedback.style, FeedbackStyle::Red);
        assert_eq!(feedback.message, "Could not write to the transaction log.");
        assert_eq!(tracker.ledger().total_income(), 25.5);
        assert_eq!(tracker.remaining_display(), "25.50");
    }

    #[test]
    fn from_config_selects_the_configured_strategy() {
        let temp = tempdir().unwrap();
        let config = TrackerConfig {
            strategy: PersistenceStrategy::AppendOnly,
            data_dir: Some(temp.path().to_path_buf()),
            ..TrackerConfig::default()
        };
        let mut tracker = BudgetTracker::from_config(&config);

        assert!(tracker.submit_budget("100").ok());
        assert!(tracker
            .submit_transaction("20", TransactionKind::Expense, "Food", None)
            .ok());

        let contents = fs::read_to_string(temp.path().join("transactions.csv")).unwrap();
        assert!(contents.starts_with("Type,Amount,Category,Remaining"));
    }
}
