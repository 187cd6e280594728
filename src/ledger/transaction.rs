use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Categories offered by default when a form layer renders a dropdown.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Housing",
    "Transport",
    "Utilities",
    "Entertainment",
    "Other",
];

/// One validated income or expense event.
///
/// Immutable once persisted; ordering in the record file is append order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: f64, category: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Supported transaction types; the wire words are `Income` and `Expense`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Income" => Ok(TransactionKind::Income),
            "Expense" => Ok(TransactionKind::Expense),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// Snapshot of cumulative ledger totals stamped onto the summary record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerTotals {
    pub income: f64,
    pub expenses: f64,
}

impl LedgerTotals {
    /// Cumulative income minus cumulative expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expenses
    }
}
