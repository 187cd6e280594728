use super::amount::ValidationPolicy;
use super::transaction::{LedgerTotals, TransactionKind};
use crate::errors::ValidationError;

/// In-memory accumulator of budget and cumulative income/expense totals.
///
/// Lives for the session only and holds no transaction history; the fields
/// mutate exclusively through validated operations, never through the
/// persistence layer.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    budget: f64,
    total_income: f64,
    total_expenses: f64,
    policy: ValidationPolicy,
}

impl Ledger {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn total_income(&self) -> f64 {
        self.total_income
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    /// Overwrites the session budget after validating sign and precision.
    pub fn set_budget(&mut self, value: f64) -> Result<(), ValidationError> {
        if value < 0.0 {
            return Err(ValidationError::NegativeBudget);
        }
        if self.policy.rejects_precision(value) {
            return Err(ValidationError::TooPrecise);
        }
        self.budget = value;
        Ok(())
    }

    /// Adds a validated amount to the matching accumulator.
    pub fn record(&mut self, kind: TransactionKind, amount: f64) -> Result<(), ValidationError> {
        if amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.policy.rejects_precision(amount) {
            return Err(ValidationError::TooPrecise);
        }
        match kind {
            TransactionKind::Income => self.total_income += amount,
            TransactionKind::Expense => self.total_expenses += amount,
        }
        Ok(())
    }

    /// Remaining balance: budget plus cumulative income minus cumulative expenses.
    pub fn remaining(&self) -> f64 {
        self.budget + self.total_income - self.total_expenses
    }

    /// Snapshot of the cumulative totals for stamping a summary record.
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals {
            income: self.total_income,
            expenses: self.total_expenses,
        }
    }
}
