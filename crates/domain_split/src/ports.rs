//! Store port
//!
//! The domain does not own persistence. Whatever holds the expense
//! records implements [`ExpenseStore`] and hands the core a plain
//! snapshot; the balance and settlement computations never touch the
//! store directly.

use async_trait::async_trait;
use thiserror::Error;

use core_kernel::ExpenseId;

use crate::expense::{Expense, ExpensePatch};

/// Errors surfaced by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No expense with the given identifier
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// Adapter-specific failure
    #[error("Store error: {0}")]
    Internal(String),
}

/// Port over the expense record store.
///
/// Callers that need both balances and settlements from a consistent
/// snapshot should call [`ExpenseStore::list`] once and feed the same
/// vector to both computations.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// All expenses, newest date first.
    async fn list(&self) -> Result<Vec<Expense>, StoreError>;

    /// A single expense by id.
    async fn get(&self, id: ExpenseId) -> Result<Expense, StoreError>;

    /// Stores a new expense and returns it.
    async fn insert(&self, expense: Expense) -> Result<Expense, StoreError>;

    /// Applies a partial update and returns the updated expense.
    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Expense, StoreError>;

    /// Deletes an expense.
    async fn remove(&self, id: ExpenseId) -> Result<(), StoreError>;
}
