//! In-memory expense store
//!
//! Adapter backing the [`ExpenseStore`] port with a process-local vector
//! behind an async RwLock. This is the only store the system ships;
//! durable persistence is deliberately out of scope, so "the external
//! record store" is this crate.

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::ExpenseId;
use domain_split::{Expense, ExpensePatch, ExpenseStore, StoreError};

/// Process-local expense store.
///
/// Reads return an owned snapshot, so callers can feed the same vector
/// to the balance calculator and settlement planner without holding any
/// lock across the computations.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    expenses: RwLock<Vec<Expense>>,
}

impl InMemoryExpenseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with expenses, for tests and demos.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
        }
    }
}

#[async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn list(&self) -> Result<Vec<Expense>, StoreError> {
        let guard = self.expenses.read().await;
        let mut snapshot = guard.clone();
        // Newest first, stable for equal dates.
        snapshot.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(snapshot)
    }

    async fn get(&self, id: ExpenseId) -> Result<Expense, StoreError> {
        let guard = self.expenses.read().await;
        guard
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, expense: Expense) -> Result<Expense, StoreError> {
        let mut guard = self.expenses.write().await;
        guard.push(expense.clone());
        Ok(expense)
    }

    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Expense, StoreError> {
        let mut guard = self.expenses.write().await;
        let expense = guard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        expense.apply(patch);
        Ok(expense.clone())
    }

    async fn remove(&self, id: ExpenseId) -> Result<(), StoreError> {
        let mut guard = self.expenses.write().await;
        let before = guard.len();
        guard.retain(|e| e.id != id);
        if guard.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
