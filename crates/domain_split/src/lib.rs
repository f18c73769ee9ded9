//! Split Domain - Shared Expense Tracking
//!
//! This crate implements the core of splitledger: given a sequence of
//! expense records, it computes each person's net balance and a list of
//! pairwise payments that settles all balances.
//!
//! # Data Flow
//!
//! ```text
//! expenses (store) ──► BalanceCalculator ──► per-person balances
//!                                                   │
//!                                                   ▼
//!                                          SettlementPlanner ──► settlements
//! ```
//!
//! Both computations are pure and stateless: they are recomputed from the
//! full expense snapshot on every call and never mutate their input.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_split::{BalanceCalculator, SettlementPlanner};
//!
//! let balances = BalanceCalculator::compute(&expenses);
//! let settlements = SettlementPlanner::plan(&balances);
//! ```

pub mod balance;
pub mod expense;
pub mod ports;
pub mod roster;
pub mod settlement;

pub use balance::{BalanceCalculator, BalanceStatus, PersonBalance};
pub use expense::{
    Category, Expense, ExpensePatch, Participant, RecurringFrequency, ShareAmount, ShareType,
};
pub use ports::{ExpenseStore, StoreError};
pub use roster::list_people;
pub use settlement::{Settlement, SettlementPlanner};
