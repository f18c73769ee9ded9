//! Core Kernel - Foundational types and utilities for splitledger
//!
//! This crate provides the fundamental building blocks used across the
//! domain and interface crates:
//! - Currency rounding with precise decimal arithmetic
//! - An insertion-ordered running-balance ledger
//! - Common identifiers

pub mod identifiers;
pub mod ledger;
pub mod money;

pub use identifiers::ExpenseId;
pub use ledger::BalanceLedger;
pub use money::{is_below_transfer_threshold, round_to_cents, MIN_TRANSFER};
