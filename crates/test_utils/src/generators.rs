//! Property-Based Test Generators
//!
//! Proptest strategies for generating random expense data that
//! maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_split::{Expense, Participant};

use crate::builders::ExpenseBuilder;

const NAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

/// Strategy for generating a person name from a small fixed pool,
/// so that expenses in a generated list share people.
pub fn person_name_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(NAMES).prop_map(str::to_string)
}

/// Strategy for generating positive amounts with at most two decimal
/// places, between 0.01 and 10000.00.
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating a non-empty set of equal-share participants
pub fn participants_strategy() -> impl Strategy<Value = Vec<Participant>> {
    proptest::sample::subsequence(NAMES.to_vec(), 1..NAMES.len())
        .prop_map(|names| names.into_iter().map(Participant::equal).collect())
}

/// Strategy for generating a valid equal-split expense
pub fn expense_strategy() -> impl Strategy<Value = Expense> {
    (amount_strategy(), person_name_strategy(), participants_strategy()).prop_map(
        |(amount, paid_by, participants)| {
            ExpenseBuilder::new()
                .with_amount(amount)
                .with_payer(paid_by)
                .with_participants(participants)
                .build()
        },
    )
}

/// Strategy for generating a list of expenses over a shared pool of people
pub fn expense_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<Expense>> {
    proptest::collection::vec(expense_strategy(), 0..=max_len)
}
