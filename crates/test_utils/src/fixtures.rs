//! Pre-built Test Fixtures
//!
//! Ready-to-use expense data for common scenarios. Fixtures are
//! deterministic apart from generated identifiers.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_split::{Expense, Participant};

use crate::builders::ExpenseBuilder;

/// Fixture for expense test data
pub struct ExpenseFixtures;

impl ExpenseFixtures {
    /// A 90 dinner paid by Alice, split equally between Alice, Bob, and Carol.
    ///
    /// Balances: Alice +60, Bob -30, Carol -30.
    pub fn dinner_for_three() -> Expense {
        ExpenseBuilder::new()
            .with_amount(dec!(90))
            .with_description("Dinner")
            .with_payer("Alice")
            .split_equally_between(&["Alice", "Bob", "Carol"])
            .build()
    }

    /// A solo expense with the payer as only participant. Nets to zero.
    pub fn solo_coffee() -> Expense {
        ExpenseBuilder::new()
            .with_amount(dec!(4.50))
            .with_description("Coffee")
            .with_payer("Alice")
            .split_equally_between(&["Alice"])
            .build()
    }

    /// A settlement payment: `from` pays `to` the exact amount.
    pub fn settlement_payment(from: &str, to: &str, amount: Decimal) -> Expense {
        ExpenseBuilder::new()
            .with_amount(amount)
            .with_description(format!("Settlement: {from} pays {to}"))
            .with_payer(from)
            .with_participants(vec![Participant::exact(to, amount)])
            .as_settlement()
            .build()
    }

    /// Three expenses with distinct dates, oldest first in the returned
    /// vector. Useful for ordering tests.
    pub fn dated_sequence() -> Vec<Expense> {
        ["First", "Second", "Third"]
            .iter()
            .enumerate()
            .map(|(i, description)| {
                ExpenseBuilder::new()
                    .with_description(*description)
                    .with_date(Utc.with_ymd_and_hms(2026, 1, 1 + i as u32, 12, 0, 0).unwrap())
                    .build()
            })
            .collect()
    }
}
