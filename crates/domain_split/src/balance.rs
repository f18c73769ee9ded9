//! Per-person balance computation
//!
//! Reduces an ordered sequence of expense records into one signed net
//! balance per distinct person. A positive balance means the person is
//! owed money, a negative balance means they owe.

use core_kernel::{round_to_cents, BalanceLedger};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// Direction of a person's net position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Others owe this person money.
    Owed,
    /// This person owes money.
    Owes,
    /// Net position is exactly zero.
    Settled,
}

impl BalanceStatus {
    /// Derives the status from a rounded balance. Rounding has already
    /// collapsed sub-cent noise, so an exact zero check suffices.
    fn from_balance(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            BalanceStatus::Owed
        } else if balance < Decimal::ZERO {
            BalanceStatus::Owes
        } else {
            BalanceStatus::Settled
        }
    }
}

/// Net position of one person across all recorded expenses.
///
/// Always recomputed from the full expense snapshot; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonBalance {
    pub name: String,
    pub balance: Decimal,
    pub status: BalanceStatus,
}

/// Pure fold of expense records into per-person balances.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes net balances, one entry per distinct person, in
    /// first-seen order.
    ///
    /// Per expense, in input order: the payer is credited the full
    /// amount, then every participant is debited their share. A record
    /// with no participants settles against the payer alone - the
    /// ingestion layer normally substitutes a sole payer participant
    /// before a record gets here, but the fallback keeps the fold total.
    ///
    /// Final balances are rounded to cents, half away from zero, so
    /// accumulated division noise never reaches the output.
    pub fn compute(expenses: &[Expense]) -> Vec<PersonBalance> {
        let mut ledger = BalanceLedger::new();

        for expense in expenses {
            ledger.credit(&expense.paid_by, expense.amount);

            for participant in &expense.participants {
                let share = participant.owed_share(expense.amount, expense.participants.len());
                ledger.debit(&participant.name, share);
            }

            if expense.participants.is_empty() {
                ledger.debit(&expense.paid_by, expense.amount);
            }
        }

        ledger
            .into_entries()
            .into_iter()
            .map(|(name, raw)| {
                let balance = round_to_cents(raw);
                PersonBalance {
                    name,
                    status: BalanceStatus::from_balance(balance),
                    balance,
                }
            })
            .collect()
    }
}
