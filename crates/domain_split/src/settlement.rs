//! Settlement planning
//!
//! Turns per-person balances into a list of pairwise payments that
//! settles all debts.

use core_kernel::{is_below_transfer_threshold, round_to_cents, MIN_TRANSFER};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::PersonBalance;

/// A suggested payment from one person to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

/// Greedy matcher of debtors against creditors.
///
/// The plan is deterministic given the input order: debtors and creditors
/// keep their relative order from the balance sequence (first-seen person
/// order) and are matched front to front, not sorted by magnitude. This
/// is intentionally not the provably-minimal transaction count; the
/// unsorted greedy pass is a compatibility contract of the output.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Plans payments until one side runs out.
    ///
    /// Each step transfers `min(|debt|, credit)` between the current
    /// debtor/creditor pair, emitting a settlement only when the amount
    /// clears [`MIN_TRANSFER`]; a cursor advances once its remaining
    /// magnitude drops below the threshold, and both may advance in the
    /// same step when a pair cancels exactly. Balances are assumed to sum
    /// to zero (they do by construction), so leftovers are dropped
    /// silently.
    pub fn plan(balances: &[PersonBalance]) -> Vec<Settlement> {
        let mut debtors: Vec<(&str, Decimal)> = balances
            .iter()
            .filter(|b| b.balance < Decimal::ZERO)
            .map(|b| (b.name.as_str(), b.balance))
            .collect();
        let mut creditors: Vec<(&str, Decimal)> = balances
            .iter()
            .filter(|b| b.balance > Decimal::ZERO)
            .map(|b| (b.name.as_str(), b.balance))
            .collect();

        let mut settlements = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < debtors.len() && j < creditors.len() {
            let debt = debtors[i].1.abs();
            let credit = creditors[j].1;
            let amount = debt.min(credit);

            if amount > MIN_TRANSFER {
                settlements.push(Settlement {
                    from: debtors[i].0.to_string(),
                    to: creditors[j].0.to_string(),
                    amount: round_to_cents(amount),
                });
            }

            debtors[i].1 += amount;
            creditors[j].1 -= amount;

            if is_below_transfer_threshold(debtors[i].1) {
                i += 1;
            }
            if is_below_transfer_threshold(creditors[j].1) {
                j += 1;
            }
        }

        settlements
    }
}
