//! Currency rounding utilities
//!
//! All monetary math in the workspace uses rust_decimal for precise
//! calculations without floating-point errors. Balances are reported in
//! whole cents; these helpers define the single rounding convention and
//! the minimum amount worth transferring.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Smallest amount worth moving between two people.
///
/// Residues at or below one cent are leftovers of cent rounding, not real
/// debt, and are suppressed when planning transfers.
pub const MIN_TRANSFER: Decimal = dec!(0.01);

/// Rounds a currency amount to whole cents, half away from zero.
///
/// `2.345` rounds to `2.35` and `-2.345` to `-2.35`, matching how the
/// amounts are presented to users.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true when the remaining magnitude is too small to transfer.
pub fn is_below_transfer_threshold(amount: Decimal) -> bool {
    amount.abs() < MIN_TRANSFER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(dec!(2.345)), dec!(2.35));
        assert_eq!(round_to_cents(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round_to_cents(dec!(2.344)), dec!(2.34));
    }

    #[test]
    fn test_already_rounded_amount_is_unchanged() {
        assert_eq!(round_to_cents(dec!(10.00)), dec!(10.00));
        assert_eq!(round_to_cents(dec!(-0.01)), dec!(-0.01));
    }

    #[test]
    fn test_transfer_threshold() {
        assert!(is_below_transfer_threshold(dec!(0.005)));
        assert!(is_below_transfer_threshold(dec!(-0.005)));
        assert!(is_below_transfer_threshold(dec!(0)));
        assert!(!is_below_transfer_threshold(dec!(0.02)));
        assert!(!is_below_transfer_threshold(dec!(-0.02)));
    }
}
