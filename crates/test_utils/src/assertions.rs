//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use domain_split::{PersonBalance, Settlement};

/// Asserts that two decimal values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={actual}, expected={expected}, diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts that a set of balances sums to zero within a tolerance.
///
/// Per-person cent rounding can leave a residue of at most one cent per
/// person, so callers typically pass `0.01 * balances.len()`.
///
/// # Panics
///
/// Panics if the balances do not sum to within `tolerance` of zero
pub fn assert_zero_sum(balances: &[PersonBalance], tolerance: Decimal) {
    let total: Decimal = balances.iter().map(|b| b.balance).sum();
    assert!(
        total.abs() <= tolerance,
        "Balances do not sum to zero: total={total}, tolerance={tolerance}"
    );
}

/// Asserts that every settlement is well formed: a positive amount
/// between two distinct people.
///
/// # Panics
///
/// Panics if any settlement has a non-positive amount or pays a person
/// back to themselves
pub fn assert_settlements_well_formed(settlements: &[Settlement]) {
    for settlement in settlements {
        assert!(
            settlement.amount > Decimal::ZERO,
            "Settlement has non-positive amount: {} -> {} ({})",
            settlement.from,
            settlement.to,
            settlement.amount
        );
        assert_ne!(
            settlement.from, settlement.to,
            "Settlement pays a person back to themselves: {}",
            settlement.from
        );
    }
}
