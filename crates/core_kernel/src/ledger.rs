//! Insertion-ordered running-balance ledger
//!
//! Tracks one signed balance per person name. Entries keep first-seen
//! order so that everything derived from the ledger (balances, settlement
//! plans) is deterministic for a given expense sequence.

use rust_decimal::Decimal;
use std::collections::HashMap;

/// Running signed balances keyed by person name.
///
/// A positive balance means the person is owed money, a negative balance
/// means they owe. A person referenced for the first time starts at zero.
#[derive(Debug, Default)]
pub struct BalanceLedger {
    index: HashMap<String, usize>,
    entries: Vec<(String, Decimal)>,
}

impl BalanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to a person's balance, creating a zero entry on first sight.
    pub fn credit(&mut self, name: &str, amount: Decimal) {
        *self.slot(name) += amount;
    }

    /// Subtracts from a person's balance, creating a zero entry on first sight.
    pub fn debit(&mut self, name: &str, amount: Decimal) {
        *self.slot(name) -= amount;
    }

    /// Returns the current balance for a name, if the person has appeared.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Number of distinct people in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no person has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the ledger, yielding `(name, balance)` in first-seen order.
    pub fn into_entries(self) -> Vec<(String, Decimal)> {
        self.entries
    }

    fn slot(&mut self, name: &str) -> &mut Decimal {
        match self.index.get(name) {
            Some(&i) => &mut self.entries[i].1,
            None => {
                let i = self.entries.len();
                self.index.insert(name.to_string(), i);
                self.entries.push((name.to_string(), Decimal::ZERO));
                &mut self.entries[i].1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_first_reference_starts_at_zero() {
        let mut ledger = BalanceLedger::new();
        ledger.debit("Alice", dec!(30));

        assert_eq!(ledger.get("Alice"), Some(dec!(-30)));
        assert_eq!(ledger.get("Bob"), None);
    }

    #[test]
    fn test_credit_and_debit_accumulate() {
        let mut ledger = BalanceLedger::new();
        ledger.credit("Alice", dec!(90));
        ledger.debit("Alice", dec!(30));
        ledger.debit("Alice", dec!(30));

        assert_eq!(ledger.get("Alice"), Some(dec!(30)));
    }

    #[test]
    fn test_entries_keep_first_seen_order() {
        let mut ledger = BalanceLedger::new();
        ledger.credit("Carol", dec!(10));
        ledger.debit("Alice", dec!(5));
        ledger.debit("Carol", dec!(2));
        ledger.debit("Bob", dec!(5));

        let names: Vec<String> = ledger
            .into_entries()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut ledger = BalanceLedger::new();
        ledger.credit("alice", dec!(1));
        ledger.credit("Alice", dec!(2));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("alice"), Some(dec!(1)));
        assert_eq!(ledger.get("Alice"), Some(dec!(2)));
    }
}
