//! People roster
//!
//! The set of everyone mentioned by any expense, as payer or participant.

use std::collections::HashSet;

use crate::expense::Expense;

/// Collects every distinct person name across all expenses, in
/// first-seen order.
pub fn list_people(expenses: &[Expense]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut people = Vec::new();

    for expense in expenses {
        if seen.insert(expense.paid_by.clone()) {
            people.push(expense.paid_by.clone());
        }
        for participant in &expense.participants {
            if seen.insert(participant.name.clone()) {
                people.push(participant.name.clone());
            }
        }
    }

    people
}
