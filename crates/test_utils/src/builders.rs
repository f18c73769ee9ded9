//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_split::{Category, Expense, Participant, RecurringFrequency};

/// Builder for constructing test expenses
pub struct ExpenseBuilder {
    amount: Decimal,
    description: String,
    paid_by: String,
    participants: Vec<Participant>,
    category: Category,
    date: Option<DateTime<Utc>>,
    recurring_frequency: Option<RecurringFrequency>,
    is_settlement: bool,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseBuilder {
    /// Creates a new builder with default values: Alice pays 60 for an
    /// equal split between Alice and Bob.
    pub fn new() -> Self {
        Self {
            amount: dec!(60),
            description: "Groceries".to_string(),
            paid_by: "Alice".to_string(),
            participants: vec![Participant::equal("Alice"), Participant::equal("Bob")],
            category: Category::Other,
            date: None,
            recurring_frequency: None,
            is_settlement: false,
        }
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the payer
    pub fn with_payer(mut self, paid_by: impl Into<String>) -> Self {
        self.paid_by = paid_by.into();
        self
    }

    /// Replaces the participant list
    pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
        self.participants = participants;
        self
    }

    /// Replaces the participants with an equal split between the named people
    pub fn split_equally_between(mut self, names: &[&str]) -> Self {
        self.participants = names.iter().map(|name| Participant::equal(*name)).collect();
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the expense date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Makes the expense recurring with the given frequency
    pub fn with_recurrence(mut self, frequency: RecurringFrequency) -> Self {
        self.recurring_frequency = Some(frequency);
        self
    }

    /// Marks the expense as a settlement payment
    pub fn as_settlement(mut self) -> Self {
        self.is_settlement = true;
        self
    }

    /// Builds the expense
    pub fn build(self) -> Expense {
        let mut expense = Expense::new(
            self.amount,
            self.description,
            self.paid_by,
            self.participants,
        )
        .with_category(self.category);

        if let Some(date) = self.date {
            expense = expense.with_date(date);
        }
        if let Some(frequency) = self.recurring_frequency {
            expense = expense.with_recurrence(frequency);
        }
        if self.is_settlement {
            expense = expense.as_settlement();
        }
        expense
    }
}
