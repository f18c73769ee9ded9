//! Expense DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use domain_split::{Category, Expense, Participant, RecurringFrequency};

/// Body of `POST /api/expenses`.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: Decimal,
    pub description: String,
    pub paid_by: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub category: Category,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "isRecurring", default)]
    pub is_recurring: bool,
    #[serde(rename = "recurringFrequency")]
    pub recurring_frequency: Option<RecurringFrequency>,
    #[serde(rename = "isSettlement", default)]
    pub is_settlement: bool,
}

impl CreateExpenseRequest {
    /// Builds the stored expense. A request without participants gets a
    /// single equal-share participant for the payer, so the record
    /// settles against the payer alone.
    pub fn into_expense(self) -> Expense {
        let participants = if self.participants.is_empty() {
            vec![Participant::equal(self.paid_by.as_str())]
        } else {
            self.participants
        };

        let mut expense = Expense::new(self.amount, self.description, self.paid_by, participants)
            .with_category(self.category);
        if let Some(date) = self.date {
            expense = expense.with_date(date);
        }
        if self.is_recurring {
            if let Some(frequency) = self.recurring_frequency {
                expense = expense.with_recurrence(frequency);
            }
        }
        if self.is_settlement {
            expense = expense.as_settlement();
        }
        expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_split::ShareType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_participants_become_sole_payer() {
        let request: CreateExpenseRequest = serde_json::from_str(
            r#"{"amount": 50, "description": "Solo", "paid_by": "Alice"}"#,
        )
        .unwrap();

        let expense = request.into_expense();
        assert_eq!(expense.participants.len(), 1);
        assert_eq!(expense.participants[0].name, "Alice");
        assert_eq!(expense.participants[0].share_type, ShareType::Equal);
    }

    #[test]
    fn test_defaults() {
        let request: CreateExpenseRequest = serde_json::from_str(
            r#"{"amount": 10, "description": "Coffee", "paid_by": "Bob"}"#,
        )
        .unwrap();

        assert_eq!(request.category, Category::Other);
        assert!(!request.is_recurring);
        assert!(!request.is_settlement);
        assert!(request.date.is_none());
    }

    #[test]
    fn test_settlement_flag_carries_through() {
        let request: CreateExpenseRequest = serde_json::from_str(
            r#"{"amount": 30, "description": "Settlement", "paid_by": "Bob",
                "participants": [{"name": "Alice", "share": 1}],
                "isSettlement": true}"#,
        )
        .unwrap();

        let expense = request.into_expense();
        assert!(expense.is_settlement);
        assert_eq!(expense.amount, dec!(30));
    }
}
