//! Expense records and per-expense share math
//!
//! An [`Expense`] is an immutable input record: one person fronted an
//! amount, and a list of participants owes it back according to each
//! participant's share semantics. Wire field names are preserved from the
//! original JSON API (`paid_by`, `shareType`, `isRecurring`, ...).

use chrono::{DateTime, Utc};
use core_kernel::{round_to_cents, ExpenseId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How a participant's `share` value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareType {
    /// `share` is a percentage of the expense amount.
    Percentage,
    /// `share` is an absolute amount, independent of the expense amount.
    Exact,
    /// Split evenly across all participants of the expense.
    ///
    /// Unrecognised wire values also land here, preserving the permissive
    /// default of the original API.
    #[default]
    #[serde(other)]
    Equal,
}

/// One participant in an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub share: Decimal,
    #[serde(rename = "shareType", default)]
    pub share_type: ShareType,
}

impl Participant {
    /// Creates a participant with an equal share.
    pub fn equal(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            share: dec!(1),
            share_type: ShareType::Equal,
        }
    }

    /// Creates a participant owing a percentage of the amount.
    pub fn percentage(name: impl Into<String>, share: Decimal) -> Self {
        Self {
            name: name.into(),
            share,
            share_type: ShareType::Percentage,
        }
    }

    /// Creates a participant owing an exact amount.
    pub fn exact(name: impl Into<String>, share: Decimal) -> Self {
        Self {
            name: name.into(),
            share,
            share_type: ShareType::Exact,
        }
    }

    /// Computes what this participant owes for an expense of `amount`
    /// split among `participant_count` participants.
    ///
    /// Share math is applied literally; out-of-range percentages or exact
    /// shares are the ingestion layer's problem, not this function's.
    pub fn owed_share(&self, amount: Decimal, participant_count: usize) -> Decimal {
        match self.share_type {
            ShareType::Percentage => amount * self.share / dec!(100),
            ShareType::Exact => self.share,
            ShareType::Equal => {
                if participant_count > 0 {
                    amount / Decimal::from(participant_count as u64)
                } else {
                    amount
                }
            }
        }
    }
}

/// Expense category, used for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Utilities,
    Entertainment,
    Shopping,
    #[default]
    Other,
}

/// Recurrence schedule of a recurring expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Weekly,
    Monthly,
    Yearly,
}

/// A recorded shared expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: Decimal,
    pub description: String,
    pub paid_by: String,
    pub participants: Vec<Participant>,
    pub category: Category,
    pub date: DateTime<Utc>,
    #[serde(rename = "isRecurring")]
    pub is_recurring: bool,
    #[serde(rename = "recurringFrequency", skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
    /// Marks a repayment recorded against a previously suggested
    /// settlement. Settlement records flow through the same balance math
    /// as any other expense.
    #[serde(rename = "isSettlement")]
    pub is_settlement: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Creates an expense with default category, current date, and no
    /// recurrence.
    pub fn new(
        amount: Decimal,
        description: impl Into<String>,
        paid_by: impl Into<String>,
        participants: Vec<Participant>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new_v7(),
            amount,
            description: description.into(),
            paid_by: paid_by.into(),
            participants,
            category: Category::default(),
            date: now,
            is_recurring: false,
            recurring_frequency: None,
            is_settlement: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the expense date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Marks the expense as recurring with the given frequency
    pub fn with_recurrence(mut self, frequency: RecurringFrequency) -> Self {
        self.is_recurring = true;
        self.recurring_frequency = Some(frequency);
        self
    }

    /// Marks the expense as a settlement repayment
    pub fn as_settlement(mut self) -> Self {
        self.is_settlement = true;
        self
    }

    /// Computes each participant's owed portion of this expense, rounded
    /// to cents. Empty when the expense has no participants.
    pub fn share_amounts(&self) -> Vec<ShareAmount> {
        self.participants
            .iter()
            .map(|p| ShareAmount {
                name: p.name.clone(),
                amount: round_to_cents(p.owed_share(self.amount, self.participants.len())),
            })
            .collect()
    }

    /// Applies a partial update and bumps `updated_at`.
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(paid_by) = patch.paid_by {
            self.paid_by = paid_by;
        }
        if let Some(participants) = patch.participants {
            self.participants = participants;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(is_recurring) = patch.is_recurring {
            self.is_recurring = is_recurring;
        }
        if let Some(frequency) = patch.recurring_frequency {
            self.recurring_frequency = Some(frequency);
        }
        if let Some(is_settlement) = patch.is_settlement {
            self.is_settlement = is_settlement;
        }
        self.updated_at = Utc::now();
    }
}

/// One participant's computed portion of a single expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareAmount {
    pub name: String,
    pub amount: Decimal,
}

/// Partial update of an expense; only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpensePatch {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub paid_by: Option<String>,
    pub participants: Option<Vec<Participant>>,
    pub category: Option<Category>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "isRecurring")]
    pub is_recurring: Option<bool>,
    #[serde(rename = "recurringFrequency")]
    pub recurring_frequency: Option<RecurringFrequency>,
    #[serde(rename = "isSettlement")]
    pub is_settlement: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_share_type_falls_back_to_equal() {
        let participant: Participant =
            serde_json::from_str(r#"{"name": "Alice", "share": 1, "shareType": "weighted"}"#)
                .unwrap();
        assert_eq!(participant.share_type, ShareType::Equal);
    }

    #[test]
    fn test_share_type_defaults_to_equal_when_missing() {
        let participant: Participant =
            serde_json::from_str(r#"{"name": "Alice", "share": 1}"#).unwrap();
        assert_eq!(participant.share_type, ShareType::Equal);
    }

    #[test]
    fn test_equal_share_divides_by_participant_count() {
        let p = Participant::equal("Alice");
        assert_eq!(p.owed_share(dec!(90), 3), dec!(30));
    }

    #[test]
    fn test_percentage_share() {
        let p = Participant::percentage("Alice", dec!(60));
        assert_eq!(p.owed_share(dec!(100), 2), dec!(60));
    }

    #[test]
    fn test_exact_share_ignores_amount() {
        let p = Participant::exact("Alice", dec!(70));
        assert_eq!(p.owed_share(dec!(100), 2), dec!(70));
        assert_eq!(p.owed_share(dec!(5), 2), dec!(70));
    }

    #[test]
    fn test_share_amounts_are_rounded_to_cents() {
        let expense = Expense::new(
            dec!(100),
            "Dinner",
            "Alice",
            vec![
                Participant::equal("Alice"),
                Participant::equal("Bob"),
                Participant::equal("Carol"),
            ],
        );

        let shares = expense.share_amounts();
        assert_eq!(shares.len(), 3);
        for share in &shares {
            assert_eq!(share.amount, dec!(33.33));
        }
    }

    #[test]
    fn test_apply_patch_updates_only_provided_fields() {
        let mut expense = Expense::new(dec!(50), "Taxi", "Alice", vec![Participant::equal("Bob")]);
        let before = expense.updated_at;

        expense.apply(ExpensePatch {
            amount: Some(dec!(75)),
            ..Default::default()
        });

        assert_eq!(expense.amount, dec!(75));
        assert_eq!(expense.description, "Taxi");
        assert_eq!(expense.paid_by, "Alice");
        assert!(expense.updated_at >= before);
    }

    #[test]
    fn test_wire_field_names() {
        let expense = Expense::new(dec!(10), "Coffee", "Alice", vec![]).as_settlement();
        let json = serde_json::to_value(&expense).unwrap();

        assert_eq!(json["paid_by"], "Alice");
        assert_eq!(json["isSettlement"], true);
        assert_eq!(json["isRecurring"], false);
        assert!(json.get("recurringFrequency").is_none());
        assert_eq!(json["category"], "Other");
    }
}
