//! Expense validation rules
//!
//! Everything here runs before a record reaches the core; the core
//! itself is total and never rejects input.
//!
//! # Validation Rules
//!
//! - Amount must be positive
//! - Description is required, trimmed, and at most 200 characters
//! - Paid-by is required and non-empty after trimming
//! - Participant names must be non-empty; shares cannot be negative
//! - Recurring expenses must carry a recurrence frequency
//!
//! Two configurations share the rules: [`ExpenseValidator::validate_create`]
//! requires the mandatory fields, while [`ExpenseValidator::validate_update`]
//! checks only the fields a partial update provides.

use rust_decimal::Decimal;

use domain_split::{ExpensePatch, Participant};

use crate::dto::expenses::CreateExpenseRequest;

const MAX_DESCRIPTION_LEN: usize = 200;

/// Result of expense validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the input is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for incoming expense payloads
pub struct ExpenseValidator;

impl ExpenseValidator {
    /// Validates a create request; all mandatory fields must be present
    /// and well-formed.
    pub fn validate_create(request: &CreateExpenseRequest) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_amount(request.amount, &mut result);

        if request.description.trim().is_empty() {
            result.add_error("Description is required");
        } else if request.description.len() > MAX_DESCRIPTION_LEN {
            result.add_error("Description cannot exceed 200 characters");
        }

        if request.paid_by.trim().is_empty() {
            result.add_error("Paid by field is required");
        }

        Self::validate_participants(&request.participants, &mut result);

        if request.is_recurring && request.recurring_frequency.is_none() {
            result.add_error("Recurring frequency is required for recurring expenses");
        }

        result
    }

    /// Validates a partial update; only provided fields are checked.
    pub fn validate_update(patch: &ExpensePatch) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if let Some(amount) = patch.amount {
            Self::validate_amount(amount, &mut result);
        }

        if let Some(ref description) = patch.description {
            if description.trim().is_empty() {
                result.add_error("Description cannot be empty");
            } else if description.len() > MAX_DESCRIPTION_LEN {
                result.add_error("Description cannot exceed 200 characters");
            }
        }

        if let Some(ref paid_by) = patch.paid_by {
            if paid_by.trim().is_empty() {
                result.add_error("Paid by field cannot be empty");
            }
        }

        if let Some(ref participants) = patch.participants {
            Self::validate_participants(participants, &mut result);
        }

        if patch.is_recurring == Some(true) && patch.recurring_frequency.is_none() {
            result.add_error("Recurring frequency is required for recurring expenses");
        }

        result
    }

    fn validate_amount(amount: Decimal, result: &mut ValidationResult) {
        if amount <= Decimal::ZERO {
            result.add_error("Amount must be a positive number");
        }
    }

    fn validate_participants(participants: &[Participant], result: &mut ValidationResult) {
        for participant in participants {
            if participant.name.trim().is_empty() {
                result.add_error("Participant name is required");
            }
            if participant.share < Decimal::ZERO {
                result.add_error(format!(
                    "Participant share cannot be negative: {}",
                    participant.name
                ));
            }
        }
    }
}
