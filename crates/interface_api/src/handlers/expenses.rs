//! Expense handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ExpenseId;
use domain_split::{Expense, ExpensePatch};

use crate::dto::expenses::CreateExpenseRequest;
use crate::dto::ApiEnvelope;
use crate::error::ApiError;
use crate::validation::ExpenseValidator;
use crate::AppState;

/// Lists all expenses, newest first
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<Expense>>>, ApiError> {
    let expenses = state.store.list().await?;
    Ok(Json(ApiEnvelope::ok(
        expenses,
        "Expenses retrieved successfully",
    )))
}

/// Adds a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ApiEnvelope<Expense>>), ApiError> {
    let validation = ExpenseValidator::validate_create(&request);
    if !validation.is_valid {
        return Err(ApiError::Validation(validation.errors));
    }

    let expense = state.store.insert(request.into_expense()).await?;
    tracing::info!(id = %expense.id, amount = %expense.amount, "expense recorded");

    Ok((
        StatusCode::CREATED,
        Json(ApiEnvelope::ok(expense, "Expense added successfully")),
    ))
}

/// Partially updates an expense
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
    Json(patch): Json<ExpensePatch>,
) -> Result<Json<ApiEnvelope<Expense>>, ApiError> {
    let validation = ExpenseValidator::validate_update(&patch);
    if !validation.is_valid {
        return Err(ApiError::Validation(validation.errors));
    }

    let expense = state.store.update(id, patch).await?;
    Ok(Json(ApiEnvelope::ok(
        expense,
        "Expense updated successfully",
    )))
}

/// Deletes an expense
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<ExpenseId>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    state.store.remove(id).await?;
    Ok(Json(ApiEnvelope::message("Expense deleted successfully")))
}
