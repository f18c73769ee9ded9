//! Settlement handlers
//!
//! Each handler reads one snapshot from the store and runs the pure core
//! computations over it; nothing here caches or mutates.

use axum::{extract::State, Json};

use domain_split::{
    list_people, BalanceCalculator, PersonBalance, Settlement, SettlementPlanner,
};

use crate::dto::settlements::PersonResponse;
use crate::dto::ApiEnvelope;
use crate::error::ApiError;
use crate::AppState;

/// Computes the settlement plan for the current expenses
pub async fn get_settlements(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<Settlement>>>, ApiError> {
    let expenses = state.store.list().await?;
    let balances = BalanceCalculator::compute(&expenses);
    let settlements = SettlementPlanner::plan(&balances);

    Ok(Json(ApiEnvelope::ok(
        settlements,
        "Settlements calculated successfully",
    )))
}

/// Computes per-person balances for the current expenses
pub async fn get_balances(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<PersonBalance>>>, ApiError> {
    let expenses = state.store.list().await?;
    let balances = BalanceCalculator::compute(&expenses);

    Ok(Json(ApiEnvelope::ok(
        balances,
        "Balances calculated successfully",
    )))
}

/// Lists every person mentioned by any expense
pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<PersonResponse>>>, ApiError> {
    let expenses = state.store.list().await?;
    let people = list_people(&expenses)
        .into_iter()
        .map(PersonResponse::from)
        .collect();

    Ok(Json(ApiEnvelope::ok(
        people,
        "People list retrieved successfully",
    )))
}
