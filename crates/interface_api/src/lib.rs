//! HTTP API Layer
//!
//! This crate provides the REST API for splitledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: expense CRUD plus settlement/balance/people queries
//! - **DTOs**: request/response shapes with the JSON envelope
//! - **Validation**: strict create / partial update rules, applied
//!   before anything reaches the core
//! - **Error Handling**: consistent error responses
//!
//! The core computations live in `domain_split`; every handler reads one
//! snapshot from the store and feeds it to the pure functions.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_split::ExpenseStore;

use crate::config::ApiConfig;
use crate::handlers::{expenses, health, settlements};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExpenseStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Expense record store
/// * `config` - API configuration
pub fn create_router(store: Arc<dyn ExpenseStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    let expense_routes = Router::new()
        .route("/", get(expenses::list_expenses))
        .route("/", post(expenses::create_expense))
        .route("/:id", put(expenses::update_expense))
        .route("/:id", delete(expenses::delete_expense));

    let settlement_routes = Router::new()
        .route("/", get(settlements::get_settlements))
        .route("/balances", get(settlements::get_balances))
        .route("/people", get(settlements::get_people));

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .nest("/expenses", expense_routes)
        .nest("/settlements", settlement_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
