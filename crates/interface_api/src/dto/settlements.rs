//! Settlement DTOs
//!
//! Balances and settlements serialize straight from the domain types;
//! only the people roster needs a wrapper shape.

use serde::Serialize;

/// One entry of `GET /api/settlements/people`.
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub name: String,
}

impl From<String> for PersonResponse {
    fn from(name: String) -> Self {
        Self { name }
    }
}
