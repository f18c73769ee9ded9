//! Request handlers

pub mod expenses;
pub mod health;
pub mod settlements;
