//! Shared domain types and errors for the eb_pro menu service.

pub mod error;
pub mod types;
