//! Request handlers.
//!
//! Handlers delegate to the repositories in `ebpro_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod menu;
