//! Row models and the transfer objects built from them.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! the `Serialize` shape returned over HTTP.

pub mod menu;
