//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod menu_repo;

pub use menu_repo::MenuRepo;
