//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `database` (default) - SQL post store via SeaORM (PostgreSQL or SQLite)
//!
//! With `--no-default-features` only `InMemoryPostRepository` is available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "database")]
pub use database::SqlPostRepository;
