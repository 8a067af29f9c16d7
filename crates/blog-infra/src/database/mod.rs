//! Post stores and database connection management.

mod connections;
mod memory;

#[cfg(feature = "database")]
mod sql_base;
#[cfg(feature = "database")]
pub mod sql_repo;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use connections::{connect, ensure_schema};
#[cfg(feature = "database")]
pub use sql_base::SqlBaseRepository;
#[cfg(feature = "database")]
pub use sql_repo::SqlPostRepository;

#[cfg(feature = "database")]
#[cfg(test)]
mod tests;
