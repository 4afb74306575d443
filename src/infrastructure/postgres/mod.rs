//! PostgreSQL persistence module.
//!
//! Provides the connection pool shared by the PostgreSQL animal store.

pub mod pool;

pub use pool::{PostgresPool, PostgresPoolError};
