//! Infrastructure layer modules
//!
//! This module contains shared infrastructure components:
//! - `config`: Application configuration and settings
//! - `error`: HTTP error type and response envelope
//! - `metrics`: Prometheus metrics helpers
//! - `postgres`: PostgreSQL connection pool

pub mod config;
pub mod error;
pub mod metrics;
pub mod postgres;
