//! Backend trait for animal persistence.
//!
//! Handlers only see `AnimalStore`, so the PostgreSQL implementation can be
//! swapped for the in-memory one or a test double.

use async_trait::async_trait;
use thiserror::Error;

use super::models::Animal;

/// Errors returned by the backing store.
///
/// Not subtyped for callers; the text is forwarded as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// PostgreSQL operation failed
    #[error(transparent)]
    Postgres(#[from] sqlx::Error),

    /// Any other backend failure
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// A failed `create`, handing back the animal that was not persisted.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct CreateError {
    /// The input value exactly as it was passed to `create`
    pub animal: Animal,
    pub source: StoreError,
}

impl CreateError {
    pub fn new(animal: Animal, source: impl Into<StoreError>) -> Self {
        Self {
            animal,
            source: source.into(),
        }
    }
}

/// Persistence gateway for animals.
///
/// Each call performs a single round trip to the store. Implementations
/// never retry and never cache.
#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Backend type identifier
    fn backend_type(&self) -> &'static str;

    /// Create the backing table if it does not exist.
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Insert one animal and return it with the store-assigned id.
    async fn create(&self, animal: Animal) -> Result<Animal, CreateError>;

    /// Return every stored animal in store order, or an error and nothing.
    async fn get_all(&self) -> Result<Vec<Animal>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_is_raw() {
        let err = StoreError::backend("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn test_create_error_keeps_input() {
        let err = CreateError::new(Animal::new("dog"), StoreError::backend("boom"));
        assert_eq!(err.animal, Animal::new("dog"));
        assert_eq!(err.to_string(), "boom");
        assert!(std::error::Error::source(&err).is_some());
    }
}
