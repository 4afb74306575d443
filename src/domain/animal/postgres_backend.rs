//! PostgreSQL-based animal store.
//!
//! Table structure:
//! - `animals` - `id SERIAL PRIMARY KEY`, `name TEXT NOT NULL`

use async_trait::async_trait;
use sqlx::PgPool;

use super::backend::{AnimalStore, CreateError, StoreError};
use super::models::Animal;

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS animals (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

/// PostgreSQL-based animal store.
pub struct PostgresAnimalStore {
    /// PostgreSQL connection pool
    pool: PgPool,
}

impl PostgresAnimalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalStore for PostgresAnimalStore {
    fn backend_type(&self) -> &'static str {
        "postgres"
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        tracing::info!("Ensured animals table exists");
        Ok(())
    }

    async fn create(&self, animal: Animal) -> Result<Animal, CreateError> {
        let result: Result<(i32,), sqlx::Error> =
            sqlx::query_as("INSERT INTO animals (name) VALUES ($1) RETURNING id")
                .bind(&animal.name)
                .fetch_one(&self.pool)
                .await;

        match result {
            Ok((id,)) => {
                tracing::debug!(id = id, name = %animal.name, "Animal inserted into PostgreSQL");
                Ok(Animal { id, ..animal })
            }
            Err(e) => {
                tracing::warn!(error = %e, name = %animal.name, "Failed to insert animal");
                Err(CreateError::new(animal, e))
            }
        }
    }

    async fn get_all(&self) -> Result<Vec<Animal>, StoreError> {
        let animals: Vec<Animal> = sqlx::query_as("SELECT id, name FROM animals")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to select animals");
                StoreError::Postgres(e)
            })?;

        tracing::debug!(count = animals.len(), "Animals loaded from PostgreSQL");
        Ok(animals)
    }
}
