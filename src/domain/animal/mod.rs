//! Animal domain: the entity, the persistence gateway trait and its
//! PostgreSQL and in-memory implementations.

mod backend;
mod factory;
mod memory_backend;
mod models;
mod postgres_backend;

pub use backend::{AnimalStore, CreateError, StoreError};
pub use factory::create_animal_store;
pub use memory_backend::MemoryAnimalStore;
pub use models::{Animal, BodyError, CreateAnimalInput, ValidationError};
pub use postgres_backend::PostgresAnimalStore;
