//! In-memory animal store.
//!
//! Animals are held in process memory and lost on restart. Ids are assigned
//! sequentially from 1, like a fresh `SERIAL` column.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::backend::{AnimalStore, CreateError, StoreError};
use super::models::Animal;

#[derive(Debug)]
struct Rows {
    animals: Vec<Animal>,
    /// `None` once `i32::MAX` has been handed out
    next_id: Option<i32>,
}

/// In-memory animal store.
pub struct MemoryAnimalStore {
    rows: RwLock<Rows>,
}

impl MemoryAnimalStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                animals: Vec::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl Default for MemoryAnimalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalStore for MemoryAnimalStore {
    fn backend_type(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, animal: Animal) -> Result<Animal, CreateError> {
        let mut rows = self.rows.write().await;

        let Some(id) = rows.next_id else {
            return Err(CreateError::new(
                animal,
                StoreError::backend("animal id sequence exhausted"),
            ));
        };

        let created = Animal { id, ..animal };
        rows.animals.push(created.clone());
        rows.next_id = id.checked_add(1);

        tracing::debug!(id = id, name = %created.name, "Animal stored in memory");
        Ok(created)
    }

    async fn get_all(&self) -> Result<Vec<Animal>, StoreError> {
        Ok(self.rows.read().await.animals.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryAnimalStore::new();
        let animals = assert_ok!(store.get_all().await);
        assert!(animals.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryAnimalStore::new();

        let dog = assert_ok!(store.create(Animal::new("dog")).await);
        let cat = assert_ok!(store.create(Animal::new("cat")).await);

        assert_eq!(dog, Animal { id: 1, name: "dog".to_string() });
        assert_eq!(cat, Animal { id: 2, name: "cat".to_string() });
    }

    #[tokio::test]
    async fn test_create_ignores_input_id() {
        let store = MemoryAnimalStore::new();

        let created = assert_ok!(
            store
                .create(Animal { id: 99, name: "owl".to_string() })
                .await
        );
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_get_all_in_insertion_order() {
        let store = MemoryAnimalStore::new();
        for name in ["dog", "cat", "snake"] {
            assert_ok!(store.create(Animal::new(name)).await);
        }

        let names: Vec<String> = assert_ok!(store.get_all().await)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["dog", "cat", "snake"]);
    }

    #[tokio::test]
    async fn test_last_id_is_issued_before_exhaustion() {
        let store = MemoryAnimalStore::new();
        store.rows.write().await.next_id = Some(i32::MAX);

        let last = assert_ok!(store.create(Animal::new("cat")).await);
        assert_eq!(last.id, i32::MAX);

        let err = store.create(Animal::new("dog")).await.unwrap_err();
        assert_eq!(err.animal, Animal::new("dog"));
        assert_eq!(err.to_string(), "animal id sequence exhausted");
        assert_eq!(assert_ok!(store.get_all().await), vec![last]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = std::sync::Arc::new(MemoryAnimalStore::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(Animal::new(format!("animal-{}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }
}
