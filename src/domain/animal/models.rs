//! Animal entity and the create request payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A persisted animal.
///
/// `id` is assigned by the store; an unsaved animal carries `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Animal {
    pub id: i32,
    pub name: String,
}

impl Animal {
    /// Create an animal that has not been persisted yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

/// A required-field check failed on client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field validation for '{field}' failed on the '{rule}' tag")]
pub struct ValidationError {
    pub field: &'static str,
    pub rule: &'static str,
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            rule: "required",
        }
    }
}

/// The request body could not be read as a create payload.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,
}

/// Body of `POST /animal`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAnimalInput {
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateAnimalInput {
    /// Parse a raw request body. Only a JSON object is accepted; arrays and
    /// scalars are rejected even when they would fill the fields positionally.
    pub fn from_json(body: &[u8]) -> Result<Self, BodyError> {
        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            _ => Err(BodyError::NotAnObject),
        }
    }

    /// Validate the payload and build the unsaved animal.
    ///
    /// A missing, null or empty `name` is rejected.
    pub fn into_animal(self) -> Result<Animal, ValidationError> {
        match self.name {
            Some(name) if !name.is_empty() => Ok(Animal::new(name)),
            _ => Err(ValidationError::required("name")),
        }
    }
}
