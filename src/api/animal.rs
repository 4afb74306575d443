//! Animal endpoints.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::animal::{Animal, CreateAnimalInput};
use crate::error::{AppError, Result};
use crate::metrics::AnimalMetrics;
use crate::server::AppState;

/// Success envelope: `{"message": "success", "data": ...}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            message: "success",
            data,
        }
    }
}

/// GET /animal - List all animals
#[tracing::instrument(name = "http.list_animals", skip(state))]
pub async fn list_animals(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse<Vec<Animal>>>> {
    let animals = state.store.get_all().await.map_err(|e| {
        AnimalMetrics::record_store_error("list");
        AppError::ListAnimals(e)
    })?;

    tracing::debug!(count = animals.len(), "Listed animals");
    Ok(Json(SuccessResponse::new(animals)))
}

/// POST /animal - Create an animal
///
/// The body is read as JSON whatever the `Content-Type` header says.
#[tracing::instrument(name = "http.create_animal", skip(state, body))]
pub async fn create_animal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SuccessResponse<Animal>>)> {
    let animal = CreateAnimalInput::from_json(&body)
        .map_err(AppError::from)
        .and_then(|input| input.into_animal().map_err(AppError::from))
        .inspect_err(|_| AnimalMetrics::record_validation_failure())?;

    let created = state.store.create(animal).await.map_err(|e| {
        AnimalMetrics::record_store_error("create");
        AppError::CreateAnimal(e)
    })?;

    AnimalMetrics::record_created();
    tracing::info!(id = created.id, name = %created.name, "Animal created");

    Ok((StatusCode::CREATED, Json(SuccessResponse::new(created))))
}
