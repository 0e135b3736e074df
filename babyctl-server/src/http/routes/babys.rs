//! Baby name endpoints
//!
//! Each handler is a direct adapter over one `NameStore` call.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{NameRecord, NewName};

/// GET /babys/get-all
async fn list_names(State(state): State<AppState>) -> Result<Json<Vec<NameRecord>>, ApiError> {
    let names = state.store.list_all().await?;
    Ok(Json(names))
}

/// GET /babys/get/{id}
async fn get_name(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<NameRecord>, ApiError> {
    let record = state.store.get_by_id(id).await?;
    Ok(Json(record))
}

/// POST /babys/add
async fn create_name(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewName>,
) -> Result<(StatusCode, Json<NameRecord>), ApiError> {
    let record = state.store.insert(body).await?;
    tracing::info!(id = record.id, name = %record.name, "baby name created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /babys/update/{id}
async fn update_name(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(body): JsonBody<NewName>,
) -> Result<Json<NameRecord>, ApiError> {
    let record = state.store.update(id, body).await?;
    Ok(Json(record))
}

/// DELETE /babys/delete/{id}
async fn delete_name(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<String>, ApiError> {
    state.store.delete_by_id(id).await?;
    tracing::info!(id, "baby name deleted");
    Ok(Json(format!("Baby ID {} is deleted", id)))
}

/// Baby name routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/babys/get-all", get(list_names))
        .route("/babys/get/{id}", get(get_name))
        .route("/babys/add", post(create_name))
        .route("/babys/update/{id}", put(update_name))
        .route("/babys/delete/{id}", delete(delete_name))
}
