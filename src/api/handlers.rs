//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::api::AppState;
use crate::error::Error;
use crate::types::{MenuItem, MenuItemDraft, MenuItemId};

/// Map domain errors onto the wire contract: 404 with a fixed message for
/// missing items, 400 with every violated field for invalid payloads.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound(id) => {
                tracing::debug!(%id, "Menu item not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Menu item not found" })),
                )
                    .into_response()
            }
            Error::Validation(violations) => {
                tracing::debug!(count = violations.len(), "Rejected invalid menu item");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "errors": violations })),
                )
                    .into_response()
            }
        }
    }
}

/// Parse the path identifier. A non-numeric id never matches anything, so
/// it reports not-found rather than a malformed-request error.
fn parse_item_id(raw: &str) -> Result<MenuItemId, Error> {
    raw.parse::<MenuItemId>()
        .map_err(|_| Error::not_found(raw))
}

/// Health check with system status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        items: state.store.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub items: usize,
}

/// List the full menu in insertion order
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.store.list().await)
}

/// Fetch a single menu item by id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, Error> {
    let id = parse_item_id(&id)?;
    Ok(Json(state.store.get(id).await?))
}

/// Create a new menu item
pub async fn create_item(
    State(state): State<AppState>,
    Json(draft): Json<MenuItemDraft>,
) -> Result<(StatusCode, Json<MenuItem>), Error> {
    let item = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an existing menu item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<MenuItemDraft>,
) -> Result<Json<MenuItem>, Error> {
    let id = parse_item_id(&id)?;
    Ok(Json(state.store.update(id, draft).await?))
}

/// Delete a menu item, returning it with a confirmation message
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, Error> {
    let id = parse_item_id(&id)?;
    let item = state.store.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: "Menu item deleted successfully".to_string(),
        item,
    }))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub item: MenuItem,
}
