//! Controllers shared by every record resource. The resource is chosen by the
//! `RecordService` held in router state.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use models::Record;
use serde_json::Value;
use tracing::info;

use crate::errors::ApiError;
use crate::state::Records;

pub async fn list(State(svc): State<Records>) -> Result<Json<Vec<Record>>, ApiError> {
    let records = svc.list().await?;
    info!(collection = svc.schema().collection, count = records.len(), "list records");
    Ok(Json(records))
}

pub async fn find(
    State(svc): State<Records>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let Path(id) = id?;
    Ok(Json(svc.find_by_id(&id).await?))
}

pub async fn create(
    State(svc): State<Records>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(payload) = payload?;
    let created = svc.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET|POST {path}` and `GET {path}/:id` bound to one resource.
pub fn routes(path: &str, svc: Records) -> Router {
    Router::new()
        .route(path, get(list).post(create))
        .route(&format!("{path}/:id"), get(find))
        .with_state(svc)
}
