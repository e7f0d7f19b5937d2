//! Fixture REST server for remote-mode tests.
//!
//! The router exposes the console's REST resource shape over a shared
//! [`CatalogStore`], backed by the same service code mock mode uses. Remote
//! tests drive an [`ApiClient`] against it, which is what guarantees the two
//! backends return structurally identical enriched records.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde_json::Value;

use catalogo::{Backend, CatalogKind, CatalogService, CatalogStore, DeleteAck, ServiceError};

/// Builds the fixture router over `store`.
pub fn console_router(store: Arc<CatalogStore>) -> Router {
    Router::new()
        .route("/:catalog", get(get_collection).post(create_record))
        .route(
            "/:catalog/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(store)
}

fn service(
    store: &Arc<CatalogStore>,
    catalog: &str,
) -> Result<CatalogService, (StatusCode, String)> {
    CatalogKind::from_path(catalog)
        .map(|kind| CatalogService::new(kind, Backend::Mock(Arc::clone(store))))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown catalog '{}'", catalog)))
}

fn map_error(e: ServiceError) -> (StatusCode, String) {
    match e {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

async fn get_collection(
    State(store): State<Arc<CatalogStore>>,
    Path(catalog): Path<String>,
) -> Result<Json<Vec<Value>>, (StatusCode, String)> {
    let service = service(&store, &catalog)?;
    service.get_all().await.map(Json).map_err(map_error)
}

async fn get_record(
    State(store): State<Arc<CatalogStore>>,
    Path((catalog, id)): Path<(String, i64)>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let service = service(&store, &catalog)?;
    service.get_by_id(id).await.map(Json).map_err(map_error)
}

async fn create_record(
    State(store): State<Arc<CatalogStore>>,
    Path(catalog): Path<String>,
    Json(draft): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let service = service(&store, &catalog)?;
    service.create(draft).await.map(Json).map_err(map_error)
}

async fn update_record(
    State(store): State<Arc<CatalogStore>>,
    Path((catalog, id)): Path<(String, i64)>,
    Json(draft): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let service = service(&store, &catalog)?;
    service.update(id, draft).await.map(Json).map_err(map_error)
}

async fn delete_record(
    State(store): State<Arc<CatalogStore>>,
    Path((catalog, id)): Path<(String, i64)>,
) -> Result<Json<DeleteAck>, (StatusCode, String)> {
    let service = service(&store, &catalog)?;
    service.delete(id).await.map(Json).map_err(map_error)
}
