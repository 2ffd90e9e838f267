use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    db::parse_id,
    error::AppResult,
    extract::{AppJson, AppPath},
    models::{NewProduct, Product},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    let start = Instant::now();
    let products = state.store.list_products().await?;

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok((StatusCode::OK, Json(products)))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let start = Instant::now();
    let product = state.store.insert_product(&payload).await?;

    info!(
        id = product.id,
        name = %product.name,
        elapsed_ms = start.elapsed().as_millis(),
        "Created product"
    );

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Responds with the submitted fields without re-reading the row. The id in
/// the response is the path id when it is an integer, else the body's.
pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
    AppJson(payload): AppJson<NewProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let start = Instant::now();
    let rows_affected = state.store.update_product(&id, &payload).await?;

    info!(
        id = %id,
        rows_affected,
        elapsed_ms = start.elapsed().as_millis(),
        "Updated product"
    );

    let product = payload.with_id(parse_id(&id).unwrap_or(payload.id));
    Ok((StatusCode::OK, Json(product)))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let rows_affected = state.store.delete_product(&id).await?;

    info!(
        id = %id,
        rows_affected,
        elapsed_ms = start.elapsed().as_millis(),
        "Deleted product"
    );

    Ok((StatusCode::OK, Json(json!({ "message": "Product deleted" }))))
}
