use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::Deserialize;

use super::AppState;
use crate::model::{CatalogItemId, OrderId};
use crate::service::{NewOrder, ServiceError};

#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    #[serde(default)]
    status: String,
}

/// An empty query value means no filter.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Ids that do not parse cannot name a stored record.
fn parse_id(raw: &str, not_found: &str) -> Result<u32, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::NotFound(not_found.to_string()))
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn list_menu_items_handler(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = non_empty(&filter.category);
    let items = state.service.list_catalog(category).await?;
    Ok(Json(items))
}

pub async fn get_menu_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = CatalogItemId(parse_id(&id, "Menu item not found")?);
    Ok(Json(state.service.get_catalog_item(id).await?))
}

pub async fn list_orders_handler(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let orders = state.service.list_orders(non_empty(&filter.status)).await?;
    Ok(Json(orders))
}

pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = OrderId(parse_id(&id, "Order not found")?);
    Ok(Json(state.service.get_order_with_items(id).await?))
}

pub async fn create_order_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let Json(request) = payload?;
    let order = state.service.create_order(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusChange>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = OrderId(parse_id(&id, "Order not found")?);
    let Json(change) = payload?;
    let order = state.service.update_order_status(id, &change.status).await?;
    Ok(Json(order))
}

pub async fn dashboard_stats_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(Json(state.service.daily_stats(Local::now()).await?))
}
