//! Order queries
//!
//! Status filters compare against the canonical status names ignoring case.
//! Order ids are matched exactly.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use orders_common::UnifiedOrder;
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters for status filtering
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Canonical status name, any case
    pub status: Option<String>,
}

impl StatusQuery {
    /// Filter value, treating an empty parameter as absent
    fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// GET /api/orders[?status=Shipped]
///
/// All orders, or only those with the given status.
pub async fn list_orders(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<UnifiedOrder>>> {
    let Query(query) = query?;
    let orders: Vec<UnifiedOrder> = match query.status() {
        Some(status) => state.store.filter_by_status(status).into_iter().cloned().collect(),
        None => state.store.all().to_vec(),
    };
    Ok(Json(orders))
}

/// GET /api/orders/search?status=pending
///
/// Same filtering as the list endpoint, but the status parameter is required.
pub async fn search_orders(
    State(state): State<AppState>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<UnifiedOrder>>> {
    let Query(query) = query?;
    let status = query
        .status()
        .ok_or_else(|| ApiError::BadRequest("Missing status query parameter".to_string()))?;

    info!("Searching for status: {:?}", status);
    let orders: Vec<UnifiedOrder> = state
        .store
        .filter_by_status(status)
        .into_iter()
        .cloned()
        .collect();
    info!("Found {} matches", orders.len());

    Ok(Json(orders))
}

/// GET /api/orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<UnifiedOrder>> {
    let Path(id) = id?;
    state
        .store
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))
}
