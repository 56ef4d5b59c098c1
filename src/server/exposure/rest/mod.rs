//! REST API exposure for the dashboard
//!
//! Serves the same table the page renders, as JSON:
//! - `GET /api/orders` filtered, sorted, paginated rows
//! - `GET /api/orders/{id}` a single record
//! - `GET /api/statuses` the status display table
//! - `GET /api/columns` the column definitions
//! - `GET /health`, `GET /healthz`

use crate::core::column::{ColumnDef, ORDER_COLUMNS};
use crate::core::error::{DashboardResult, RequestError};
use crate::core::filter::FilterCriteria;
use crate::core::order::{OrderRecord, OrderStatus};
use crate::core::query::{PaginatedResponse, TableQuery};
use crate::server::host::DashboardHost;
use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Body of `GET /api/orders`
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    #[serde(flatten)]
    pub page: PaginatedResponse<OrderRecord>,

    /// Criteria the rows were filtered with
    pub criteria: FilterCriteria,

    /// Applied sort, `field:direction`
    pub sort: Option<String>,
}

/// Status entry with its resolved theme color
#[derive(Debug, Serialize)]
pub struct StatusEntry {
    pub code: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub hex: String,
}

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    pub fn build_router(host: Arc<DashboardHost>) -> Router {
        let api_routes = Router::new()
            .route("/api/orders", get(list_orders))
            .route("/api/orders/{id}", get(get_order))
            .route("/api/statuses", get(list_statuses))
            .route("/api/columns", get(list_columns))
            .with_state(host);

        Self::health_routes().merge(api_routes)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "order-dashboard"
        }))
    }
}

pub async fn list_orders(
    State(host): State<Arc<DashboardHost>>,
    Query(query): Query<TableQuery>,
) -> Json<OrdersResponse> {
    let selection = host.select(&query);

    Json(OrdersResponse {
        page: selection.page,
        criteria: selection.criteria,
        sort: selection.sort.map(|spec| spec.to_string()),
    })
}

pub async fn get_order(
    State(host): State<Arc<DashboardHost>>,
    Path(id): Path<u64>,
) -> DashboardResult<Json<OrderRecord>> {
    host.dataset
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| RequestError::OrderNotFound { id }.into())
}

pub async fn list_statuses(State(host): State<Arc<DashboardHost>>) -> Json<Vec<StatusEntry>> {
    let entries = OrderStatus::display_table()
        .into_iter()
        .map(|display| StatusEntry {
            code: display.code,
            label: display.label,
            color: display.color.as_str(),
            hex: host.theme.palette.color(display.color).to_string(),
        })
        .collect();

    Json(entries)
}

pub async fn list_columns() -> Json<&'static [ColumnDef]> {
    Json(&ORDER_COLUMNS)
}
