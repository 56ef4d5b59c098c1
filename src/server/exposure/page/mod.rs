//! HTML page exposure
//!
//! The filter form submits with `GET` to the path it was served from; each
//! submission is one search action over the full dataset.

use crate::core::error::DashboardResult;
use crate::core::query::TableQuery;
use crate::locale::Locale;
use crate::server::host::DashboardHost;
use crate::server::shell::ScrollRestoration;
use crate::theme::Theme;
use crate::view::DashboardPage;
use axum::extract::{OriginalUri, Query, State};
use axum::response::Html;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;

/// Paths serving the dashboard page
pub const DASHBOARD_PATHS: [&str; 2] = ["/", "/dashboard/default"];

pub struct PageExposure;

impl PageExposure {
    pub fn build_router(host: Arc<DashboardHost>) -> Router {
        DASHBOARD_PATHS
            .iter()
            .fold(Router::new(), |router, path| {
                router.route(path, get(dashboard_page))
            })
            .with_state(host)
    }
}

pub async fn dashboard_page(
    State(host): State<Arc<DashboardHost>>,
    Extension(theme): Extension<Arc<Theme>>,
    Extension(locale): Extension<Arc<Locale>>,
    scroll: Option<Extension<ScrollRestoration>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<TableQuery>,
) -> DashboardResult<Html<String>> {
    let selection = host.select(&query);

    tracing::debug!(
        path = %uri.path(),
        total = selection.page.pagination.total,
        page = selection.page.pagination.page,
        "Rendering dashboard"
    );

    let view = DashboardPage {
        theme: &theme,
        locale: &locale,
        scroll_top: matches!(scroll, Some(Extension(ScrollRestoration::Top))),
        action: uri.path(),
        form: &selection.form,
        criteria: &selection.criteria,
        sort: selection.sort,
        page: &selection.page,
        page_size_options: host.page_size_options(),
        loading: selection.loading,
    }
    .to_view();

    let html = host.renderer.render_dashboard(&view)?;
    Ok(Html(html))
}
