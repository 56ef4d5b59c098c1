//! DashboardBuilder for fluent API to build the dashboard server

use super::exposure::{PageExposure, RestExposure};
use super::host::DashboardHost;
use super::shell::AppShell;
use crate::config::DashboardConfig;
use crate::core::dataset::Dataset;
use crate::core::error::{DashboardError, RequestError};
use anyhow::Result;
use axum::Router;
use axum::http::Uri;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the dashboard HTTP server
///
/// # Example
///
/// ```ignore
/// let app = DashboardBuilder::new()
///     .with_config(DashboardConfig::from_yaml_file("dashboard.yaml")?)
///     .with_dataset(Dataset::default_rows())
///     .build()?;
/// ```
pub struct DashboardBuilder {
    config: Option<DashboardConfig>,
    dataset: Option<Dataset>,
    custom_routes: Vec<Router>,
}

impl DashboardBuilder {
    /// Create a new DashboardBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            dataset: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the configuration (defaults to [`DashboardConfig::default_config`])
    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the dataset (defaults to [`Dataset::default_rows`])
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Add custom routes inside the application shell
    ///
    /// Custom routes see the same theme and locale extensions as the
    /// dashboard page.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared host
    pub fn build_host(&mut self) -> Result<DashboardHost> {
        let config = self.config.take().unwrap_or_default();
        let dataset = self.dataset.take().unwrap_or_default();
        Ok(DashboardHost::new(config, dataset)?)
    }

    /// Build the final router wrapped in the application shell
    pub fn build(mut self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Ok(Self::assemble(host, std::mem::take(&mut self.custom_routes)))
    }

    fn assemble(host: Arc<DashboardHost>, custom_routes: Vec<Router>) -> Router {
        let shell = AppShell::new(host.theme.clone(), host.locale.clone());

        let mut app = PageExposure::build_router(host.clone()).merge(RestExposure::build_router(host));
        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        shell.wrap(app.fallback(not_found))
    }

    /// Serve the dashboard with graceful shutdown
    ///
    /// Binds to `server.host:server.port` from the configuration and handles
    /// SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(mut self) -> Result<()> {
        let host = Arc::new(self.build_host()?);
        let addr = host.config.server.addr();
        let app = Self::assemble(host, std::mem::take(&mut self.custom_routes));

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Dashboard listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn not_found(uri: Uri) -> DashboardError {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
