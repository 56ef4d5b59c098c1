//! Typed error handling for the dashboard
//!
//! Filtering never fails; errors only arise while loading configuration,
//! rendering templates, or resolving a request.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: configuration parsing and validation
//! - [`RenderError`]: page template rendering
//! - [`RequestError`]: unknown routes and records
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_order(id: u64) -> Result<Json<OrderRecord>, DashboardError> {
//!     dataset
//!         .get(id)
//!         .cloned()
//!         .map(Json)
//!         .ok_or(DashboardError::Request(RequestError::OrderNotFound { id }))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the dashboard
#[derive(Debug)]
pub enum DashboardError {
    /// Configuration errors
    Config(ConfigError),

    /// Template rendering errors
    Render(RenderError),

    /// HTTP/Request errors
    Request(RequestError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Config(e) => write!(f, "{}", e),
            DashboardError::Render(e) => write!(f, "{}", e),
            DashboardError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Config(e) => Some(e),
            DashboardError::Render(e) => Some(e),
            DashboardError::Request(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DashboardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Config(e) => e.error_code(),
            DashboardError::Render(_) => "RENDER_ERROR",
            DashboardError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DashboardError::Request(RequestError::OrderNotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            DashboardError::Request(RequestError::RouteNotFound { path }) => {
                Some(serde_json::json!({ "path": path }))
            }
            DashboardError::Config(ConfigError::Invalid { fields }) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "Request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    /// Failed to parse the YAML document
    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    /// One or more fields failed validation
    #[error("Invalid config: {}", .fields.join("; "))]
    Invalid { fields: Vec<String> },

    /// Locale code not supported
    #[error("Unsupported locale '{code}'")]
    UnsupportedLocale { code: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
            ConfigError::UnsupportedLocale { .. } => "UNSUPPORTED_LOCALE",
        }
    }
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::Config(err)
    }
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors raised while rendering a page
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Templates failed to compile
    #[error("Failed to load templates: {message}")]
    Templates { message: String },

    /// A template failed to render
    #[error("Failed to render '{template}': {message}")]
    Template { template: String, message: String },
}

impl From<RenderError> for DashboardError {
    fn from(err: RenderError) -> Self {
        DashboardError::Render(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors resolving an HTTP request
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// No order with this identifier
    #[error("Order with id '{id}' not found")]
    OrderNotFound { id: u64 },

    /// No route matches the path
    #[error("No route for '{path}'")]
    RouteNotFound { path: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::OrderNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
        }
    }
}

impl From<RequestError> for DashboardError {
    fn from(err: RequestError) -> Self {
        DashboardError::Request(err)
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
