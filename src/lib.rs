//! # Order Dashboard
//!
//! A themed admin dashboard serving a filterable order report over a fixed,
//! in-memory dataset.
//!
//! ## Features
//!
//! - **Filter Evaluator**: name substring, status and inclusive date range, applied conjunctively
//! - **Batch Search**: criteria are edited field by field and applied on an explicit search
//! - **Server-Rendered Page**: tera templates with a themed table, status dots and a pager
//! - **JSON API**: the same filtered, sorted, paginated rows under `/api/orders`
//! - **Application Shell**: theme, scroll restoration and locale layered around the router
//! - **Configuration-Based**: server, theme, locale and table options via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dashboard::prelude::*;
//!
//! let dataset = Dataset::default_rows();
//! let criteria = FilterCriteria::new().with_name("Mobile");
//! let rows = FilterEvaluator::default().apply(&dataset, &criteria);
//! assert_eq!(rows[0].id, 98756325);
//!
//! // Serve the page
//! DashboardBuilder::new()
//!     .with_config(DashboardConfig::from_yaml_file("dashboard.yaml")?)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod locale;
pub mod server;
pub mod theme;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        column::{ColumnDef, ColumnType, ORDER_COLUMNS},
        dataset::Dataset,
        error::{ConfigError, DashboardError, DashboardResult, RenderError, RequestError},
        filter::{FilterCriteria, FilterEvaluator, FilterField, FilterForm, NameMatch, parse_date},
        order::{OrderRecord, OrderStatus, StatusColor, StatusDisplay},
        query::{PaginatedResponse, PaginationMeta, SortColumn, SortDirection, SortSpec, TableQuery},
        table::DataTable,
    };

    // === Config ===
    pub use crate::config::{DashboardConfig, ServerConfig, TableConfig};

    // === Presentation ===
    pub use crate::locale::Locale;
    pub use crate::theme::{Theme, ThemeConfig, ThemeMode};
    pub use crate::view::PageRenderer;

    // === Server ===
    pub use crate::server::{AppShell, DashboardBuilder, DashboardHost, ScrollRestoration};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{NaiveDate, NaiveDateTime};
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{Router, routing::get};
}
