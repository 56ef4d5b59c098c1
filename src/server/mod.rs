//! Server module: host state, shell composition and HTTP exposures
//!
//! `DashboardBuilder` assembles everything:
//! - the dashboard page (`/`, `/dashboard/default`)
//! - the JSON API (`/api/...`) and health checks
//! - the application shell (theme, scroll restoration, locale)

pub mod builder;
pub mod exposure;
pub mod host;
pub mod shell;

pub use builder::DashboardBuilder;
pub use host::{DashboardHost, TableSelection};
pub use shell::{AppShell, ScrollRestoration};
