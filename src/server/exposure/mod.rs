//! API Exposure modules for different surfaces
//!
//! Each exposure consumes the shared `DashboardHost` and produces a Router.

pub mod page;
pub mod rest;

// Re-export for convenience
pub use page::PageExposure;
pub use rest::RestExposure;
