//! Order dashboard server
//!
//! Serves the order report page and its JSON API.
//!
//! ```text
//! cargo run --example dashboard                              # built-in defaults
//! cargo run --example dashboard -- demos/dashboard/dashboard.yaml
//! RUST_LOG=dashboard=debug,tower_http=debug cargo run --example dashboard
//! ```

use dashboard::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::from_yaml_file(&path)?,
        None => DashboardConfig::default_config(),
    };

    println!("🚀 Starting order dashboard on http://{}", config.server.addr());
    println!("\n  📋 Page:");
    println!("    GET  /                    - Report with filters");
    println!("    GET  /dashboard/default   - Same report");
    println!("\n  🔷 API:");
    println!("    GET  /api/orders          - Filtered rows (name, status, start_date, end_date, page, page_size, sort)");
    println!("    GET  /api/orders/{{id}}     - Single order");
    println!("    GET  /api/statuses        - Status labels and colors");
    println!("    GET  /api/columns         - Column definitions");
    println!("    GET  /health              - Health check");

    DashboardBuilder::new()
        .with_config(config)
        .with_dataset(Dataset::default_rows())
        .serve()
        .await
}
