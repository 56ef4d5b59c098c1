//! Core module containing the order model, the dataset and the filter evaluator

pub mod column;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod order;
pub mod query;
pub mod table;

pub use column::{ColumnDef, ColumnType, ORDER_COLUMNS};
pub use dataset::Dataset;
pub use error::{ConfigError, DashboardError, DashboardResult, RenderError, RequestError};
pub use filter::{FilterCriteria, FilterEvaluator, FilterField, FilterForm, NameMatch};
pub use order::{OrderRecord, OrderStatus, StatusColor, StatusDisplay};
pub use query::{PaginatedResponse, PaginationMeta, SortSpec, TableQuery};
pub use table::DataTable;
