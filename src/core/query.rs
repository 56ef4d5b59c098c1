//! Table query parameters, sorting and pagination

use crate::core::filter::{FilterCriteria, FilterForm};
use crate::core::order::OrderRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Query parameters accepted by the dashboard page and the orders API
///
/// Every value is kept as a raw string and parsed leniently, so a malformed
/// parameter never rejects the request; it just falls back to its default.
///
/// # Example
/// ```text
/// GET /api/orders?name=Mo&status=1
/// GET /api/orders?start_date=20.09.2024&end_date=30.09.2024
/// GET /?page=2&page_size=5&sort=quantity:desc
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TableQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,

    /// Page number (starts at 1)
    pub page: Option<String>,

    /// Rows per page, must be one of the configured options
    pub page_size: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    pub sort: Option<String>,
}

impl TableQuery {
    /// Raw filter form values carried by this query
    pub fn filter_form(&self) -> FilterForm {
        FilterForm {
            name: self.name.clone(),
            status: self.status.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }

    /// Parsed filter criteria
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from(&self.filter_form())
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        parse_number(self.page.as_deref()).unwrap_or(1).max(1)
    }

    /// Get the page size, falling back to `default` unless it is one of `options`
    pub fn page_size(&self, options: &[usize], default: usize) -> usize {
        parse_number(self.page_size.as_deref())
            .filter(|size| options.contains(size))
            .unwrap_or(default)
    }

    /// Parsed sort specification, if the field is sortable
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.as_deref().and_then(SortSpec::parse)
    }
}

/// Columns the table can be sorted by
///
/// The status column is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    Name,
    Quantity,
    CreatedDate,
}

impl SortColumn {
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "id" => Some(SortColumn::Id),
            "name" => Some(SortColumn::Name),
            "quantity" => Some(SortColumn::Quantity),
            "created_date" | "createdDate" => Some(SortColumn::CreatedDate),
            _ => None,
        }
    }

    /// Record field name, as used in column definitions
    pub fn field(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Quantity => "quantity",
            SortColumn::CreatedDate => "created_date",
        }
    }

    fn compare(&self, a: &OrderRecord, b: &OrderRecord) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Quantity => a.quantity.cmp(&b.quantity),
            SortColumn::CreatedDate => a.created_date.cmp(&b.created_date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A parsed `field[:direction]` sort parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, direction) = match raw.trim().split_once(':') {
            Some((field, dir)) => (field, dir),
            None => (raw.trim(), "asc"),
        };

        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };

        SortColumn::from_field(field).map(|column| SortSpec { column, direction })
    }

    /// Stable sort of a derived view; ties keep their filtered order
    pub fn sort(&self, rows: &mut [&OrderRecord]) {
        rows.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", self.column.field(), direction)
    }
}

/// Paginated response structure
///
/// This structure wraps paginated data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Slice one page out of `rows`
    pub fn from_rows(rows: Vec<T>, page: usize, page_size: usize) -> Self {
        let pagination = PaginationMeta::new(page, page_size, rows.len());
        let start = pagination.offset();
        let data = rows
            .into_iter()
            .skip(start)
            .take(pagination.page_size)
            .collect();

        Self { data, pagination }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub page_size: usize,

    /// Total number of rows (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        // Ensure both are at least 1 to avoid division by zero and underflow
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(page_size) };
        let start = (page - 1).saturating_mul(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page > 1,
        }
    }

    /// Zero-based index of the first row on this page
    ///
    /// Saturates for page numbers far past the end, which then slice nothing.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// One-based index of the first row on this page, 0 when empty
    pub fn first_row(&self) -> usize {
        let start = self.offset();
        if start < self.total { start + 1 } else { 0 }
    }

    /// One-based index of the last row on this page, 0 when empty
    pub fn last_row(&self) -> usize {
        if self.first_row() == 0 {
            0
        } else {
            self.page.saturating_mul(self.page_size).min(self.total)
        }
    }
}

fn parse_number(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;

    #[test]
    fn test_query_defaults() {
        let query = TableQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(&[5, 10], 10), 10);
        assert!(query.sort_spec().is_none());
        assert!(query.criteria().is_empty());
    }

    #[test]
    fn test_page_size_must_be_an_option() {
        let query = TableQuery {
            page_size: Some("7".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page_size(&[5, 10], 10), 10);

        let query = TableQuery {
            page_size: Some("5".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page_size(&[5, 10], 10), 5);
    }

    #[test]
    fn test_malformed_page_falls_back() {
        let query = TableQuery {
            page: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);

        let query = TableQuery {
            page: Some("0".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_sort_spec_parse() {
        assert_eq!(
            SortSpec::parse("quantity:desc"),
            Some(SortSpec {
                column: SortColumn::Quantity,
                direction: SortDirection::Desc
            })
        );
        assert_eq!(
            SortSpec::parse("createdDate"),
            Some(SortSpec {
                column: SortColumn::CreatedDate,
                direction: SortDirection::Asc
            })
        );
        assert_eq!(SortSpec::parse("status"), None);
        assert_eq!(
            SortSpec::parse("createdDate:DESC").unwrap().to_string(),
            "created_date:desc"
        );
        assert_eq!(SortSpec::parse("name:sideways"), None);
    }

    #[test]
    fn test_sort_is_stable() {
        let dataset = Dataset::default_rows();
        let mut rows: Vec<&OrderRecord> = dataset.rows().iter().collect();
        SortSpec::parse("quantity").unwrap().sort(&mut rows);

        let quantities: Vec<u32> = rows.iter().map(|r| r.quantity).collect();
        assert_eq!(quantities, vec![40, 50, 89, 99, 100, 100, 125, 185, 300, 355]);
        // Computer Accessories precedes Chair in the source list
        assert_eq!(rows[4].id, 13286564);
        assert_eq!(rows[5].id, 98753291);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 5, 10);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
        assert_eq!((meta.first_row(), meta.last_row()), (1, 5));

        let meta = PaginationMeta::new(2, 5, 10);
        assert!(meta.has_prev);
        assert!(!meta.has_next);
        assert_eq!((meta.first_row(), meta.last_row()), (6, 10));
    }

    #[test]
    fn test_pagination_empty_total() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert_eq!((meta.first_row(), meta.last_row()), (0, 0));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = PaginatedResponse::from_rows(vec![1, 2, 3], 5, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 3);
    }

    #[test]
    fn test_huge_page_number_saturates() {
        let page = PaginatedResponse::from_rows((1..=10).collect::<Vec<_>>(), usize::MAX / 2 + 2, 5);
        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
        assert_eq!(page.pagination.offset(), usize::MAX);
        assert_eq!((page.pagination.first_row(), page.pagination.last_row()), (0, 0));
    }

    #[test]
    fn test_from_rows_slices_page() {
        let page = PaginatedResponse::from_rows((1..=12).collect::<Vec<_>>(), 2, 5);
        assert_eq!(page.data, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.pagination.total_pages, 3);
    }
}
