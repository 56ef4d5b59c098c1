//! Dashboard host holding all shared, read-only state
//!
//! The host is built once at startup and shared behind an `Arc` by every
//! exposure (HTML page, JSON API). Nothing in it is mutated after
//! construction, so handlers never lock.

use crate::config::DashboardConfig;
use crate::core::dataset::Dataset;
use crate::core::error::DashboardResult;
use crate::core::filter::{FilterCriteria, FilterEvaluator, FilterForm};
use crate::core::order::OrderRecord;
use crate::core::query::{PaginatedResponse, SortSpec, TableQuery};
use crate::core::table::DataTable;
use crate::locale::Locale;
use crate::theme::Theme;
use crate::view::PageRenderer;
use std::sync::Arc;

/// Result of running a table query
#[derive(Debug)]
pub struct TableSelection {
    /// Raw form values, echoed back into the filter controls
    pub form: FilterForm,
    /// Criteria actually applied
    pub criteria: FilterCriteria,
    pub sort: Option<SortSpec>,
    pub page: PaginatedResponse<OrderRecord>,
    /// Loading flag after the search completed; always false here since the
    /// search finishes before the response is built
    pub loading: bool,
}

/// Host context containing all dashboard state
pub struct DashboardHost {
    /// Validated configuration
    pub config: Arc<DashboardConfig>,

    /// The fixed order dataset
    pub dataset: Dataset,

    /// Filter evaluator configured with the name match mode
    pub evaluator: FilterEvaluator,

    pub theme: Arc<Theme>,

    pub locale: Arc<Locale>,

    /// Compiled page templates
    pub renderer: Arc<PageRenderer>,
}

impl DashboardHost {
    /// Build the host from a configuration and a dataset
    ///
    /// Fails when the configuration is invalid or the templates do not
    /// compile.
    pub fn new(config: DashboardConfig, dataset: Dataset) -> DashboardResult<Self> {
        config.check()?;

        let locale = Locale::from_code(&config.locale)?;
        let theme = Theme::from_config(&config.theme);
        let renderer = PageRenderer::new()?;
        let evaluator = FilterEvaluator::new(config.table.name_match);

        tracing::debug!(
            rows = dataset.len(),
            locale = locale.code,
            theme = theme.mode.as_str(),
            "Dashboard host ready"
        );

        Ok(Self {
            config: Arc::new(config),
            dataset,
            evaluator,
            theme: Arc::new(theme),
            locale: Arc::new(locale),
            renderer: Arc::new(renderer),
        })
    }

    /// A fresh, mounted table over the dataset
    pub fn table(&self) -> DataTable {
        let mut table = DataTable::new(self.dataset.clone(), self.evaluator);
        table.mount();
        table
    }

    /// Page sizes offered by the pager
    pub fn page_size_options(&self) -> &[usize] {
        &self.config.table.page_size_options
    }

    /// Run the search action for a submitted query
    ///
    /// Rows are always derived from the full dataset; sorting and paging
    /// apply to that derived view.
    pub fn select(&self, query: &TableQuery) -> TableSelection {
        let form = query.filter_form();

        let mut table = self.table();
        for (field, raw) in form.fields() {
            table.set_filter_field(field, raw);
        }
        table.apply_filters();

        let sort = query.sort_spec();
        let mut rows: Vec<&OrderRecord> = table.rows().iter().collect();
        if let Some(spec) = sort {
            spec.sort(&mut rows);
        }

        let page_size = query.page_size(
            self.page_size_options(),
            self.config.table.default_page_size,
        );
        let page = PaginatedResponse::from_rows(
            rows.into_iter().cloned().collect(),
            query.page(),
            page_size,
        );

        TableSelection {
            form,
            criteria: table.criteria().clone(),
            sort,
            page,
            loading: table.is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::NameMatch;

    fn make_host() -> DashboardHost {
        DashboardHost::new(DashboardConfig::default_config(), Dataset::default_rows())
            .expect("should build host")
    }

    fn query(pairs: &[(&str, &str)]) -> TableQuery {
        let mut query = TableQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "name" => query.name = value,
                "status" => query.status = value,
                "start_date" => query.start_date = value,
                "end_date" => query.end_date = value,
                "page" => query.page = value,
                "page_size" => query.page_size = value,
                "sort" => query.sort = value,
                other => panic!("unknown key {other}"),
            }
        }
        query
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = DashboardConfig::default_config();
        config.locale = "fr-FR".to_string();
        let result = DashboardHost::new(config, Dataset::default_rows());
        assert!(result.is_err());
    }

    #[test]
    fn test_table_is_mounted() {
        let host = make_host();
        assert!(!host.table().is_loading());
    }

    #[test]
    fn test_select_defaults_to_first_page_of_ten() {
        let host = make_host();
        let selection = host.select(&TableQuery::default());
        assert_eq!(selection.page.data.len(), 10);
        assert_eq!(selection.page.pagination.page_size, 10);
        assert!(!selection.loading);
        assert!(selection.criteria.is_empty());
    }

    #[test]
    fn test_select_filters_then_sorts_then_pages() {
        let host = make_host();
        let selection = host.select(&query(&[
            ("status", "1"),
            ("sort", "quantity:desc"),
            ("page_size", "5"),
        ]));
        let ids: Vec<u64> = selection.page.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![98756325, 98753275, 13286564, 98652366]);
        assert_eq!(selection.page.pagination.total, 4);
    }

    #[test]
    fn test_select_second_page() {
        let host = make_host();
        let selection = host.select(&query(&[("page", "2"), ("page_size", "5")]));
        let ids: Vec<u64> = selection.page.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![86739658, 13256498, 98753263, 98753275, 98753291]);
    }

    #[test]
    fn test_case_insensitive_config() {
        let mut config = DashboardConfig::default_config();
        config.table.name_match = NameMatch::CaseInsensitive;
        let host = DashboardHost::new(config, Dataset::default_rows()).unwrap();

        let selection = host.select(&query(&[("name", "laptop")]));
        assert_eq!(selection.page.data.len(), 1);
        assert_eq!(selection.page.data[0].id, 98764564);
    }
}
