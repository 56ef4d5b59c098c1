//! Interaction state of the order table
//!
//! Filter controls edit the pending criteria one field at a time; nothing is
//! recomputed until [`DataTable::apply_filters`] runs, which re-derives the
//! rows from the full dataset using the complete criteria set.

use crate::core::dataset::Dataset;
use crate::core::filter::{FilterCriteria, FilterEvaluator, FilterField};
use crate::core::order::OrderRecord;

#[derive(Debug, Clone)]
pub struct DataTable {
    dataset: Dataset,
    evaluator: FilterEvaluator,
    criteria: FilterCriteria,
    rows: Vec<OrderRecord>,
    loading: bool,
}

impl DataTable {
    /// A freshly created table shows every row and is still loading
    pub fn new(dataset: Dataset, evaluator: FilterEvaluator) -> Self {
        let rows = dataset.rows().to_vec();
        Self {
            dataset,
            evaluator,
            criteria: FilterCriteria::new(),
            rows,
            loading: true,
        }
    }

    /// First render finished
    pub fn mount(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Rows currently displayed
    pub fn rows(&self) -> &[OrderRecord] {
        &self.rows
    }

    /// Criteria pending the next search
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Record an edit to one filter control
    pub fn set_filter_field(&mut self, field: FilterField, value: &str) {
        self.criteria.set_field(field, value);
    }

    /// Replace every pending criterion at once
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Run the search: filter the full dataset with the pending criteria
    pub fn apply_filters(&mut self) -> &[OrderRecord] {
        self.loading = true;
        tracing::trace!(criteria = ?self.criteria, "Filtering orders");

        self.rows = self
            .evaluator
            .apply(&self.dataset, &self.criteria)
            .into_iter()
            .cloned()
            .collect();

        self.loading = false;
        &self.rows
    }
}
