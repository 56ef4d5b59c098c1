//! Filter criteria and the filter evaluator
//!
//! Criteria come from the dashboard's filter form as raw strings. Parsing is
//! total: an empty or malformed value simply imposes no constraint. The
//! evaluator always derives its result from the full dataset, so applying
//! the same criteria twice yields the same rows.

use crate::core::dataset::Dataset;
use crate::core::order::OrderRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date formats accepted for the range bounds, tried in order
const DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

/// How the name criterion is compared against record names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    /// Plain substring check
    #[default]
    CaseSensitive,
    /// Substring check after lowercasing both sides
    CaseInsensitive,
}

/// Raw filter form values, as submitted
///
/// Extracted from the query string of both the dashboard page and the
/// JSON API. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    pub name: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterForm {
    /// Submitted controls paired with their raw values
    pub fn fields(&self) -> impl Iterator<Item = (FilterField, &str)> {
        [
            (FilterField::Name, &self.name),
            (FilterField::Status, &self.status),
            (FilterField::StartDate, &self.start_date),
            (FilterField::EndDate, &self.end_date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|raw| (field, raw)))
    }
}

/// The filter form's individual controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Status,
    StartDate,
    EndDate,
}

/// Parsed filter criteria; `None` means "no constraint"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Substring the record name must contain
    pub name: Option<String>,

    /// Status code, compared against the record status in string form
    pub status: Option<String>,

    /// Inclusive lower bound on the created date
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound on the created date
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Criteria imposing no constraint at all
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(&name.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(&status.into());
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Update one field from its raw form value
    ///
    /// Empty or unparseable values clear the field. Whitespace is a real
    /// pattern for the name and status fields.
    pub fn set_field(&mut self, field: FilterField, raw: &str) {
        match field {
            FilterField::Name => self.name = non_empty(raw),
            FilterField::Status => self.status = non_empty(raw),
            FilterField::StartDate => self.start_date = parse_date(raw),
            FilterField::EndDate => self.end_date = parse_date(raw),
        }
    }

    /// Whether no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Check a single record against every present criterion
    pub fn matches(&self, record: &OrderRecord, mode: NameMatch) -> bool {
        let created = record.created_date.date();

        self.name
            .as_deref()
            .is_none_or(|pattern| name_contains(&record.name, pattern, mode))
            && self
                .status
                .as_deref()
                .is_none_or(|status| record.status.to_string() == status)
            && self.start_date.is_none_or(|start| created >= start)
            && self.end_date.is_none_or(|end| created <= end)
    }
}

impl From<&FilterForm> for FilterCriteria {
    fn from(form: &FilterForm) -> Self {
        let mut criteria = FilterCriteria::new();
        for (field, raw) in form.fields() {
            criteria.set_field(field, raw);
        }
        criteria
    }
}

impl From<FilterForm> for FilterCriteria {
    fn from(form: FilterForm) -> Self {
        FilterCriteria::from(&form)
    }
}

/// Applies filter criteria to a dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEvaluator {
    name_match: NameMatch,
}

impl FilterEvaluator {
    pub fn new(name_match: NameMatch) -> Self {
        Self { name_match }
    }

    pub fn name_match(&self) -> NameMatch {
        self.name_match
    }

    /// Derive the rows matching `criteria`, in original order
    pub fn apply<'a>(&self, dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a OrderRecord> {
        if criteria.is_empty() {
            return dataset.rows().iter().collect();
        }

        let rows: Vec<&OrderRecord> = dataset
            .rows()
            .iter()
            .filter(|record| criteria.matches(record, self.name_match))
            .collect();

        tracing::debug!(
            matched = rows.len(),
            total = dataset.len(),
            "Applied order filters"
        );

        rows
    }
}

/// Parse a date bound in `DD.MM.YYYY` or `YYYY-MM-DD` form
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok());

    if parsed.is_none() {
        tracing::debug!(value = %raw, "Ignoring unparseable date bound");
    }
    parsed
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

fn name_contains(name: &str, pattern: &str, mode: NameMatch) -> bool {
    match mode {
        NameMatch::CaseSensitive => name.contains(pattern),
        NameMatch::CaseInsensitive => name.to_lowercase().contains(&pattern.to_lowercase()),
    }
}
