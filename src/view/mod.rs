//! Server-side page rendering
//!
//! Templates live in `templates/` and are compiled into the binary. Handlers
//! build a [`DashboardPage`] from the request, turn it into a serializable
//! [`DashboardView`], and hand that to the [`PageRenderer`].

use crate::core::column::ORDER_COLUMNS;
use crate::core::error::RenderError;
use crate::core::filter::{FilterCriteria, FilterForm};
use crate::core::order::{OrderRecord, OrderStatus};
use crate::core::query::{PaginatedResponse, SortDirection, SortSpec};
use crate::locale::{Locale, Messages};
use crate::theme::Theme;
use serde::Serialize;
use tera::{Context, Tera};

const LAYOUT: &str = include_str!("../../templates/layout.html");
const MACROS: &str = include_str!("../../templates/macros.html");
const DASHBOARD: &str = include_str!("../../templates/dashboard.html");

/// Compiled page templates
#[derive(Clone)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Compile the built-in templates
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT),
            ("macros.html", MACROS),
            ("dashboard.html", DASHBOARD),
        ])
        .map_err(|e| RenderError::Templates {
            message: error_chain(&e),
        })?;

        Ok(Self { tera })
    }

    /// Render the dashboard page
    pub fn render_dashboard(&self, view: &DashboardView) -> Result<String, RenderError> {
        self.render("dashboard.html", view)
    }

    fn render<T: Serialize>(&self, template: &str, view: &T) -> Result<String, RenderError> {
        let to_error = |e: tera::Error| RenderError::Template {
            template: template.to_string(),
            message: error_chain(&e),
        };

        let context = Context::from_serialize(view).map_err(to_error)?;
        self.tera.render(template, &context).map_err(to_error)
    }
}

/// Tera nests the useful message in the source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Everything needed to render one dashboard response
pub struct DashboardPage<'a> {
    pub theme: &'a Theme,
    pub locale: &'a Locale,
    /// Reset scroll position on load
    pub scroll_top: bool,
    /// Form action (the current path)
    pub action: &'a str,
    pub form: &'a FilterForm,
    pub criteria: &'a FilterCriteria,
    pub sort: Option<SortSpec>,
    pub page: &'a PaginatedResponse<OrderRecord>,
    pub page_size_options: &'a [usize],
    pub loading: bool,
}

#[derive(Debug, Serialize)]
pub struct ShellView {
    pub lang: String,
    pub app_title: String,
    pub theme_mode: String,
    pub stylesheet: String,
    pub scroll_top: bool,
}

/// Filter form values echoed back into the controls
#[derive(Debug, Serialize)]
pub struct FormView {
    pub name: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ColumnView {
    pub field: String,
    pub header_name: String,
    pub width: u32,
    pub sortable: bool,
    /// Sort parameter for the header link
    pub next_sort: String,
    pub sort_indicator: String,
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub created_date: String,
    pub status_label: String,
    pub status_color: String,
}

#[derive(Debug, Serialize)]
pub struct PageSizeOption {
    pub value: usize,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct PagerView {
    pub page: usize,
    pub page_size: usize,
    pub page_size_options: Vec<PageSizeOption>,
    pub range_label: String,
    /// 0 when there is no previous page
    pub prev_page: usize,
    /// 0 when there is no next page
    pub next_page: usize,
}

/// Template context of the dashboard page
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub shell: ShellView,
    pub messages: Messages,
    pub action: String,
    pub date_format: String,
    pub form: FormView,
    pub status_options: Vec<StatusOption>,
    pub sort: String,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    pub pager: PagerView,
    pub loading: bool,
}

impl DashboardPage<'_> {
    pub fn to_view(&self) -> DashboardView {
        DashboardView {
            shell: ShellView {
                lang: self.locale.code.to_string(),
                app_title: self.locale.messages.app_title.to_string(),
                theme_mode: self.theme.mode.as_str().to_string(),
                stylesheet: self.theme.stylesheet(),
                scroll_top: self.scroll_top,
            },
            messages: self.locale.messages.clone(),
            action: self.action.to_string(),
            date_format: self.locale.date_format.to_string(),
            form: self.form_view(),
            status_options: self.status_options(),
            sort: self.sort.map(|spec| spec.to_string()).unwrap_or_default(),
            columns: self.columns(),
            rows: self.rows(),
            pager: self.pager(),
            loading: self.loading,
        }
    }

    fn form_view(&self) -> FormView {
        // Parsed dates are echoed in display format, rejected input as typed
        let date_value = |parsed: Option<chrono::NaiveDate>, raw: &Option<String>| {
            parsed
                .map(|date| self.locale.format_date(date))
                .or_else(|| raw.clone())
                .unwrap_or_default()
        };

        FormView {
            name: self.form.name.clone().unwrap_or_default(),
            status: self.criteria.status.clone().unwrap_or_default(),
            start_date: date_value(self.criteria.start_date, &self.form.start_date),
            end_date: date_value(self.criteria.end_date, &self.form.end_date),
        }
    }

    fn status_options(&self) -> Vec<StatusOption> {
        OrderStatus::display_table()
            .into_iter()
            .map(|display| {
                let value = display.code.to_string();
                StatusOption {
                    selected: self.criteria.status.as_deref() == Some(value.as_str()),
                    value,
                    label: display.label.to_string(),
                }
            })
            .collect()
    }

    fn columns(&self) -> Vec<ColumnView> {
        ORDER_COLUMNS
            .iter()
            .map(|column| {
                let active = self
                    .sort
                    .filter(|spec| spec.column.field() == column.field)
                    .map(|spec| spec.direction);

                let (next_sort, sort_indicator) = match active {
                    Some(SortDirection::Asc) => (format!("{}:desc", column.field), " ▲"),
                    Some(SortDirection::Desc) => (format!("{}:asc", column.field), " ▼"),
                    None => (format!("{}:asc", column.field), ""),
                };

                ColumnView {
                    field: column.field.to_string(),
                    header_name: column.header_name.to_string(),
                    width: column.width,
                    sortable: column.sortable,
                    next_sort,
                    sort_indicator: sort_indicator.to_string(),
                }
            })
            .collect()
    }

    fn rows(&self) -> Vec<RowView> {
        self.page
            .data
            .iter()
            .map(|record| {
                let display = record.status.display();
                RowView {
                    id: record.id,
                    name: record.name.clone(),
                    quantity: record.quantity,
                    created_date: self.locale.format_date(record.created_date.date()),
                    status_label: display.label.to_string(),
                    status_color: self.theme.palette.color(display.color).to_string(),
                }
            })
            .collect()
    }

    fn pager(&self) -> PagerView {
        let meta = &self.page.pagination;
        PagerView {
            page: meta.page,
            page_size: meta.page_size,
            page_size_options: self
                .page_size_options
                .iter()
                .map(|&value| PageSizeOption {
                    value,
                    selected: value == meta.page_size,
                })
                .collect(),
            range_label: self
                .locale
                .displayed_rows(meta.first_row(), meta.last_row(), meta.total),
            prev_page: if meta.has_prev { meta.page - 1 } else { 0 },
            next_page: if meta.has_next { meta.page + 1 } else { 0 },
        }
    }
}
