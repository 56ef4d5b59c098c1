//! The dashboard locale
//!
//! Only Russian is shipped. The locale carries the language tag, the date
//! display format and every UI string the page renders.

use crate::core::error::ConfigError;
use chrono::NaiveDate;
use serde::Serialize;

const SUPPORTED: [&str; 2] = ["ru-RU", "ru_RU"];

/// UI strings used by the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub app_title: &'static str,
    pub page_title: &'static str,
    pub name_label: &'static str,
    pub status_label: &'static str,
    pub date_from_placeholder: &'static str,
    pub date_to_placeholder: &'static str,
    pub search_button: &'static str,
    pub no_rows: &'static str,
    pub rows_per_page: &'static str,
    pub previous_page: &'static str,
    pub next_page: &'static str,
    /// Range label, `{from}`, `{to}` and `{count}` are substituted
    pub displayed_rows: &'static str,
    pub loading: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    /// BCP 47 tag, used for `lang` and `Content-Language`
    pub code: &'static str,
    /// Display format for dates, in picker notation
    pub date_format: &'static str,
    pub messages: Messages,
}

impl Locale {
    /// Russian (Russia)
    pub fn ru_ru() -> Self {
        Self {
            code: "ru-RU",
            date_format: "DD.MM.YYYY",
            messages: Messages {
                app_title: "Панель управления",
                page_title: "Отчет",
                name_label: "Наименование",
                status_label: "Статус",
                date_from_placeholder: "C",
                date_to_placeholder: "По",
                search_button: "Найти",
                no_rows: "Нет строк",
                rows_per_page: "Строк на странице:",
                previous_page: "Предыдущая страница",
                next_page: "Следующая страница",
                displayed_rows: "{from}–{to} из {count}",
                loading: "Загрузка…",
            },
        }
    }

    pub fn is_supported(code: &str) -> bool {
        SUPPORTED.contains(&code)
    }

    /// Resolve a configured locale code
    pub fn from_code(code: &str) -> Result<Self, ConfigError> {
        if Self::is_supported(code) {
            Ok(Self::ru_ru())
        } else {
            Err(ConfigError::UnsupportedLocale {
                code: code.to_string(),
            })
        }
    }

    /// Format a date the way the date picker displays it
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format("%d.%m.%Y").to_string()
    }

    /// Pager label for a row range
    pub fn displayed_rows(&self, from: usize, to: usize, count: usize) -> String {
        self.messages
            .displayed_rows
            .replace("{from}", &from.to_string())
            .replace("{to}", &to.to_string())
            .replace("{count}", &count.to_string())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ru_ru()
    }
}
