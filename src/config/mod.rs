//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::filter::NameMatch;
use crate::locale::Locale;
use crate::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Where the dashboard listens
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Order table behavior
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_default_page_size"))]
pub struct TableConfig {
    /// Page sizes offered by the pager
    #[serde(default = "default_page_size_options")]
    #[validate(length(min = 1), custom(function = "validate_page_sizes"))]
    pub page_size_options: Vec<usize>,

    /// Page size used when none (or an unlisted one) is requested
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Case handling of the name filter
    #[serde(default)]
    pub name_match: NameMatch,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: default_page_size_options(),
            default_page_size: default_page_size(),
            name_match: NameMatch::default(),
        }
    }
}

/// Complete dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// Locale code; only `ru-RU` is available
    #[serde(default = "default_locale")]
    #[validate(custom(function = "validate_locale"))]
    pub locale: String,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    #[validate(nested)]
    pub table: TableConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing sections take their defaults; the result is validated.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Validate every section, collecting all failures
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|errors| {
            let mut fields = Vec::new();
            flatten_errors("", &errors, &mut fields);
            fields.sort();
            ConfigError::Invalid { fields }
        })
    }

    /// Create the default configuration
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            locale: default_locale(),
            theme: ThemeConfig::default(),
            table: TableConfig::default(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_locale() -> String {
    "ru-RU".to_string()
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10]
}

fn default_page_size() -> usize {
    10
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

fn validate_page_sizes(options: &[usize]) -> Result<(), ValidationError> {
    match options.iter().find(|size| !(1..=100).contains(*size)) {
        Some(size) => Err(invalid(
            "page_size_range",
            format!("page size {} is outside 1..=100", size),
        )),
        None => Ok(()),
    }
}

fn validate_default_page_size(table: &TableConfig) -> Result<(), ValidationError> {
    if table.page_size_options.contains(&table.default_page_size) {
        Ok(())
    } else {
        Err(invalid(
            "default_page_size",
            format!(
                "default page size {} is not one of {:?}",
                table.default_page_size, table.page_size_options
            ),
        ))
    }
}

fn validate_locale(code: &str) -> Result<(), ValidationError> {
    if Locale::is_supported(code) {
        Ok(())
    } else {
        Err(invalid("locale", format!("unsupported locale '{}'", code)))
    }
}

fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err.message.as_deref().unwrap_or(err.code.as_ref());
                    out.push(format!("{}: {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}
