//! Column definitions for the order table

use serde::Serialize;

/// How a column's values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Date,
    /// Colored dot followed by the status label
    Status,
}

/// A single table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    /// Record field shown in this column
    pub field: &'static str,
    pub header_name: &'static str,
    /// Fixed display width in pixels
    pub width: u32,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub sortable: bool,
}

impl ColumnDef {
    const fn new(
        field: &'static str,
        header_name: &'static str,
        width: u32,
        column_type: ColumnType,
    ) -> Self {
        Self {
            field,
            header_name,
            width,
            column_type,
            sortable: true,
        }
    }

    const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Columns of the order report, in display order
pub const ORDER_COLUMNS: [ColumnDef; 5] = [
    ColumnDef::new("id", "Номер", 150, ColumnType::Number),
    ColumnDef::new("name", "Наименование", 300, ColumnType::String),
    ColumnDef::new("quantity", "Количество", 150, ColumnType::Number),
    ColumnDef::new("created_date", "Дата регистрации", 160, ColumnType::Date),
    ColumnDef::new("status", "Статус", 150, ColumnType::Status).unsortable(),
];
