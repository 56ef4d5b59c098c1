//! Order records and the status display table

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an order
///
/// Serialized as its integer code (`0..=3`), which is also the value the
/// status dropdown submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatus {
    /// Order is being processed (code 0)
    Processing,
    /// Order has been approved (code 1)
    Approved,
    /// Order has been rejected (code 2)
    Rejected,
    /// Status is not known (code 3)
    Unknown,
}

/// Semantic color of a status marker, resolved to a hex value by the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Primary,
    Success,
    Warning,
    Error,
}

impl StatusColor {
    /// Palette key for this color
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Primary => "primary",
            StatusColor::Success => "success",
            StatusColor::Warning => "warning",
            StatusColor::Error => "error",
        }
    }
}

/// Label and color used to render a status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub code: u8,
    pub label: &'static str,
    pub color: StatusColor,
}

impl OrderStatus {
    /// Every status, in dropdown order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Approved,
        OrderStatus::Rejected,
        OrderStatus::Unknown,
    ];

    /// Integer code of this status
    pub fn code(&self) -> u8 {
        match self {
            OrderStatus::Processing => 0,
            OrderStatus::Approved => 1,
            OrderStatus::Rejected => 2,
            OrderStatus::Unknown => 3,
        }
    }

    /// Map an integer code to a status
    ///
    /// Codes outside the known range map to [`OrderStatus::Unknown`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => OrderStatus::Processing,
            1 => OrderStatus::Approved,
            2 => OrderStatus::Rejected,
            _ => OrderStatus::Unknown,
        }
    }

    /// Label and color for this status
    pub fn display(&self) -> StatusDisplay {
        let (label, color) = match self {
            OrderStatus::Processing => ("В обработке", StatusColor::Warning),
            OrderStatus::Approved => ("Утвержден", StatusColor::Success),
            OrderStatus::Rejected => ("Отклонен", StatusColor::Error),
            OrderStatus::Unknown => ("Не известно", StatusColor::Primary),
        };
        StatusDisplay {
            code: self.code(),
            label,
            color,
        }
    }

    /// The full display table, one entry per status
    pub fn display_table() -> Vec<StatusDisplay> {
        Self::ALL.iter().map(OrderStatus::display).collect()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Ok(OrderStatus::from_code(code))
    }
}

/// A single row of the order report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Display identifier, unique within a dataset
    pub id: u64,

    /// Product or item name
    pub name: String,

    pub quantity: u32,

    /// Registration date and time (local, no offset)
    pub created_date: NaiveDateTime,

    pub status: OrderStatus,
}

impl OrderRecord {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        quantity: u32,
        created_date: NaiveDateTime,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            created_date,
            status,
        }
    }
}
