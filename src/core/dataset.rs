//! The fixed, immutable order dataset

use crate::core::order::{OrderRecord, OrderStatus};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// Immutable, ordered collection of order records
///
/// Cloning is cheap: the rows live behind an `Arc` and are never mutated.
/// Every filtered view is derived from this full list.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Arc<[OrderRecord]>,
}

impl Dataset {
    /// Build a dataset from records, keeping their order
    pub fn new(rows: Vec<OrderRecord>) -> Self {
        Self { rows: rows.into() }
    }

    /// All records in original order
    pub fn rows(&self) -> &[OrderRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a record by its display identifier
    pub fn get(&self, id: u64) -> Option<&OrderRecord> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// The report rows shipped with the dashboard
    pub fn default_rows() -> Self {
        let sep_12 = at_eleven(2024, 9, 12);
        let sep_22 = at_eleven(2024, 9, 22);

        Self::new(vec![
            OrderRecord::new(84564564, "Camera Lens", 40, sep_12, OrderStatus::Rejected),
            OrderRecord::new(98764564, "Laptop", 300, sep_12, OrderStatus::Processing),
            OrderRecord::new(98756325, "Mobile", 355, sep_22, OrderStatus::Approved),
            OrderRecord::new(98652366, "Handset", 50, sep_12, OrderStatus::Approved),
            OrderRecord::new(
                13286564,
                "Computer Accessories",
                100,
                sep_12,
                OrderStatus::Approved,
            ),
            OrderRecord::new(86739658, "TV", 99, sep_12, OrderStatus::Processing),
            OrderRecord::new(13256498, "Keyboard", 125, sep_12, OrderStatus::Rejected),
            OrderRecord::new(98753263, "Mouse", 89, sep_12, OrderStatus::Rejected),
            OrderRecord::new(98753275, "Desktop", 185, sep_12, OrderStatus::Approved),
            OrderRecord::new(98753291, "Chair", 100, sep_12, OrderStatus::Processing),
        ])
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::default_rows()
    }
}

impl From<Vec<OrderRecord>> for Dataset {
    fn from(rows: Vec<OrderRecord>) -> Self {
        Self::new(rows)
    }
}

fn at_eleven(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(11, 0, 0))
        .unwrap_or_default()
}
