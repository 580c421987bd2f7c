//! Column definitions for the four dashboard tables.

pub mod hospitals;
pub mod inventory;
pub mod orders;
pub mod prediction;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::badge::BadgeRules;
use crate::core::format::{format_date, format_inr};
use crate::ui::components::Cell;
use crate::ui::table::DEFAULT_PAGE_SIZE;

pub use hospitals::HospitalsTable;
pub use inventory::InventoryTable;
pub use orders::{OrderAction, OrderActions, OrdersTable};
pub use prediction::PredictionTable;

/// Rendering settings shared by every table.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub page_size: usize,
    pub date_format: String,
    pub rules: BadgeRules,
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn date(&self, date: NaiveDate) -> String {
        format_date(date, &self.date_format)
    }

    fn date_cell(&self, date: NaiveDate) -> Cell {
        Cell::Date(self.date(date))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            date_format: "%-d/%-m/%Y".to_string(),
            rules: BadgeRules::default(),
            now: Utc::now(),
        }
    }
}

fn money_cell(amount: f64) -> Cell {
    Cell::Money(format_inr(amount))
}
