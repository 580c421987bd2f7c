use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub department: String,
    pub quantity: u32,
    pub batch_number: String,
    pub unit_price: f64,
    pub expiry_date: NaiveDate,
}

impl InventoryItem {
    /// Value of the stock on hand, in rupees.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}
