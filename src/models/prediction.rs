use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Restocking suggestion for a single item. Values come from the sample data;
/// nothing here forecasts demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionItem {
    pub id: String,
    pub name: String,
    pub current_stock: u32,
    pub predicted_demand: u32,
    pub recommended_order: u32,
    pub recommended_order_date: NaiveDate,
}
