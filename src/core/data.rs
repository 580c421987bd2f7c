use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::badge::BadgeRules;
use crate::models::{Hospital, HospitalStatus, InventoryItem, Order, OrderStatus, PredictionItem};

/// The sample records the dashboard is seeded with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleData {
    pub inventory: Vec<InventoryItem>,
    pub orders: Vec<Order>,
    pub predictions: Vec<PredictionItem>,
    pub hospitals: Vec<Hospital>,
}

pub const EMBEDDED_SAMPLE: &str = include_str!("../../data/sample.json");

pub fn parse_sample_data(raw: &str) -> Result<SampleData, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Figures for the overview cards on the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_inventory_value: f64,
    pub total_units: u64,
    pub low_stock_items: usize,
    pub near_expiry_items: usize,
    pub pending_orders: usize,
    pub active_hospitals: usize,
}

pub fn summarize(
    inventory: &[InventoryItem],
    orders: &[Order],
    hospitals: &[Hospital],
    rules: &BadgeRules,
    now: DateTime<Utc>,
) -> Summary {
    Summary {
        total_inventory_value: inventory.iter().map(InventoryItem::stock_value).sum(),
        total_units: inventory.iter().map(|item| u64::from(item.quantity)).sum(),
        low_stock_items: inventory
            .iter()
            .filter(|item| rules.is_low_stock(item.quantity))
            .count(),
        near_expiry_items: inventory
            .iter()
            .filter(|item| rules.is_near_expiry(item.expiry_date, now))
            .count(),
        pending_orders: orders
            .iter()
            .filter(|order| order.order_status == OrderStatus::Pending)
            .count(),
        active_hospitals: hospitals
            .iter()
            .filter(|hospital| hospital.status == HospitalStatus::Active)
            .count(),
    }
}

/// Notification lines for items that are low on stock or close to expiry.
pub fn inventory_alerts(
    inventory: &[InventoryItem],
    rules: &BadgeRules,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut alerts = Vec::new();

    for item in inventory {
        if rules.is_low_stock(item.quantity) {
            alerts.push(format!("Low stock: {} ({} left)", item.name, item.quantity));
        }
        if rules.is_near_expiry(item.expiry_date, now) {
            alerts.push(format!("Expiring soon: {} (batch {})", item.name, item.batch_number));
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SampleData {
        parse_sample_data(EMBEDDED_SAMPLE).unwrap()
    }

    #[test]
    fn embedded_sample_parses() {
        let data = sample();
        assert_eq!(data.inventory.len(), 5);
        assert_eq!(data.inventory[0].name, "Paracetamol");
        assert_eq!(data.inventory[0].batch_number, "BF6969");
        assert!(!data.orders.is_empty());
        assert!(!data.predictions.is_empty());
        assert!(!data.hospitals.is_empty());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let raw = r#"{"inventory":[{"id":"1","name":"x","category":"c","department":"d",
            "quantity":1,"batchNumber":"b","unitPrice":1,"expiryDate":"not-a-date"}],
            "orders":[],"predictions":[],"hospitals":[]}"#;
        assert!(parse_sample_data(raw).is_err());
    }

    #[test]
    fn summary_counts() {
        let data = sample();
        let now = Utc.with_ymd_and_hms(2024, 12, 3, 0, 0, 0).unwrap();
        let summary = summarize(
            &data.inventory,
            &data.orders,
            &data.hospitals,
            &BadgeRules::default(),
            now,
        );
        // Endoscope (10) and Colonoscope (5)
        assert_eq!(summary.low_stock_items, 2);
        // Paracetamol expires 2024-12-04
        assert_eq!(summary.near_expiry_items, 1);
        assert_eq!(summary.pending_orders, 3);
        assert_eq!(summary.active_hospitals, 3);
        assert_eq!(summary.total_units, 720);
    }

    #[test]
    fn alerts_name_the_items() {
        let data = sample();
        let now = Utc.with_ymd_and_hms(2024, 12, 3, 0, 0, 0).unwrap();
        let alerts = inventory_alerts(&data.inventory, &BadgeRules::default(), now);
        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().any(|a| a.contains("Endoscope")));
        assert!(alerts.iter().any(|a| a.contains("Expiring soon: Paracetamol")));
    }
}
