//! In-memory store for the dashboard.
//!
//! The sample records are loaded once at startup. Orders are the only records
//! that change afterwards, through the accept/decline actions.

use std::path::Path;
use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use crate::core::data::{parse_sample_data, SampleData, EMBEDDED_SAMPLE};
use crate::error::AppError;
use crate::models::{Hospital, InventoryItem, Order, OrderStatus, PredictionItem};
use crate::ui::tables::orders::OrderActions;

pub struct Database {
    inventory: Vec<InventoryItem>,
    predictions: Vec<PredictionItem>,
    hospitals: Vec<Hospital>,
    orders: OrderBook,
}

impl Database {
    /// Seed from the sample data compiled into the binary.
    pub fn seeded() -> Result<Self, AppError> {
        Ok(Self::from_sample(parse_sample_data(EMBEDDED_SAMPLE)?))
    }

    /// Seed from a JSON file with the same layout as `data/sample.json`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let data = parse_sample_data(&raw).map_err(|e| AppError::SampleData {
            origin: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "Loaded sample data");
        Ok(Self::from_sample(data))
    }

    pub fn from_sample(data: SampleData) -> Self {
        Self {
            inventory: data.inventory,
            predictions: data.predictions,
            hospitals: data.hospitals,
            orders: OrderBook::new(data.orders),
        }
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn predictions(&self) -> &[PredictionItem] {
        &self.predictions
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }
}

/// Orders with their current status. Handlers take snapshots so no lock is
/// held while a page renders.
pub struct OrderBook {
    orders: RwLock<Vec<Order>>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|order| order.id == id)
            .cloned()
    }

    fn set_status(&self, id: &str, status: OrderStatus) {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        match orders.iter_mut().find(|order| order.id == id) {
            Some(order) => {
                info!(order_id = %id, from = %order.order_status, to = %status, "Order status changed");
                order.order_status = status;
            }
            None => warn!(order_id = %id, "Status change for unknown order"),
        }
    }
}

impl OrderActions for OrderBook {
    fn accept_order(&self, id: &str) {
        self.set_status(id, OrderStatus::Accepted);
    }

    fn decline_order(&self, id: &str) {
        self.set_status(id, OrderStatus::Declined);
    }
}
