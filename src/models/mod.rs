//! Records shown by the dashboard tables.
//!
//! All records are flat and serialize with the camelCase field names used by
//! the sample data file and the JSON API.

pub mod hospital;
pub mod inventory;
pub mod order;
pub mod prediction;

pub use hospital::{Hospital, HospitalStatus};
pub use inventory::InventoryItem;
pub use order::{Order, OrderStatus, PaymentStatus, StockStatus};
pub use prediction::PredictionItem;
