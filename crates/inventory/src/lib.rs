//! Inventory record model.
//!
//! Plain input records plus the per-item arithmetic the analytics layer
//! builds on (no IO, no storage, no aggregation across items).

pub mod branch;
pub mod item;

pub use branch::Branch;
pub use item::{InventoryItem, Origin, ParseOriginError};
