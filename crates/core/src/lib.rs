//! `stockpulse-core` — shared foundation for the analytics workspace.
//!
//! Holds the error taxonomy and identifiers every other crate builds on.
//! Nothing in here performs IO.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{RunId, Sku, SupplierId};
