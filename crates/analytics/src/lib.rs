//! `stockpulse-analytics`
//!
//! **Responsibility:** inventory classification and replenishment analytics.
//!
//! - Pure functions of the supplied records plus [`ClassifierConfig`].
//! - No IO and no shared state: callers own the dataset for each run.
//! - Results are plain serializable data; formatting belongs to presentation.

pub mod classifier;
pub mod config;
pub mod investment;
pub mod network;
pub mod result;
mod summary;

pub use classifier::{InventoryClassifier, classify};
pub use config::ClassifierConfig;
pub use investment::{
    InvestmentPlan, InvestmentPlanConfig, OriginBase, QuarterlyInvestment, investment_plan,
};
pub use network::{NetworkSummary, RegionSales, network_summary};
pub use result::{
    AbcClass, CategoryClassValue, ClassSummary, ClassificationResult, ClassifiedItem,
    OriginInvestment, ReorderItem, SupplierOriginCost, SupplierSummary, Totals,
};
