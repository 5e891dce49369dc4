use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockpulse_core::{DomainError, DomainResult, Sku, SupplierId};

/// Where an item is sourced from.
///
/// Drives lead time and cost policy upstream; classification ignores it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Domestic,
    Imported,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Domestic => "domestic",
            Origin::Imported => "imported",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an origin label is neither domestic nor imported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown origin {0:?} (expected domestic or imported)")]
pub struct ParseOriginError(pub String);

impl FromStr for Origin {
    type Err = ParseOriginError;

    /// Case-insensitive; also accepts the Spanish labels used by older exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "domestic" | "nacional" => Ok(Origin::Domestic),
            "imported" | "importado" => Ok(Origin::Imported),
            _ => Err(ParseOriginError(s.trim().to_string())),
        }
    }
}

/// One SKU as delivered by an input provider.
///
/// Derived figures (value, margin, reorder quantity) are computed on demand
/// and never stored on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub sku: Sku,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub origin: Origin,
    pub supplier: SupplierId,
    pub unit_cost: f64,
    pub unit_price: f64,
    /// Fractional values are allowed (upstream rounding).
    pub stock_on_hand: f64,
    pub reorder_threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<u32>,
}

impl InventoryItem {
    /// Create a record with placeholder supplier/category and domestic origin.
    pub fn new(
        sku: impl Into<Sku>,
        unit_cost: f64,
        unit_price: f64,
        stock_on_hand: f64,
        reorder_threshold: f64,
    ) -> Self {
        Self {
            sku: sku.into(),
            description: None,
            category: "uncategorized".to_string(),
            origin: Origin::Domestic,
            supplier: SupplierId::from("unassigned"),
            unit_cost,
            unit_price,
            stock_on_hand,
            reorder_threshold,
            lead_time_days: None,
        }
    }

    pub fn with_supplier(mut self, supplier: impl Into<SupplierId>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    /// Reject records no analysis can be trusted on.
    pub fn validate(&self) -> DomainResult<()> {
        if self.sku.is_blank() {
            return Err(DomainError::record(self.sku.as_str(), "sku cannot be empty"));
        }
        ensure_non_negative(&self.sku, "unit_cost", self.unit_cost)?;
        ensure_non_negative(&self.sku, "unit_price", self.unit_price)?;
        ensure_non_negative(&self.sku, "stock_on_hand", self.stock_on_hand)?;
        ensure_non_negative(&self.sku, "reorder_threshold", self.reorder_threshold)?;
        Ok(())
    }

    pub fn inventory_value(&self) -> f64 {
        self.unit_cost * self.stock_on_hand
    }

    /// Gross margin as a percentage of the sale price.
    pub fn margin_pct(&self) -> DomainResult<f64> {
        if self.unit_price == 0.0 {
            return Err(DomainError::division_by_zero(
                self.sku.as_str(),
                "margin_pct requires a non-zero unit_price",
            ));
        }
        Ok((self.unit_price - self.unit_cost) / self.unit_price * 100.0)
    }

    /// At or below the threshold means replenishment is due.
    pub fn needs_reorder(&self) -> bool {
        self.stock_on_hand <= self.reorder_threshold
    }

    /// Units needed to bring stock up to `reorder_threshold * buffer_multiplier`.
    ///
    /// Always a whole, strictly positive number when present. `None` when
    /// stock is healthy or the target is already met.
    pub fn reorder_quantity(&self, buffer_multiplier: f64) -> Option<f64> {
        if !self.needs_reorder() {
            return None;
        }
        let quantity = (self.reorder_threshold * buffer_multiplier - self.stock_on_hand).ceil();
        (quantity > 0.0).then_some(quantity)
    }
}

fn ensure_non_negative(sku: &Sku, field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::record(
            sku.as_str(),
            format!("{field} must be a finite number"),
        ));
    }
    if value < 0.0 {
        return Err(DomainError::record(
            sku.as_str(),
            format!("{field} must be non-negative (got {value})"),
        ));
    }
    Ok(())
}
