use core::fmt;

use serde::{Deserialize, Serialize};

use stockpulse_core::{Sku, SupplierId};
use stockpulse_inventory::{InventoryItem, Origin};

/// Pareto tier of an item by cumulative share of inventory value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    pub const ALL: [AbcClass; 3] = [AbcClass::A, AbcClass::B, AbcClass::C];
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        f.write_str(label)
    }
}

/// An input record with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    /// 1-based position in value-descending order.
    pub rank: usize,
    /// Position in the caller's input sequence.
    pub input_index: usize,
    #[serde(flatten)]
    pub item: InventoryItem,
    pub inventory_value: f64,
    /// `None` when the item has no sale price (excluded from margin aggregates).
    pub margin_pct: Option<f64>,
    pub classification: AbcClass,
    pub cumulative_share: f64,
}

/// Replenishment suggestion for one item at or below its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub rank: usize,
    pub sku: Sku,
    pub supplier: SupplierId,
    pub origin: Origin,
    pub category: String,
    pub classification: AbcClass,
    pub stock_on_hand: f64,
    pub reorder_threshold: f64,
    pub unit_cost: f64,
    /// Whole units, always > 0.
    pub reorder_quantity: f64,
    pub reorder_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSummary {
    pub supplier: SupplierId,
    pub total_reorder_cost: f64,
    pub item_count: usize,
}

/// Reorder spend for one supplier restricted to one origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOriginCost {
    pub supplier: SupplierId,
    pub origin: Origin,
    pub reorder_cost: f64,
    pub item_count: usize,
}

/// Inventory value held by one class within one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryClassValue {
    pub category: String,
    pub classification: AbcClass,
    pub inventory_value: f64,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub classification: AbcClass,
    pub item_count: usize,
    pub inventory_value: f64,
    /// Fraction of all SKUs that fall in this class.
    pub item_share: f64,
    /// Fraction of total inventory value held by this class.
    pub value_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginInvestment {
    pub origin: Origin,
    pub reorder_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub item_count: usize,
    pub total_inventory_value: f64,
    pub class_a_value: f64,
    pub total_reorder_investment: f64,
    /// One entry per origin, domestic first, zero when nothing is due.
    pub reorder_investment_by_origin: Vec<OriginInvestment>,
    pub average_margin_pct: Option<f64>,
    pub margin_excluded_skus: Vec<Sku>,
}

/// Output of one classification run.
///
/// Contains no timestamps or run identifiers, so identical input and
/// configuration always serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Every input item, in rank order.
    pub classified_items: Vec<ClassifiedItem>,
    /// Items needing replenishment, in rank order.
    pub reorder_items: Vec<ReorderItem>,
    /// Descending by cost, ties by supplier.
    pub supplier_summary: Vec<SupplierSummary>,
    pub supplier_origin_breakdown: Vec<SupplierOriginCost>,
    pub category_breakdown: Vec<CategoryClassValue>,
    pub class_summary: Vec<ClassSummary>,
    pub totals: Totals,
}

impl ClassificationResult {
    pub fn items_in(&self, class: AbcClass) -> impl Iterator<Item = &ClassifiedItem> {
        self.classified_items
            .iter()
            .filter(move |c| c.classification == class)
    }

    pub fn find(&self, sku: &str) -> Option<&ClassifiedItem> {
        self.classified_items.iter().find(|c| c.item.sku.as_str() == sku)
    }

    pub fn reorder_for(&self, sku: &str) -> Option<&ReorderItem> {
        self.reorder_items.iter().find(|r| r.sku.as_str() == sku)
    }
}
