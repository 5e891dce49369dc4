//! Group-and-aggregate passes over an already classified run.

use core::cmp::Ordering;
use std::collections::BTreeMap;

use stockpulse_core::{Sku, SupplierId};
use stockpulse_inventory::Origin;

use crate::result::{
    AbcClass, CategoryClassValue, ClassSummary, ClassifiedItem, OriginInvestment, ReorderItem,
    SupplierOriginCost, SupplierSummary, Totals,
};

/// Inputs are finite by construction, so `partial_cmp` never fails here.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

pub(crate) fn supplier_summary(reorder: &[ReorderItem]) -> Vec<SupplierSummary> {
    let mut by_supplier: BTreeMap<&SupplierId, (f64, usize)> = BTreeMap::new();
    for r in reorder {
        let entry = by_supplier.entry(&r.supplier).or_insert((0.0, 0));
        entry.0 += r.reorder_cost;
        entry.1 += 1;
    }

    let mut out: Vec<SupplierSummary> = by_supplier
        .into_iter()
        .map(|(supplier, (total_reorder_cost, item_count))| SupplierSummary {
            supplier: supplier.clone(),
            total_reorder_cost,
            item_count,
        })
        .collect();

    out.sort_by(|a, b| {
        descending(a.total_reorder_cost, b.total_reorder_cost)
            .then_with(|| a.supplier.cmp(&b.supplier))
    });
    out
}

pub(crate) fn supplier_origin_breakdown(reorder: &[ReorderItem]) -> Vec<SupplierOriginCost> {
    let mut groups: BTreeMap<(&SupplierId, Origin), (f64, usize)> = BTreeMap::new();
    for r in reorder {
        let entry = groups.entry((&r.supplier, r.origin)).or_insert((0.0, 0));
        entry.0 += r.reorder_cost;
        entry.1 += 1;
    }

    let mut out: Vec<SupplierOriginCost> = groups
        .into_iter()
        .map(|((supplier, origin), (reorder_cost, item_count))| SupplierOriginCost {
            supplier: supplier.clone(),
            origin,
            reorder_cost,
            item_count,
        })
        .collect();

    out.sort_by(|a, b| {
        descending(a.reorder_cost, b.reorder_cost)
            .then_with(|| a.supplier.cmp(&b.supplier))
            .then_with(|| a.origin.cmp(&b.origin))
    });
    out
}

/// Ordered by category, then class.
pub(crate) fn category_breakdown(classified: &[ClassifiedItem]) -> Vec<CategoryClassValue> {
    let mut groups: BTreeMap<(&str, AbcClass), (f64, usize)> = BTreeMap::new();
    for c in classified {
        let entry = groups
            .entry((c.item.category.as_str(), c.classification))
            .or_insert((0.0, 0));
        entry.0 += c.inventory_value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((category, classification), (inventory_value, item_count))| CategoryClassValue {
            category: category.to_string(),
            classification,
            inventory_value,
            item_count,
        })
        .collect()
}

/// Always three rows (A, B, C), even for empty classes.
pub(crate) fn class_summary(classified: &[ClassifiedItem], total_value: f64) -> Vec<ClassSummary> {
    let total_items = classified.len();

    AbcClass::ALL
        .iter()
        .map(|&class| {
            let (item_count, inventory_value) = classified
                .iter()
                .filter(|c| c.classification == class)
                .fold((0usize, 0.0f64), |(n, v), c| (n + 1, v + c.inventory_value));

            ClassSummary {
                classification: class,
                item_count,
                inventory_value,
                item_share: ratio(item_count as f64, total_items as f64),
                value_share: ratio(inventory_value, total_value),
            }
        })
        .collect()
}

pub(crate) fn totals(
    classified: &[ClassifiedItem],
    reorder: &[ReorderItem],
    total_value: f64,
    margin_excluded_skus: Vec<Sku>,
) -> Totals {
    let class_a_value = classified
        .iter()
        .filter(|c| c.classification == AbcClass::A)
        .map(|c| c.inventory_value)
        .sum();

    let total_reorder_investment = reorder.iter().map(|r| r.reorder_cost).sum();

    let reorder_investment_by_origin = [Origin::Domestic, Origin::Imported]
        .into_iter()
        .map(|origin| OriginInvestment {
            origin,
            reorder_cost: reorder
                .iter()
                .filter(|r| r.origin == origin)
                .map(|r| r.reorder_cost)
                .sum(),
        })
        .collect();

    let margins: Vec<f64> = classified.iter().filter_map(|c| c.margin_pct).collect();
    let average_margin_pct = if margins.is_empty() {
        None
    } else {
        Some(margins.iter().sum::<f64>() / margins.len() as f64)
    };

    Totals {
        item_count: classified.len(),
        total_inventory_value: total_value,
        class_a_value,
        total_reorder_investment,
        reorder_investment_by_origin,
        average_margin_pct,
        margin_excluded_skus,
    }
}

fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole } else { 0.0 }
}
