use core::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, warn};

use stockpulse_core::{DomainError, DomainResult};
use stockpulse_inventory::InventoryItem;

use crate::config::ClassifierConfig;
use crate::result::{AbcClass, ClassificationResult, ClassifiedItem, ReorderItem};
use crate::summary;

/// ABC classification and reorder suggestion over one dataset.
///
/// Model:
/// - Rank items by inventory value (cost × stock), descending, stable on ties.
/// - Walk the ranking accumulating value; the share reached *after* each item
///   decides its class against the configured cutoffs.
/// - Items at or below their reorder threshold get a restock quantity up to
///   `threshold × buffer_multiplier`, grouped per supplier.
///
/// Holds only configuration; every call works on the caller's records.
#[derive(Debug, Copy, Clone, Default)]
pub struct InventoryClassifier {
    config: ClassifierConfig,
}

impl InventoryClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, items: &[InventoryItem]) -> DomainResult<ClassificationResult> {
        self.config.validate()?;

        if items.is_empty() {
            return Err(DomainError::EmptyDataset);
        }

        validate_records(items)?;

        let mut ranked: Vec<(usize, f64)> = items
            .iter()
            .map(InventoryItem::inventory_value)
            .enumerate()
            .collect();
        // `sort_by` is stable: equal values keep input order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        // Summed in rank order so the last running total equals it exactly.
        let total_value: f64 = ranked.iter().map(|(_, value)| value).sum();
        if !total_value.is_finite() {
            return Err(DomainError::record(
                items[ranked[0].0].sku.as_str(),
                "total inventory value overflows",
            ));
        }

        let mut margin_excluded = Vec::new();
        let mut running_value = 0.0;
        let mut classified = Vec::with_capacity(items.len());

        for (position, &(input_index, inventory_value)) in ranked.iter().enumerate() {
            let item = &items[input_index];

            let (cumulative_share, classification) = if total_value > 0.0 {
                running_value += inventory_value;
                let share = running_value / total_value;
                (share, self.config.class_for_share(share))
            } else {
                (0.0, AbcClass::C)
            };

            let margin_pct = match item.margin_pct() {
                Ok(margin) => Some(margin),
                Err(err) => {
                    warn!(sku = %item.sku, error = %err, "excluding item from margin aggregates");
                    margin_excluded.push(item.sku.clone());
                    None
                }
            };

            classified.push(ClassifiedItem {
                rank: position + 1,
                input_index,
                item: item.clone(),
                inventory_value,
                margin_pct,
                classification,
                cumulative_share,
            });
        }

        let reorder_items = if total_value > 0.0 {
            reorder_suggestions(&classified, self.config.buffer_multiplier)
        } else {
            debug!("total inventory value is zero; skipping reorder computation");
            Vec::new()
        };

        let supplier_summary = summary::supplier_summary(&reorder_items);
        let supplier_origin_breakdown = summary::supplier_origin_breakdown(&reorder_items);
        let category_breakdown = summary::category_breakdown(&classified);
        let class_summary = summary::class_summary(&classified, total_value);
        let totals = summary::totals(&classified, &reorder_items, total_value, margin_excluded);

        debug!(
            items = classified.len(),
            class_a = class_summary[0].item_count,
            reorder_items = reorder_items.len(),
            suppliers = supplier_summary.len(),
            total_value,
            "inventory classification complete"
        );

        Ok(ClassificationResult {
            classified_items: classified,
            reorder_items,
            supplier_summary,
            supplier_origin_breakdown,
            category_breakdown,
            class_summary,
            totals,
        })
    }
}

/// Classify `items` under `config`.
pub fn classify(
    items: &[InventoryItem],
    config: &ClassifierConfig,
) -> DomainResult<ClassificationResult> {
    InventoryClassifier::new(*config).classify(items)
}

fn validate_records(items: &[InventoryItem]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;

        if !item.inventory_value().is_finite() {
            return Err(DomainError::record(
                item.sku.as_str(),
                "inventory_value overflows",
            ));
        }

        if !seen.insert(item.sku.as_str()) {
            return Err(DomainError::record(item.sku.as_str(), "duplicate sku"));
        }
    }
    Ok(())
}

fn reorder_suggestions(classified: &[ClassifiedItem], buffer_multiplier: f64) -> Vec<ReorderItem> {
    classified
        .iter()
        .filter_map(|c| {
            let reorder_quantity = c.item.reorder_quantity(buffer_multiplier)?;
            Some(ReorderItem {
                rank: c.rank,
                sku: c.item.sku.clone(),
                supplier: c.item.supplier.clone(),
                origin: c.item.origin,
                category: c.item.category.clone(),
                classification: c.classification,
                stock_on_hand: c.item.stock_on_hand,
                reorder_threshold: c.item.reorder_threshold,
                unit_cost: c.item.unit_cost,
                reorder_quantity,
                reorder_cost: reorder_quantity * c.item.unit_cost,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockpulse_inventory::Origin;

    /// An item whose inventory value is exactly `value` (unit cost 1).
    fn valued(sku: &str, value: f64) -> InventoryItem {
        InventoryItem::new(sku, 1.0, 1.35, value, 0.0)
    }

    fn default_classifier() -> InventoryClassifier {
        InventoryClassifier::default()
    }

    fn classes(result: &ClassificationResult) -> Vec<(String, AbcClass)> {
        result
            .classified_items
            .iter()
            .map(|c| (c.item.sku.to_string(), c.classification))
            .collect()
    }

    #[test]
    fn eighty_percent_boundary_is_class_a() {
        let items = vec![valued("x", 500.0), valued("y", 300.0), valued("z", 200.0)];

        let result = default_classifier().classify(&items).unwrap();

        let shares: Vec<f64> = result
            .classified_items
            .iter()
            .map(|c| c.cumulative_share)
            .collect();
        assert_eq!(shares, vec![0.5, 0.8, 1.0]);
        assert_eq!(
            classes(&result),
            vec![
                ("x".to_string(), AbcClass::A),
                ("y".to_string(), AbcClass::A),
                ("z".to_string(), AbcClass::C),
            ]
        );
        assert_eq!(result.totals.total_inventory_value, 1000.0);
        assert_eq!(result.totals.class_a_value, 800.0);
    }

    #[test]
    fn items_are_ranked_by_value_not_input_order() {
        let items = vec![valued("small", 50.0), valued("big", 800.0), valued("mid", 150.0)];

        let result = default_classifier().classify(&items).unwrap();

        let order: Vec<(&str, usize, usize)> = result
            .classified_items
            .iter()
            .map(|c| (c.item.sku.as_str(), c.rank, c.input_index))
            .collect();
        assert_eq!(order, vec![("big", 1, 1), ("mid", 2, 2), ("small", 3, 0)]);
        assert_eq!(result.find("big").unwrap().classification, AbcClass::A);
        // 950 / 1000 lands exactly on the B cutoff, which is inclusive.
        assert_eq!(result.find("mid").unwrap().cumulative_share, 0.95);
        assert_eq!(result.find("mid").unwrap().classification, AbcClass::B);
        assert_eq!(result.find("small").unwrap().classification, AbcClass::C);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![valued("first", 100.0), valued("second", 100.0), valued("third", 100.0)];

        let result = default_classifier().classify(&items).unwrap();

        let skus: Vec<&str> = result
            .classified_items
            .iter()
            .map(|c| c.item.sku.as_str())
            .collect();
        assert_eq!(skus, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = default_classifier().classify(&[]).unwrap_err();
        assert_eq!(err, DomainError::EmptyDataset);
    }

    #[test]
    fn buffer_below_one_is_rejected() {
        let classifier =
            InventoryClassifier::new(ClassifierConfig::new().with_buffer_multiplier(0.5));
        let err = classifier.classify(&[valued("x", 1.0)]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration(_)));
    }

    #[test]
    fn low_stock_item_gets_buffered_reorder() {
        let items = vec![
            InventoryItem::new("low", 4.0, 5.4, 5.0, 10.0).with_supplier("acme"),
            InventoryItem::new("healthy", 4.0, 5.4, 30.0, 10.0).with_supplier("acme"),
        ];

        let result = default_classifier().classify(&items).unwrap();

        let low = result.reorder_for("low").unwrap();
        assert_eq!(low.reorder_quantity, 20.0);
        assert_eq!(low.reorder_cost, 80.0);
        assert!(result.reorder_for("healthy").is_none());
        assert_eq!(result.reorder_items.len(), 1);
    }

    #[test]
    fn zero_threshold_items_never_reorder() {
        let items = vec![
            InventoryItem::new("empty", 4.0, 5.4, 0.0, 0.0),
            InventoryItem::new("stocked", 4.0, 5.4, 3.0, 0.0),
        ];

        let result = default_classifier().classify(&items).unwrap();

        assert!(result.reorder_items.is_empty());
        assert!(result.supplier_summary.is_empty());
    }

    #[test]
    fn zero_total_value_classifies_everything_c() {
        let items = vec![
            InventoryItem::new("a", 0.0, 1.0, 5.0, 10.0),
            InventoryItem::new("b", 3.0, 4.0, 0.0, 10.0),
        ];

        let result = default_classifier().classify(&items).unwrap();

        assert!(result.classified_items.iter().all(|c| c.classification == AbcClass::C));
        assert!(result.classified_items.iter().all(|c| c.cumulative_share == 0.0));
        assert!(result.reorder_items.is_empty());
        assert_eq!(result.totals.total_reorder_investment, 0.0);
    }

    #[test]
    fn negative_fields_are_invalid_records() {
        let items = vec![valued("ok", 1.0), InventoryItem::new("bad", -2.0, 1.0, 1.0, 1.0)];

        match default_classifier().classify(&items).unwrap_err() {
            DomainError::InvalidRecord { sku, .. } => assert_eq!(sku, "bad"),
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_skus_are_invalid_records() {
        let items = vec![valued("dup", 1.0), valued("dup", 2.0)];
        let err = default_classifier().classify(&items).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord { .. }));
    }

    #[test]
    fn zero_price_is_excluded_from_margin_not_fatal() {
        let items = vec![
            InventoryItem::new("free", 10.0, 0.0, 1.0, 0.0),
            InventoryItem::new("priced", 75.0, 100.0, 1.0, 0.0),
        ];

        let result = default_classifier().classify(&items).unwrap();

        assert_eq!(result.find("free").unwrap().margin_pct, None);
        assert_eq!(result.find("priced").unwrap().margin_pct, Some(25.0));
        assert_eq!(result.totals.average_margin_pct, Some(25.0));
        assert_eq!(result.totals.margin_excluded_skus.len(), 1);
        assert_eq!(result.totals.margin_excluded_skus[0].as_str(), "free");
    }

    #[test]
    fn reorder_spend_grouped_by_supplier_and_origin() {
        let items = vec![
            InventoryItem::new("a", 10.0, 13.5, 2.0, 4.0)
                .with_supplier("north")
                .with_origin(Origin::Imported),
            InventoryItem::new("b", 1.0, 1.35, 2.0, 4.0)
                .with_supplier("south")
                .with_origin(Origin::Domestic),
            InventoryItem::new("c", 2.0, 2.7, 1.0, 2.0)
                .with_supplier("south")
                .with_origin(Origin::Domestic),
        ];

        let result = default_classifier().classify(&items).unwrap();

        // a: ceil(4*2.5-2)=8 units * 10 = 80; b: 8 * 1 = 8; c: ceil(5-1)=4 * 2 = 8.
        let suppliers: Vec<(&str, f64, usize)> = result
            .supplier_summary
            .iter()
            .map(|s| (s.supplier.as_str(), s.total_reorder_cost, s.item_count))
            .collect();
        assert_eq!(suppliers, vec![("north", 80.0, 1), ("south", 16.0, 2)]);

        assert_eq!(result.totals.total_reorder_investment, 96.0);
        let by_origin: Vec<(Origin, f64)> = result
            .totals
            .reorder_investment_by_origin
            .iter()
            .map(|o| (o.origin, o.reorder_cost))
            .collect();
        assert_eq!(by_origin, vec![(Origin::Domestic, 16.0), (Origin::Imported, 80.0)]);
    }

    #[test]
    fn category_breakdown_groups_value_by_class() {
        let items = vec![
            valued("p1", 700.0).with_category("paint"),
            valued("t1", 200.0).with_category("tools"),
            valued("p2", 100.0).with_category("paint"),
        ];

        let result = default_classifier().classify(&items).unwrap();

        let rows: Vec<(&str, AbcClass, f64)> = result
            .category_breakdown
            .iter()
            .map(|r| (r.category.as_str(), r.classification, r.inventory_value))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("paint", AbcClass::A, 700.0),
                ("paint", AbcClass::C, 100.0),
                ("tools", AbcClass::B, 200.0),
            ]
        );
    }

    #[test]
    fn custom_cutoffs_change_the_split() {
        let items = vec![valued("x", 500.0), valued("y", 300.0), valued("z", 200.0)];
        let classifier = InventoryClassifier::new(ClassifierConfig::new().with_cutoffs(0.5, 0.8));

        let result = classifier.classify(&items).unwrap();

        let got: Vec<AbcClass> = result.classified_items.iter().map(|c| c.classification).collect();
        assert_eq!(got, vec![AbcClass::A, AbcClass::B, AbcClass::C]);
    }

    #[test]
    fn class_summary_reports_portfolio_share() {
        let items = vec![valued("x", 500.0), valued("y", 300.0), valued("z", 200.0), valued("w", 0.0)];

        let result = default_classifier().classify(&items).unwrap();

        let a = &result.class_summary[0];
        assert_eq!(a.classification, AbcClass::A);
        assert_eq!(a.item_count, 2);
        assert_eq!(a.item_share, 0.5);
        assert_eq!(a.value_share, 0.8);
    }

    fn arb_item(index: usize) -> impl Strategy<Value = InventoryItem> {
        (
            0.0f64..500.0,
            0.0f64..200.0,
            0.0f64..100.0,
            prop::sample::select(vec!["north", "south", "east", "west"]),
            any::<bool>(),
        )
            .prop_map(move |(cost, stock, threshold, supplier, imported)| {
                InventoryItem::new(format!("SKU-{index:04}"), cost, cost * 1.35, stock, threshold)
                    .with_supplier(supplier)
                    .with_origin(if imported { Origin::Imported } else { Origin::Domestic })
            })
    }

    fn arb_items() -> impl Strategy<Value = Vec<InventoryItem>> {
        (1usize..40).prop_flat_map(|n| (0..n).map(arb_item).collect::<Vec<_>>())
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: every input item appears exactly once with one class.
        #[test]
        fn every_item_classified_once(items in arb_items()) {
            let result = default_classifier().classify(&items).unwrap();

            prop_assert_eq!(result.classified_items.len(), items.len());
            let mut indices: Vec<usize> =
                result.classified_items.iter().map(|c| c.input_index).collect();
            indices.sort_unstable();
            prop_assert_eq!(indices, (0..items.len()).collect::<Vec<_>>());

            let counted: usize = result.class_summary.iter().map(|s| s.item_count).sum();
            prop_assert_eq!(counted, items.len());
        }

        /// Property: cumulative share never decreases along the ranking.
        #[test]
        fn cumulative_share_is_monotonic(items in arb_items()) {
            let result = default_classifier().classify(&items).unwrap();

            for pair in result.classified_items.windows(2) {
                prop_assert!(pair[0].inventory_value >= pair[1].inventory_value);
                prop_assert!(pair[0].cumulative_share <= pair[1].cumulative_share);
            }
        }

        /// Property: class A is the longest prefix whose share stays within
        /// the A cutoff.
        #[test]
        fn class_a_is_bounded_prefix(items in arb_items()) {
            let config = ClassifierConfig::default();
            let result = default_classifier().classify(&items).unwrap();
            let total = result.totals.total_inventory_value;
            prop_assume!(total > 0.0);

            let a_count = result.items_in(AbcClass::A).count();
            prop_assert!(result.classified_items[..a_count]
                .iter()
                .all(|c| c.classification == AbcClass::A));
            prop_assert!(result.totals.class_a_value <= config.a_cutoff * total * (1.0 + 1e-9));

            if let Some(next) = result.classified_items.get(a_count) {
                prop_assert!(next.cumulative_share > config.a_cutoff);
            }
        }

        /// Property: identical input and configuration serialize identically.
        #[test]
        fn classification_is_deterministic(items in arb_items()) {
            let first = serde_json::to_vec(&default_classifier().classify(&items).unwrap()).unwrap();
            let second = serde_json::to_vec(&default_classifier().classify(&items).unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: reorder quantities are strictly positive and only for
        /// items at or below threshold.
        #[test]
        fn reorder_quantities_are_positive(items in arb_items()) {
            let result = default_classifier().classify(&items).unwrap();

            for r in &result.reorder_items {
                prop_assert!(r.reorder_quantity > 0.0);
                prop_assert!(r.stock_on_hand <= r.reorder_threshold);
            }

            let summed: usize = result.supplier_summary.iter().map(|s| s.item_count).sum();
            prop_assert_eq!(summed, result.reorder_items.len());
            for pair in result.supplier_summary.windows(2) {
                prop_assert!(pair[0].total_reorder_cost >= pair[1].total_reorder_cost);
            }
        }
    }
}
