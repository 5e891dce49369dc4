//! Seeded demo dataset.
//!
//! Produces a hardware-store style catalogue with a mix of domestic and
//! imported goods and roughly one item in five below its reorder threshold.
//! The same seed always yields the same records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stockpulse_core::{Sku, SupplierId};
use stockpulse_inventory::{Branch, InventoryItem, Origin};

use super::{DatasetProvider, SourceError};

const CATEGORIES: [&str; 5] = ["power-tools", "construction", "paint", "plumbing", "electrical"];

const SUPPLIERS: [&str; 8] = [
    "Global Hardware Imports",
    "Steelworks Supply",
    "Strongline Distribution",
    "Pro Tools Wholesale",
    "Premium Coatings",
    "Central Pipe & Fitting",
    "Reliable Electric",
    "Builders Trading Co",
];

const REGIONS: [&str; 6] = ["Central", "Capital", "West", "East", "Andes", "South"];

const IMPORTED_PROBABILITY: f64 = 0.4;
const LOW_STOCK_PROBABILITY: f64 = 0.2;
const MARKUP: f64 = 1.35;

#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    seed: u64,
    item_count: usize,
    branch_count: usize,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self {
            seed: 42,
            item_count: 500,
            branch_count: 24,
        }
    }
}

impl SyntheticProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_branch_count(mut self, branch_count: usize) -> Self {
        self.branch_count = branch_count;
        self
    }

    pub fn generate_branches(&self) -> Vec<Branch> {
        // Separate stream so the branch count never shifts the catalogue.
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(1));
        (1..=self.branch_count)
            .map(|i| Branch {
                name: format!("Branch {i:02}"),
                region: REGIONS[rng.gen_range(0..REGIONS.len())].to_string(),
                monthly_sales: f64::from(rng.gen_range(25_000u32..98_000)),
            })
            .collect()
    }

    pub fn generate(&self) -> Vec<InventoryItem> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.item_count).map(|i| demo_item(&mut rng, i)).collect()
    }
}

impl DatasetProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<Vec<InventoryItem>, SourceError> {
        Ok(self.generate())
    }

    fn load_branches(&self) -> Result<Vec<Branch>, SourceError> {
        Ok(self.generate_branches())
    }
}

fn demo_item(rng: &mut StdRng, index: usize) -> InventoryItem {
    let origin = if rng.gen_bool(IMPORTED_PROBABILITY) {
        Origin::Imported
    } else {
        Origin::Domestic
    };

    // Imports cost more and take customs time.
    let (unit_cost, lead_time_days) = match origin {
        Origin::Imported => (cents(rng.gen_range(25.0..600.0)), rng.gen_range(45..120)),
        Origin::Domestic => (cents(rng.gen_range(5.0..150.0)), rng.gen_range(2..15)),
    };

    let reorder_threshold = f64::from(rng.gen_range(10u32..100));
    let stock_on_hand = if rng.gen_bool(LOW_STOCK_PROBABILITY) {
        (reorder_threshold * rng.gen_range(0.1..0.9)).floor()
    } else {
        (reorder_threshold * rng.gen_range(1.5..5.0)).floor()
    };

    let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    let supplier = SUPPLIERS[rng.gen_range(0..SUPPLIERS.len())];

    InventoryItem {
        sku: Sku::new(format!("DEMO-{}", 10_000 + index)),
        description: Some(format!("Demo product {index}")),
        category: category.to_string(),
        origin,
        supplier: SupplierId::from(supplier),
        unit_cost,
        unit_price: cents(unit_cost * MARKUP),
        stock_on_hand,
        reorder_threshold,
        lead_time_days: Some(lead_time_days),
    }
}

fn cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
