//! Environment-driven configuration.
//!
//! | variable                       | default |
//! |--------------------------------|---------|
//! | `STOCKPULSE_CSV`               | unset (demo data only) |
//! | `STOCKPULSE_DEMO_SEED`         | 42      |
//! | `STOCKPULSE_DEMO_ITEMS`        | 500     |
//! | `STOCKPULSE_BUFFER_MULTIPLIER` | 2.5     |
//! | `STOCKPULSE_A_CUTOFF`          | 0.80    |
//! | `STOCKPULSE_B_CUTOFF`          | 0.95    |
//! | `STOCKPULSE_DOMESTIC_WEIGHT`   | 0.10    |
//! | `STOCKPULSE_IMPORTED_WEIGHT`   | 0.15    |
//!
//! Unparseable values are logged and replaced by the default. Range checks
//! happen in the classifier and the investment planner, which reject the run
//! instead.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use stockpulse_analytics::{ClassifierConfig, InvestmentPlanConfig};
use stockpulse_infra::{CsvProvider, DatasetProvider, FallbackProvider, SyntheticProvider};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub csv_path: Option<PathBuf>,
    pub demo_seed: u64,
    pub demo_items: usize,
    pub classifier: ClassifierConfig,
    pub investment: InvestmentPlanConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            demo_seed: 42,
            demo_items: 500,
            classifier: ClassifierConfig::default(),
            investment: InvestmentPlanConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let classifier = defaults.classifier;
        let investment = defaults.investment;

        Self {
            csv_path: lookup("STOCKPULSE_CSV")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            demo_seed: parse_or(&lookup, "STOCKPULSE_DEMO_SEED", defaults.demo_seed),
            demo_items: parse_or(&lookup, "STOCKPULSE_DEMO_ITEMS", defaults.demo_items),
            classifier: ClassifierConfig {
                buffer_multiplier: parse_or(
                    &lookup,
                    "STOCKPULSE_BUFFER_MULTIPLIER",
                    classifier.buffer_multiplier,
                ),
                a_cutoff: parse_or(&lookup, "STOCKPULSE_A_CUTOFF", classifier.a_cutoff),
                b_cutoff: parse_or(&lookup, "STOCKPULSE_B_CUTOFF", classifier.b_cutoff),
            },
            investment: investment.with_weights(
                parse_or(&lookup, "STOCKPULSE_DOMESTIC_WEIGHT", investment.domestic_weight),
                parse_or(&lookup, "STOCKPULSE_IMPORTED_WEIGHT", investment.imported_weight),
            ),
        }
    }

    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    /// CSV backed by demo data when a path is configured, demo data otherwise.
    pub fn provider(&self) -> Box<dyn DatasetProvider> {
        let demo = SyntheticProvider::new(self.demo_seed).with_item_count(self.demo_items);
        match &self.csv_path {
            Some(path) => Box::new(FallbackProvider::new(CsvProvider::new(path.clone()), demo)),
            None => Box::new(demo),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(key, value = %raw, "unparseable configuration value; using default");
        default
    })
}
