//! Command-line entry point: configuration, provider selection and one
//! analysis run.

pub mod config;

pub use config::AppConfig;

use stockpulse_analytics::InventoryClassifier;
use stockpulse_infra::{AnalysisError, AnalysisReport, run_analysis};

/// Run one analysis with the providers and policy described by `config`.
pub fn run(config: &AppConfig) -> Result<AnalysisReport, AnalysisError> {
    let provider = config.provider();
    let classifier = InventoryClassifier::new(config.classifier);
    run_analysis(provider.as_ref(), &classifier, &config.investment)
}
