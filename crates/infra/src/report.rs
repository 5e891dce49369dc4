use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use stockpulse_analytics::{
    ClassificationResult, ClassifierConfig, InventoryClassifier, InvestmentPlan,
    InvestmentPlanConfig, NetworkSummary, investment_plan, network_summary,
};
use stockpulse_core::{DomainError, RunId};

use crate::source::{DatasetProvider, SourceError};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Envelope handed to the presentation layer.
///
/// Run metadata (id, timestamp, data origin) sits here rather than in
/// `ClassificationResult`, which stays reproducible byte for byte.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub fallback_used: bool,
    pub config: ClassifierConfig,
    pub result: ClassificationResult,
    pub investment_config: InvestmentPlanConfig,
    pub investment_plan: InvestmentPlan,
    /// `None` when the provider carries no branch records.
    pub network: Option<NetworkSummary>,
}

/// Load a dataset from `provider`, classify it and plan purchasing.
pub fn run_analysis<P>(
    provider: &P,
    classifier: &InventoryClassifier,
    investment: &InvestmentPlanConfig,
) -> Result<AnalysisReport, AnalysisError>
where
    P: DatasetProvider + ?Sized,
{
    let run_id = RunId::new();
    let dataset = provider.load_dataset()?;
    let result = classifier.classify(&dataset.items)?;
    let plan = investment_plan(&dataset.items, investment)?;
    let network = if dataset.branches.is_empty() {
        None
    } else {
        Some(network_summary(&dataset.branches)?)
    };

    info!(
        %run_id,
        source = %dataset.source,
        fallback_used = dataset.fallback_used,
        items = result.totals.item_count,
        reorder_items = result.reorder_items.len(),
        branches = dataset.branches.len(),
        "analysis run complete"
    );

    Ok(AnalysisReport {
        run_id,
        generated_at: Utc::now(),
        source: dataset.source,
        fallback_used: dataset.fallback_used,
        config: *classifier.config(),
        result,
        investment_config: *investment,
        investment_plan: plan,
        network,
    })
}
