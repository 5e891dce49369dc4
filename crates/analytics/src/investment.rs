//! Quarterly purchasing budget per origin.
//!
//! Model:
//! - Sum the unit cost of every catalogue item per origin.
//! - Weight each sum into a quarterly base (imports carry a larger weight).
//! - Scale the base by a per-quarter seasonality factor.

use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult};
use stockpulse_inventory::{InventoryItem, Origin};

/// Weights and seasonality factors per origin.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlanConfig {
    pub domestic_weight: f64,
    pub imported_weight: f64,
    pub domestic_quarter_factors: [f64; 4],
    pub imported_quarter_factors: [f64; 4],
}

impl Default for InvestmentPlanConfig {
    fn default() -> Self {
        Self {
            domestic_weight: 0.10,
            imported_weight: 0.15,
            domestic_quarter_factors: [0.9, 1.1, 1.4, 1.9],
            imported_quarter_factors: [0.8, 1.2, 1.5, 2.1],
        }
    }
}

impl InvestmentPlanConfig {
    pub fn with_weights(mut self, domestic: f64, imported: f64) -> Self {
        self.domestic_weight = domestic;
        self.imported_weight = imported;
        self
    }

    pub fn with_quarter_factors(mut self, domestic: [f64; 4], imported: [f64; 4]) -> Self {
        self.domestic_quarter_factors = domestic;
        self.imported_quarter_factors = imported;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        let values = [self.domestic_weight, self.imported_weight]
            .into_iter()
            .chain(self.domestic_quarter_factors)
            .chain(self.imported_quarter_factors);

        for value in values {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DomainError::configuration(format!(
                    "investment weights and quarter factors must be finite and non-negative (got {value})"
                )));
            }
        }
        Ok(())
    }

    fn weight(&self, origin: Origin) -> f64 {
        match origin {
            Origin::Domestic => self.domestic_weight,
            Origin::Imported => self.imported_weight,
        }
    }

    fn factors(&self, origin: Origin) -> [f64; 4] {
        match origin {
            Origin::Domestic => self.domestic_quarter_factors,
            Origin::Imported => self.imported_quarter_factors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginBase {
    pub origin: Origin,
    pub summed_unit_cost: f64,
    pub base: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyInvestment {
    /// 1 through 4.
    pub quarter: u8,
    pub origin: Origin,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Domestic first.
    pub bases: Vec<OriginBase>,
    /// Domestic Q1..Q4, then imported Q1..Q4.
    pub quarters: Vec<QuarterlyInvestment>,
    pub total: f64,
}

impl InvestmentPlan {
    pub fn amount(&self, origin: Origin, quarter: u8) -> Option<f64> {
        self.quarters
            .iter()
            .find(|q| q.origin == origin && q.quarter == quarter)
            .map(|q| q.amount)
    }
}

/// Project the quarterly budget for `items` under `config`.
pub fn investment_plan(
    items: &[InventoryItem],
    config: &InvestmentPlanConfig,
) -> DomainResult<InvestmentPlan> {
    config.validate()?;

    if items.is_empty() {
        return Err(DomainError::EmptyDataset);
    }
    for item in items {
        item.validate()?;
    }

    let mut bases = Vec::with_capacity(2);
    let mut quarters = Vec::with_capacity(8);

    for origin in [Origin::Domestic, Origin::Imported] {
        let summed_unit_cost: f64 = items
            .iter()
            .filter(|i| i.origin == origin)
            .map(|i| i.unit_cost)
            .sum();
        let base = summed_unit_cost * config.weight(origin);

        for (quarter, factor) in (1u8..).zip(config.factors(origin)) {
            quarters.push(QuarterlyInvestment {
                quarter,
                origin,
                amount: base * factor,
            });
        }

        bases.push(OriginBase {
            origin,
            summed_unit_cost,
            base,
        });
    }

    let total = quarters.iter().map(|q| q.amount).sum();

    Ok(InvestmentPlan {
        bases,
        quarters,
        total,
    })
}
