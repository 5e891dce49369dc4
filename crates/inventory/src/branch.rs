use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult};

/// A store in the retail network with its monthly sales figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub region: String,
    pub monthly_sales: f64,
}

impl Branch {
    pub fn new(name: impl Into<String>, region: impl Into<String>, monthly_sales: f64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            monthly_sales,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::record(&self.name, "branch name cannot be empty"));
        }
        if !(self.monthly_sales.is_finite() && self.monthly_sales >= 0.0) {
            return Err(DomainError::record(
                &self.name,
                format!("monthly_sales must be a finite non-negative number (got {})", self.monthly_sales),
            ));
        }
        Ok(())
    }
}
