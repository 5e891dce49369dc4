use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult};

use crate::result::AbcClass;

/// Policy knobs for a classification run.
///
/// Defaults:
/// - `buffer_multiplier = 2.5`: restock to two and a half times the threshold.
/// - `a_cutoff = 0.80`, `b_cutoff = 0.95`: the classic 80/15/5 Pareto split.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub buffer_multiplier: f64,
    pub a_cutoff: f64,
    pub b_cutoff: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            buffer_multiplier: 2.5,
            a_cutoff: 0.80,
            b_cutoff: 0.95,
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer_multiplier(mut self, buffer_multiplier: f64) -> Self {
        self.buffer_multiplier = buffer_multiplier;
        self
    }

    pub fn with_cutoffs(mut self, a_cutoff: f64, b_cutoff: f64) -> Self {
        self.a_cutoff = a_cutoff;
        self.b_cutoff = b_cutoff;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.buffer_multiplier.is_finite() && self.buffer_multiplier > 1.0) {
            return Err(DomainError::configuration(format!(
                "buffer_multiplier must be a finite number greater than 1 (got {})",
                self.buffer_multiplier
            )));
        }

        if !(self.a_cutoff.is_finite() && self.b_cutoff.is_finite()) {
            return Err(DomainError::configuration("cutoffs must be finite numbers"));
        }

        if !(0.0 < self.a_cutoff && self.a_cutoff < self.b_cutoff && self.b_cutoff <= 1.0) {
            return Err(DomainError::configuration(format!(
                "cutoffs must satisfy 0 < a_cutoff < b_cutoff <= 1 (got a={}, b={})",
                self.a_cutoff, self.b_cutoff
            )));
        }

        Ok(())
    }

    /// Boundaries are inclusive on the lower class: a share of exactly
    /// `a_cutoff` is still A.
    pub fn class_for_share(&self, cumulative_share: f64) -> AbcClass {
        if cumulative_share <= self.a_cutoff {
            AbcClass::A
        } else if cumulative_share <= self.b_cutoff {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }
}
