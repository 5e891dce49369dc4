use core::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult};
use stockpulse_inventory::Branch;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSales {
    pub region: String,
    pub branch_count: usize,
    pub monthly_sales: f64,
}

/// Sales picture across the branch network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub branch_count: usize,
    pub total_monthly_sales: f64,
    /// Highest monthly sales; the earliest branch wins a tie.
    pub leading_branch: Branch,
    /// Descending by sales, ties by region.
    pub regions: Vec<RegionSales>,
}

pub fn network_summary(branches: &[Branch]) -> DomainResult<NetworkSummary> {
    let Some(first) = branches.first() else {
        return Err(DomainError::EmptyDataset);
    };
    for branch in branches {
        branch.validate()?;
    }

    let mut leading = first;
    for branch in &branches[1..] {
        if branch.monthly_sales > leading.monthly_sales {
            leading = branch;
        }
    }

    let mut by_region: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for branch in branches {
        let entry = by_region.entry(branch.region.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += branch.monthly_sales;
    }

    let mut regions: Vec<RegionSales> = by_region
        .into_iter()
        .map(|(region, (branch_count, monthly_sales))| RegionSales {
            region: region.to_string(),
            branch_count,
            monthly_sales,
        })
        .collect();
    regions.sort_by(|a, b| {
        b.monthly_sales
            .partial_cmp(&a.monthly_sales)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.region.cmp(&b.region))
    });

    Ok(NetworkSummary {
        branch_count: branches.len(),
        total_monthly_sales: branches.iter().map(|b| b.monthly_sales).sum(),
        leading_branch: leading.clone(),
        regions,
    })
}
