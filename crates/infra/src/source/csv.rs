//! CSV inventory loader.
//!
//! Expected header columns:
//!   sku, description, category, origin, supplier, unit_cost, unit_price,
//!   stock_on_hand, reorder_threshold, lead_time_days
//!
//! `description` and `lead_time_days` may be absent or empty.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use ::csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use stockpulse_core::{Sku, SupplierId};
use stockpulse_inventory::{InventoryItem, Origin};

use super::{DatasetProvider, SourceError};

#[derive(Debug, Clone, Deserialize)]
struct CsvRow {
    sku: String,
    #[serde(default)]
    description: Option<String>,
    category: String,
    origin: String,
    supplier: String,
    unit_cost: f64,
    unit_price: f64,
    stock_on_hand: f64,
    reorder_threshold: f64,
    #[serde(default)]
    lead_time_days: Option<u32>,
}

impl CsvRow {
    fn into_item(self, line: usize) -> Result<InventoryItem, SourceError> {
        let origin: Origin = self.origin.parse().map_err(|e| SourceError::InvalidValue {
            line,
            reason: format!("{e}"),
        })?;

        Ok(InventoryItem {
            sku: Sku::new(self.sku),
            description: self.description.filter(|d| !d.is_empty()),
            category: self.category,
            origin,
            supplier: SupplierId::new(self.supplier),
            unit_cost: self.unit_cost,
            unit_price: self.unit_price,
            stock_on_hand: self.stock_on_hand,
            reorder_threshold: self.reorder_threshold,
            lead_time_days: self.lead_time_days,
        })
    }
}

/// Parse inventory records from any CSV reader.
///
/// Record validation (negative values, duplicates) is left to the
/// classifier; this only enforces shape and types.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<InventoryItem>, SourceError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| SourceError::Csv { line: 1, source })?
        .clone();

    let mut items = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|source| SourceError::Csv {
            line: error_line(&source),
            source,
        })?;
        // Line where the record starts; quoted fields may span several lines.
        let line = record.position().map_or(0, |p| p.line() as usize);
        let row: CsvRow = record
            .deserialize(Some(&headers))
            .map_err(|source| SourceError::Csv { line, source })?;
        items.push(row.into_item(line)?);
    }

    Ok(items)
}

fn error_line(err: &::csv::Error) -> usize {
    err.position().map_or(0, |p| p.line() as usize)
}

/// Loads a dataset from a CSV file on each call.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    path: PathBuf,
    name: String,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("csv:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetProvider for CsvProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<InventoryItem>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let items = read_items(file)?;
        debug!(path = %self.path.display(), items = items.len(), "loaded CSV dataset");
        Ok(items)
    }
}
