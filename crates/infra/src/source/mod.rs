//! Input providers.
//!
//! ## Design
//!
//! - A provider only knows how to produce `InventoryItem` records
//! - Whether data is "real" or "demo" is decided by composing providers
//!   (see `FallbackProvider`), never by the analytics core
//! - Providers are synchronous and owned by the caller; no global handles

pub mod csv;
pub mod fallback;
pub mod synthetic;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use stockpulse_inventory::{Branch, InventoryItem};

pub use self::csv::CsvProvider;
pub use fallback::FallbackProvider;
pub use synthetic::SyntheticProvider;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: ::csv::Error,
    },

    #[error("invalid value at line {line}: {reason}")]
    InvalidValue { line: usize, reason: String },

    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Records plus where they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedDataset {
    pub items: Vec<InventoryItem>,
    /// Empty when the provider has no branch data.
    pub branches: Vec<Branch>,
    /// Name of the provider that actually served the records.
    pub source: String,
    pub fallback_used: bool,
}

/// Something that can produce a fresh set of inventory records.
pub trait DatasetProvider: Send + Sync {
    /// Short label used in logs and reports.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<InventoryItem>, SourceError>;

    /// Branch network records, if this provider carries any.
    fn load_branches(&self) -> Result<Vec<Branch>, SourceError> {
        Ok(Vec::new())
    }

    /// Load and tag the records with the serving provider.
    fn load_dataset(&self) -> Result<LoadedDataset, SourceError> {
        Ok(LoadedDataset {
            items: self.load()?,
            branches: self.load_branches()?,
            source: self.name().to_string(),
            fallback_used: false,
        })
    }
}

impl<P: DatasetProvider + ?Sized> DatasetProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<InventoryItem>, SourceError> {
        (**self).load()
    }

    fn load_branches(&self) -> Result<Vec<Branch>, SourceError> {
        (**self).load_branches()
    }

    fn load_dataset(&self) -> Result<LoadedDataset, SourceError> {
        (**self).load_dataset()
    }
}
