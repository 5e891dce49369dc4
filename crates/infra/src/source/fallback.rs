use tracing::warn;

use stockpulse_inventory::{Branch, InventoryItem};

use super::{DatasetProvider, LoadedDataset, SourceError};

/// Primary provider with a backup for when it fails or comes back empty.
///
/// The typical pairing is a live export (CSV) backed by synthetic demo data,
/// so a dashboard still has something to show while the export is missing.
pub struct FallbackProvider<P, F> {
    primary: P,
    fallback: F,
    name: String,
}

impl<P: DatasetProvider, F: DatasetProvider> FallbackProvider<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        let name = format!("{}|{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

impl<P: DatasetProvider, F: DatasetProvider> DatasetProvider for FallbackProvider<P, F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<InventoryItem>, SourceError> {
        self.load_dataset().map(|d| d.items)
    }

    fn load_branches(&self) -> Result<Vec<Branch>, SourceError> {
        self.load_dataset().map(|d| d.branches)
    }

    fn load_dataset(&self) -> Result<LoadedDataset, SourceError> {
        match self.primary.load_dataset() {
            Ok(dataset) if !dataset.items.is_empty() => return Ok(dataset),
            Ok(_) => warn!(
                primary = self.primary.name(),
                fallback = self.fallback.name(),
                "primary dataset is empty; switching to fallback"
            ),
            Err(err) => warn!(
                primary = self.primary.name(),
                fallback = self.fallback.name(),
                error = %err,
                "primary dataset unavailable; switching to fallback"
            ),
        }

        let mut dataset = self.fallback.load_dataset()?;
        dataset.fallback_used = true;
        Ok(dataset)
    }
}
