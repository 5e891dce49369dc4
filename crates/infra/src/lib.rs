//! Infrastructure layer: dataset providers and the report envelope.
//!
//! Everything that touches files, randomness or wall-clock time lives here,
//! keeping `stockpulse-analytics` a pure function of its input.

pub mod report;
pub mod source;

pub use report::{AnalysisError, AnalysisReport, run_analysis};
pub use source::{
    CsvProvider, DatasetProvider, FallbackProvider, LoadedDataset, SourceError,
    SyntheticProvider,
};
