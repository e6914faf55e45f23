// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for record parsing, dataset decoding and chart construction.

use thiserror::Error;

/// Why a single time string could not become a clock value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected \"MM:SS\", got {parts} component(s) in {input:?}")]
    WrongShape { input: String, parts: usize },
    #[error("non-numeric component {component:?} in {input:?}")]
    NotNumeric { input: String, component: String },
    #[error("{component} out of range (0..60) in {input:?}")]
    OutOfRange { input: String, component: &'static str },
    #[error("clock value overflows in {input:?}")]
    Overflow { input: String },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset is not a JSON array of records: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read CSV dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid time: {0}")]
    Time(#[from] TimeParseError),
    #[error("dataset contains no plottable records")]
    EmptyDataset,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
