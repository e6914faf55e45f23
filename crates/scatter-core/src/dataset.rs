// File: crates/scatter-core/src/dataset.rs
// Summary: Decode ride records from JSON or CSV; malformed entries are logged and skipped.

use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::error::{ChartError, Result};
use crate::record::{RawRideRecord, RideRecord};

/// Entry that was dropped while decoding, with its position in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Records ready for plotting plus whatever had to be skipped.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<RideRecord>,
    pub skipped: Vec<SkippedRecord>,
}

impl Dataset {
    /// Decode a JSON array of ride records.
    /// Fails only when the payload itself is not an array.
    pub fn from_json_str(payload: &str) -> Result<Self> {
        let items: Vec<Value> = serde_json::from_str(payload)?;
        let mut out = Self::default();
        for (index, item) in items.into_iter().enumerate() {
            let converted = serde_json::from_value::<RawRideRecord>(item)
                .map_err(|e| e.to_string())
                .and_then(|raw| RideRecord::try_from(raw).map_err(|e| e.to_string()));
            out.accept(index, converted);
        }
        out.log_summary();
        Ok(out)
    }

    /// Decode CSV with the JSON field names as headers.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let mut out = Self::default();
        for (index, row) in rdr.deserialize::<RawRideRecord>().enumerate() {
            let converted = match row {
                Ok(raw) => RideRecord::try_from(raw).map_err(|e| e.to_string()),
                // Broken framing (e.g. IO) is not a per-row problem.
                Err(e) if e.is_io_error() => return Err(ChartError::Csv(e)),
                Err(e) => Err(e.to_string()),
            };
            out.accept(index, converted);
        }
        out.log_summary();
        Ok(out)
    }

    /// Load a local dataset; `.csv` files go through the CSV decoder, anything else is JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            let file = std::fs::File::open(path)?;
            Self::from_csv_reader(file)
        } else {
            let payload = std::fs::read_to_string(path)?;
            Self::from_json_str(&payload)
        }
    }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn len(&self) -> usize { self.records.len() }

    /// Error out on a dataset with nothing to plot.
    pub fn require_records(self) -> Result<Self> {
        if self.records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(self)
    }

    fn accept(&mut self, index: usize, converted: std::result::Result<RideRecord, String>) {
        match converted {
            Ok(record) => self.records.push(record),
            Err(reason) => {
                warn!(target: "dataset", "skipping record {}: {}", index, reason);
                self.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    fn log_summary(&self) {
        debug!(
            target: "dataset",
            "decoded {} record(s), skipped {}",
            self.records.len(),
            self.skipped.len()
        );
    }
}
