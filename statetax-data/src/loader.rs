use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use statetax_core::{JurisdictionSchema, SchemaError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading or querying the jurisdiction dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read tax data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tax data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid schema for jurisdiction '{jurisdiction}': {source}")]
    InvalidSchema {
        jurisdiction: String,
        #[source]
        source: SchemaError,
    },

    #[error("no tax data available for jurisdiction '{0}'")]
    JurisdictionNotFound(String),
}

/// The full jurisdiction map from a serialized tax document, keyed by
/// jurisdiction name.
///
/// Every schema is validated eagerly at parse time, so a malformed shape is
/// rejected here and never reaches the engine. Schedules with no bracket
/// data are tolerated (jurisdictions without an income tax publish empty
/// tables) and surface as `NoBracketData` only when a computation is
/// attempted against them.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TaxDataset {
    jurisdictions: BTreeMap<String, JurisdictionSchema>,
}

impl TaxDataset {
    /// Parses and validates a tax document from any reader.
    pub fn parse<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let dataset: TaxDataset = serde_json::from_reader(reader)?;

        for (name, schema) in &dataset.jurisdictions {
            schema
                .validate()
                .map_err(|source| DatasetError::InvalidSchema {
                    jurisdiction: name.clone(),
                    source,
                })?;

            for (status, schedule) in &schema.schedules {
                if schedule.brackets.is_empty() {
                    warn!(
                        jurisdiction = %name,
                        status = %status,
                        "schedule has no bracket data"
                    );
                }
            }
        }

        debug!(
            jurisdictions = dataset.jurisdictions.len(),
            "loaded tax dataset"
        );
        Ok(dataset)
    }

    /// Parses and validates a tax document from a file on disk.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Looks up one jurisdiction's schema.
    ///
    /// A miss is [`DatasetError::JurisdictionNotFound`]; callers typically
    /// render it as a "no tax data available" fallback rather than treating
    /// it as fatal.
    pub fn get(&self, jurisdiction: &str) -> Result<&JurisdictionSchema, DatasetError> {
        self.jurisdictions
            .get(jurisdiction)
            .ok_or_else(|| DatasetError::JurisdictionNotFound(jurisdiction.to_string()))
    }

    /// Jurisdiction names in sorted order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = &str> {
        self.jurisdictions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.jurisdictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty()
    }
}
