//! Peptide index entries for the browse/search layer.

use ampscore_common::record;
use ampscore_engine::keys;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One row of the merged peptide index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexEntry {
    /// Primary ID: SPADE ID when present, DRAMP ID otherwise.
    pub id: String,
    pub spade_id: Option<String>,
    pub dramp_id: Option<String>,
    pub name: String,
    pub sequence: String,
    pub length: usize,
    pub filename: String,
}

impl IndexEntry {
    /// Build an index entry from a raw record.
    ///
    /// Records carrying neither a SPADE nor a DRAMP ID cannot be indexed
    /// and are skipped with a warning.
    pub fn from_record(rec: &Value, filename: &str) -> Option<Self> {
        let spade_id = record::locate_str(rec, keys::SPADE_ID).map(str::to_string);
        let dramp_id = record::locate_str(rec, keys::DRAMP_ID).map(str::to_string);

        let id = match spade_id.clone().or_else(|| dramp_id.clone()) {
            Some(id) => id,
            None => {
                warn!(filename, "record has neither SPADE ID nor DRAMP ID, skipping index entry");
                return None;
            }
        };

        let name = record::locate_str(rec, keys::PEPTIDE_NAME)
            .unwrap_or("N/A")
            .to_string();
        let sequence = record::locate_str(rec, keys::SEQUENCE)
            .unwrap_or_default()
            .to_string();
        let length = sequence.chars().count();

        Some(Self {
            id,
            spade_id,
            dramp_id,
            name,
            sequence,
            length,
            filename: filename.to_string(),
        })
    }
}
