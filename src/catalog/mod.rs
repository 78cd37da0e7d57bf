//! Segment catalog: the static table of track segment kinds
//!
//! The catalog maps segment names to their type code and movement deltas,
//! and type codes back to names. It is built once and then only read, so
//! callers construct it explicitly and pass it to whatever needs it.
//!
//! Catalog files are JSON objects keyed by segment name:
//!
//! ```json
//! {
//!   "Flat": { "Type": "0x00", "ForwardDelta": 1, "SidewaysDelta": 0,
//!             "ElevationDelta": 0, "DirectionDelta": "none" }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use td6_rs::catalog::SegmentCatalog;
//! use td6_rs::types::SegmentTypeCode;
//!
//! let catalog = SegmentCatalog::builtin();
//! assert_eq!(catalog.lookup(SegmentTypeCode(0x00)).name(), "Flat");
//! assert_eq!(catalog.lookup(SegmentTypeCode(0xFE)).name(), "Unknown Track Type");
//! ```

mod record;

pub use record::{Movement, SegmentKind, SegmentRecord};

use crate::error::{Result, Td6Error};
use crate::types::SegmentTypeCode;
use record::CatalogEntry;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, error};

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Immutable lookup table of segment kinds
#[derive(Debug, Clone, Default)]
pub struct SegmentCatalog {
    records: Vec<SegmentRecord>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<SegmentTypeCode, usize>,
}

impl SegmentCatalog {
    /// Build a catalog from records, rejecting two records that share a code or name
    pub fn from_records(records: impl IntoIterator<Item = SegmentRecord>) -> Result<Self> {
        let mut catalog = SegmentCatalog::default();

        for record in records {
            if let Some(&existing) = catalog.by_code.get(&record.code) {
                return Err(Td6Error::DuplicateTypeCode {
                    code: record.code.raw_value(),
                    first: catalog.records[existing].name.clone(),
                    second: record.name,
                });
            }
            if catalog.by_name.contains_key(&record.name) {
                return Err(Td6Error::DuplicateSegmentName(record.name));
            }

            let index = catalog.records.len();
            catalog.by_code.insert(record.code, index);
            catalog.by_name.insert(record.name.clone(), index);
            catalog.records.push(record);
        }

        debug!(segments = catalog.records.len(), "built segment catalog");
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: BTreeMap<String, CatalogEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The catalog of standard coaster track elements shipped with the crate
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(error = %err, "embedded segment catalog is invalid; every segment will be unknown");
                Self::default()
            }
        }
    }

    fn from_entries(entries: BTreeMap<String, CatalogEntry>) -> Result<Self> {
        let mut records = Vec::with_capacity(entries.len());

        for (name, entry) in entries {
            let code = SegmentTypeCode::from_hex_str(&entry.type_code).ok_or_else(|| {
                Td6Error::InvalidTypeCode(format!("{} for segment {}", entry.type_code, name))
            })?;

            records.push(SegmentRecord {
                name,
                code,
                forward_delta: entry.forward_delta,
                sideways_delta: entry.sideways_delta,
                elevation_delta: entry.elevation_delta,
                turn: entry.direction_delta,
            });
        }

        Self::from_records(records)
    }

    /// Resolve a type code; unlisted codes resolve to [`SegmentKind::Unknown`]
    pub fn lookup(&self, code: SegmentTypeCode) -> SegmentKind<'_> {
        match self.by_code.get(&code) {
            Some(&index) => SegmentKind::Known(&self.records[index]),
            None => SegmentKind::Unknown(code),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SegmentRecord> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    pub fn require(&self, name: &str) -> Result<&SegmentRecord> {
        self.get(name).ok_or_else(|| Td6Error::SegmentNotFound(name.to_string()))
    }

    /// Name of the segment with this code, if the catalog lists one
    pub fn name_of(&self, code: SegmentTypeCode) -> Option<&str> {
        self.lookup(code).record().map(|record| record.name.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &SegmentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TurnDelta;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = SegmentCatalog::from_json_str(BUILTIN_CATALOG).unwrap();
        assert!(catalog.len() > 40);

        let flat = catalog.require("Flat").unwrap();
        assert_eq!(flat.code, SegmentTypeCode(0x00));
        assert_eq!(flat.movement(), Movement::new(1, 0, 0, TurnDelta::None));

        let left = catalog.lookup(SegmentTypeCode(0x2A));
        assert_eq!(left.name(), "LeftQuarterTurn3Tiles");
        assert_eq!(left.movement().turn, TurnDelta::Left90);

        let right = catalog.get("RightQuarterTurn3Tiles").unwrap();
        assert_eq!(right.turn, TurnDelta::Right90);
        assert!(right.sideways_delta < 0);
    }

    #[test]
    fn test_builtin_has_no_terminator_entry() {
        let catalog = SegmentCatalog::builtin();
        assert!(!catalog.lookup(SegmentTypeCode::TERMINATOR).is_known());
    }

    #[test]
    fn test_unknown_code_is_total() {
        let catalog = SegmentCatalog::builtin();
        let kind = catalog.lookup(SegmentTypeCode(0xEE));

        assert!(!kind.is_known());
        assert_eq!(kind.code(), SegmentTypeCode(0xEE));
        assert_eq!(kind.name(), SegmentKind::UNKNOWN_NAME);
        assert_eq!(kind.movement(), Movement::NONE);
        assert_eq!(catalog.name_of(SegmentTypeCode(0xEE)), None);
    }

    #[test]
    fn test_unknown_sentinel_is_not_a_name() {
        // A catalog entry literally named like the sentinel is still a known segment
        let json = r#"{ "Unknown Track Type": { "Type": "0x01", "ForwardDelta": 5 } }"#;
        let catalog = SegmentCatalog::from_json_str(json).unwrap();

        let named = catalog.lookup(SegmentTypeCode(0x01));
        let unknown = catalog.lookup(SegmentTypeCode(0x02));
        assert_eq!(named.name(), unknown.name());
        assert_ne!(named, unknown);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{ "Spur": { "Type": "0x7" } }"#;
        let catalog = SegmentCatalog::from_json_str(json).unwrap();
        let spur = catalog.require("Spur").unwrap();

        assert_eq!(spur.code, SegmentTypeCode(0x07));
        assert_eq!(spur.movement(), Movement::NONE);
    }

    #[test]
    fn test_invalid_type_code() {
        let json = r#"{ "Broken": { "Type": "0x1FF" } }"#;
        assert!(matches!(
            SegmentCatalog::from_json_str(json),
            Err(Td6Error::InvalidTypeCode(_))
        ));
    }

    #[test]
    fn test_invalid_direction() {
        let json = r#"{ "Broken": { "Type": "0x01", "DirectionDelta": "left45" } }"#;
        assert!(matches!(
            SegmentCatalog::from_json_str(json),
            Err(Td6Error::CatalogParse(_))
        ));
    }

    #[test]
    fn test_duplicate_code() {
        let json = r#"{ "A": { "Type": "0x01" }, "B": { "Type": "0x01" } }"#;
        match SegmentCatalog::from_json_str(json) {
            Err(Td6Error::DuplicateTypeCode { code, first, second }) => {
                assert_eq!(code, 0x01);
                assert_eq!(first, "A");
                assert_eq!(second, "B");
            }
            other => panic!("Expected DuplicateTypeCode, got {:?}", other),
        }
    }

    #[test]
    fn test_require_missing_name() {
        let catalog = SegmentCatalog::builtin();
        assert!(matches!(catalog.require("Corkscrew"), Err(Td6Error::SegmentNotFound(_))));
    }
}
