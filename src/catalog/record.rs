// src/catalog/record.rs
use crate::types::{SegmentTypeCode, TurnDelta};
use serde::Deserialize;

/// Displacement contributed by one segment, relative to the current heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Movement {
    pub forward: i32,
    /// Positive values move to the left of the heading
    pub sideways: i32,
    pub elevation: i32,
    pub turn: TurnDelta,
}

impl Movement {
    /// No displacement and no turn; used for segments the catalog does not know
    pub const NONE: Movement = Movement { forward: 0, sideways: 0, elevation: 0, turn: TurnDelta::None };

    pub fn new(forward: i32, sideways: i32, elevation: i32, turn: TurnDelta) -> Self {
        Movement { forward, sideways, elevation, turn }
    }
}

/// Catalog entry for one kind of track segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRecord {
    pub name: String,
    pub code: SegmentTypeCode,
    pub forward_delta: i32,
    pub sideways_delta: i32,
    pub elevation_delta: i32,
    pub turn: TurnDelta,
}

impl SegmentRecord {
    pub fn new(name: impl Into<String>, code: SegmentTypeCode, movement: Movement) -> Self {
        SegmentRecord {
            name: name.into(),
            code,
            forward_delta: movement.forward,
            sideways_delta: movement.sideways,
            elevation_delta: movement.elevation,
            turn: movement.turn,
        }
    }

    pub fn movement(&self) -> Movement {
        Movement {
            forward: self.forward_delta,
            sideways: self.sideways_delta,
            elevation: self.elevation_delta,
            turn: self.turn,
        }
    }
}

/// Result of resolving a type code against the catalog
///
/// Lookups never fail: a code the catalog does not list resolves to
/// `Unknown`, which moves nowhere and never turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    Known(&'a SegmentRecord),
    Unknown(SegmentTypeCode),
}

impl<'a> SegmentKind<'a> {
    /// Display name of an unlisted segment
    pub const UNKNOWN_NAME: &'static str = "Unknown Track Type";

    pub fn name(&self) -> &'a str {
        match self {
            SegmentKind::Known(record) => &record.name,
            SegmentKind::Unknown(_) => Self::UNKNOWN_NAME,
        }
    }

    pub fn code(&self) -> SegmentTypeCode {
        match self {
            SegmentKind::Known(record) => record.code,
            SegmentKind::Unknown(code) => *code,
        }
    }

    pub fn record(&self) -> Option<&'a SegmentRecord> {
        match self {
            SegmentKind::Known(record) => Some(record),
            SegmentKind::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, SegmentKind::Known(_))
    }

    pub fn movement(&self) -> Movement {
        match self {
            SegmentKind::Known(record) => record.movement(),
            SegmentKind::Unknown(_) => Movement::NONE,
        }
    }
}

/// On-disk shape of a catalog entry, keyed by segment name in the catalog file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CatalogEntry {
    #[serde(rename = "Type")]
    pub type_code: String,
    #[serde(default)]
    pub forward_delta: i32,
    #[serde(default)]
    pub sideways_delta: i32,
    #[serde(default)]
    pub elevation_delta: i32,
    #[serde(default)]
    pub direction_delta: TurnDelta,
}
