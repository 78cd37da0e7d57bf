// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track segment type code as stored in the segment stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentTypeCode(pub u8);

impl SegmentTypeCode {
    /// Marks the end of the segment stream; never a real segment
    pub const TERMINATOR: SegmentTypeCode = SegmentTypeCode(0xFF);

    pub fn new(code: u8) -> Self {
        SegmentTypeCode(code)
    }

    pub fn is_terminator(&self) -> bool {
        *self == Self::TERMINATOR
    }

    pub fn raw_value(&self) -> u8 {
        self.0
    }

    /// Parse the catalog spelling of a code (`"0x2a"`, `"0X2A"` or `"2a"`)
    pub fn from_hex_str(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > 2 {
            return None;
        }

        u8::from_str_radix(digits, 16).ok().map(SegmentTypeCode)
    }
}

impl From<u8> for SegmentTypeCode {
    fn from(code: u8) -> Self {
        SegmentTypeCode(code)
    }
}

impl fmt::Display for SegmentTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Heading change applied after a segment has been placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnDelta {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "left90")]
    Left90,
    #[serde(rename = "right90")]
    Right90,
}

impl TurnDelta {
    /// Signed heading change in degrees (counter-clockwise positive)
    pub fn degrees(&self) -> i32 {
        match self {
            TurnDelta::None => 0,
            TurnDelta::Left90 => 90,
            TurnDelta::Right90 => -90,
        }
    }
}

/// Cardinal heading of the track at the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    pub fn degrees(&self) -> i32 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// Normalise any multiple of 90 into a heading. Other angles are not headings.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Orientation::Deg0),
            90 => Some(Orientation::Deg90),
            180 => Some(Orientation::Deg180),
            270 => Some(Orientation::Deg270),
            _ => None,
        }
    }

    pub fn turn(self, delta: TurnDelta) -> Self {
        Self::from_degrees(self.degrees() + delta.degrees()).unwrap_or(self)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Integer waypoint in track space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Position { x, y, z }
    }

    pub fn to_array(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<(i32, i32, i32)> for Position {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Position { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
