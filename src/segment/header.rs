// src/segment/header.rs

/// Layout constants of a decoded track design body
///
/// The body starts with an opaque fixed-size header, followed by
/// `(type code, qualifier)` byte pairs and a `0xFF` terminator.
#[derive(Debug, Clone, Copy)]
pub struct TrackHeader;

impl TrackHeader {
    /// Offset of the first segment pair in the decoded body
    pub const SIZE: usize = 163;
    pub const TERMINATOR: u8 = 0xFF;
    /// Each segment occupies a type code byte and a qualifier byte
    pub const ENTRY_SIZE: usize = 2;
}

/// Offset of the segment stream in the decoded body
pub const HEADER_OFFSET: usize = TrackHeader::SIZE;
