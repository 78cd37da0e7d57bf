// src/segment/stream.rs
use crate::segment::header::{TrackHeader, HEADER_OFFSET};
use crate::types::SegmentTypeCode;
use tracing::{debug, warn};

/// One `(type code, qualifier)` pair from the segment stream
///
/// The qualifier is carried through untouched; its meaning is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentEntry {
    pub code: SegmentTypeCode,
    pub qualifier: u8,
}

impl SegmentEntry {
    pub fn new(code: u8, qualifier: u8) -> Self {
        SegmentEntry { code: SegmentTypeCode(code), qualifier }
    }
}

/// Ordered segments read from a decoded body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentStream {
    pub entries: Vec<SegmentEntry>,
    /// Whether the stream ended on the terminator rather than by running out of bytes
    pub terminated: bool,
}

impl SegmentStream {
    /// Parse the segment stream at the standard header offset
    pub fn parse(buffer: &[u8]) -> Self {
        Self::parse_at(buffer, HEADER_OFFSET)
    }

    /// Parse the segment stream starting at `offset`
    ///
    /// Reading stops at the terminator code (not included) or when fewer than
    /// two bytes remain. Running out of bytes is not an error.
    pub fn parse_at(buffer: &[u8], offset: usize) -> Self {
        let mut stream = SegmentStream::default();
        let Some(data) = buffer.get(offset..) else {
            warn!(len = buffer.len(), offset, "decoded body is shorter than the track header");
            return stream;
        };

        for pair in data.chunks_exact(TrackHeader::ENTRY_SIZE) {
            let code = SegmentTypeCode(pair[0]);
            if code.is_terminator() {
                stream.terminated = true;
                break;
            }
            stream.entries.push(SegmentEntry { code, qualifier: pair[1] });
        }

        // A lone trailing terminator byte still ends the stream
        if !stream.terminated {
            let consumed = stream.entries.len() * TrackHeader::ENTRY_SIZE;
            if data.get(consumed) == Some(&TrackHeader::TERMINATOR) && data.len() == consumed + 1 {
                stream.terminated = true;
            } else {
                warn!(segments = stream.entries.len(), "segment stream has no terminator");
            }
        }

        debug!(segments = stream.entries.len(), terminated = stream.terminated, "parsed segment stream");
        stream
    }

    /// Type codes in stream order
    pub fn codes(&self) -> impl Iterator<Item = SegmentTypeCode> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }

    /// Qualifier bytes in stream order
    pub fn qualifiers(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|entry| entry.qualifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialise back into a segment stream including the terminator
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.entries.len() * TrackHeader::ENTRY_SIZE + 1);
        for entry in &self.entries {
            bytes.push(entry.code.raw_value());
            bytes.push(entry.qualifier);
        }
        bytes.push(TrackHeader::TERMINATOR);
        bytes
    }
}

/// Extract the segment type codes from a decoded body
pub fn parse(buffer: &[u8]) -> Vec<SegmentTypeCode> {
    SegmentStream::parse(buffer).codes().collect()
}
