// src/segment/mod.rs
mod header;
mod stream;

pub use header::{TrackHeader, HEADER_OFFSET};
pub use stream::{parse, SegmentEntry, SegmentStream};
