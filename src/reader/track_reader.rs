// src/reader/track_reader.rs
use crate::catalog::{SegmentCatalog, SegmentKind};
use crate::codec;
use crate::error::Result;
use crate::geometry::{self, TrackPath};
use crate::segment::{SegmentEntry, SegmentStream, HEADER_OFFSET};
use crate::types::SegmentTypeCode;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Options controlling how a decoded body is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Offset of the segment stream in the decoded body
    pub header_offset: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions { header_offset: HEADER_OFFSET }
    }
}

/// A decoded track design: the raw body plus its parsed segment stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDesign {
    decoded: Vec<u8>,
    stream: SegmentStream,
    header_offset: usize,
}

impl TrackDesign {
    /// Build a body from an opaque header and a list of segments
    ///
    /// The header is zero-padded or cut to [`HEADER_OFFSET`] bytes and the
    /// stream is closed with the terminator.
    pub fn from_parts(header: &[u8], entries: Vec<SegmentEntry>) -> Self {
        let mut decoded = header.to_vec();
        decoded.resize(HEADER_OFFSET, 0);

        let stream = SegmentStream { entries, terminated: true };
        decoded.extend_from_slice(&stream.to_bytes());

        TrackDesign { decoded, stream, header_offset: HEADER_OFFSET }
    }

    /// Interpret an already decoded body
    pub fn from_decoded(decoded: Vec<u8>, options: ReaderOptions) -> Self {
        let stream = SegmentStream::parse_at(&decoded, options.header_offset);
        TrackDesign { decoded, stream, header_offset: options.header_offset }
    }

    pub fn decoded(&self) -> &[u8] {
        &self.decoded
    }

    pub fn into_decoded(self) -> Vec<u8> {
        self.decoded
    }

    /// The opaque header bytes preceding the segment stream
    pub fn header(&self) -> &[u8] {
        &self.decoded[..self.header_offset.min(self.decoded.len())]
    }

    pub fn stream(&self) -> &SegmentStream {
        &self.stream
    }

    pub fn codes(&self) -> Vec<SegmentTypeCode> {
        self.stream.codes().collect()
    }

    pub fn segment_count(&self) -> usize {
        self.stream.len()
    }

    pub fn segments<'c>(&self, catalog: &'c SegmentCatalog) -> Vec<SegmentKind<'c>> {
        self.stream.codes().map(|code| catalog.lookup(code)).collect()
    }

    pub fn segment_names<'c>(&self, catalog: &'c SegmentCatalog) -> Vec<&'c str> {
        self.stream.codes().map(|code| catalog.lookup(code).name()).collect()
    }

    pub fn path(&self, catalog: &SegmentCatalog) -> TrackPath {
        geometry::reconstruct(self.stream.codes(), catalog)
    }

    /// Everything a presentation layer needs: segment names in order and the traced path
    pub fn track<'c>(&self, catalog: &'c SegmentCatalog) -> Track<'c> {
        Track {
            segments: self.segments(catalog),
            path: self.path(catalog),
        }
    }
}

/// Named segments and the path they trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track<'c> {
    pub segments: Vec<SegmentKind<'c>>,
    pub path: TrackPath,
}

impl<'c> Track<'c> {
    pub fn names(&self) -> Vec<&'c str> {
        self.segments.iter().map(|kind| kind.name()).collect()
    }
}

/// Reads compressed track design files
///
/// Only I/O failures are errors; malformed content yields whatever could be
/// decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackReader {
    options: ReaderOptions,
}

impl TrackReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReaderOptions) -> Self {
        TrackReader { options }
    }

    /// Read and decode a file with default options
    pub fn open(path: impl AsRef<Path>) -> Result<TrackDesign> {
        Self::new().read_path(path)
    }

    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<TrackDesign> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "reading track design");
        self.read_from(BufReader::with_capacity(65536, file))
    }

    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<TrackDesign> {
        let mut compressed = Vec::new();
        reader.read_to_end(&mut compressed)?;
        Ok(self.read_bytes(&compressed))
    }

    pub fn read_bytes(&self, compressed: &[u8]) -> TrackDesign {
        TrackDesign::from_decoded(codec::decode(compressed), self.options)
    }

    /// Read through a memory map (requires "mmap" feature)
    #[cfg(feature = "mmap")]
    pub fn read_mmap(&self, path: impl AsRef<Path>) -> Result<TrackDesign> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(self.read_bytes(&mmap))
    }
}
