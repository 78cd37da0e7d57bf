// src/writer/track_writer.rs
use crate::codec;
use crate::error::Result;
use crate::reader::TrackDesign;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes compressed track design files
pub struct TrackWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl TrackWriter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(TrackWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write> TrackWriter<W> {
    pub fn new(inner: W) -> Self {
        TrackWriter { inner, bytes_written: 0 }
    }

    /// Compress a decoded body, append its checksum trailer and write it out
    ///
    /// Returns the number of compressed bytes written.
    pub fn write_decoded(&mut self, decoded: &[u8]) -> Result<usize> {
        let encoded = codec::encode(decoded);
        self.inner.write_all(&encoded)?;
        self.bytes_written += encoded.len() as u64;

        debug!(decoded = decoded.len(), written = encoded.len(), "wrote track design");
        Ok(encoded.len())
    }

    pub fn write_design(&mut self, design: &TrackDesign) -> Result<usize> {
        self.write_decoded(design.decoded())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
