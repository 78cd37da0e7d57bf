// src/reader/mod.rs
mod track_reader;

pub use track_reader::{ReaderOptions, Track, TrackDesign, TrackReader};
