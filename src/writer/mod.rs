// src/writer/mod.rs
mod track_writer;

pub use track_writer::TrackWriter;
