// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Td6Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid segment catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Invalid segment type code: {0}")]
    InvalidTypeCode(String),

    #[error("Duplicate segment type code 0x{code:02x}: claimed by {first} and {second}")]
    DuplicateTypeCode { code: u8, first: String, second: String },

    #[error("Duplicate segment name in catalog: {0}")]
    DuplicateSegmentName(String),

    #[error("Segment not found in catalog: {0}")]
    SegmentNotFound(String),
}

pub type Result<T> = std::result::Result<T, Td6Error>;
