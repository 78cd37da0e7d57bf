// src/lib.rs
//! # td6-rs
//!
//! A Rust library for reading and writing coaster track design files: an
//! RLE-compressed body with a 4-byte checksum trailer, whose decoded body
//! holds the ordered list of track segments.
//!
//! ## Features
//!
//! - 📦 **Codec**: Bit-exact RLE decode/encode and the rotating checksum trailer
//! - 🧵 **Fail-Soft**: Truncated or malformed content decodes as far as it can; only I/O fails
//! - 🗂️ **Catalog**: Built-in or JSON-loaded segment table with total code lookups
//! - 🎢 **Geometry**: Heading state machine that turns segments into 3D waypoints
//!
//! ## Quick Start
//!
//! ### Reading a Track
//!
//! ```rust,no_run
//! use td6_rs::*;
//!
//! fn main() -> Result<()> {
//!     let design = TrackReader::open("Contortion.td6")?;
//!     let catalog = SegmentCatalog::builtin();
//!
//!     for name in design.segment_names(&catalog) {
//!         println!("{}", name);
//!     }
//!
//!     let path = design.path(&catalog);
//!     println!("{} waypoints, ends at {:?}", path.len(), path.end());
//!     Ok(())
//! }
//! ```
//!
//! ### Writing a Track
//!
//! ```rust,no_run
//! use td6_rs::*;
//!
//! fn main() -> Result<()> {
//!     let design = TrackDesign::from_parts(&[], vec![
//!         SegmentEntry::new(0x02, 0),
//!         SegmentEntry::new(0x00, 0),
//!         SegmentEntry::new(0x01, 0),
//!     ]);
//!
//!     let mut writer = TrackWriter::create("output.td6")?;
//!     writer.write_design(&design)?;
//!     writer.flush()?;
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod codec;
pub mod segment;
pub mod catalog;
pub mod geometry;
pub mod reader;
pub mod writer;

// Re-export commonly used types at the crate root for convenience
pub use error::{Td6Error, Result};

// Type exports
pub use types::{
    SegmentTypeCode,
    TurnDelta,
    Orientation,
    Position,
};

// Codec exports
pub use codec::{decode, encode};

// Segment exports
pub use segment::{
    SegmentEntry,
    SegmentStream,
    TrackHeader,
    HEADER_OFFSET,
};

// Catalog exports
pub use catalog::{
    Movement,
    SegmentCatalog,
    SegmentKind,
    SegmentRecord,
};

// Geometry exports
pub use geometry::{
    PathReconstructor,
    TrackPath,
};

// Reader/writer exports
pub use reader::{
    ReaderOptions,
    Track,
    TrackDesign,
    TrackReader,
};
pub use writer::TrackWriter;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use td6_rs::prelude::*;
    //! ```

    pub use crate::error::{Td6Error, Result};
    pub use crate::catalog::SegmentCatalog;
    pub use crate::reader::{TrackDesign, TrackReader};
    pub use crate::writer::TrackWriter;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
