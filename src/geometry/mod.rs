//! Track geometry reconstructed from segment codes
//!
//! - [`PathReconstructor`] - Heading/position state machine, one step per segment
//! - [`reconstruct`] - Resolve codes through a [`SegmentCatalog`](crate::catalog::SegmentCatalog) and trace the path
//!
//! Heading 0° projects forward onto +x and sideways onto +y; a left turn
//! adds 90°.
//!
//! ```
//! use td6_rs::catalog::SegmentCatalog;
//! use td6_rs::geometry::reconstruct;
//! use td6_rs::types::{Position, SegmentTypeCode};
//!
//! let catalog = SegmentCatalog::builtin();
//! let path = reconstruct([SegmentTypeCode(0x00), SegmentTypeCode(0x00)], &catalog);
//! assert_eq!(path.end(), Some(Position::new(2, 0, 0)));
//! ```

mod reconstructor;

pub use reconstructor::{reconstruct, trace_movements, PathReconstructor, TrackPath};
