//! RLE codec and checksum for track design files
//!
//! A track design file is an RLE-compressed body followed by a 4-byte
//! little-endian checksum trailer. This module provides:
//!
//! - [`decode`] - Expand a compressed file into its raw body (the trailer is skipped, not checked)
//! - [`encode`] - Compress a raw body and append the trailer
//! - [`checksum`] - The rotating checksum used for the trailer
//!
//! # Example
//!
//! ```
//! use td6_rs::codec::{self, checksum};
//!
//! let raw = vec![0u8, 0, 0, 0, 1, 2, 3, 0xFF];
//! let file = codec::encode(&raw);
//!
//! assert!(checksum::verify(&file));
//! assert_eq!(codec::decode(&file), raw);
//! ```

pub mod checksum;
mod decoder;
mod encoder;

pub use checksum::{CHECKSUM_SUBTRAHEND, TRAILER_LEN};
pub use decoder::decode;
pub use encoder::{encode, MAX_LITERAL_RUN, MAX_REPEAT_RUN};
