// src/codec/checksum.rs
use byteorder::{ByteOrder, LittleEndian};

/// Length of the checksum trailer appended to every encoded file
pub const TRAILER_LEN: usize = 4;

/// Constant subtracted from the rotated accumulator once all bytes are folded in
pub const CHECKSUM_SUBTRAHEND: u32 = 108_156;

/// Compute the rotating checksum as a raw 32-bit value
///
/// Each byte is added into the low 8 bits of the accumulator (carry is
/// discarded, the upper 24 bits are untouched), then the whole accumulator
/// is rotated left by 3. The final value has [`CHECKSUM_SUBTRAHEND`]
/// subtracted with wraparound.
pub fn compute_u32(bytes: &[u8]) -> u32 {
    let mut acc: u32 = 0;

    for &byte in bytes {
        let low = (acc as u8).wrapping_add(byte);
        acc = (acc & 0xFFFF_FF00) | low as u32;
        acc = acc.rotate_left(3);
    }

    acc.wrapping_sub(CHECKSUM_SUBTRAHEND)
}

/// Compute the 4-byte little-endian trailer for `bytes`
///
/// # Example
///
/// ```
/// use td6_rs::codec::checksum;
///
/// let trailer = checksum::compute(&[]);
/// assert_eq!(trailer, 0u32.wrapping_sub(108_156).to_le_bytes());
/// ```
pub fn compute(bytes: &[u8]) -> [u8; TRAILER_LEN] {
    let mut trailer = [0u8; TRAILER_LEN];
    LittleEndian::write_u32(&mut trailer, compute_u32(bytes));
    trailer
}

/// Split off the stored trailer of a complete file, if the file is long enough
pub fn trailer(file: &[u8]) -> Option<[u8; TRAILER_LEN]> {
    let start = file.len().checked_sub(TRAILER_LEN)?;
    let mut stored = [0u8; TRAILER_LEN];
    stored.copy_from_slice(&file[start..]);
    Some(stored)
}

/// Check a complete file (encoded body followed by trailer) against its trailer
///
/// Decoding never calls this; it is offered to callers that want to
/// inspect a file before trusting it.
pub fn verify(file: &[u8]) -> bool {
    match trailer(file) {
        Some(stored) => compute(&file[..file.len() - TRAILER_LEN]) == stored,
        None => false,
    }
}
