// src/codec/decoder.rs
use super::checksum::TRAILER_LEN;
use tracing::{debug, warn};

/// Decode an RLE-compressed file into its raw body
///
/// The final [`TRAILER_LEN`] bytes hold the checksum. They are never read as
/// control bytes or as run data. A control byte `c` (read as `i8`) selects
/// either a literal run of `c + 1` bytes (`c >= 0`) or `1 - c` copies of the
/// next byte (`c < 0`).
///
/// Decoding is fail-soft: if the body ends inside a run, the bytes produced
/// so far are returned and the truncation is only logged. A truncated
/// literal run keeps the bytes that were present; a repeat run without its
/// data byte contributes nothing. Runs never borrow bytes from the trailer,
/// so a literal run that overreaches the body stops at the body's end.
///
/// # Example
///
/// ```
/// use td6_rs::codec::decode;
///
/// // literal run of 2, repeat 0x07 three times, then a 4-byte trailer
/// let file = [0x01, 0xAA, 0xBB, 0xFE, 0x07, 0, 0, 0, 0];
/// assert_eq!(decode(&file), vec![0xAA, 0xBB, 0x07, 0x07, 0x07]);
/// ```
pub fn decode(input: &[u8]) -> Vec<u8> {
    let body = &input[..input.len().saturating_sub(TRAILER_LEN)];
    let mut output = Vec::with_capacity(body.len() * 2);
    let mut pos = 0usize;

    while pos < body.len() {
        let control = body[pos] as i8;
        pos += 1;

        if control >= 0 {
            let run = control as usize + 1;
            let take = run.min(body.len() - pos);
            output.extend_from_slice(&body[pos..pos + take]);
            pos += take;

            if take < run {
                warn!(offset = pos, wanted = run, got = take, "literal run truncated at end of body");
                break;
            }
        } else {
            let count = (1 - control as i32) as usize;
            match body.get(pos) {
                Some(&value) => {
                    output.resize(output.len() + count, value);
                    pos += 1;
                }
                None => {
                    warn!(offset = pos, count, "repeat run has no data byte");
                    break;
                }
            }
        }
    }

    debug!(compressed = input.len(), decoded = output.len(), "decoded RLE stream");
    output
}
