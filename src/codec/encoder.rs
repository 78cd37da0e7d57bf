// src/codec/encoder.rs
use super::checksum::{self, TRAILER_LEN};
use bytes::{BufMut, BytesMut};
use tracing::debug;

/// Longest run of identical bytes folded into one repeat token
pub const MAX_REPEAT_RUN: usize = 128;

/// Longest literal run emitted by the encoder
pub const MAX_LITERAL_RUN: usize = 127;

/// Encode a raw body into an RLE-compressed file with checksum trailer
///
/// The scan is greedy: a run of two or more identical bytes becomes a repeat
/// token, otherwise bytes are collected into a literal token until the next
/// repeat begins. The trailer is computed over every encoded byte before it.
///
/// # Example
///
/// ```
/// use td6_rs::codec::{decode, encode};
///
/// let raw = [5, 5, 5, 1, 2, 3];
/// let file = encode(&raw);
/// assert_eq!(&file[..6], &[0xFE, 5, 0x02, 1, 2, 3]);
/// assert_eq!(decode(&file), raw);
/// ```
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = BytesMut::with_capacity(input.len() + input.len() / MAX_LITERAL_RUN + 1 + TRAILER_LEN);
    let mut pos = 0usize;

    while pos < input.len() {
        let repeat = repeat_run_len(&input[pos..]);
        if repeat > 1 {
            output.put_u8(repeat_control(repeat));
            output.put_u8(input[pos]);
            pos += repeat;
        } else {
            let literal = literal_run_len(&input[pos..]);
            output.put_u8((literal - 1) as u8);
            output.put_slice(&input[pos..pos + literal]);
            pos += literal;
        }
    }

    let trailer = checksum::compute(&output);
    output.put_slice(&trailer);

    debug!(decoded = input.len(), compressed = output.len(), "encoded RLE stream");
    output.to_vec()
}

/// Control byte for `count` copies: the decoder reads it as `i8` and repeats `1 - c` times
fn repeat_control(count: usize) -> u8 {
    (1 - count as i32) as i8 as u8
}

fn repeat_run_len(data: &[u8]) -> usize {
    let first = data[0];
    data.iter()
        .take(MAX_REPEAT_RUN)
        .take_while(|&&b| b == first)
        .count()
}

/// Length of the literal run starting at `data[0]`; stops before any pair of equal neighbours
fn literal_run_len(data: &[u8]) -> usize {
    let mut len = 1;
    while len < data.len() && len < MAX_LITERAL_RUN {
        if len + 1 < data.len() && data[len] == data[len + 1] {
            break;
        }
        len += 1;
    }
    len
}
