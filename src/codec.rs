//! UTF-32 code point codec: the only string representation the core
//! operates on. No normalization, no BOM.

use thiserror::Error;

pub type CodePoint = u32;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum DecodeError {
    #[error("byte length {0} is not a multiple of 4")]
    UnalignedByteLength(usize),
    #[error("{0:#x} is not a valid Unicode scalar value")]
    InvalidScalarValue(u32),
}

/// Encodes `s` as its raw UTF-32 code-point sequence.
pub fn encode(s: &str) -> Vec<CodePoint> {
    s.chars().map(|c| c as u32).collect()
}

/// Decodes a sequence of code points back into a string. Fails if any code
/// point is not a valid Unicode scalar value (e.g. a lone surrogate) — a
/// `char` simply cannot represent one, so this is forced rather than
/// chosen.
pub fn decode(code_points: &[CodePoint]) -> Result<String, DecodeError> {
    code_points
        .iter()
        .map(|&cp| char::from_u32(cp).ok_or(DecodeError::InvalidScalarValue(cp)))
        .collect()
}

/// Decodes a raw native-endian UTF-32 byte buffer — the wire form used by
/// the optional `serde` persistence path — back into a string.
pub fn decode_bytes(bytes: &[u8]) -> Result<String, DecodeError> {
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::UnalignedByteLength(bytes.len()));
    }
    bytes
        .chunks_exact(4)
        .map(|chunk| {
            let cp = u32::from_ne_bytes(chunk.try_into().unwrap());
            char::from_u32(cp).ok_or(DecodeError::InvalidScalarValue(cp))
        })
        .collect()
}
