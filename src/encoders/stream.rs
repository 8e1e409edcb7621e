//! Whole-buffer driver: splits input into short units plus an optional tail
//! unit and hands full blocks to the vector kernel when one is selected.

use log::debug;

use super::codec::Backend;
use super::errors::RcnbError;
use super::scalar::{decode_byte, decode_short, encode_byte, encode_short};
use crate::simd;

/// Characters produced for `byte_len` input bytes, or `None` if that
/// count does not fit in `usize`.
pub fn checked_encoded_len(byte_len: usize) -> Option<usize> {
    byte_len.checked_mul(2)
}

/// Bytes produced by decoding `char_len` characters.
pub fn decoded_len(char_len: usize) -> Result<usize, RcnbError> {
    if char_len % 2 != 0 {
        return Err(RcnbError::invalid_length(char_len));
    }
    Ok(char_len / 2)
}

/// Encode `data` into `out`, which must hold exactly two characters per byte.
pub(crate) fn encode_exact(data: &[u8], out: &mut [char], backend: Backend) {
    debug_assert_eq!(out.len(), data.len() * 2);

    let consumed = match backend {
        Backend::Avx2 => simd::encode_blocks(data, out),
        Backend::Scalar => 0,
    };
    if consumed > 0 {
        debug!(
            "vector path encoded {} of {} bytes",
            consumed,
            data.len()
        );
    }

    encode_scalar(&data[consumed..], &mut out[consumed * 2..]);
}

/// Scalar encoding of a whole buffer; `out` must be exactly `2 * data.len()`.
pub(crate) fn encode_scalar(data: &[u8], out: &mut [char]) {
    let mut pairs = data.chunks_exact(2);
    let mut units = out.chunks_exact_mut(4);

    for (pair, unit) in pairs.by_ref().zip(units.by_ref()) {
        unit.copy_from_slice(&encode_short(u16::from_be_bytes([pair[0], pair[1]])));
    }

    if let [last] = *pairs.remainder() {
        let tail = units.into_remainder();
        tail.copy_from_slice(&encode_byte(last));
    }
}

/// Encode `data` into the front of `out`, returning the number of characters written.
///
/// Fails without writing anything if `out` is shorter than `2 * data.len()`.
pub fn encode_into(data: &[u8], out: &mut [char], backend: Backend) -> Result<usize, RcnbError> {
    // A byte slice is at most isize::MAX long, so doubling fits in usize.
    let required = data.len() * 2;
    if out.len() < required {
        return Err(RcnbError::insufficient_capacity(required, out.len()));
    }

    encode_exact(data, &mut out[..required], backend);
    Ok(required)
}

/// Decode `chars` into the front of `out`, returning the number of bytes written.
///
/// On error the contents of `out` are unspecified.
pub fn decode_into(chars: &[char], out: &mut [u8]) -> Result<usize, RcnbError> {
    let required = decoded_len(chars.len())?;
    if out.len() < required {
        return Err(RcnbError::insufficient_capacity(required, out.len()));
    }

    let mut groups = chars.chunks_exact(4);
    let mut dest = out[..required].chunks_exact_mut(2);

    for (index, (group, bytes)) in groups.by_ref().zip(dest.by_ref()).enumerate() {
        let value = decode_short([group[0], group[1], group[2], group[3]])
            .map_err(|e| e.offset_by(index * 4))?;
        bytes.copy_from_slice(&value.to_be_bytes());
    }

    if let [first, second] = *groups.remainder() {
        let value =
            decode_byte([first, second]).map_err(|e| e.offset_by(chars.len() - 2))?;
        if let [slot] = dest.into_remainder() {
            *slot = value;
        }
    }

    Ok(required)
}
