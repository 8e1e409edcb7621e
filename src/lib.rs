//! RCNB: binary-to-text encoding with the letters r, c, n and b.
//!
//! Every two input bytes become four characters, one from each of four
//! small alphabets of accented Latin letters; a trailing odd byte becomes
//! two characters. Encoded text is always exactly twice as many characters
//! as the input has bytes.
//!
//! ```
//! let text = rcnb::encode(b"rcnb");
//! assert_eq!(text, "ɌcńƁȓČņÞ");
//! assert_eq!(rcnb::decode(&text).unwrap(), b"rcnb");
//! ```
//!
//! On x86_64 CPUs with AVX2 the encoder processes 32 bytes per iteration;
//! its output is identical to the portable scalar codec, which is always
//! available as fallback.

mod core;
mod encoders;
mod simd;

pub use crate::core::alphabet::{
    Alphabet, B_CHARS, C_CHARS, CHARSET_SIZE, N_CHARS, R_CHARS, SCNB, SNB, charset,
    is_rcnb_char,
};
pub use crate::core::config::{BackendPreference, RcnbConfig, Settings};
pub use crate::encoders::scalar::{
    Orientation, decode_byte, decode_short, encode_byte, encode_short,
};
pub use crate::encoders::stream::{checked_encoded_len, decoded_len};
pub use crate::encoders::{Backend, Codec, ErrorKind, RcnbError};

/// Encode `data` with the fastest available backend.
pub fn encode(data: &[u8]) -> String {
    Codec::new().encode(data)
}

/// Encode `data` as a vector of characters.
pub fn encode_to_chars(data: &[u8]) -> Vec<char> {
    Codec::new().encode_to_chars(data)
}

/// Encode into `out`, returning the number of characters written.
///
/// Fails with [`RcnbError::InsufficientCapacity`] before writing anything if
/// `out` holds fewer than `2 * data.len()` characters.
pub fn encode_into(data: &[u8], out: &mut [char]) -> Result<usize, RcnbError> {
    Codec::new().encode_into(data, out)
}

/// Decode RCNB text.
///
/// The input must consist solely of RCNB characters; strip whitespace first
/// if the text was wrapped.
pub fn decode(encoded: &str) -> Result<Vec<u8>, RcnbError> {
    Codec::new().decode(encoded)
}

pub fn decode_chars(chars: &[char]) -> Result<Vec<u8>, RcnbError> {
    Codec::new().decode_chars(chars)
}

/// Decode into `out`, returning the number of bytes written.
///
/// On error the contents of `out` are unspecified.
pub fn decode_into(chars: &[char], out: &mut [u8]) -> Result<usize, RcnbError> {
    Codec::new().decode_into(chars, out)
}

/// Whether this CPU can run the vectorized encoder.
pub fn is_acceleration_available() -> bool {
    simd::has_avx2()
}
