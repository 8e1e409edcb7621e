use serde::{Deserialize, Serialize};

use super::errors::RcnbError;
use super::stream;
use crate::simd;

/// Implementation used for the encode hot loop.
///
/// Decoding is always scalar; only encoding has a vector kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Portable reference implementation, always available.
    Scalar,
    /// 32 bytes per iteration with AVX2 (x86_64 only).
    Avx2,
}

impl Backend {
    /// Fastest backend supported by the running CPU.
    pub fn detect() -> Self {
        if simd::has_avx2() {
            Backend::Avx2
        } else {
            Backend::Scalar
        }
    }

    pub fn is_supported(self) -> bool {
        match self {
            Backend::Scalar => true,
            Backend::Avx2 => simd::has_avx2(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Avx2 => "avx2",
        }
    }
}

/// An RCNB encoder/decoder bound to one [`Backend`].
///
/// `Codec::new()` picks the best backend for this machine; the free
/// functions at the crate root go through it.
///
/// # Example
///
/// ```
/// use rcnb::Codec;
///
/// let codec = Codec::scalar();
/// let text = codec.encode(b"rcnb");
/// assert_eq!(text, "ɌcńƁȓČņÞ");
/// assert_eq!(codec.decode(&text).unwrap(), b"rcnb");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    backend: Backend,
}

impl Codec {
    pub fn new() -> Self {
        Codec {
            backend: Backend::detect(),
        }
    }

    pub fn scalar() -> Self {
        Codec {
            backend: Backend::Scalar,
        }
    }

    /// Pin a specific backend; `None` if this CPU cannot run it.
    pub fn with_backend(backend: Backend) -> Option<Self> {
        backend.is_supported().then_some(Codec { backend })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Encode `data` to a `String` of exactly `2 * data.len()` characters.
    pub fn encode(&self, data: &[u8]) -> String {
        self.encode_to_chars(data).into_iter().collect()
    }

    pub fn encode_to_chars(&self, data: &[u8]) -> Vec<char> {
        let mut out = vec!['\0'; data.len() * 2];
        stream::encode_exact(data, &mut out, self.backend);
        out
    }

    /// Encode into a caller-provided buffer, returning the characters written.
    ///
    /// Nothing is written if `out` is shorter than `2 * data.len()`.
    pub fn encode_into(&self, data: &[u8], out: &mut [char]) -> Result<usize, RcnbError> {
        stream::encode_into(data, out, self.backend)
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, RcnbError> {
        let chars: Vec<char> = encoded.chars().collect();
        self.decode_chars(&chars)
    }

    pub fn decode_chars(&self, chars: &[char]) -> Result<Vec<u8>, RcnbError> {
        let mut out = vec![0u8; stream::decoded_len(chars.len())?];
        stream::decode_into(chars, &mut out)?;
        Ok(out)
    }

    /// Decode into a caller-provided buffer, returning the bytes written.
    pub fn decode_into(&self, chars: &[char], out: &mut [u8]) -> Result<usize, RcnbError> {
        stream::decode_into(chars, out)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Codec::new()
    }
}
