//! SIMD-accelerated encoding
//!
//! The vector kernels only ever encode whole 32-byte blocks; the scalar codec
//! handles whatever is left, including an odd trailing byte. Runtime CPU
//! feature detection decides whether a kernel runs at all, so the scalar
//! codec is always the fallback.

#[cfg(all(target_arch = "x86_64", feature = "simd"))]
use std::sync::OnceLock;

#[cfg(all(target_arch = "x86_64", feature = "simd"))]
mod x86_64;

/// Input bytes consumed per vector iteration.
#[cfg_attr(not(all(target_arch = "x86_64", feature = "simd")), allow(dead_code))]
pub const BLOCK_SIZE: usize = 32;

// CPU feature detection cache
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
static HAS_AVX2: OnceLock<bool> = OnceLock::new();

/// Check if AVX2 is available (cached after first call)
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
pub fn has_avx2() -> bool {
    *HAS_AVX2.get_or_init(|| {
        let detected = is_x86_feature_detected!("avx2");
        log::debug!("AVX2 support detected: {}", detected);
        detected
    })
}

#[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
pub fn has_avx2() -> bool {
    false
}

/// Encode the whole 32-byte blocks at the front of `data` into `out`.
///
/// Returns the number of input bytes consumed (a multiple of
/// [`BLOCK_SIZE`]); `0` when no kernel is available. `out` receives two
/// characters per consumed byte.
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
pub fn encode_blocks(data: &[u8], out: &mut [char]) -> usize {
    if !has_avx2() {
        return 0;
    }
    x86_64::encode_avx2(data, out)
}

#[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
pub fn encode_blocks(_data: &[u8], _out: &mut [char]) -> usize {
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::{Backend, Codec};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_encode_blocks_consumes_whole_blocks() {
        let data = vec![0xA5u8; BLOCK_SIZE * 3 + 7];
        let mut out = vec!['\0'; data.len() * 2];
        let consumed = encode_blocks(&data, &mut out);
        assert_eq!(consumed % BLOCK_SIZE, 0);
        if has_avx2() {
            assert_eq!(consumed, BLOCK_SIZE * 3);
        } else {
            assert_eq!(consumed, 0);
        }
    }

    fn vector_codec() -> Option<Codec> {
        Codec::with_backend(Backend::Avx2)
    }

    #[test]
    fn test_vector_matches_scalar_every_short() {
        let Some(vector) = vector_codec() else {
            return; // skipped
        };
        let data: Vec<u8> = (0..=u16::MAX).flat_map(|v| v.to_be_bytes()).collect();
        assert_eq!(
            vector.encode_to_chars(&data),
            Codec::scalar().encode_to_chars(&data)
        );
    }

    #[test]
    fn test_vector_matches_scalar_boundaries() {
        let Some(vector) = vector_codec() else {
            return; // skipped
        };
        let scalar = Codec::scalar();
        for fill in [0x00u8, 0xFF, 0x7F, 0x80] {
            for len in (0..=BLOCK_SIZE * 4 + 1).chain([1023, 1024, 1025]) {
                let data = vec![fill; len];
                assert_eq!(
                    vector.encode_to_chars(&data),
                    scalar.encode_to_chars(&data),
                    "fill {:#04x}, len {}",
                    fill,
                    len
                );
            }
        }
    }

    #[test]
    fn test_vector_matches_scalar_random() {
        let Some(vector) = vector_codec() else {
            return; // skipped
        };
        let scalar = Codec::scalar();
        let mut rng = StdRng::seed_from_u64(0x7263_6e62);
        for _ in 0..64 {
            let len = rng.random_range(0..4096);
            let mut data = vec![0u8; len];
            rng.fill(&mut data[..]);
            assert_eq!(vector.encode(&data), scalar.encode(&data), "len {}", len);
        }

        let mut big = vec![0u8; 1024 * 1024 + 33];
        rng.fill(&mut big[..]);
        assert_eq!(vector.encode(&big), scalar.encode(&big));
    }
}
