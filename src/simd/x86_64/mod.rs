//! x86_64 SIMD implementations
//!
//! Only encoding is vectorized. Decoding needs a validity check per
//! character plus the overflow check per unit, and stays scalar.

pub(crate) mod common;
mod avx2;

use super::BLOCK_SIZE;

/// Safe entry point for the AVX2 kernel.
///
/// Callers must have checked [`super::has_avx2`]; returns the number of input
/// bytes consumed.
pub fn encode_avx2(data: &[u8], out: &mut [char]) -> usize {
    let (_, simd_bytes) = common::calculate_blocks(data.len(), BLOCK_SIZE);
    if simd_bytes == 0 || out.len() < simd_bytes * 2 {
        return 0;
    }

    // SAFETY: the caller verified AVX2 support at runtime, and `out` holds two
    // characters for every byte of the whole blocks the kernel reads.
    unsafe { avx2::encode_impl(&data[..simd_bytes], &mut out[..simd_bytes * 2]) };
    simd_bytes
}
