//! AVX2 RCNB encoder
//!
//! Per iteration: 32 bytes -> sixteen big-endian u16 values -> sixteen
//! four-character units (64 characters).
//!
//! 1. Byte-swap each 16-bit lane so lane `i` holds `data[2i] << 8 | data[2i + 1]`
//! 2. Take the sign mask (orientation) and clear bit 15
//! 3. Split into R, C, N, B digits with multiply-high reciprocals
//! 4. Pack digits to bytes: one register of R|C indices, one of N|B
//! 5. Gather low and high character bytes with `pshufb`
//! 6. Swap the leading and trailing pairs of negative lanes with `blendv`
//! 7. Interleave back into unit order and widen to 32-bit `char`s

use super::common::{
    MUL_10, MUL_150, MUL_2250, NB_HI, NB_LO, RC_HI, RC_LO, SHIFT_10, SHIFT_150, SHIFT_2250,
    calculate_blocks,
};
use crate::simd::BLOCK_SIZE;

/// AVX2 encoding of whole blocks.
///
/// # Safety
///
/// The CPU must support AVX2, `data.len()` must be a multiple of
/// [`BLOCK_SIZE`] and `out.len()` must be `2 * data.len()`.
#[target_feature(enable = "avx2")]
pub(super) unsafe fn encode_impl(data: &[u8], out: &mut [char]) {
    unsafe {
        use std::arch::x86_64::*;

        debug_assert_eq!(data.len() % BLOCK_SIZE, 0);
        debug_assert_eq!(out.len(), data.len() * 2);

        let (num_rounds, _) = calculate_blocks(data.len(), BLOCK_SIZE);

        // Swap bytes within each 16-bit lane (big-endian input)
        let swizzle = _mm256_setr_epi8(
            1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14, 1, 0, 3, 2, 5, 4, 7, 6, 9, 8,
            11, 10, 13, 12, 15, 14,
        );
        // Interleave the R/N dwords of the low lane with the C/B dwords of the high lane
        let permute = _mm256_setr_epi32(0, 4, 1, 5, 2, 6, 3, 7);
        // Within each unit: [slot0, slot2, slot1, slot3] -> [slot0, slot1, slot2, slot3]
        let shuffler = _mm256_setr_epi8(
            0, 1, 4, 5, 2, 3, 6, 7, 8, 9, 12, 13, 10, 11, 14, 15, 0, 1, 4, 5, 2, 3, 6, 7, 8, 9,
            12, 13, 10, 11, 14, 15,
        );

        let rc_lo = _mm256_loadu_si256(RC_LO.as_ptr() as *const __m256i);
        let rc_hi = _mm256_loadu_si256(RC_HI.as_ptr() as *const __m256i);
        let nb_lo = _mm256_loadu_si256(NB_LO.as_ptr() as *const __m256i);
        let nb_hi = _mm256_loadu_si256(NB_HI.as_ptr() as *const __m256i);

        let low_15 = _mm256_set1_epi16(0x7FFF);
        let mul_2250 = _mm256_set1_epi16(MUL_2250 as i16);
        let mul_150 = _mm256_set1_epi16(MUL_150 as i16);
        let mul_10 = _mm256_set1_epi16(MUL_10 as i16);
        let weight_2250 = _mm256_set1_epi16(2250);
        let weight_150 = _mm256_set1_epi16(150);
        let weight_10 = _mm256_set1_epi16(10);

        let mut src = data.as_ptr();
        // `char` is a 32-bit scalar; every lane stored below is a code point
        // taken from the alphabet tables, so each store writes valid `char`s.
        let mut dst = out.as_mut_ptr() as *mut __m256i;

        for _ in 0..num_rounds {
            let input = _mm256_shuffle_epi8(_mm256_loadu_si256(src as *const __m256i), swizzle);
            src = src.add(BLOCK_SIZE);

            // 0xFFFF for reversed units, 0x0000 for normal ones
            let sign = _mm256_srai_epi16::<15>(input);
            let value = _mm256_and_si256(input, low_15);

            let idx_r =
                _mm256_srli_epi16::<SHIFT_2250>(_mm256_mulhi_epu16(value, mul_2250));
            let r_part = _mm256_mullo_epi16(idx_r, weight_2250);
            let idx_c = _mm256_srli_epi16::<SHIFT_150>(_mm256_mulhi_epu16(
                _mm256_sub_epi16(value, r_part),
                mul_150,
            ));
            let rc_part = _mm256_add_epi16(r_part, _mm256_mullo_epi16(idx_c, weight_150));
            let idx_n = _mm256_srli_epi16::<SHIFT_10>(_mm256_mulhi_epu16(
                _mm256_sub_epi16(value, rc_part),
                mul_10,
            ));
            let rcn_part = _mm256_add_epi16(rc_part, _mm256_mullo_epi16(idx_n, weight_10));
            let idx_b = _mm256_sub_epi16(value, rcn_part);

            // Low lane: R indices of all 16 values, high lane: C indices (same for N|B)
            let idx_rc = _mm256_permute4x64_epi64::<0xD8>(_mm256_packus_epi16(idx_r, idx_c));
            let idx_nb = _mm256_permute4x64_epi64::<0xD8>(_mm256_packus_epi16(idx_n, idx_b));

            let rc_l = _mm256_shuffle_epi8(rc_lo, idx_rc);
            let rc_h = _mm256_shuffle_epi8(rc_hi, idx_rc);
            let nb_l = _mm256_shuffle_epi8(nb_lo, idx_nb);
            let nb_h = _mm256_shuffle_epi8(nb_hi, idx_nb);

            // u16 characters: values 0-7 (r1c1, n1b1) and 8-15 (r2c2, n2b2),
            // R or N in the low lane, C or B in the high lane
            let r1c1_t = _mm256_unpacklo_epi8(rc_l, rc_h);
            let r2c2_t = _mm256_unpackhi_epi8(rc_l, rc_h);
            let n1b1_t = _mm256_unpacklo_epi8(nb_l, nb_h);
            let n2b2_t = _mm256_unpackhi_epi8(nb_l, nb_h);

            // Sign of values 0-7 in both lanes, then of values 8-15
            let sign1 = _mm256_permute4x64_epi64::<0b0100_0100>(sign);
            let sign2 = _mm256_permute4x64_epi64::<0b1110_1110>(sign);

            // Leading pair and trailing pair of each unit
            let lead1 = _mm256_blendv_epi8(r1c1_t, n1b1_t, sign1);
            let lead2 = _mm256_blendv_epi8(r2c2_t, n2b2_t, sign2);
            let trail1 = _mm256_blendv_epi8(n1b1_t, r1c1_t, sign1);
            let trail2 = _mm256_blendv_epi8(n2b2_t, r2c2_t, sign2);

            let units = [
                _mm256_unpacklo_epi16(lead1, trail1),
                _mm256_unpackhi_epi16(lead1, trail1),
                _mm256_unpacklo_epi16(lead2, trail2),
                _mm256_unpackhi_epi16(lead2, trail2),
            ];

            for interleaved in units {
                // Four units (16 u16 characters) in output order
                let ordered = _mm256_shuffle_epi8(
                    _mm256_permutevar8x32_epi32(interleaved, permute),
                    shuffler,
                );
                _mm256_storeu_si256(
                    dst,
                    _mm256_cvtepu16_epi32(_mm256_castsi256_si128(ordered)),
                );
                _mm256_storeu_si256(
                    dst.add(1),
                    _mm256_cvtepu16_epi32(_mm256_extracti128_si256::<1>(ordered)),
                );
                dst = dst.add(2);
            }
        }
    }
}
