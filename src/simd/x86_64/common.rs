//! Shared scaffolding for the x86_64 kernels: block arithmetic and the
//! byte-split character tables `pshufb` gathers from.

use crate::core::alphabet::{B_CHARS, C_CHARS, N_CHARS, R_CHARS};

// Division by the digit weights as multiply-high plus shift:
// `x / d == ((x * MUL) >> 16) >> SHIFT` for every 15-bit `x` fed to that step
// (x < 32768 for 2250, x < 2250 for 150, x < 150 for 10).
pub(crate) const MUL_2250: u16 = 59653;
pub(crate) const SHIFT_2250: i32 = 11;
pub(crate) const MUL_150: u16 = 55925;
pub(crate) const SHIFT_150: i32 = 7;
pub(crate) const MUL_10: u16 = 52429;
pub(crate) const SHIFT_10: i32 = 3;

/// Calculate number of full blocks and remainder offset
///
/// Returns (num_full_blocks, simd_processed_bytes)
#[inline(always)]
pub fn calculate_blocks(data_len: usize, block_size: usize) -> (usize, usize) {
    let num_blocks = data_len / block_size;
    let simd_bytes = num_blocks * block_size;
    (num_blocks, simd_bytes)
}

/// One byte of every character of two alphabets, one alphabet per 128-bit
/// lane, padded to 16 entries per lane.
const fn lane_table(low_lane: &[char], high_lane: &[char], shift: u32) -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut i = 0;
    while i < low_lane.len() {
        table[i] = (low_lane[i] as u32 >> shift) as u8;
        i += 1;
    }
    let mut i = 0;
    while i < high_lane.len() {
        table[16 + i] = (high_lane[i] as u32 >> shift) as u8;
        i += 1;
    }
    table
}

pub(crate) static RC_LO: [u8; 32] = lane_table(&R_CHARS, &C_CHARS, 0);
pub(crate) static RC_HI: [u8; 32] = lane_table(&R_CHARS, &C_CHARS, 8);
pub(crate) static NB_LO: [u8; 32] = lane_table(&N_CHARS, &B_CHARS, 0);
pub(crate) static NB_HI: [u8; 32] = lane_table(&N_CHARS, &B_CHARS, 8);
