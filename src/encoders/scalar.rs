//! Reference unit-level codec.
//!
//! A short unit carries 16 bits in four characters. The low 15 bits are a
//! mixed-radix number with digits drawn from R, C, N and B (radices 15, 15,
//! 15, 10, so 33750 combinations cover the 32768 values). The 16th bit is not
//! a fifth character: it selects the [`Orientation`], i.e. whether the R/C
//! pair or the N/B pair leads the unit.
//!
//! A tail unit carries the final byte of an odd-length input in two
//! characters, using the R/C pair for bytes below 0x80 and the N/B pair for
//! the rest.
//!
//! Everything here is the oracle the vector kernels are tested against.

use super::errors::RcnbError;
use crate::core::alphabet::{Alphabet, SCNB, SIZE_B, SNB};

/// Largest value a short unit's digits may spell.
pub const SHORT_MAX: u32 = 0x7FFF;

/// Largest value a tail unit's digits may spell.
pub const BYTE_MAX: u32 = 0x7F;

/// Alphabets of the four digits, most significant first.
const DIGIT_ALPHABETS: [Alphabet; 4] = Alphabet::ALL;

/// Which alphabet pair leads a unit; carries the unit's high bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// High bit clear: `R C N B`, or `R C` for a tail unit.
    Normal,
    /// High bit set: `N B R C`, or `N B` for a tail unit.
    Reversed,
}

impl Orientation {
    pub fn of_short(value: u16) -> Self {
        if u32::from(value) > SHORT_MAX {
            Orientation::Reversed
        } else {
            Orientation::Normal
        }
    }

    pub fn of_byte(value: u8) -> Self {
        if u32::from(value) > BYTE_MAX {
            Orientation::Reversed
        } else {
            Orientation::Normal
        }
    }

    /// Orientation announced by the leading character of a unit.
    pub fn of_leading(c: char) -> Option<Self> {
        match Alphabet::of(c)? {
            Alphabet::R => Some(Orientation::Normal),
            Alphabet::N => Some(Orientation::Reversed),
            _ => None,
        }
    }

    /// Character slot of each digit, indexed like the R, C, N, B digits.
    pub const fn slots(self) -> [usize; 4] {
        match self {
            Orientation::Normal => [0, 1, 2, 3],
            Orientation::Reversed => [2, 3, 0, 1],
        }
    }

    /// Alphabet pair spelling a tail unit.
    pub const fn tail_alphabets(self) -> [Alphabet; 2] {
        match self {
            Orientation::Normal => [Alphabet::R, Alphabet::C],
            Orientation::Reversed => [Alphabet::N, Alphabet::B],
        }
    }

    const fn high_bit(self, bit: u32) -> u32 {
        match self {
            Orientation::Normal => 0,
            Orientation::Reversed => bit,
        }
    }
}

/// Digit tuple `(r, c, n, b)` of the low 15 bits of `value`.
#[inline]
pub fn digits(value: u16) -> [usize; 4] {
    let v = (u32::from(value) & SHORT_MAX) as usize;
    [v / SCNB, v % SCNB / SNB, v % SNB / SIZE_B, v % SIZE_B]
}

/// Encode one 16-bit value as a four-character short unit.
#[inline]
pub fn encode_short(value: u16) -> [char; 4] {
    let slots = Orientation::of_short(value).slots();
    let digits = digits(value);
    let mut unit = ['\0'; 4];
    for k in 0..4 {
        unit[slots[k]] = DIGIT_ALPHABETS[k].chars()[digits[k]];
    }
    unit
}

/// Encode the trailing byte of an odd-length input as a two-character tail unit.
#[inline]
pub fn encode_byte(value: u8) -> [char; 2] {
    let [first, second] = Orientation::of_byte(value).tail_alphabets();
    let v = (u32::from(value) & BYTE_MAX) as usize;
    [
        first.chars()[v / second.len()],
        second.chars()[v % second.len()],
    ]
}

/// Decode a four-character short unit.
///
/// Error positions are relative to the unit.
pub fn decode_short(unit: [char; 4]) -> Result<u16, RcnbError> {
    let orientation =
        Orientation::of_leading(unit[0]).ok_or(RcnbError::invalid_character(unit[0], 0))?;
    let slots = orientation.slots();

    let mut value = 0u32;
    for (alphabet, slot) in DIGIT_ALPHABETS.into_iter().zip(slots) {
        let digit = alphabet
            .index_of(unit[slot])
            .ok_or(RcnbError::invalid_character(unit[slot], slot))?;
        value = value * alphabet.len() as u32 + digit as u32;
    }

    if value > SHORT_MAX {
        return Err(RcnbError::overflow(0, value, SHORT_MAX));
    }
    Ok((value | orientation.high_bit(0x8000)) as u16)
}

/// Decode a two-character tail unit.
///
/// Error positions are relative to the unit.
pub fn decode_byte(unit: [char; 2]) -> Result<u8, RcnbError> {
    // The alphabets are disjoint, so the leading character alone decides
    // between the R/C and N/B readings.
    let orientation =
        Orientation::of_leading(unit[0]).ok_or(RcnbError::invalid_character(unit[0], 0))?;
    let [first, second] = orientation.tail_alphabets();

    let hi = first
        .index_of(unit[0])
        .ok_or(RcnbError::invalid_character(unit[0], 0))?;
    let lo = second
        .index_of(unit[1])
        .ok_or(RcnbError::invalid_character(unit[1], 1))?;

    let value = (hi * second.len() + lo) as u32;
    if value > BYTE_MAX {
        return Err(RcnbError::overflow(0, value, BYTE_MAX));
    }
    Ok((value | orientation.high_bit(0x80)) as u8)
}
