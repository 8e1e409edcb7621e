use std::fmt;

use crate::core::alphabet::charset;

/// Error categories, for callers that only care which rule was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Odd number of characters.
    Length,
    /// Character not valid at its position.
    Format,
    /// Well-formed digits outside the unit's value range.
    Overflow,
    /// Destination buffer too small.
    Capacity,
}

/// Errors that can occur while encoding into or decoding from RCNB text.
///
/// Positions count characters (not UTF-8 bytes) from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcnbError {
    /// The input has an odd number of characters
    InvalidLength { actual: usize },
    /// A character is not a member of the alphabet its slot requires
    InvalidCharacter { char: char, position: usize },
    /// A code unit's digits add up to more than the unit can carry
    Overflow {
        position: usize,
        value: u32,
        max: u32,
    },
    /// The destination buffer cannot hold the output
    InsufficientCapacity { required: usize, available: usize },
}

impl RcnbError {
    pub fn invalid_length(actual: usize) -> Self {
        RcnbError::InvalidLength { actual }
    }

    pub fn invalid_character(c: char, position: usize) -> Self {
        RcnbError::InvalidCharacter { char: c, position }
    }

    pub fn overflow(position: usize, value: u32, max: u32) -> Self {
        RcnbError::Overflow {
            position,
            value,
            max,
        }
    }

    pub fn insufficient_capacity(required: usize, available: usize) -> Self {
        RcnbError::InsufficientCapacity {
            required,
            available,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RcnbError::InvalidLength { .. } => ErrorKind::Length,
            RcnbError::InvalidCharacter { .. } => ErrorKind::Format,
            RcnbError::Overflow { .. } => ErrorKind::Overflow,
            RcnbError::InsufficientCapacity { .. } => ErrorKind::Capacity,
        }
    }

    /// Shift a unit-relative position to an input-relative one.
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            RcnbError::InvalidCharacter { char, position } => RcnbError::InvalidCharacter {
                char,
                position: position + base,
            },
            RcnbError::Overflow {
                position,
                value,
                max,
            } => RcnbError::Overflow {
                position: position + base,
                value,
                max,
            },
            other => other,
        }
    }
}

impl fmt::Display for RcnbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RcnbError::InvalidLength { actual } => {
                writeln!(f, "invalid length for decode")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  input is {} characters, expected an even number",
                    actual
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "hint: every byte encodes to two characters, check for a truncated copy"
                )
            }
            RcnbError::InvalidCharacter { char: c, position } => {
                writeln!(f, "invalid character '{}' at position {}", c, position)?;
                writeln!(f)?;
                write!(f, "hint: valid characters: {}", charset().collect::<String>())
            }
            RcnbError::Overflow {
                position,
                value,
                max,
            } => {
                writeln!(
                    f,
                    "code unit at position {} decodes to {:#06x}, above the {:#06x} limit",
                    position, value, max
                )?;
                writeln!(f)?;
                write!(
                    f,
                    "hint: the characters are valid but no encoder produces this combination"
                )
            }
            RcnbError::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "destination holds {} elements, {} required",
                available, required
            ),
        }
    }
}

impl std::error::Error for RcnbError {}
