//! The four RCNB alphabets.
//!
//! Every value is written as a tuple of digits, one per alphabet, so each
//! alphabet doubles as a positional digit set. The alphabets are pairwise
//! disjoint: a single character is enough to tell which one it came from,
//! which is what lets the decoder recover a unit's orientation from its
//! first character.

/// Most significant digit of a short unit.
pub const R_CHARS: [char; 15] = [
    'r', 'R', 'Ŕ', 'ŕ', 'Ŗ', 'ŗ', 'Ř', 'ř', 'Ʀ', 'Ȑ', 'ȑ', 'Ȓ', 'ȓ', 'Ɍ', 'ɍ',
];

pub const C_CHARS: [char; 15] = [
    'c', 'C', 'Ć', 'ć', 'Ĉ', 'ĉ', 'Ċ', 'ċ', 'Č', 'č', 'Ƈ', 'ƈ', 'Ç', 'Ȼ', 'ȼ',
];

pub const N_CHARS: [char; 15] = [
    'n', 'N', 'Ń', 'ń', 'Ņ', 'ņ', 'Ň', 'ň', 'Ɲ', 'ƞ', 'Ñ', 'Ǹ', 'ǹ', 'Ƞ', 'ȵ',
];

/// Least significant digit of a short unit.
pub const B_CHARS: [char; 10] = ['b', 'B', 'ƀ', 'Ɓ', 'ƃ', 'Ƅ', 'ƅ', 'ß', 'Þ', 'þ'];

pub const SIZE_R: usize = R_CHARS.len();
pub const SIZE_C: usize = C_CHARS.len();
pub const SIZE_N: usize = N_CHARS.len();
pub const SIZE_B: usize = B_CHARS.len();

/// Weight of the C digit: `|N| * |B|`.
pub const SNB: usize = SIZE_N * SIZE_B;

/// Weight of the R digit: `|C| * |N| * |B|`.
pub const SCNB: usize = SIZE_C * SNB;

/// Total number of characters RCNB text may contain.
pub const CHARSET_SIZE: usize = SIZE_R + SIZE_C + SIZE_N + SIZE_B;

/// One of the four RCNB digit sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    R,
    C,
    N,
    B,
}

#[allow(clippy::len_without_is_empty)]
impl Alphabet {
    /// All alphabets in digit-weight order, most significant first.
    pub const ALL: [Alphabet; 4] = [Alphabet::R, Alphabet::C, Alphabet::N, Alphabet::B];

    /// The ordered characters of this alphabet.
    pub const fn chars(self) -> &'static [char] {
        match self {
            Alphabet::R => &R_CHARS,
            Alphabet::C => &C_CHARS,
            Alphabet::N => &N_CHARS,
            Alphabet::B => &B_CHARS,
        }
    }

    /// Number of characters (the radix of this digit position).
    pub const fn len(self) -> usize {
        self.chars().len()
    }

    /// Single-letter name used in diagnostics.
    pub const fn name(self) -> char {
        match self {
            Alphabet::R => 'R',
            Alphabet::C => 'C',
            Alphabet::N => 'N',
            Alphabet::B => 'B',
        }
    }

    /// Character for digit `index`, or `None` past the end of the alphabet.
    pub fn char_at(self, index: usize) -> Option<char> {
        self.chars().get(index).copied()
    }

    /// Digit value of `c` within this alphabet.
    #[inline]
    pub fn index_of(self, c: char) -> Option<usize> {
        match classify(c) {
            Some((alphabet, index)) if alphabet == self => Some(index),
            _ => None,
        }
    }

    /// The alphabet `c` belongs to, if any.
    #[inline]
    pub fn of(c: char) -> Option<Alphabet> {
        classify(c).map(|(alphabet, _)| alphabet)
    }

    const fn from_tag(tag: u8) -> Alphabet {
        match tag {
            0 => Alphabet::R,
            1 => Alphabet::C,
            2 => Alphabet::N,
            _ => Alphabet::B,
        }
    }
}

/// Every RCNB character, in R, C, N, B order.
pub fn charset() -> impl Iterator<Item = char> {
    Alphabet::ALL
        .into_iter()
        .flat_map(|alphabet| alphabet.chars().iter().copied())
}

/// Whether `c` belongs to any of the four alphabets.
#[inline]
pub fn is_rcnb_char(c: char) -> bool {
    classify(c).is_some()
}

// Every alphabet character sits below U+0250.
const LOOKUP_LEN: usize = 0x250;
const NOT_FOUND: u8 = 0xFF;

/// Code point -> `(alphabet tag << 4) | digit`, `NOT_FOUND` elsewhere.
static REVERSE: [u8; LOOKUP_LEN] = build_reverse();

const fn build_reverse() -> [u8; LOOKUP_LEN] {
    let mut table = [NOT_FOUND; LOOKUP_LEN];
    let mut tag = 0;
    while tag < Alphabet::ALL.len() {
        let chars = Alphabet::ALL[tag].chars();
        let mut digit = 0;
        while digit < chars.len() {
            let code = chars[digit] as u32 as usize;
            assert!(code < LOOKUP_LEN, "alphabet character outside lookup table");
            assert!(table[code] == NOT_FOUND, "alphabets must be disjoint");
            table[code] = ((tag as u8) << 4) | digit as u8;
            digit += 1;
        }
        tag += 1;
    }
    table
}

#[inline]
fn classify(c: char) -> Option<(Alphabet, usize)> {
    let entry = *REVERSE.get(c as u32 as usize)?;
    if entry == NOT_FOUND {
        return None;
    }
    Some((Alphabet::from_tag(entry >> 4), (entry & 0x0F) as usize))
}
