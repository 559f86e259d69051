//! The bar/space patterns of all 107 code values.
//!
//! Each pattern is stored as a bit string read from the most significant set
//! bit, a one meaning a bar module and a zero a space module. Data and start
//! codes span eleven modules, the stop code thirteen.

use crate::{Bar, STOP};

const PATTERNS: [u16; 107] = [
    0x6cc, 0x66c, 0x666, 0x498, 0x48c, 0x44c, 0x4c8, 0x4c4, 0x464, 0x648, 0x644, 0x624, 0x59c,
    0x4dc, 0x4ce, 0x5cc, 0x4ec, 0x4e6, 0x672, 0x65c, 0x64e, 0x6e4, 0x674, 0x76e, 0x74c, 0x72c,
    0x726, 0x764, 0x734, 0x732, 0x6d8, 0x6c6, 0x636, 0x518, 0x458, 0x446, 0x588, 0x468, 0x462,
    0x688, 0x628, 0x622, 0x5b8, 0x58e, 0x46e, 0x5d8, 0x5c6, 0x476, 0x776, 0x68e, 0x62e, 0x6e8,
    0x6e2, 0x6ee, 0x758, 0x746, 0x716, 0x768, 0x762, 0x71a, 0x77a, 0x642, 0x78a, 0x530, 0x50c,
    0x4b0, 0x486, 0x42c, 0x426, 0x590, 0x584, 0x4d0, 0x4c2, 0x434, 0x432, 0x612, 0x650, 0x7ba,
    0x614, 0x47a, 0x53c, 0x4bc, 0x49e, 0x5e4, 0x4f4, 0x4f2, 0x7a4, 0x794, 0x792, 0x6de, 0x6f6,
    0x7b6, 0x578, 0x51e, 0x45e, 0x5e8, 0x5e2, 0x7a8, 0x7a2, 0x5de, 0x5ee, 0x75e, 0x7ae, 0x684,
    0x690, 0x69c, 0x18eb,
];

/// Look up the pattern of a code value.
///
/// # Panics
///
/// If `value` is larger than 106, the stop code.
pub fn lookup(value: u8) -> Pattern {
    assert!(
        value <= STOP,
        "code value {value} is outside of the range 0 to {STOP}"
    );
    Pattern(PATTERNS[value as usize])
}

/// The bars and spaces of a single code value.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Pattern(u16);

impl Pattern {
    /// Number of modules this pattern spans.
    pub fn modules(self) -> u32 {
        16 - self.0.leading_zeros()
    }

    /// Module widths, alternating between bar and space, starting with a bar.
    pub fn widths(self) -> Widths {
        Widths {
            bits: self.0,
            remaining: self.modules(),
        }
    }

    /// The pattern as bars with their following space.
    ///
    /// The last bar of the stop pattern has no space.
    pub fn bars(self) -> impl Iterator<Item = Bar> {
        let mut widths = self.widths();
        core::iter::from_fn(move || {
            let width = widths.next()?;
            let space = widths.next().unwrap_or(0);
            Some(Bar { width, space })
        })
    }
}

/// Iterator over the module widths of a [Pattern].
#[derive(Debug, Clone)]
pub struct Widths {
    bits: u16,
    remaining: u32,
}

impl Iterator for Widths {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let bits = self.bits;
        let bit = move |remaining: u32| (bits >> (remaining - 1)) & 1;
        let kind = bit(self.remaining);
        let mut width = 0;
        while self.remaining > 0 && bit(self.remaining) == kind {
            width += 1;
            self.remaining -= 1;
        }
        Some(width)
    }
}
