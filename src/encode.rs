use crate::std::vec;
use crate::std::vec::Vec;

use log::{debug, trace};
#[cfg(feature = "std")]
use thiserror::Error;

use crate::{
    Subset, FNC1, FNC1_MARKER, START_A, START_B, START_C, SWITCH_A, SWITCH_B, SWITCH_C,
};

/// Errors that can occur during encoding.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum EncodingError {
    /// There was no text to encode.
    #[cfg_attr(feature = "std", error("text to encode is empty"))]
    Empty,
    /// A character is neither 7-bit ASCII nor the FNC1 marker.
    #[cfg_attr(
        feature = "std",
        error("character {character:?} at index {index} can not be encoded")
    )]
    InvalidCharacter { index: usize, character: char },
    /// The text needs a code set other than the one requested.
    #[cfg_attr(
        feature = "std",
        error("invalid characters for code set {subset:?} at index {index}")
    )]
    SubsetViolation { index: usize, subset: Subset },
    /// An encoded value is not a valid data or control code.
    #[cfg_attr(feature = "std", error("code value {value} at index {index} is invalid"))]
    InvalidCodeValue { index: usize, value: u8 },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    A,
    B,
    C,
}

impl Mode {
    #[inline]
    fn switch(self) -> u8 {
        match self {
            Mode::A => SWITCH_A,
            Mode::B => SWITCH_B,
            Mode::C => SWITCH_C,
        }
    }

    #[inline]
    fn start(self) -> u8 {
        match self {
            Mode::A => START_A,
            Mode::B => START_B,
            Mode::C => START_C,
        }
    }
}

impl Subset {
    fn forced_mode(self) -> Option<Mode> {
        match self {
            Subset::Auto => None,
            Subset::A => Some(Mode::A),
            Subset::B => Some(Mode::B),
            Subset::C => Some(Mode::C),
        }
    }
}

/// What the encoder sees at the current position.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Class {
    Fnc1,
    /// `0x00` to `0x1F`, code set A only.
    Control(u8),
    /// `0x20` to `0x5E`, shared by code sets A and B.
    Printable(u8),
    /// A digit followed by another one, `value` being the first.
    Digits { value: u8, pair: u8 },
    /// `0x5F` to `0x7F`, handled by code set B.
    Lower(u8),
}

impl Class {
    /// Classify the first character of `rest`, `None` if it can not be encoded.
    fn of(rest: &[char]) -> Option<Self> {
        let first = *rest.first()?;
        if first == FNC1_MARKER {
            return Some(Class::Fnc1);
        }
        let value = u8::try_from(first).ok().filter(u8::is_ascii)?;
        Some(match (value, rest.get(1)) {
            (b'0'..=b'9', Some(second @ '0'..='9')) => Class::Digits {
                value,
                pair: (value - b'0') * 10 + (*second as u8 - b'0'),
            },
            (0x00..=0x1F, _) => Class::Control(value),
            (0x20..=0x5E, _) => Class::Printable(value),
            _ => Class::Lower(value),
        })
    }
}

/// Transition of the encoder for one input position: the mode to continue
/// in, the emitted value and how many characters were consumed.
fn step(mode: Mode, class: Class) -> (Mode, u8, usize) {
    match (mode, class) {
        (_, Class::Fnc1) => (mode, FNC1, 1),
        (Mode::C, Class::Digits { pair, .. }) => (Mode::C, pair, 2),
        (_, Class::Control(value)) => (Mode::A, value + 0x40, 1),
        (Mode::A, Class::Printable(value) | Class::Digits { value, .. }) => {
            (Mode::A, value - b' ', 1)
        }
        (Mode::B, Class::Printable(value) | Class::Digits { value, .. })
        | (Mode::C, Class::Printable(value))
        | (_, Class::Lower(value)) => (Mode::B, value - b' ', 1),
    }
}

/// Length of the digit run at the start of `text`, FNC1 markers are skipped.
fn digit_run(text: &[char]) -> usize {
    text.iter()
        .filter(|c| **c != FNC1_MARKER)
        .take_while(|c| c.is_ascii_digit())
        .count()
}

fn start_mode(text: &[char]) -> Mode {
    if digit_run(text) >= 2 {
        Mode::C
    } else if matches!(text.first(), Some('\x00'..='\x1F')) {
        Mode::A
    } else {
        Mode::B
    }
}

#[derive(Debug, PartialEq, Clone)]
struct Encodation {
    mode: Mode,
    symbols: Vec<u8>,
}

impl Encodation {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            symbols: vec![mode.start()],
        }
    }

    #[inline]
    fn switch(&mut self, mode: Mode) {
        trace!("switching from code set {:?} to {:?}", self.mode, mode);
        self.symbols.push(mode.switch());
        self.mode = mode;
    }
}

/// Encode the text as a sequence of code values, starting with the start code.
///
/// Check value and stop code are not part of the result, see
/// [checksum](crate::checksum). Unlike
/// [Code128Builder::build](crate::Code128Builder::build) no padding is
/// applied for code set C.
///
/// ```rust
/// # use code128_draw::{encode, Subset};
/// assert_eq!(encode("1234567", Subset::Auto)?, vec![105, 12, 34, 56, 100, 23]);
/// # Ok::<(), code128_draw::EncodingError>(())
/// ```
pub fn encode(text: &str, subset: Subset) -> Result<Vec<u8>, EncodingError> {
    let chars: Vec<char> = text.chars().collect();
    encode_chars(&chars, subset)
}

pub(crate) fn encode_chars(text: &[char], subset: Subset) -> Result<Vec<u8>, EncodingError> {
    if text.is_empty() {
        return Err(EncodingError::Empty);
    }
    let forced = subset.forced_mode();
    let mut enc = Encodation::new(forced.unwrap_or_else(|| start_mode(text)));
    debug!(
        "encoding {} characters, starting in code set {:?}",
        text.len(),
        enc.mode
    );

    let mut index = 0;
    while index < text.len() {
        let rest = &text[index..];

        // four digits are the break even point for switching to C
        if forced.is_none() && enc.mode != Mode::C && digit_run(rest) >= 4 {
            enc.switch(Mode::C);
            continue;
        }

        let class = Class::of(rest).ok_or(EncodingError::InvalidCharacter {
            index,
            character: text[index],
        })?;
        let (mode, symbol, width) = step(enc.mode, class);
        if mode != enc.mode {
            if forced.is_some() {
                return Err(EncodingError::SubsetViolation { index, subset });
            }
            enc.switch(mode);
        }
        enc.symbols.push(symbol);
        index += width;
    }

    validate(&enc.symbols)?;
    Ok(enc.symbols)
}

/// Only the leading value may be a start code, stop codes never occur.
fn validate(symbols: &[u8]) -> Result<(), EncodingError> {
    for (index, &value) in symbols.iter().enumerate() {
        let valid = if index == 0 {
            (START_A..=START_C).contains(&value)
        } else {
            value < START_A
        };
        if !valid {
            return Err(EncodingError::InvalidCodeValue { index, value });
        }
    }
    Ok(())
}
