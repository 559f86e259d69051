//! This crate encodes text as Code 128 linear barcodes and paints the
//! resulting symbols onto any drawing surface.
//!
//! Encoding follows the classic subset selection rules: a symbol starts in
//! code set C when the text begins with a digit pair, in code set A when it
//! begins with an ASCII control character, and in code set B otherwise.
//! Runs of four or more digits switch to code set C on the fly.
//!
//! ## Example
//!
//! ```rust
//! use code128_draw::{bars_to_blocks, Code128, Subset};
//!
//! let code = Code128::builder()
//!     .with_subset(Subset::Auto)
//!     .build("Hello!")?;
//! println!("{}", bars_to_blocks(code.bars()));
//! # Ok::<(), code128_draw::EncodingError>(())
//! ```
//! To paint the symbol implement [Surface] for your graphics backend and
//! call [Code128::render].
//!
//! ## Charsets
//!
//! Only 7-bit ASCII can be encoded. Characters `0x00` to `0x1F` are covered
//! by code set A, `0x60` to `0x7F` by code set B, everything in between by
//! both. The [FNC1 marker](FNC1_MARKER) encodes the FNC1 function character,
//! which is how GS1-128 symbols separate their element strings. With
//! [GS1 mode](Code128Builder::with_gs1) enabled every `(` in the text is
//! replaced by this marker, see [gs1::prepare].
#![no_std]

#[cfg(not(feature = "std"))]
extern crate alloc as std;
#[cfg(feature = "std")]
extern crate std;

use std::string::String;
use std::vec::Vec;

mod encode;
pub mod geometry;
pub mod gs1;
pub mod patterns;
mod render;
#[cfg(feature = "unicode")]
mod unicode;

pub use encode::{encode, EncodingError};
pub use geometry::{Anchor, Direction, Geometry, Point, Rect, Size, TextLocation};
pub use render::{module_count, module_width, render, RenderError, Style, Surface, TextAlign};

#[cfg(feature = "unicode")]
pub use unicode::bars_to_blocks;

const SWITCH_C: u8 = 99;
const SWITCH_B: u8 = 100;
const SWITCH_A: u8 = 101;
const FNC1: u8 = 102;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;
const STOP: u8 = 106;

/// Placeholder character standing for the FNC1 function character.
///
/// It is taken from the Unicode private use area, so it never collides with
/// text that can be encoded otherwise.
pub const FNC1_MARKER: char = '\u{E000}';

/// Compute the modulo 103 check value of a symbol sequence.
///
/// The start code has weight one, every following value is weighted by its
/// position.
pub fn checksum(values: &[u8]) -> u8 {
    (values
        .iter()
        .enumerate()
        .map(|(i, value)| (i.max(1) as u64) * u64::from(*value))
        .sum::<u64>()
        % 103) as u8
}

/// The code set a symbol is encoded with.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Subset {
    /// Pick the start code set from the text and switch as needed.
    Auto,
    /// Uppercase letters, digits, punctuation and control characters.
    A,
    /// Upper- and lowercase letters, digits and punctuation.
    B,
    /// Pairs of digits.
    C,
}

/// Representation of a "black line" in the code.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Bar {
    /// The width of the line.
    ///
    /// Ranges from one to four.
    pub width: u8,
    /// White space after the line.
    pub space: u8,
}

/// A coordinate of a bar in a barcode.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct BarCoordinate {
    /// The x coordinate, started from the left.
    ///
    /// The first bar will always be at 10, which is the
    /// offset for the left quiet zone.
    pub x: u32,
    /// The width of the bar.
    pub width: u8,
}

/// A Code 128 symbol.
///
/// The symbol keeps the human readable text it was built from, the encoded
/// code values starting with the start code, and the geometry used by
/// [`render()`](Self::render). Check value and stop code are appended on the
/// fly, see [`symbols()`](Self::symbols).
///
/// Besides painting onto a [Surface] you can use the bars iterators
/// [`bars()`](Self::bars) or [`bar_coordinates()`](Self::bar_coordinates),
/// and the [size](Self::len) to compute a visualization yourself. A bar
/// corresponds to a "black line" of the code and has a unitless width between
/// one and four, as well as a free space after it, also sized between one and
/// four.
///
/// ```rust
/// # use code128_draw::{Code128, Direction, Size};
/// let code = Code128::new("Code128", Size::new(100.0, 30.0), Direction::LeftToRight)?;
/// let line_width = 100.0 / code.len() as f64;
/// for bar in code.bar_coordinates() {
///      let x = bar.x as f64 * line_width;
///      let width = bar.width as f64 * line_width;
///      // print line at `x` pt, `width` pt wide
/// }
/// # Ok::<(), code128_draw::EncodingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Code128 {
    text: String,
    values: Vec<u8>,
    geometry: Geometry,
}

#[allow(clippy::len_without_is_empty)]
impl Code128 {
    /// Encode the text in code set B.
    ///
    /// Fails if the text is empty or holds characters code set B can not
    /// represent.
    pub fn new(text: &str, size: Size, direction: Direction) -> Result<Self, EncodingError> {
        Self::builder()
            .with_size(size)
            .with_direction(direction)
            .build(text)
    }

    /// Encode the text with the given code set, optionally as GS1-128.
    pub fn with_subset(
        text: &str,
        size: Size,
        direction: Direction,
        subset: Subset,
        gs1: bool,
    ) -> Result<Self, EncodingError> {
        Self::builder()
            .with_size(size)
            .with_direction(direction)
            .with_subset(subset)
            .with_gs1(gs1)
            .build(text)
    }

    /// Builder for encoding a Code 128 with more control.
    pub fn builder() -> Code128Builder {
        Code128Builder::default()
    }

    /// The human readable text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The encoded code values, starting with the start code.
    ///
    /// Neither the check value nor the stop code are included.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The check value of this symbol.
    pub fn checksum(&self) -> u8 {
        checksum(&self.values)
    }

    /// The complete sequence of code values, check value and stop code included.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.values
            .iter()
            .copied()
            .chain([self.checksum(), STOP])
    }

    /// Get the sequence of bars this Code 128 consists of.
    pub fn bars(&self) -> impl Iterator<Item = Bar> + '_ {
        self.symbols().flat_map(|value| patterns::lookup(value).bars())
    }

    /// Get the coordinates of the bars this Code 128 consists of.
    pub fn bar_coordinates(&self) -> impl Iterator<Item = BarCoordinate> + '_ {
        self.bars().scan(10, |pos, bar| {
            let x = *pos;
            *pos += u32::from(bar.width) + u32::from(bar.space);
            Some(BarCoordinate {
                x,
                width: bar.width,
            })
        })
    }

    /// Get the total width of the code in units of the [Bar](crate::Bar)
    /// with the quiet zone included.
    pub fn len(&self) -> usize {
        module_count(self.values.len()) + 20
    }

    /// The geometry the symbol is rendered with.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Width of a single module when rendered with this symbol's geometry.
    pub fn module_width(&self) -> f64 {
        module_width(self.values.len(), self.geometry.size.width)
    }

    /// Paint the symbol onto the surface.
    ///
    /// `position` is the point the symbol's [anchor](Anchor) is placed at.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        style: &Style<S::Brush, S::Font>,
        position: Point,
    ) -> Result<(), RenderError> {
        render(surface, style, &self.values, &self.text, &self.geometry, position)
    }
}

/// Builder for encoding a Code 128 with more control.
#[derive(Debug, Clone, Default)]
pub struct Code128Builder {
    geometry: Geometry,
    subset: Option<Subset>,
    gs1: bool,
}

impl Code128Builder {
    /// Size of the symbol box, measured along the reading direction.
    pub fn with_size(mut self, size: Size) -> Self {
        self.geometry.size = size;
        self
    }

    /// Which direction the symbol is read in.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.geometry.direction = direction;
        self
    }

    /// Which point of the symbol box the render position refers to.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.geometry.anchor = anchor;
        self
    }

    /// Where the human readable text is placed.
    pub fn with_text_location(mut self, text_location: TextLocation) -> Self {
        self.geometry.text_location = text_location;
        self
    }

    /// Which code set should be used.
    ///
    /// Without a choice code set B is used, or automatic selection in GS1
    /// mode.
    pub fn with_subset(mut self, subset: Subset) -> Self {
        self.subset = Some(subset);
        self
    }

    /// Encode as GS1-128, see [gs1::prepare].
    pub fn with_gs1(mut self, gs1: bool) -> Self {
        self.gs1 = gs1;
        self
    }

    /// Encode the text as Code 128.
    ///
    /// An odd number of characters is padded with a leading zero when code
    /// set C is requested.
    pub fn build(self, text: &str) -> Result<Code128, EncodingError> {
        if text.is_empty() {
            return Err(EncodingError::Empty);
        }
        let subset = self
            .subset
            .unwrap_or(if self.gs1 { Subset::Auto } else { Subset::B });

        let mut chars: Vec<char> = if self.gs1 {
            gs1::prepare(text).chars().collect()
        } else {
            text.chars().collect()
        };
        if subset == Subset::C && chars.len() % 2 == 1 {
            chars.insert(0, '0');
        }

        let values = encode::encode_chars(&chars, subset)?;
        Ok(Code128 {
            text: text.into(),
            values,
            geometry: self.geometry,
        })
    }
}
