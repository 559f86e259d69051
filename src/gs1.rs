//! Preparation of GS1-128 text.
//!
//! GS1 element strings are usually written with their application
//! identifiers in parentheses, e.g. `(01)12345678901231`. In the symbol each
//! identifier is introduced by the FNC1 function character instead. The
//! identifiers themselves are not validated.

use crate::std::string::String;

use crate::FNC1_MARKER;

/// Strip characters not allowed in GS1 text and replace every `(` by the
/// [FNC1 marker](crate::FNC1_MARKER).
///
/// Allowed are ASCII letters and digits, parentheses, `-` and the space.
///
/// ```rust
/// # use code128_draw::{gs1, FNC1_MARKER};
/// assert_eq!(gs1::prepare("(10)AB#12"), format!("{FNC1_MARKER}10)AB12"));
/// ```
pub fn prepare(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | '-' | ' '))
        .map(|c| if c == '(' { FNC1_MARKER } else { c })
        .collect()
}
