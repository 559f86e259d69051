use log::debug;
#[cfg(feature = "std")]
use thiserror::Error;

use crate::geometry::{Direction, Geometry, Point, Rect, Size, TextLocation};
use crate::{checksum, patterns, STOP};

/// Errors that can occur during rendering.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(Error))]
pub enum RenderError {
    /// There are no code values to draw.
    #[cfg_attr(feature = "std", error("symbol sequence is empty"))]
    Empty,
}

/// Alignment of text inside its bounding rectangle.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TextAlign {
    TopCenter,
    BottomCenter,
}

/// The drawing primitives a graphics backend has to provide.
///
/// Coordinates are affected by [`rotate_at()`](Self::rotate_at) until the
/// matching [`restore()`](Self::restore).
pub trait Surface {
    /// Fill style, e.g. a color.
    type Brush;
    type Font;

    /// Fill the rectangle.
    fn fill_rect(&mut self, rect: Rect, brush: &Self::Brush);

    /// Draw `text` aligned inside `bounds`.
    fn draw_text(
        &mut self,
        text: &str,
        font: &Self::Font,
        brush: &Self::Brush,
        bounds: Rect,
        align: TextAlign,
    );

    /// Size `text` would take up when drawn with `font`.
    fn measure_text(&mut self, text: &str, font: &Self::Font) -> Size;

    /// Font used for the human readable text when none is given.
    fn default_font(&mut self, em_size: f64) -> Self::Font;

    /// Remember the current transformation.
    fn save(&mut self);

    /// Return to the transformation remembered by the last `save()`.
    fn restore(&mut self);

    /// Rotate clockwise by `degrees` around `origin`.
    fn rotate_at(&mut self, degrees: f64, origin: Point);
}

/// Brushes and font a symbol is painted with.
#[derive(Debug, Clone)]
pub struct Style<B, F> {
    /// Used for bars and text.
    pub foreground: B,
    /// Used for spaces and behind embedded text.
    pub background: B,
    pub font: Option<F>,
}

/// Number of modules of a symbol with `values` code values, the start code
/// included, once check value and stop code are appended.
pub fn module_count(values: usize) -> usize {
    (values + 2) * 11 + 2
}

/// Width of a single module when a symbol with `values` code values fills
/// `width`.
pub fn module_width(values: usize, width: f64) -> f64 {
    width / module_count(values) as f64
}

/// Paint a symbol onto the surface.
///
/// `values` are the encoded code values starting with the start code, the
/// check value and stop code are appended. `label` is the human readable text
/// drawn according to the geometry's [TextLocation].
pub fn render<S: Surface>(
    surface: &mut S,
    style: &Style<S::Brush, S::Font>,
    values: &[u8],
    label: &str,
    geometry: &Geometry,
    position: Point,
) -> Result<(), RenderError> {
    if values.is_empty() {
        return Err(RenderError::Empty);
    }
    let module = module_width(values.len(), geometry.size.width);
    debug!(
        "rendering {} code values, module width {}",
        values.len() + 2,
        module
    );

    surface.save();
    if geometry.direction != Direction::LeftToRight {
        surface.rotate_at(geometry.direction.rotation(), position);
    }

    let origin = geometry.origin(position);
    let (y, height) = bar_span(geometry, origin.y);
    let mut x = origin.x;
    for value in values.iter().copied().chain([checksum(values), STOP]) {
        for (i, width) in patterns::lookup(value).widths().enumerate() {
            let width = module * f64::from(width);
            let brush = if i % 2 == 0 {
                &style.foreground
            } else {
                &style.background
            };
            surface.fill_rect(
                Rect {
                    x,
                    y,
                    width,
                    height,
                },
                brush,
            );
            x += width;
        }
    }

    draw_label(surface, style, label, geometry, origin);
    surface.restore();
    Ok(())
}

/// Vertical position and height of the bars, leaving a fifth of the height
/// for text above or below.
fn bar_span(geometry: &Geometry, top: f64) -> (f64, f64) {
    let height = geometry.size.height;
    match geometry.text_location {
        TextLocation::Above => (top + height / 5.0, height * 4.0 / 5.0),
        TextLocation::Below => (top, height * 4.0 / 5.0),
        TextLocation::AboveEmbedded | TextLocation::BelowEmbedded | TextLocation::None => {
            (top, height)
        }
    }
}

fn draw_label<S: Surface>(
    surface: &mut S,
    style: &Style<S::Brush, S::Font>,
    label: &str,
    geometry: &Geometry,
    origin: Point,
) {
    if geometry.text_location == TextLocation::None {
        return;
    }
    let size = geometry.size;
    let default_font;
    let font = match &style.font {
        Some(font) => font,
        None => {
            default_font = surface.default_font(size.height / 6.0);
            &default_font
        }
    };
    let bounds = Rect::new(origin, size);

    let align = match geometry.text_location {
        TextLocation::Above => TextAlign::TopCenter,
        TextLocation::Below => TextAlign::BottomCenter,
        TextLocation::AboveEmbedded | TextLocation::BelowEmbedded => {
            let mut text = surface.measure_text(label, font);
            text.width += size.width * 0.15;
            let x = origin.x + (size.width - text.width) / 2.0;
            let (y, align) = if geometry.text_location == TextLocation::AboveEmbedded {
                (origin.y, TextAlign::TopCenter)
            } else {
                (origin.y + size.height - text.height, TextAlign::BottomCenter)
            };
            surface.fill_rect(Rect::new(Point::new(x, y), text), &style.background);
            align
        }
        TextLocation::None => return,
    };
    surface.draw_text(label, font, &style.foreground, bounds, align);
}

#[test]
fn test_module_count() {
    assert_eq!(module_count(10), 134);
    assert_eq!(module_count(1), 35);
    assert_eq!(module_width(10, 268.0), 2.0);
}

#[test]
fn test_bar_span() {
    let mut geometry = Geometry {
        size: Size::new(100.0, 50.0),
        ..Geometry::default()
    };
    assert_eq!(bar_span(&geometry, 5.0), (5.0, 50.0));
    geometry.text_location = TextLocation::Above;
    assert_eq!(bar_span(&geometry, 5.0), (15.0, 40.0));
    geometry.text_location = TextLocation::Below;
    assert_eq!(bar_span(&geometry, 5.0), (5.0, 40.0));
    geometry.text_location = TextLocation::BelowEmbedded;
    assert_eq!(bar_span(&geometry, 5.0), (5.0, 50.0));
}
