//! Plain 2-D geometry and the layout options of a rendered symbol.

use core::ops::Sub;

/// A point on the drawing surface.
#[derive(PartialEq, Debug, Default, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an area.
#[derive(PartialEq, Debug, Default, Clone, Copy)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(PartialEq, Debug, Default, Clone, Copy)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }
}

/// The point of the symbol box a render position refers to.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Distance from the top-left corner of a box of the given size to the
    /// anchor.
    pub fn offset(self, size: Size) -> Point {
        let x = match self {
            Anchor::TopLeft | Anchor::MiddleLeft | Anchor::BottomLeft => 0.0,
            Anchor::TopCenter | Anchor::MiddleCenter | Anchor::BottomCenter => size.width / 2.0,
            Anchor::TopRight | Anchor::MiddleRight | Anchor::BottomRight => size.width,
        };
        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => 0.0,
            Anchor::MiddleLeft | Anchor::MiddleCenter | Anchor::MiddleRight => size.height / 2.0,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => size.height,
        };
        Point::new(x, y)
    }
}

/// The direction a symbol is read in.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum Direction {
    #[default]
    LeftToRight,
    BottomToTop,
    RightToLeft,
    TopToBottom,
}

impl Direction {
    /// Clockwise rotation in degrees applied around the render position.
    pub fn rotation(self) -> f64 {
        match self {
            Direction::LeftToRight => 0.0,
            Direction::BottomToTop => -90.0,
            Direction::RightToLeft => 180.0,
            Direction::TopToBottom => 90.0,
        }
    }
}

/// Placement of the human readable text.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub enum TextLocation {
    #[default]
    None,
    /// Above the bars, which are shortened to make room.
    Above,
    /// Below the bars, which are shortened to make room.
    Below,
    /// On top of the upper part of full height bars.
    AboveEmbedded,
    /// On top of the lower part of full height bars.
    BelowEmbedded,
}

impl TextLocation {
    /// Resolve a placement name, e.g. from a configuration file.
    ///
    /// Unknown names resolve to [TextLocation::None], no text is drawn then.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        [
            ("above", TextLocation::Above),
            ("below", TextLocation::Below),
            ("above-embedded", TextLocation::AboveEmbedded),
            ("below-embedded", TextLocation::BelowEmbedded),
        ]
        .into_iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map_or(TextLocation::None, |(_, location)| location)
    }
}

/// Where and how large a symbol is drawn.
#[derive(PartialEq, Debug, Default, Clone, Copy)]
pub struct Geometry {
    /// Size of the symbol box, measured along the reading direction.
    pub size: Size,
    pub direction: Direction,
    pub anchor: Anchor,
    pub text_location: TextLocation,
}

impl Geometry {
    /// Top-left corner of the symbol box when its anchor is at `position`.
    pub fn origin(&self, position: Point) -> Point {
        position - self.anchor.offset(self.size)
    }
}

#[test]
fn test_anchor_offset() {
    let size = Size::new(100.0, 40.0);
    assert_eq!(Anchor::TopLeft.offset(size), Point::new(0.0, 0.0));
    assert_eq!(Anchor::MiddleCenter.offset(size), Point::new(50.0, 20.0));
    assert_eq!(Anchor::BottomRight.offset(size), Point::new(100.0, 40.0));
    assert_eq!(Anchor::TopRight.offset(size), Point::new(100.0, 0.0));
}

#[test]
fn test_origin() {
    let geometry = Geometry {
        size: Size::new(100.0, 40.0),
        anchor: Anchor::BottomCenter,
        ..Geometry::default()
    };
    assert_eq!(
        geometry.origin(Point::new(200.0, 100.0)),
        Point::new(150.0, 60.0)
    );
}

#[test]
fn test_text_location_from_name() {
    assert_eq!(TextLocation::from_name("above"), TextLocation::Above);
    assert_eq!(TextLocation::from_name(" Below "), TextLocation::Below);
    assert_eq!(
        TextLocation::from_name("BELOW-embedded"),
        TextLocation::BelowEmbedded
    );
    assert_eq!(TextLocation::from_name("none"), TextLocation::None);
    assert_eq!(TextLocation::from_name("sideways"), TextLocation::None);
}
