use code128_draw::{
    encode, render, Anchor, Code128, Direction, Geometry, Point, Rect, RenderError, Size, Style,
    Subset, Surface, TextAlign, TextLocation,
};
use pretty_assertions::assert_eq;

type Color = &'static str;

#[derive(Debug, PartialEq, Clone)]
enum Op {
    Save,
    Restore,
    Rotate(f64, Point),
    Fill(Rect, Color),
    Text(String, f64, Rect, TextAlign),
    DefaultFont(f64),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Recorder {
    fn fills(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    fn texts(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Text(..)))
            .collect()
    }
}

impl Surface for Recorder {
    type Brush = Color;
    type Font = f64;

    fn fill_rect(&mut self, rect: Rect, brush: &Color) {
        self.ops.push(Op::Fill(rect, *brush));
    }

    fn draw_text(&mut self, text: &str, font: &f64, _: &Color, bounds: Rect, align: TextAlign) {
        self.ops.push(Op::Text(text.into(), *font, bounds, align));
    }

    fn measure_text(&mut self, text: &str, _: &f64) -> Size {
        Size::new(6.0 * text.len() as f64, 10.0)
    }

    fn default_font(&mut self, em_size: f64) -> f64 {
        self.ops.push(Op::DefaultFont(em_size));
        em_size
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn rotate_at(&mut self, degrees: f64, origin: Point) {
        self.ops.push(Op::Rotate(degrees, origin));
    }
}

fn style(font: Option<f64>) -> Style<Color, f64> {
    Style {
        foreground: "black",
        background: "white",
        font,
    }
}

const POSITION: Point = Point::new(10.0, 20.0);

/// "AB" in code set B spans 57 modules, two units each.
fn ab(text_location: TextLocation) -> Code128 {
    Code128::builder()
        .with_size(Size::new(114.0, 50.0))
        .with_text_location(text_location)
        .build("AB")
        .unwrap()
}

#[test]
fn bars_fill_the_width() {
    let mut surface = Recorder::default();
    ab(TextLocation::None)
        .render(&mut surface, &style(None), POSITION)
        .unwrap();

    assert_eq!(surface.ops.first(), Some(&Op::Save));
    assert_eq!(surface.ops.last(), Some(&Op::Restore));

    let fills = surface.fills();
    assert_eq!(fills.len(), 3 * 6 + 6 + 7);
    assert_eq!(
        fills[0],
        (
            Rect {
                x: 10.0,
                y: 20.0,
                width: 4.0,
                height: 50.0
            },
            "black"
        )
    );
    for (i, (_, color)) in fills.iter().enumerate() {
        assert_eq!(*color, if i % 2 == 0 { "black" } else { "white" });
    }
    for pair in fills.windows(2) {
        assert_eq!(pair[0].0.x + pair[0].0.width, pair[1].0.x);
    }
    let (last, _) = fills[fills.len() - 1];
    assert_eq!(last.x + last.width, 124.0);
    assert!(surface.texts().is_empty());
}

#[test]
fn module_width_from_symbol_count() {
    let values = encode("ABCDEFGHI", Subset::B).unwrap();
    assert_eq!(values.len(), 10);
    let geometry = Geometry {
        size: Size::new(268.0, 10.0),
        ..Geometry::default()
    };

    let mut surface = Recorder::default();
    render(&mut surface, &style(None), &values, "", &geometry, POSITION).unwrap();

    let fills = surface.fills();
    assert_eq!(fills.len(), 12 * 6 + 7);
    for (rect, _) in &fills {
        assert!([2.0, 4.0, 6.0, 8.0].contains(&rect.width), "{rect:?}");
    }
    let total: f64 = fills.iter().map(|(rect, _)| rect.width).sum();
    assert_eq!(total, 268.0);
}

#[test]
fn empty_sequence_is_rejected() {
    let mut surface = Recorder::default();
    let result = render(
        &mut surface,
        &style(None),
        &[],
        "",
        &Geometry::default(),
        POSITION,
    );
    assert_eq!(result, Err(RenderError::Empty));
    assert!(surface.ops.is_empty());
}

#[test]
fn direction_rotates_around_position() {
    let code = Code128::builder()
        .with_size(Size::new(114.0, 50.0))
        .with_direction(Direction::RightToLeft)
        .build("AB")
        .unwrap();
    let mut surface = Recorder::default();
    code.render(&mut surface, &style(None), POSITION).unwrap();

    assert_eq!(surface.ops[0], Op::Save);
    assert_eq!(surface.ops[1], Op::Rotate(180.0, POSITION));
    assert_eq!(surface.ops.last(), Some(&Op::Restore));

    let mut surface = Recorder::default();
    let code = Code128::new("AB", Size::new(114.0, 50.0), Direction::TopToBottom).unwrap();
    code.render(&mut surface, &style(None), POSITION).unwrap();
    assert_eq!(surface.ops[1], Op::Rotate(90.0, POSITION));
}

#[test]
fn anchor_moves_origin() {
    let code = Code128::builder()
        .with_size(Size::new(114.0, 50.0))
        .with_anchor(Anchor::BottomRight)
        .build("AB")
        .unwrap();
    let mut surface = Recorder::default();
    code.render(&mut surface, &style(None), Point::new(200.0, 100.0))
        .unwrap();

    let (first, _) = surface.fills()[0];
    assert_eq!((first.x, first.y), (86.0, 50.0));
}

#[test]
fn text_above_shortens_bars() {
    let mut surface = Recorder::default();
    ab(TextLocation::Above)
        .render(&mut surface, &style(Some(12.0)), POSITION)
        .unwrap();

    let (first, _) = surface.fills()[0];
    assert_eq!((first.y, first.height), (30.0, 40.0));
    assert_eq!(
        surface.texts(),
        vec![&Op::Text(
            "AB".into(),
            12.0,
            Rect::new(POSITION, Size::new(114.0, 50.0)),
            TextAlign::TopCenter
        )]
    );
    assert!(!surface
        .ops
        .iter()
        .any(|op| matches!(op, Op::DefaultFont(_))));
}

#[test]
fn text_below_uses_default_font() {
    let mut surface = Recorder::default();
    ab(TextLocation::Below)
        .render(&mut surface, &style(None), POSITION)
        .unwrap();

    let (first, _) = surface.fills()[0];
    assert_eq!((first.y, first.height), (20.0, 40.0));
    assert!(surface.ops.contains(&Op::DefaultFont(50.0 / 6.0)));
    assert_eq!(
        surface.texts(),
        vec![&Op::Text(
            "AB".into(),
            50.0 / 6.0,
            Rect::new(POSITION, Size::new(114.0, 50.0)),
            TextAlign::BottomCenter
        )]
    );
}

#[test]
fn embedded_text_clears_background() {
    for (location, y, align) in [
        (TextLocation::AboveEmbedded, 20.0, TextAlign::TopCenter),
        (TextLocation::BelowEmbedded, 60.0, TextAlign::BottomCenter),
    ] {
        let mut surface = Recorder::default();
        ab(location)
            .render(&mut surface, &style(Some(12.0)), POSITION)
            .unwrap();

        let fills = surface.fills();
        assert_eq!(fills.len(), 3 * 6 + 6 + 7 + 1);
        assert_eq!(fills[0].0.height, 50.0);

        let (clear, color) = fills[fills.len() - 1];
        let width = 12.0 + 114.0 * 0.15;
        assert_eq!(color, "white");
        assert!((clear.width - width).abs() < 1e-9);
        assert!((clear.x - (10.0 + (114.0 - width) / 2.0)).abs() < 1e-9);
        assert_eq!((clear.y, clear.height), (y, 10.0));

        let n = surface.ops.len();
        assert_eq!(
            surface.ops[n - 2],
            Op::Text(
                "AB".into(),
                12.0,
                Rect::new(POSITION, Size::new(114.0, 50.0)),
                align
            )
        );
    }
}

#[test]
fn unknown_text_location_draws_no_text() {
    let mut surface = Recorder::default();
    ab(TextLocation::from_name("sideways"))
        .render(&mut surface, &style(None), POSITION)
        .unwrap();
    assert!(surface.texts().is_empty());
    assert_eq!(surface.fills().len(), 31);
}

#[test]
fn gs1_label_keeps_parentheses() {
    let code = Code128::builder()
        .with_gs1(true)
        .with_size(Size::new(200.0, 50.0))
        .with_text_location(TextLocation::Below)
        .build("(01)12345678901231")
        .unwrap();
    let mut surface = Recorder::default();
    code.render(&mut surface, &style(Some(8.0)), POSITION)
        .unwrap();

    match surface.texts()[..] {
        [Op::Text(label, ..)] => assert_eq!(label, "(01)12345678901231"),
        ref other => panic!("unexpected text operations {other:?}"),
    }
}
