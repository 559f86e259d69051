use std::fmt::Write;
use std::io::Read;

use code128_draw::{
    Code128, Point, Rect, Size, Style, Subset, Surface, TextAlign, TextLocation,
};

/// Collects the drawing operations as SVG elements.
#[derive(Default)]
struct Svg {
    body: String,
    groups: usize,
    saved: Vec<usize>,
}

impl Surface for Svg {
    type Brush = &'static str;
    type Font = f64;

    fn fill_rect(&mut self, rect: Rect, brush: &&'static str) {
        write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x, rect.y, rect.width, rect.height, brush
        )
        .unwrap();
    }

    fn draw_text(&mut self, text: &str, font: &f64, brush: &&'static str, bounds: Rect, align: TextAlign) {
        let (y, baseline) = match align {
            TextAlign::TopCenter => (bounds.y, "hanging"),
            TextAlign::BottomCenter => (bounds.y + bounds.height, "alphabetic"),
        };
        write!(
            self.body,
            r#"<text x="{}" y="{}" font-family="monospace" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="{}">{}</text>"#,
            bounds.x + bounds.width / 2.0,
            y,
            font,
            brush,
            baseline,
            text.replace('&', "&amp;").replace('<', "&lt;"),
        )
        .unwrap();
    }

    fn measure_text(&mut self, text: &str, font: &f64) -> Size {
        Size::new(text.chars().count() as f64 * font * 0.6, *font)
    }

    fn default_font(&mut self, em_size: f64) -> f64 {
        em_size
    }

    fn save(&mut self) {
        self.saved.push(self.groups);
    }

    fn restore(&mut self) {
        let groups = self.saved.pop().unwrap_or(0);
        while self.groups > groups {
            self.body += "</g>";
            self.groups -= 1;
        }
    }

    fn rotate_at(&mut self, degrees: f64, origin: Point) {
        write!(
            self.body,
            r#"<g transform="rotate({} {} {})">"#,
            degrees, origin.x, origin.y
        )
        .unwrap();
        self.groups += 1;
    }
}

fn main() {
    let mut msg = String::new();
    if atty::isnt(atty::Stream::Stdin) {
        std::io::stdin().read_to_string(&mut msg).unwrap();
    }
    let msg = msg.trim_end_matches('\n');

    let width = 300.0;
    let height = 80.0;
    let code = Code128::builder()
        .with_subset(Subset::Auto)
        .with_size(Size::new(width, height))
        .with_text_location(TextLocation::Below)
        .build(msg)
        .unwrap();

    let mut svg = Svg::default();
    let style = Style {
        foreground: "black",
        background: "white",
        font: None,
    };
    code.render(&mut svg, &style, Point::new(10.0, 10.0)).unwrap();

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">{}</svg>"#,
        width + 20.0,
        height + 20.0,
        svg.body
    );
}
