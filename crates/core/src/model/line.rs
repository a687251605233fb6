//! Text line types: Line, LineElement and the LineBuilder fixture API.

use crate::calibration::Calibration;
use crate::utils::{HasBBox, Rect};

use super::glyph::Glyph;

/// Element in a text line - either a glyph or a virtual character.
///
/// Virtual characters are whitespace inferred by the layout analyzer from
/// glyph spacing. They take part in the line's text but carry no geometry
/// and are never rendered into the output.
#[derive(Debug, Clone, PartialEq)]
pub enum LineElement {
    Glyph(Glyph),
    Virtual(String),
}

impl LineElement {
    fn text(&self) -> &str {
        match self {
            LineElement::Glyph(g) => g.get_text(),
            LineElement::Virtual(s) => s,
        }
    }
}

/// One visual line of text, elements in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    bbox: Rect,
    elements: Vec<LineElement>,
}

impl Line {
    pub fn new(bbox: Rect, elements: Vec<LineElement>) -> Self {
        Self { bbox, elements }
    }

    /// Starts a line whose glyphs sit on baseline `y`.
    pub fn builder(y: f64) -> LineBuilder {
        LineBuilder::new(y)
    }

    pub fn elements(&self) -> &[LineElement] {
        &self.elements
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.elements.iter().filter_map(|e| match e {
            LineElement::Glyph(g) => Some(g),
            LineElement::Virtual(_) => None,
        })
    }

    /// Concatenated text of every element, trimmed.
    pub fn get_text(&self) -> String {
        let text: String = self.elements.iter().map(LineElement::text).collect();
        text.trim().to_string()
    }

    /// Font size of the first glyph.
    pub fn leading_size(&self) -> Option<f64> {
        self.glyphs().next().map(Glyph::size)
    }

    /// Highest glyph top, or the line box top for a line without glyphs.
    pub fn top(&self) -> f64 {
        self.glyphs()
            .map(HasBBox::y1)
            .reduce(f64::max)
            .unwrap_or(self.bbox.3)
    }

    /// Leftmost x0 among glyphs that count toward the margin.
    ///
    /// Leading decoration such as bullets or dashes is ignored. A line with no
    /// qualifying glyph reports its right edge, which places it far from any
    /// margin band.
    pub fn left_margin(&self, calibration: &Calibration) -> f64 {
        if let Some(margin) = calibration.margin_override(&self.get_text()) {
            return margin;
        }
        self.glyphs()
            .filter(|g| calibration.is_margin_char(g.get_text()))
            .map(HasBBox::x0)
            .reduce(f64::min)
            .unwrap_or(self.bbox.2)
    }
}

impl HasBBox for Line {
    fn x0(&self) -> f64 {
        self.bbox.0
    }
    fn y0(&self) -> f64 {
        self.bbox.1
    }
    fn x1(&self) -> f64 {
        self.bbox.2
    }
    fn y1(&self) -> f64 {
        self.bbox.3
    }
}

/// Builds lines glyph by glyph, advancing a horizontal cursor.
///
/// Each glyph is half its font size wide. Intended for fixtures and
/// benchmarks; real input goes through `Page::from_layout`.
///
/// # Example
/// ```
/// use paramuse_core::model::Line;
///
/// let line = Line::builder(500.0)
///     .at(30.0)
///     .size(11.0)
///     .text("as noted")
///     .size(6.0)
///     .text("3")
///     .build();
/// assert_eq!(line.get_text(), "as noted3");
/// ```
#[derive(Debug, Clone)]
pub struct LineBuilder {
    y: f64,
    cursor: f64,
    size: f64,
    italic: bool,
    elements: Vec<LineElement>,
}

impl LineBuilder {
    pub fn new(y: f64) -> Self {
        Self {
            y,
            cursor: 0.0,
            size: 11.5,
            italic: false,
            elements: Vec::new(),
        }
    }

    /// Moves the cursor to `x`.
    pub fn at(mut self, x: f64) -> Self {
        self.cursor = x;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Appends one glyph per character of `text` using the current style.
    pub fn text(mut self, text: &str) -> Self {
        let width = self.size * 0.5;
        for c in text.chars() {
            let bbox = (self.cursor, self.y, self.cursor + width, self.y + self.size);
            let glyph = Glyph::new(bbox, c.encode_utf8(&mut [0; 4]), self.size, self.italic);
            self.elements.push(LineElement::Glyph(glyph));
            self.cursor += width;
        }
        self
    }

    /// Appends a virtual character.
    pub fn anno(mut self, text: &str) -> Self {
        self.elements.push(LineElement::Virtual(text.to_string()));
        self
    }

    pub fn build(self) -> Line {
        let mut bbox = (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for element in &self.elements {
            if let LineElement::Glyph(g) = element {
                bbox.0 = bbox.0.min(g.x0());
                bbox.1 = bbox.1.min(g.y0());
                bbox.2 = bbox.2.max(g.x1());
                bbox.3 = bbox.3.max(g.y1());
            }
        }
        if bbox.0 > bbox.2 {
            bbox = (self.cursor, self.y, self.cursor, self.y);
        }
        Line::new(bbox, self.elements)
    }
}
