//! Glyph type: one rendered character.
//!
//! Use `Glyph::builder()` to construct glyphs with optional fields.

use crate::utils::{HasBBox, Rect};

/// Builder for Glyph with fluent API for optional fields.
#[derive(Debug, Clone)]
pub struct GlyphBuilder {
    bbox: Rect,
    text: String,
    size: f64,
    italic: bool,
}

impl GlyphBuilder {
    /// Creates a new builder with required fields. `italic` defaults to false.
    pub fn new(bbox: Rect, text: &str, size: f64) -> Self {
        Self {
            bbox,
            text: text.to_string(),
            size,
            italic: false,
        }
    }

    pub const fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn build(self) -> Glyph {
        Glyph {
            bbox: self.bbox,
            text: self.text,
            size: self.size,
            italic: self.italic,
        }
    }
}

/// A positioned character with its font size and style.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    bbox: Rect,
    text: String,
    size: f64,
    italic: bool,
}

impl Glyph {
    pub fn builder(bbox: Rect, text: &str, size: f64) -> GlyphBuilder {
        GlyphBuilder::new(bbox, text, size)
    }

    pub fn new(bbox: Rect, text: &str, size: f64, italic: bool) -> Self {
        Self::builder(bbox, text, size).italic(italic).build()
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    pub const fn size(&self) -> f64 {
        self.size
    }

    pub const fn italic(&self) -> bool {
        self.italic
    }
}

impl HasBBox for Glyph {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_upright() {
        let g = Glyph::builder((0.0, 0.0, 5.0, 11.0), "a", 11.0).build();
        assert!(!g.italic());
        assert_eq!(g.get_text(), "a");
        assert_eq!(g.size(), 11.0);
        assert_eq!(g.bbox(), (0.0, 0.0, 5.0, 11.0));
    }

    #[test]
    fn builder_matches_new_constructor() {
        let via_new = Glyph::new((1.0, 2.0, 3.0, 4.0), "x", 9.0, true);
        let via_builder = Glyph::builder((1.0, 2.0, 3.0, 4.0), "x", 9.0)
            .italic(true)
            .build();
        assert_eq!(via_new, via_builder);
    }
}
