//! Positional primitives consumed from the layout analyzer.
//!
//! Glyphs are owned by their line, lines by their page; none of them change
//! once built.

pub mod glyph;
pub mod line;
pub mod page;

pub use glyph::{Glyph, GlyphBuilder};
pub use line::{Line, LineBuilder, LineElement};
pub use page::Page;
