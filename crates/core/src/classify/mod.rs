//! Per-line classifiers.
//!
//! Stateless given the reconstruction state: each reads a line's leading
//! size, margin or glyph stream and reports what the assembler should do.

pub mod footnote;
pub mod heading;
pub mod quote;

pub use footnote::{RenderedLine, render_body_line};
pub use heading::{HeadingLevel, LineClass, classify_line};
pub use quote::{InversionToggle, is_quote_candidate, starts_new_paragraph, toggle_inversion};
