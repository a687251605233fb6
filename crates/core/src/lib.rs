//! paramuse - Paragraph reconstruction from positioned PDF glyphs.
//!
//! Consumes the per-page output of a pdfminer-style layout analyzer (lines of
//! glyphs with font size, style and position) and rebuilds the semantic
//! structure the page layout only implies: chapter and section headings,
//! block quotes, bullet lists, italic spans, bibliography entries and
//! footnotes, rendered as Muse markup.

pub mod api;
pub mod assemble;
pub mod calibration;
pub mod classify;
pub mod document;
pub mod error;
pub mod markup;
pub mod model;
pub mod patch;
pub mod source;
pub mod utils;

pub use api::high_level;

pub use assemble::{Assembler, ReconstructionState, Unit, UnitKind};
pub use calibration::Calibration;
pub use document::Document;
pub use error::{ReflowError, Result};
