//! Reconstruction calibration.
//!
//! Contains the `Calibration` struct: font-size bands, margins, marker glyphs
//! and the document-specific override tables. Every band comparison made by
//! the classifiers is strict, so a size sitting exactly on a threshold falls
//! through to the next rule.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReflowError, Result};
use crate::patch::Patch;

/// Font-size thresholds separating the typographic regimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBands {
    /// Above this: section titles.
    pub section: f64,
    /// Above this: chapter numbers.
    pub chapter_number: f64,
    /// Above this: chapter titles.
    pub chapter_title: f64,
    /// Above this: the oversized first letter of a chapter.
    pub drop_capital: f64,
    /// Below this: superscript footnote reference numbers.
    pub reference: f64,
    /// Below this: block quotes and footnote bodies.
    pub small_text: f64,
}

impl Default for SizeBands {
    fn default() -> Self {
        Self {
            section: 13.0,
            chapter_number: 19.0,
            chapter_title: 23.0,
            drop_capital: 31.0,
            reference: 7.0,
            small_text: 10.0,
        }
    }
}

/// Horizontal positions used for paragraph and quote boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Left margin of running text.
    pub base: f64,
    /// Lower (exclusive) edge of the indent band of quote continuations.
    pub quote_continuation_min: f64,
    /// Upper (exclusive) edge of the indent band of quote continuations.
    pub quote_continuation_max: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            base: 24.0,
            quote_continuation_min: 40.0,
            quote_continuation_max: 60.0,
        }
    }
}

/// Exact whole-line override of the computed left margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginOverride {
    pub text: String,
    pub margin: f64,
}

/// A `#key value` directive emitted at the top of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderField {
    pub key: String,
    pub value: String,
}

/// Parameters controlling line classification and paragraph assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub sizes: SizeBands,
    pub margins: Margins,

    /// Layout elements whose top edge lies above this are page furniture.
    pub page_top_cutoff: f64,

    /// Characters whose position counts toward a line's left margin.
    /// Leading decoration (bullets, dashes) is excluded this way.
    pub margin_chars: String,

    /// Font-name substring identifying italic faces.
    pub italic_font_marker: String,

    pub bullet_marker: char,

    /// A chapter title containing this word switches to bibliography rules.
    pub bibliography_marker: String,

    /// Quote lines containing one of these start inverted indentation.
    pub inverted_start: Vec<String>,

    /// Quote lines containing one of these end inverted indentation.
    pub inverted_end: Vec<String>,

    pub margin_overrides: Vec<MarginOverride>,

    pub header: Vec<HeaderField>,

    /// Literal fixups applied once to the assembled text.
    pub patches: Vec<Patch>,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            sizes: SizeBands::default(),
            margins: Margins::default(),
            page_top_cutoff: 640.0,
            margin_chars:
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.“”’()[]"
                    .to_string(),
            italic_font_marker: "Italic".to_string(),
            bullet_marker: '•',
            bibliography_marker: "Bibliography".to_string(),
            inverted_start: Vec::new(),
            inverted_end: Vec::new(),
            margin_overrides: Vec::new(),
            header: Vec::new(),
            patches: Vec::new(),
        }
    }
}

impl Calibration {
    /// Loads a calibration from JSON. Missing fields take their defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let calibration: Self = serde_json::from_reader(reader)?;
        calibration.validate()?;
        Ok(calibration)
    }

    /// Loads a calibration file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Checks that the heading bands form a strictly descending cascade and
    /// that the small-text bands are ordered.
    pub fn validate(&self) -> Result<()> {
        let s = &self.sizes;
        let cascade = [
            ("drop_capital", s.drop_capital),
            ("chapter_title", s.chapter_title),
            ("chapter_number", s.chapter_number),
            ("section", s.section),
        ];
        for pair in cascade.windows(2) {
            let (upper_name, upper) = pair[0];
            let (lower_name, lower) = pair[1];
            if upper <= lower {
                return Err(ReflowError::InvalidCalibration(format!(
                    "{upper_name} ({upper}) must exceed {lower_name} ({lower})"
                )));
            }
        }
        if s.reference >= s.small_text {
            return Err(ReflowError::InvalidCalibration(format!(
                "reference ({}) must be below small_text ({})",
                s.reference, s.small_text
            )));
        }
        let m = &self.margins;
        if m.quote_continuation_min >= m.quote_continuation_max {
            return Err(ReflowError::InvalidCalibration(format!(
                "quote continuation band [{}, {}] is empty",
                m.quote_continuation_min, m.quote_continuation_max
            )));
        }
        Ok(())
    }

    pub(crate) fn is_margin_char(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.margin_chars.contains(c),
            _ => false,
        }
    }

    pub(crate) fn margin_override(&self, text: &str) -> Option<f64> {
        self.margin_overrides
            .iter()
            .find(|o| o.text == text)
            .map(|o| o.margin)
    }
}
