//! The assembled document and its rendering.

use crate::assemble::Unit;
use crate::calibration::{Calibration, HeaderField};
use crate::markup::{BIBLIO_CLOSE, BIBLIO_OPEN, UNIT_SEPARATOR};
use crate::patch::PatchSet;

/// Paragraph units followed by footnote units.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    header: Vec<HeaderField>,
    paragraphs: Vec<Unit>,
    footnotes: Vec<Unit>,
    bibliography_start: Option<usize>,
}

impl Document {
    pub fn new(
        header: Vec<HeaderField>,
        paragraphs: Vec<Unit>,
        footnotes: Vec<Unit>,
        bibliography_start: Option<usize>,
    ) -> Self {
        Self {
            header,
            paragraphs,
            footnotes,
            bibliography_start,
        }
    }

    pub fn header(&self) -> &[HeaderField] {
        &self.header
    }

    pub fn paragraphs(&self) -> &[Unit] {
        &self.paragraphs
    }

    pub fn footnotes(&self) -> &[Unit] {
        &self.footnotes
    }

    /// Joins header, paragraphs and footnotes with blank lines.
    ///
    /// Bibliography entries, from the first unit after the bibliography
    /// heading to the last paragraph, are wrapped in `<biblio>` tags.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> =
            Vec::with_capacity(1 + self.paragraphs.len() + self.footnotes.len());

        if !self.header.is_empty() {
            let header: Vec<String> = self
                .header
                .iter()
                .map(|f| format!("#{} {}", f.key, f.value))
                .collect();
            parts.push(header.join("\n"));
        }

        let biblio = self
            .bibliography_start
            .filter(|&start| start < self.paragraphs.len());
        let last = self.paragraphs.len().saturating_sub(1);
        for (i, unit) in self.paragraphs.iter().enumerate() {
            let mut text = String::with_capacity(unit.text.len());
            if biblio == Some(i) {
                text.push_str(BIBLIO_OPEN);
                text.push('\n');
            }
            text.push_str(&unit.text);
            if biblio.is_some() && i == last {
                text.push('\n');
                text.push_str(BIBLIO_CLOSE);
            }
            parts.push(text);
        }

        parts.extend(self.footnotes.iter().map(|u| u.text.clone()));
        parts.join(UNIT_SEPARATOR)
    }

    /// Renders and applies the calibration's corrective patches, then the
    /// markup normalization table when `normalize` is set.
    pub fn to_text(&self, calibration: &Calibration, normalize: bool) -> String {
        let text = PatchSet::new(calibration.patches.clone()).apply(&self.render());
        if normalize {
            PatchSet::normalization().apply(&text)
        } else {
            text
        }
    }
}
