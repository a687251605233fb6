//! Page type and its construction from a layout dump.

use crate::calibration::Calibration;
use crate::source::{LayoutElement, LayoutItem, LayoutLine, LayoutPage};
use crate::utils::HasBBox;

use super::glyph::Glyph;
use super::line::{Line, LineElement};

/// A page number and its lines, top of page first.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: u32,
    lines: Vec<Line>,
}

impl Page {
    /// Creates a page, sorting lines by descending top. The sort is stable:
    /// lines sharing a top keep their given order.
    pub fn new(number: u32, mut lines: Vec<Line>) -> Self {
        lines.sort_by(|a, b| b.top().total_cmp(&a.top()));
        Self { number, lines }
    }

    /// Reconstructs the page's lines from a layout dump.
    ///
    /// Items whose top lies above the calibration cutoff are page furniture
    /// and dropped. Lines are taken from text boxes only: pre-grouped line
    /// wrappers are skipped so that line ordering stays under our control.
    pub fn from_layout(layout: &LayoutPage, calibration: &Calibration) -> Self {
        let mut lines = Vec::new();
        for item in &layout.items {
            if item.bbox().y1() > calibration.page_top_cutoff {
                continue;
            }
            if let LayoutItem::TextBox { lines: boxed, .. } = item {
                lines.extend(boxed.iter().map(|l| convert_line(l, calibration)));
            }
        }
        tracing::trace!(page = layout.pageid, lines = lines.len(), "ingested page");
        Self::new(layout.pageid, lines)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn convert_line(line: &LayoutLine, calibration: &Calibration) -> Line {
    let elements = line
        .elements
        .iter()
        .map(|element| match element {
            LayoutElement::Char {
                text,
                fontname,
                size,
                bbox,
            } => {
                let italic = fontname.contains(&calibration.italic_font_marker);
                LineElement::Glyph(Glyph::new(*bbox, text, *size, italic))
            }
            LayoutElement::Anno { text } => LineElement::Virtual(text.clone()),
        })
        .collect();
    Line::new(line.bbox, elements)
}
