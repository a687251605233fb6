//! Reconstruction state carried across lines and pages.

use super::bullet::BulletTracker;

/// Mutable state of one reconstruction run.
///
/// Owned by its assembler; two assemblers never share one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconstructionState {
    /// Chapter number waiting for its title line.
    pub chapter_number: Option<String>,
    /// Style of the last rendered glyph.
    pub italic: bool,
    pub previous_was_quote: bool,
    /// A footnote body interrupted a quote; the next page resumes the quote.
    pub quote_before_footnote: bool,
    pub inverted: bool,
    pub bullets: BulletTracker,
    pub in_bibliography: bool,
    /// Inside a `<...>` link of a bibliography entry.
    pub in_bibliography_link: bool,
    /// Line breaks still to be swallowed after a drop capital.
    pub ignore_breaks: u8,
    /// Footnotes collected before the current page.
    pub footnote_offset: usize,
    pub page: u32,
    /// No line of the current page has been assembled yet.
    pub at_page_start: bool,
    /// No body line of the current page has been assembled yet. Headings
    /// and bibliography lines leave it set.
    pub awaiting_body_line: bool,
}
