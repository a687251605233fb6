//! Paragraph assembly.
//!
//! The assembler consumes one page's lines at a time, top first, and decides
//! for each whether it opens a new unit (heading, paragraph, quote, bullet
//! item, bibliography entry, footnote) or continues the open one. Exactly one
//! unit is open at any time; completed units are frozen in order. Footnote
//! bodies are moved out of the paragraph sequence into their own collection
//! once they end, which happens at the next boundary or page start.

pub mod bibliography;
pub mod bullet;
pub mod footnotes;
pub mod merge;
pub mod state;
pub mod unit;

pub use bullet::BulletTracker;
pub use footnotes::{FootnoteCollector, looks_like_footnote};
pub use state::ReconstructionState;
pub use unit::{Unit, UnitKind};

use crate::calibration::Calibration;
use crate::classify::{
    HeadingLevel, InversionToggle, LineClass, classify_line, is_quote_candidate,
    render_body_line, starts_new_paragraph, toggle_inversion,
};
use crate::document::Document;
use crate::error::{ReflowError, Result};
use crate::markup::{BULLET_ITEM, QUOTE_CLOSE, QUOTE_OPEN, is_open_quote};
use crate::model::{Line, Page};
use crate::utils::HasBBox;

use bibliography::render_bibliography_line;
use merge::{merge_bibliography_line, merge_line};

/// Line-by-line paragraph reconstruction engine.
#[derive(Debug, Clone)]
pub struct Assembler {
    calibration: Calibration,
    state: ReconstructionState,
    units: Vec<Unit>,
    open: Option<Unit>,
    footnotes: FootnoteCollector,
    /// Index of the first unit after the bibliography heading.
    bibliography_start: Option<usize>,
    line_index: usize,
}

impl Assembler {
    pub fn new(calibration: Calibration) -> Result<Self> {
        calibration.validate()?;
        Ok(Self {
            calibration,
            state: ReconstructionState::default(),
            units: Vec::new(),
            open: None,
            footnotes: FootnoteCollector::default(),
            bibliography_start: None,
            line_index: 0,
        })
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn state(&self) -> &ReconstructionState {
        &self.state
    }

    /// All paragraph units so far, the open one last.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().chain(self.open.as_ref())
    }

    pub fn current_unit(&self) -> Option<&Unit> {
        self.open.as_ref()
    }

    pub fn footnote_count(&self) -> usize {
        self.footnotes.count()
    }

    /// Runs a whole page through the assembler.
    pub fn process_page(&mut self, page: &Page) -> Result<()> {
        self.begin_page(page.number);
        for line in page.lines() {
            self.push_line(line)?;
        }
        self.end_page();
        Ok(())
    }

    pub fn begin_page(&mut self, number: u32) {
        tracing::info!(page = number, "processing page");
        self.state.page = number;
        self.state.at_page_start = true;
        self.state.awaiting_body_line = true;
        self.line_index = 0;
    }

    /// References on later pages are numbered after every footnote collected
    /// so far.
    pub fn end_page(&mut self) {
        self.state.footnote_offset = self.footnotes.count();
    }

    /// Classifies one line and merges it into the document.
    pub fn push_line(&mut self, line: &Line) -> Result<()> {
        let index = self.line_index;
        self.line_index += 1;
        let size = line.leading_size().ok_or(ReflowError::EmptyLine {
            page: self.state.page,
            index,
        })?;
        let text = line.get_text();

        // a footnote left open at the bottom of the previous page has ended
        if self.state.at_page_start && self.relocate_open_footnote() {
            self.state.footnote_offset = self.footnotes.count();
        }

        let class = classify_line(size, &text, &self.calibration.sizes);
        if class != LineClass::ChapterTitle {
            if let Some(number) = self.state.chapter_number.take() {
                return Err(ReflowError::DanglingChapterNumber {
                    page: self.state.page,
                    number,
                    line: text,
                });
            }
        }

        match class {
            LineClass::ChapterNumber => {
                tracing::debug!(number = %text, "chapter number");
                self.state.chapter_number = Some(text);
            }
            LineClass::ChapterTitle => self.push_chapter_title(text),
            LineClass::Section => {
                tracing::debug!(title = %text, "section heading");
                let level = HeadingLevel::Section;
                self.start_unit(UnitKind::Heading(level), format!("{}{text}", level.prefix()));
            }
            LineClass::DropCapital => {
                self.start_unit(UnitKind::Paragraph, text);
                self.state.ignore_breaks = 2;
            }
            LineClass::Body if self.state.in_bibliography => self.push_bibliography_line(line),
            LineClass::Body => self.push_body_line(line, &text, size)?,
        }
        self.state.at_page_start = false;
        Ok(())
    }

    /// Closes the run and returns the assembled document.
    ///
    /// A chapter number still waiting for its title is an error.
    pub fn finish(mut self) -> Result<Document> {
        if let Some(number) = self.state.chapter_number.take() {
            return Err(ReflowError::DanglingChapterNumber {
                page: self.state.page,
                number,
                line: "<end of document>".to_string(),
            });
        }
        self.relocate_open_footnote();
        if let Some(last) = self.last_unit_mut() {
            if is_open_quote(&last.text) {
                last.text.push_str(QUOTE_CLOSE);
            }
        }
        if let Some(open) = self.open.take() {
            self.units.push(open);
        }
        tracing::info!(
            paragraphs = self.units.len(),
            footnotes = self.footnotes.count(),
            "assembly finished"
        );
        Ok(Document::new(
            self.calibration.header.clone(),
            self.units,
            self.footnotes.into_units(),
            self.bibliography_start,
        ))
    }

    fn push_chapter_title(&mut self, text: String) {
        let level = HeadingLevel::Chapter;
        let heading = match self.state.chapter_number.take() {
            Some(number) => format!("{}{number}. {text}", level.prefix()),
            None => format!("{}{text}", level.prefix()),
        };
        tracing::debug!(%heading, "chapter heading");
        self.start_unit(UnitKind::Heading(level), heading);

        if !self.state.in_bibliography && text.contains(self.calibration.bibliography_marker.as_str()) {
            tracing::info!(page = self.state.page, "bibliography begins");
            self.state.in_bibliography = true;
            // the heading is open and will be committed at units.len()
            self.bibliography_start = Some(self.units.len() + 1);
        }
    }

    fn push_bibliography_line(&mut self, line: &Line) {
        let text = render_bibliography_line(
            line,
            &mut self.state.italic,
            &mut self.state.in_bibliography_link,
        );
        if line.x0() <= self.calibration.margins.base {
            self.start_unit(UnitKind::BibliographyEntry, text);
            return;
        }
        let in_link = self.state.in_bibliography_link;
        if let Some(unit) = self.last_unit_mut() {
            merge_bibliography_line(&mut unit.text, &text, in_link);
        } else {
            tracing::warn!(page = self.state.page, "bibliography continuation without an entry");
            self.start_unit(UnitKind::BibliographyEntry, text);
        }
    }

    fn push_body_line(&mut self, line: &Line, text: &str, size: f64) -> Result<()> {
        let margin = line.left_margin(&self.calibration);
        let candidate = is_quote_candidate(size, margin, &self.calibration);

        // the quote interrupted by last page's footnotes carries on here
        let first_body_line = std::mem::take(&mut self.state.awaiting_body_line);
        if first_body_line && self.state.quote_before_footnote {
            self.state.previous_was_quote = true;
            self.state.quote_before_footnote = false;
            if let Some(unit) = self.last_unit_mut() {
                if unit.text.ends_with(QUOTE_CLOSE) {
                    let len = unit.text.len() - QUOTE_CLOSE.len();
                    unit.text.truncate(len);
                    tracing::debug!("resuming quote across page break");
                }
            }
        }

        if candidate {
            match toggle_inversion(text, &mut self.state.inverted, &self.calibration) {
                InversionToggle::Start => tracing::debug!(page = self.state.page, "inverted indentation on"),
                InversionToggle::End => tracing::debug!(page = self.state.page, "inverted indentation off"),
                InversionToggle::Unchanged => {}
            }
        }

        let geometric = starts_new_paragraph(
            candidate,
            self.state.previous_was_quote,
            self.state.inverted,
            margin,
            &self.calibration,
        );
        let has_marker = text.contains(self.calibration.bullet_marker);
        let new_paragraph = self.state.bullets.decide(has_marker, geometric);

        let rendered = render_body_line(
            line,
            self.calibration.sizes.reference,
            self.state.footnote_offset,
            &mut self.state.italic,
            self.state.page,
        )?;
        if rendered.opens_footnote && self.state.previous_was_quote {
            self.state.quote_before_footnote = true;
        }
        self.state.previous_was_quote = candidate;

        let boundary =
            (new_paragraph && self.state.ignore_breaks == 0) || rendered.opens_footnote;
        if boundary {
            let (kind, unit_text) =
                self.body_unit(rendered.text, candidate, has_marker, rendered.opens_footnote);
            self.start_unit(kind, unit_text);
            return Ok(());
        }

        let separate = self.state.ignore_breaks == 0;
        if let Some(unit) = self.last_unit_mut() {
            merge_line(&mut unit.text, &rendered.text, separate);
        } else {
            tracing::warn!(page = self.state.page, "continuation line without an open unit");
            self.start_unit(UnitKind::Paragraph, rendered.text);
        }
        self.state.ignore_breaks = self.state.ignore_breaks.saturating_sub(1);
        Ok(())
    }

    fn body_unit(
        &self,
        text: String,
        candidate: bool,
        bullet: bool,
        opens_footnote: bool,
    ) -> (UnitKind, String) {
        let item = if bullet {
            text.strip_prefix(self.calibration.bullet_marker)
                .map(str::trim_start)
                .filter(|rest| !rest.is_empty())
                .map(str::to_string)
        } else {
            None
        };
        match (candidate, item) {
            (true, Some(rest)) => (UnitKind::Quote, format!("{QUOTE_OPEN}\n{BULLET_ITEM}{rest}")),
            (true, None) => (UnitKind::Quote, format!("{QUOTE_OPEN}{text}")),
            (false, Some(rest)) => (UnitKind::BulletItem, format!("{BULLET_ITEM}{rest}")),
            (false, None) if opens_footnote => (UnitKind::Footnote, text),
            (false, None) => (UnitKind::Paragraph, text),
        }
    }

    /// Commits the open unit and opens a new one. An open footnote goes to
    /// the footnote collection instead, and an unterminated quote is closed.
    fn start_unit(&mut self, kind: UnitKind, text: String) {
        self.relocate_open_footnote();
        if let Some(last) = self.last_unit_mut() {
            if is_open_quote(&last.text) {
                last.text.push_str(QUOTE_CLOSE);
            }
        }
        if let Some(previous) = self.open.take() {
            self.units.push(previous);
        }
        self.open = Some(Unit::new(kind, text));
    }

    fn relocate_open_footnote(&mut self) -> bool {
        match self.open.take() {
            Some(unit) if looks_like_footnote(&unit.text) => {
                self.footnotes.collect(unit);
                true
            }
            other => {
                self.open = other;
                false
            }
        }
    }

    /// The unit continuation lines merge into.
    ///
    /// Normally the open unit. After a footnote has been moved out, the
    /// unit before it becomes the last one again and is reopened.
    fn last_unit_mut(&mut self) -> Option<&mut Unit> {
        if self.open.is_none() {
            self.open = self.units.pop();
        }
        self.open.as_mut()
    }
}
