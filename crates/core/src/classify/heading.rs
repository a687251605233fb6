//! Heading classification by leading font size.

use crate::calibration::SizeBands;
use crate::markup::{CHAPTER_PREFIX, SECTION_PREFIX};
use crate::utils::strictly_between;

/// Heading levels of the output markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    /// Chapter titles (`** `).
    Chapter,
    /// Section titles (`*** `).
    Section,
}

impl HeadingLevel {
    pub const fn prefix(self) -> &'static str {
        match self {
            HeadingLevel::Chapter => CHAPTER_PREFIX,
            HeadingLevel::Section => SECTION_PREFIX,
        }
    }
}

/// What a line is, judged from its leading size alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    ChapterNumber,
    ChapterTitle,
    Section,
    /// A single oversized letter spanning the next two lines.
    DropCapital,
    Body,
}

/// Classifies a line by its leading glyph size.
///
/// The heading bands are open intervals stacked without overlap, so at most
/// one matches. A line above the drop-capital size that is longer than one
/// character is body text.
pub fn classify_line(size: f64, text: &str, sizes: &SizeBands) -> LineClass {
    if strictly_between(sizes.chapter_number, size, sizes.chapter_title) {
        LineClass::ChapterNumber
    } else if strictly_between(sizes.chapter_title, size, sizes.drop_capital) {
        LineClass::ChapterTitle
    } else if strictly_between(sizes.section, size, sizes.chapter_number) {
        LineClass::Section
    } else if size > sizes.drop_capital && text.chars().count() == 1 {
        LineClass::DropCapital
    } else {
        LineClass::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_map_to_classes() {
        let sizes = SizeBands::default();
        assert_eq!(classify_line(21.0, "4", &sizes), LineClass::ChapterNumber);
        assert_eq!(classify_line(26.0, "Title", &sizes), LineClass::ChapterTitle);
        assert_eq!(classify_line(14.5, "Section", &sizes), LineClass::Section);
        assert_eq!(classify_line(40.0, "T", &sizes), LineClass::DropCapital);
        assert_eq!(classify_line(11.5, "body", &sizes), LineClass::Body);
    }

    #[test]
    fn thresholds_themselves_are_body() {
        let sizes = SizeBands::default();
        for size in [13.0, 19.0, 23.0, 31.0] {
            assert_eq!(classify_line(size, "x", &sizes), LineClass::Body, "size {size}");
        }
    }

    #[test]
    fn oversized_multi_character_line_is_body() {
        let sizes = SizeBands::default();
        assert_eq!(classify_line(40.0, "TH", &sizes), LineClass::Body);
    }

    #[test]
    fn prefixes() {
        assert_eq!(HeadingLevel::Chapter.prefix(), "** ");
        assert_eq!(HeadingLevel::Section.prefix(), "*** ");
    }
}
