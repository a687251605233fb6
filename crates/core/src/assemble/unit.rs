//! Paragraph units.

use crate::classify::HeadingLevel;

/// Semantic kind of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Heading(HeadingLevel),
    Paragraph,
    Quote,
    BulletItem,
    BibliographyEntry,
    Footnote,
}

/// One block of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    pub text: String,
}

impl Unit {
    pub fn new(kind: UnitKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
