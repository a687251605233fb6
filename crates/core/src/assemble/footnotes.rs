//! Footnote collection.

use super::unit::{Unit, UnitKind};

/// Units that read as footnote content: a bracketed number up front.
pub fn looks_like_footnote(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('[') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Ordered footnote units, kept apart from the paragraph sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FootnoteCollector {
    footnotes: Vec<Unit>,
}

impl FootnoteCollector {
    pub fn collect(&mut self, mut unit: Unit) {
        unit.kind = UnitKind::Footnote;
        tracing::debug!(count = self.footnotes.len() + 1, "collected footnote");
        self.footnotes.push(unit);
    }

    /// Number of footnotes collected so far.
    pub fn count(&self) -> usize {
        self.footnotes.len()
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.footnotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footnote_shape() {
        assert!(looks_like_footnote("[12] See"));
        assert!(!looks_like_footnote("[a] list"));
        assert!(!looks_like_footnote("["));
        assert!(!looks_like_footnote("Plain [1]"));
        assert!(!looks_like_footnote(""));
    }

    #[test]
    fn collected_units_are_footnotes() {
        let mut collector = FootnoteCollector::default();
        collector.collect(Unit::new(UnitKind::Paragraph, "[1] Ibid."));
        assert_eq!(collector.count(), 1);
        let units = collector.into_units();
        assert_eq!(units[0].kind, UnitKind::Footnote);
        assert_eq!(units[0].text, "[1] Ibid.");
    }
}
