//! Block quote candidacy and the paragraph boundary test.

use crate::calibration::Calibration;
use crate::utils::strictly_between;

/// Result of checking a quote line against the inversion marker lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionToggle {
    Start,
    End,
    Unchanged,
}

/// A line set in small text and indented past the base margin.
///
/// Footnote bodies share the small size, but their first line leads with a
/// reference-sized marker and their continuations sit at the base margin,
/// so neither qualifies.
pub fn is_quote_candidate(size: f64, margin: f64, calibration: &Calibration) -> bool {
    strictly_between(calibration.sizes.reference, size, calibration.sizes.small_text)
        && margin > calibration.margins.base
}

/// Updates the inverted-indentation flag from a quote line's text.
///
/// Start markers win when a line carries both kinds.
pub fn toggle_inversion(text: &str, inverted: &mut bool, calibration: &Calibration) -> InversionToggle {
    if calibration.inverted_start.iter().any(|m| text.contains(m.as_str())) {
        *inverted = true;
        InversionToggle::Start
    } else if calibration.inverted_end.iter().any(|m| text.contains(m.as_str())) {
        *inverted = false;
        InversionToggle::End
    } else {
        InversionToggle::Unchanged
    }
}

/// Decides whether a body line opens a new unit.
///
/// Three look-alike shapes have to be told apart: a quote starting, a quote
/// continuing, and prose resuming after a quote. A boundary holds when any
/// of these does:
/// - inverted quoting XOR the margin sits in the quote-continuation band
/// - prose indented past the base margin
/// - quote candidacy changed since the previous line
pub fn starts_new_paragraph(
    candidate: bool,
    previous_was_quote: bool,
    inverted: bool,
    margin: f64,
    calibration: &Calibration,
) -> bool {
    let m = &calibration.margins;
    let in_continuation_band =
        strictly_between(m.quote_continuation_min, margin, m.quote_continuation_max);
    ((inverted && candidate) ^ in_continuation_band)
        || (!candidate && margin > m.base)
        || (candidate ^ previous_was_quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calibration() -> Calibration {
        let mut c = Calibration::default();
        c.inverted_start.push("Why are we trying".to_string());
        c.inverted_end.push("explored significant parts".to_string());
        c
    }

    #[test]
    fn candidacy_needs_small_size_and_indent() {
        let c = calibration();
        assert!(is_quote_candidate(9.0, 40.0, &c));
        assert!(!is_quote_candidate(9.0, 24.0, &c));
        assert!(!is_quote_candidate(11.5, 40.0, &c));
        assert!(!is_quote_candidate(6.0, 40.0, &c));
    }

    #[test]
    fn inversion_markers_toggle() {
        let c = calibration();
        let mut inverted = false;
        assert_eq!(
            toggle_inversion("“Why are we trying to recreate", &mut inverted, &c),
            InversionToggle::Start
        );
        assert!(inverted);
        assert_eq!(toggle_inversion("ordinary", &mut inverted, &c), InversionToggle::Unchanged);
        assert!(inverted);
        assert_eq!(
            toggle_inversion("explored significant parts of courses", &mut inverted, &c),
            InversionToggle::End
        );
        assert!(!inverted);
    }

    #[test]
    fn prose_continuation_at_base_margin() {
        let c = calibration();
        assert!(!starts_new_paragraph(false, false, false, 24.0, &c));
    }

    #[test]
    fn indented_prose_starts_paragraph() {
        let c = calibration();
        assert!(starts_new_paragraph(false, false, false, 36.0, &c));
    }

    #[test]
    fn quote_start_and_continuation() {
        let c = calibration();
        // first quote line after prose: candidacy changed
        assert!(starts_new_paragraph(true, false, false, 36.0, &c));
        // continuation at the quote's own margin
        assert!(!starts_new_paragraph(true, true, false, 36.0, &c));
        // deeper indent inside the quote opens a new quoted paragraph
        assert!(starts_new_paragraph(true, true, false, 48.0, &c));
    }

    #[test]
    fn inversion_flips_the_indent_band() {
        let c = calibration();
        // inverted: hanging lines at the deep indent continue...
        assert!(!starts_new_paragraph(true, true, true, 48.0, &c));
        // ...and the shallow indent opens the next quoted paragraph
        assert!(starts_new_paragraph(true, true, true, 36.0, &c));
    }

    #[test]
    fn prose_after_quote() {
        let c = calibration();
        assert!(starts_new_paragraph(false, true, false, 24.0, &c));
    }
}
