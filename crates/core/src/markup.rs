//! Inline markup tokens of the output dialect.

use crate::model::Glyph;

pub const CHAPTER_PREFIX: &str = "** ";
pub const SECTION_PREFIX: &str = "*** ";
pub const QUOTE_OPEN: &str = "<quote>";
pub const QUOTE_CLOSE: &str = "</quote>";
pub const EM_OPEN: &str = "<em>";
pub const EM_CLOSE: &str = "</em>";
pub const BIBLIO_OPEN: &str = "<biblio>";
pub const BIBLIO_CLOSE: &str = "</biblio>";
pub const BULLET_ITEM: &str = " - ";

/// Unit separator in the rendered document.
pub const UNIT_SEPARATOR: &str = "\n\n";

/// Appends a glyph, emitting an italic marker when its style differs from
/// the previous glyph's. `italic` carries the style across lines.
pub fn push_styled(out: &mut String, glyph: &Glyph, italic: &mut bool) {
    let was_italic = *italic;
    *italic = glyph.italic();
    if *italic && !was_italic {
        out.push_str(EM_OPEN);
    } else if was_italic && !*italic {
        out.push_str(EM_CLOSE);
    }
    out.push_str(glyph.get_text());
}

/// True for an unterminated quote block.
pub fn is_open_quote(text: &str) -> bool {
    text.starts_with(QUOTE_OPEN) && !text.ends_with(QUOTE_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(text: &str, italic: bool) -> Glyph {
        Glyph::new((0.0, 0.0, 1.0, 1.0), text, 11.0, italic)
    }

    #[test]
    fn style_transitions_emit_markers() {
        let mut out = String::new();
        let mut italic = false;
        for g in [glyph("a", false), glyph("b", true), glyph("c", true), glyph("d", false)] {
            push_styled(&mut out, &g, &mut italic);
        }
        assert_eq!(out, "a<em>bc</em>d");
        assert!(!italic);
    }

    #[test]
    fn style_carries_over_between_calls() {
        let mut italic = true;
        let mut out = String::new();
        push_styled(&mut out, &glyph("x", true), &mut italic);
        assert_eq!(out, "x");
    }

    #[test]
    fn open_quote_detection() {
        assert!(is_open_quote("<quote>text"));
        assert!(!is_open_quote("<quote>text</quote>"));
        assert!(!is_open_quote("text"));
    }
}
