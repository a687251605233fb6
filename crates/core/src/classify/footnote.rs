//! Footnote reference extraction and body-line rendering.
//!
//! A maximal run of glyphs below the reference size is a superscript
//! footnote number. It is re-emitted as `[n]` with `n` shifted by the count
//! of footnotes collected on earlier pages, so references from the whole
//! document share one numbering.

use crate::error::{ReflowError, Result};
use crate::markup::push_styled;
use crate::model::Line;

/// A body line rendered to markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    /// The line leads with a footnote number: it starts a footnote body
    /// rather than citing one.
    pub opens_footnote: bool,
}

/// Renders a body line's glyphs, renumbering footnote references and tagging
/// italic spans. Virtual characters are not rendered.
pub fn render_body_line(
    line: &Line,
    reference_size: f64,
    offset: usize,
    italic: &mut bool,
    page: u32,
) -> Result<RenderedLine> {
    let mut out = String::new();
    let mut run: Option<String> = None;
    let mut opens_footnote = false;

    for glyph in line.glyphs() {
        if glyph.size() < reference_size {
            let digits = run.get_or_insert_with(|| {
                out.push('[');
                String::new()
            });
            digits.push_str(glyph.get_text());
            continue;
        }
        if let Some(digits) = run.take() {
            close_reference(&mut out, &digits, offset, &mut opens_footnote, line, page)?;
        }
        push_styled(&mut out, glyph, italic);
    }
    if let Some(digits) = run.take() {
        close_reference(&mut out, &digits, offset, &mut opens_footnote, line, page)?;
    }

    Ok(RenderedLine {
        text: out.trim().to_string(),
        opens_footnote,
    })
}

fn close_reference(
    out: &mut String,
    digits: &str,
    offset: usize,
    opens_footnote: &mut bool,
    line: &Line,
    page: u32,
) -> Result<()> {
    let number: usize = digits
        .trim()
        .parse()
        .map_err(|_| ReflowError::FootnoteMarker {
            page,
            line: line.get_text(),
            digits: digits.to_string(),
        })?;
    out.push_str(&(number + offset).to_string());
    out.push(']');
    if out.starts_with('[') {
        out.push(' ');
        *opens_footnote = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: f64 = 7.0;

    fn render(line: &Line, offset: usize) -> RenderedLine {
        let mut italic = false;
        render_body_line(line, REF, offset, &mut italic, 1).unwrap()
    }

    #[test]
    fn mid_sentence_reference_is_renumbered() {
        let line = Line::builder(100.0)
            .text("as argued.")
            .size(6.0)
            .text("12")
            .size(11.5)
            .text(" Then")
            .build();
        let rendered = render(&line, 30);
        assert_eq!(rendered.text, "as argued.[42] Then");
        assert!(!rendered.opens_footnote);
    }

    #[test]
    fn leading_reference_opens_footnote() {
        let line = Line::builder(60.0)
            .size(6.0)
            .text("3")
            .size(9.0)
            .text("See Kevin Carson")
            .build();
        let rendered = render(&line, 10);
        assert_eq!(rendered.text, "[13] See Kevin Carson");
        assert!(rendered.opens_footnote);
    }

    #[test]
    fn reference_at_end_of_line_is_closed() {
        let line = Line::builder(100.0)
            .text("the end.")
            .size(6.0)
            .text("7")
            .build();
        let rendered = render(&line, 0);
        assert_eq!(rendered.text, "the end.[7]");
    }

    #[test]
    fn non_numeric_marker_is_fatal() {
        let line = Line::builder(100.0)
            .text("odd")
            .size(6.0)
            .text("*")
            .size(11.5)
            .text(" mark")
            .build();
        let mut italic = false;
        let err = render_body_line(&line, REF, 0, &mut italic, 77).unwrap_err();
        match err {
            ReflowError::FootnoteMarker { page, digits, line } => {
                assert_eq!(page, 77);
                assert_eq!(digits, "*");
                assert_eq!(line, "odd* mark");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn virtual_characters_are_not_rendered() {
        let line = Line::builder(100.0).text("a").anno(" ").text("b").build();
        assert_eq!(render(&line, 0).text, "ab");
    }

    #[test]
    fn italics_are_tagged() {
        let line = Line::builder(100.0)
            .text("read ")
            .italic(true)
            .text("Capital")
            .italic(false)
            .text(" now")
            .build();
        assert_eq!(render(&line, 0).text, "read <em>Capital</em> now");
    }
}
