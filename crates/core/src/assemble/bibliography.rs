//! Bibliography entry rendering.
//!
//! Once the bibliography chapter begins, lines bypass footnote extraction and
//! quote detection. An entry starts at or left of the base margin; hanging
//! continuation lines merge into it.

use crate::markup::push_styled;
use crate::model::Line;

/// Renders a bibliography line, tagging italics and tracking `<...>` link
/// delimiters. Returns the trimmed markup.
pub fn render_bibliography_line(line: &Line, italic: &mut bool, in_link: &mut bool) -> String {
    let mut out = String::new();
    for glyph in line.glyphs() {
        push_styled(&mut out, glyph, italic);
        match glyph.get_text() {
            "<" => *in_link = true,
            ">" => *in_link = false,
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_in_italics() {
        let line = Line::builder(300.0)
            .at(24.0)
            .text("Carson, Kevin. ")
            .italic(true)
            .text("The Homebrew")
            .build();
        let mut italic = false;
        let mut in_link = false;
        let text = render_bibliography_line(&line, &mut italic, &mut in_link);
        assert_eq!(text, "Carson, Kevin. <em>The Homebrew");
        assert!(italic);
        assert!(!in_link);
    }

    #[test]
    fn unterminated_link_is_tracked() {
        let line = Line::builder(300.0).at(36.0).text("<http://c4ss.org/con-").build();
        let mut italic = false;
        let mut in_link = false;
        render_bibliography_line(&line, &mut italic, &mut in_link);
        assert!(in_link);

        let rest = Line::builder(288.0).at(36.0).text("tent/123>.").build();
        render_bibliography_line(&rest, &mut italic, &mut in_link);
        assert!(!in_link);
    }
}
