//! Continuation merges.

/// Appends a continuation line, joining a word hyphenated across the break.
///
/// `separate` controls the space inserted for ordinary merges.
pub fn merge_line(unit: &mut String, line: &str, separate: bool) {
    if unit.ends_with('-') {
        unit.pop();
    } else if separate {
        unit.push(' ');
    }
    unit.push_str(line);
}

/// Bibliography merge: inside a link nothing is inserted or removed.
pub fn merge_bibliography_line(unit: &mut String, line: &str, in_link: bool) {
    if in_link {
        unit.push_str(line);
    } else {
        merge_line(unit, line, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphen_is_dropped() {
        let mut unit = "exam-".to_string();
        merge_line(&mut unit, "ple", true);
        assert_eq!(unit, "example");
    }

    #[test]
    fn ordinary_merge_inserts_space() {
        let mut unit = "one".to_string();
        merge_line(&mut unit, "two", true);
        assert_eq!(unit, "one two");
    }

    #[test]
    fn unseparated_merge() {
        let mut unit = "T".to_string();
        merge_line(&mut unit, "he", false);
        assert_eq!(unit, "The");
    }

    #[test]
    fn link_keeps_hyphen() {
        let mut unit = "<https://example.org/some-".to_string();
        merge_bibliography_line(&mut unit, "path>", true);
        assert_eq!(unit, "<https://example.org/some-path>");
    }

    #[test]
    fn bibliography_dehyphenates_outside_links() {
        let mut unit = "Carson, Kevin. Organi-".to_string();
        merge_bibliography_line(&mut unit, "zation Theory", false);
        assert_eq!(unit, "Carson, Kevin. Organization Theory");
    }
}
