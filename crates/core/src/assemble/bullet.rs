//! Sticky bullet-list mode.

/// Tracks whether a bullet list is being assembled.
///
/// While the mode is active a bullet marker always opens a new item, an
/// unmarked line that would otherwise start a paragraph ends the list, and
/// any other unmarked line continues the current item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulletTracker {
    active: bool,
}

impl BulletTracker {
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Overrides the geometric boundary decision for one line.
    pub fn decide(&mut self, has_marker: bool, new_paragraph: bool) -> bool {
        if has_marker {
            if !self.active {
                tracing::debug!("entering bullet list");
            }
            self.active = true;
            return true;
        }
        if self.active && new_paragraph {
            tracing::debug!("leaving bullet list");
            self.active = false;
        }
        new_paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_enters_and_forces_boundary() {
        let mut tracker = BulletTracker::default();
        assert!(tracker.decide(true, false));
        assert!(tracker.is_active());
    }

    #[test]
    fn unmarked_continuation_stays_in_list() {
        let mut tracker = BulletTracker::default();
        tracker.decide(true, true);
        assert!(!tracker.decide(false, false));
        assert!(tracker.is_active());
    }

    #[test]
    fn unmarked_new_paragraph_leaves_list() {
        let mut tracker = BulletTracker::default();
        tracker.decide(true, true);
        assert!(tracker.decide(false, true));
        assert!(!tracker.is_active());
    }

    #[test]
    fn inactive_passes_decision_through() {
        let mut tracker = BulletTracker::default();
        assert!(!tracker.decide(false, false));
        assert!(tracker.decide(false, true));
        assert!(!tracker.is_active());
    }
}
