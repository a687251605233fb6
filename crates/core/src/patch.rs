//! Literal find/replace tables applied to the assembled text.
//!
//! Two tables run after assembly: the document's own corrective patches
//! (from the calibration file), then the generic markup normalization
//! below. Each entry replaces every occurrence, in table order.

use serde::{Deserialize, Serialize};

/// One literal replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub find: String,
    pub replace: String,
}

impl Patch {
    pub fn new(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }
}

/// Ordered list of patches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    patches: Vec<Patch>,
}

impl PatchSet {
    pub fn new(patches: Vec<Patch>) -> Self {
        Self { patches }
    }

    /// Markup cleanups that hold for any document produced by the assembler.
    pub fn normalization() -> Self {
        Self::new(vec![
            Patch::new(". . . . .", "....."),
            Patch::new(". . . .", "...."),
            Patch::new(". . .", "..."),
            // a quote interrupted by a page break reads as one block
            Patch::new("</quote>\n\n<quote>", "\n\n"),
            Patch::new("•\n\n", "\n\n• "),
            Patch::new(" • ", "\n\n - "),
            Patch::new("\n\n• ", "\n\n - "),
            Patch::new("<quote>• ", "<quote>\n - "),
            Patch::new("<em> </em>", " "),
            Patch::new(" </em>", "</em> "),
        ])
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for patch in &self.patches {
            if patch.find.is_empty() {
                continue;
            }
            if out.contains(&patch.find) {
                tracing::debug!(find = %patch.find, "applying patch");
                out = out.replace(&patch.find, &patch.replace);
            }
        }
        out
    }
}
