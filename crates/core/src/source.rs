//! Layout dump ingestion model.
//!
//! Serde mirror of what a pdfminer-style layout analyzer yields per page:
//! text boxes holding lines of characters, plus pre-grouped line wrappers,
//! figures and other items that the reconstruction ignores. Run the
//! analyzer with `line_margin = 0` so that it performs no paragraph
//! grouping of its own.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::Rect;

/// A whole layout dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// One analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    pub pageid: u32,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
}

/// Top-level layout object on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutItem {
    TextBox { bbox: Rect, lines: Vec<LayoutLine> },
    /// A line the analyzer already grouped on its own.
    TextLine(LayoutLine),
    Figure { bbox: Rect },
    Other { bbox: Rect },
}

impl LayoutItem {
    pub fn bbox(&self) -> Rect {
        match self {
            LayoutItem::TextBox { bbox, .. }
            | LayoutItem::Figure { bbox }
            | LayoutItem::Other { bbox } => *bbox,
            LayoutItem::TextLine(line) => line.bbox,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    pub bbox: Rect,
    #[serde(default)]
    pub elements: Vec<LayoutElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutElement {
    Char {
        text: String,
        fontname: String,
        size: f64,
        bbox: Rect,
    },
    Anno {
        text: String,
    },
}
