//! High-level conversion API.
//!
//! Provides the main entry points:
//! - `reconstruct()` - Assemble a layout dump into a `Document`
//! - `convert()` - Assemble and render to patched markup text
//! - `convert_to_fp()` - Convert and write to a writer

use std::io::Write;

use crate::assemble::Assembler;
use crate::calibration::Calibration;
use crate::document::Document;
use crate::error::Result;
use crate::model::Page;
use crate::source::{LayoutDocument, LayoutPage};

/// Options for conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Page ids to convert. None means all pages.
    pub page_numbers: Option<Vec<u32>>,

    /// Maximum number of pages to convert. 0 means no limit.
    pub maxpages: usize,

    /// Apply the markup normalization table after the calibration patches.
    pub normalize: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            page_numbers: None,
            maxpages: 0,
            normalize: true,
        }
    }
}

/// Selected pages in ascending page order.
fn selected_pages<'a>(layout: &'a LayoutDocument, options: &ConvertOptions) -> Vec<&'a LayoutPage> {
    let mut pages: Vec<&LayoutPage> = layout
        .pages
        .iter()
        .filter(|p| {
            options
                .page_numbers
                .as_ref()
                .is_none_or(|nums| nums.contains(&p.pageid))
        })
        .collect();
    pages.sort_by_key(|p| p.pageid);
    if options.maxpages > 0 {
        pages.truncate(options.maxpages);
    }
    pages
}

/// Runs every selected page through one assembler.
///
/// Any failure aborts the whole run; there is no partial output.
pub fn reconstruct(
    layout: &LayoutDocument,
    calibration: &Calibration,
    options: &ConvertOptions,
) -> Result<Document> {
    let mut assembler = Assembler::new(calibration.clone())?;
    for layout_page in selected_pages(layout, options) {
        let page = Page::from_layout(layout_page, calibration);
        assembler.process_page(&page)?;
    }
    assembler.finish()
}

/// Reconstructs and renders the document, applying patches.
pub fn convert(
    layout: &LayoutDocument,
    calibration: &Calibration,
    options: &ConvertOptions,
) -> Result<String> {
    let document = reconstruct(layout, calibration, options)?;
    Ok(document.to_text(calibration, options.normalize))
}

/// Converts and writes the text to `out`.
pub fn convert_to_fp<W: Write>(
    layout: &LayoutDocument,
    calibration: &Calibration,
    options: &ConvertOptions,
    out: &mut W,
) -> Result<()> {
    let text = convert(layout, calibration, options)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
