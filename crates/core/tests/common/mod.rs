//! Line fixtures shared by the integration tests.
//!
//! Sizes and margins sit inside the default calibration's bands: body text at
//! 11.5pt, quotes and footnote bodies at 9pt, superscripts at 6pt, base
//! margin 24, paragraph indent 36.

#![allow(dead_code)]

use paramuse_core::model::{Line, Page};

pub const BODY: f64 = 11.5;
pub const SMALL: f64 = 9.0;
pub const SUPER: f64 = 6.0;
pub const CHAPTER_NUMBER: f64 = 21.0;
pub const CHAPTER_TITLE: f64 = 26.0;
pub const SECTION: f64 = 15.0;
pub const DROP_CAPITAL: f64 = 40.0;

pub const MARGIN: f64 = 24.0;
pub const INDENT: f64 = 36.0;
pub const DEEP: f64 = 48.0;

pub fn prose(y: f64, x: f64, text: &str) -> Line {
    Line::builder(y).at(x).size(BODY).text(text).build()
}

pub fn quote(y: f64, x: f64, text: &str) -> Line {
    Line::builder(y).at(x).size(SMALL).text(text).build()
}

pub fn heading(y: f64, size: f64, text: &str) -> Line {
    Line::builder(y).at(MARGIN).size(size).text(text).build()
}

/// Prose carrying a superscript reference after `before`.
pub fn citing(y: f64, x: f64, before: &str, number: &str, after: &str) -> Line {
    Line::builder(y)
        .at(x)
        .size(BODY)
        .text(before)
        .size(SUPER)
        .text(number)
        .size(BODY)
        .text(after)
        .build()
}

/// First line of a footnote body at the bottom of a page.
pub fn footnote(y: f64, number: &str, text: &str) -> Line {
    Line::builder(y)
        .at(MARGIN)
        .size(SUPER)
        .text(number)
        .size(SMALL)
        .text(text)
        .build()
}

/// A page whose lines are given top to bottom; y positions descend.
pub fn page(number: u32, lines: Vec<Line>) -> Page {
    Page::new(number, lines)
}
