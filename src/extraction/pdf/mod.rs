//! Reading positioned page content from PDF documents.

pub mod cachingreader;
pub mod pdfiumreader;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A text fragment on a page with its bounding box.
///
/// Coordinates are PDF-native: origin at the bottom-left corner of the page,
/// y increasing upward, units of 1/72 inch.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TextElement {
    pub text: String,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// A horizontal rule on a page: baseline y-position and rendered line width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RuleLine {
    pub y: f32,
    pub width: f32,
}

/// Positioned content of a single page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PageContent {
    pub texts: Vec<TextElement>,
    pub rules: Vec<RuleLine>,
}

/// All pages of a document, in page-number order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DocumentPages(pub Vec<PageContent>);

pub trait PageReader {
    /// Reads the positioned text and rule lines of every page of the PDF at
    /// `pdf_path`, in page-number order.
    fn read_pages(&self, pdf_path: &Path) -> Result<DocumentPages>;

    /// Releases any resources held by the reader.
    fn close(self: Box<Self>) -> Result<()>;
}
