//! Pdfium-backed implementation of [PageReader].

use std::path::Path;

use anyhow::{Result, anyhow};
use pdfium_render::prelude::{
    PdfPage, PdfPageObject, PdfPageObjectCommon, PdfPageObjectsCommon, Pdfium,
};

use crate::extraction::ExtractError;

use super::{DocumentPages, PageContent, PageReader, RuleLine, TextElement};

/// Reads positioned page content through the Pdfium library.
pub struct PdfiumPageReader {
    pdfium: Pdfium,
}

impl PdfiumPageReader {
    pub fn new() -> Result<Self> {
        let pdfium = Pdfium::new(Pdfium::bind_to_statically_linked_library()?);
        Ok(Self { pdfium })
    }
}

impl PageReader for PdfiumPageReader {
    fn read_pages(&self, pdf_path: &Path) -> Result<DocumentPages> {
        let document = self.pdfium.load_pdf_from_file(pdf_path, None).map_err(|err| {
            anyhow!(ExtractError::DocumentLoadFailure)
                .context(format!("loading PDF {:?}: {}", pdf_path, err))
        })?;

        let mut pages = Vec::with_capacity(document.pages().len() as usize);
        for page in document.pages().iter() {
            pages.push(read_page(&page));
        }

        Ok(DocumentPages(pages))
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

/// Collects the text elements and horizontal rules of one page.
///
/// Objects whose geometry cannot be read are skipped, so that queries over
/// malformed content see empty results rather than errors.
fn read_page(page: &PdfPage) -> PageContent {
    let mut content = PageContent::default();

    for object in page.objects().iter() {
        let Ok(bounds) = object.bounds() else {
            log::debug!("skipping a page object with unreadable bounds");
            continue;
        };
        let rect = bounds.to_rect();

        match &object {
            PdfPageObject::Text(text) => content.texts.push(TextElement {
                text: text.text(),
                x0: rect.left.value,
                y0: rect.bottom.value,
                x1: rect.right.value,
                y1: rect.top.value,
            }),
            PdfPageObject::Path(_) => {
                // Zero-height paths are pure stroked lines; their rendered
                // width comes from the stroke instead of the bounds.
                let width = match object.stroke_width() {
                    Ok(stroke) if stroke.value > 0.0 => stroke.value,
                    _ => rect.height().value,
                };
                if rect.width().value > rect.height().value {
                    content.rules.push(RuleLine {
                        y: rect.bottom.value,
                        width,
                    });
                }
            }
            _ => {}
        }
    }

    content
}
