pub mod pageindex;
pub mod parseutil;
pub mod pdf;
pub mod statementextract;
pub mod tableextract;

use std::{error::Error, fmt::Display};

/// Inclusive range along one page axis, in PDF units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub start: f32,
    pub stop: f32,
}

impl Interval {
    pub fn new(start: f32, stop: f32) -> Self {
        Self { start, stop }
    }

    /// Returns the interval widened by `margin` at both ends.
    pub fn expand(self, margin: f32) -> Self {
        Self {
            start: self.start - margin,
            stop: self.stop + margin,
        }
    }
}

/// Concrete error type for document-level failures that callers might
/// reasonably handle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtractError {
    DocumentNotFound,
    DocumentLoadFailure,
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ExtractError::*;
        match self {
            DocumentNotFound => write!(f, "document not found"),
            DocumentLoadFailure => write!(f, "document structure could not be parsed"),
        }
    }
}

impl Error for ExtractError {}

/// Reasons a page yields no records. Absorbed and logged by the document
/// driver; never fatal to the document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageSkip {
    /// Fewer column headers were found than the layout names.
    MissingHeaderLabel { found: usize, expected: usize },
    /// A header was found but its position is unusable.
    MissingColumnBoundary,
}

impl Display for PageSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PageSkip::*;
        match self {
            MissingHeaderLabel { found, expected } => {
                write!(f, "found {} of {} column headers", found, expected)
            }
            MissingColumnBoundary => write!(f, "a column header position could not be read"),
        }
    }
}

impl Error for PageSkip {}
