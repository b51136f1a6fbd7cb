//! Column boundary inference from header label positions.

use crate::extraction::pdf::TextElement;
use crate::extraction::{Interval, PageSkip};

/// Computes column intervals from resolved header positions.
///
/// A strategy for one family of statement layouts; alternate layouts can
/// substitute their own implementation without touching the page flow.
pub trait ColumnStrategy {
    /// Computes one column interval per header, in label order. `headers`
    /// holds the resolved header elements in label order.
    fn column_intervals(
        &self,
        headers: &[&TextElement],
        buffer: f32,
    ) -> Result<Vec<Interval>, PageSkip>;
}

/// Spans each column from its own header's left edge to the next header's
/// left edge: statement columns are left-aligned under wide headers, so a
/// header's own right edge undershoots its column. The final column has no
/// successor and spans its own header's width.
pub struct HeaderSpanColumns;

impl ColumnStrategy for HeaderSpanColumns {
    fn column_intervals(
        &self,
        headers: &[&TextElement],
        buffer: f32,
    ) -> Result<Vec<Interval>, PageSkip> {
        let mut intervals = Vec::with_capacity(headers.len());

        for pair in headers.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if !current.x0.is_finite() || !next.x0.is_finite() {
                return Err(PageSkip::MissingColumnBoundary);
            }
            intervals.push(Interval::new(current.x0, next.x0).expand(buffer));
        }

        if let Some(last) = headers.last() {
            if !last.x0.is_finite() || !last.x1.is_finite() {
                return Err(PageSkip::MissingColumnBoundary);
            }
            intervals.push(Interval::new(last.x0, last.x1).expand(buffer));
        }

        Ok(intervals)
    }
}
