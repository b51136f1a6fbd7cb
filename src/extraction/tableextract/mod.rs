//! Reconstructs the transaction table on a single statement page.

pub mod columns;
pub mod rows;

use crate::config::Layout;
use crate::extraction::pageindex::PageIndex;
use crate::extraction::pdf::PageContent;
use crate::extraction::{Interval, PageSkip};
use crate::table::{Row, Table};

use columns::ColumnStrategy;

/// Extracts every table row on the page.
///
/// Returns the reason the page produced no records as a [PageSkip]; the
/// document driver absorbs and logs it, continuing with the remaining pages.
pub fn extract_page(
    content: &PageContent,
    layout: &Layout,
    strategy: &dyn ColumnStrategy,
) -> Result<Table, PageSkip> {
    let index = PageIndex::new(content);

    let mut headers = Vec::with_capacity(layout.labels.len());
    for label in &layout.labels {
        match index.find_label(label) {
            Some(element) => headers.push(element),
            None => log::warn!("column header {:?} not found on page", label),
        }
    }

    if headers.len() < layout.labels.len() {
        return Err(PageSkip::MissingHeaderLabel {
            found: headers.len(),
            expected: layout.labels.len(),
        });
    }

    let columns = strategy.column_intervals(&headers, layout.boundary_buffer)?;

    // The table body lies below the first header.
    let table_top = headers[0].y0;
    let row_bands = rows::row_intervals(&index, table_top, layout.rule_width, layout.boundary_buffer);

    Ok(build_table(&index, &columns, &row_bands))
}

/// Pulls cell text for every (row, column) pair, in row-major order. Never
/// fails; a cell without text yields an empty string.
fn build_table(index: &PageIndex, columns: &[Interval], row_bands: &[Interval]) -> Table {
    let mut table = Table::default();
    for row in row_bands {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            cells.push(index.text_in_box(column.start, row.start, column.stop, row.stop));
        }
        table.push(Row(cells));
    }
    table
}
