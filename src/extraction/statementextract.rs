//! Document-level driver: pages to records to CSV.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::config::Layout;
use crate::extraction::pdf::PageReader;
use crate::extraction::tableextract::{self, columns::ColumnStrategy};
use crate::extraction::{ExtractError, parseutil};
use crate::table::Table;

/// Extracts every transaction row in the document, in page order.
///
/// Page-scoped failures are logged and yield no records for that page;
/// document-scoped failures abort the document.
pub fn extract_statement(
    reader: &dyn PageReader,
    layout: &Layout,
    strategy: &dyn ColumnStrategy,
    input_pdf: &Path,
) -> Result<Table> {
    if !input_pdf.exists() {
        return Err(anyhow!(ExtractError::DocumentNotFound)
            .context(format!("no such document: {:?}", input_pdf)));
    }

    let pages = reader
        .read_pages(input_pdf)
        .with_context(|| format!("reading pages of {:?}", input_pdf))?;

    let mut records = Table::default();

    for (page_index, content) in pages.0.iter().enumerate() {
        match tableextract::extract_page(content, layout, strategy) {
            Ok(table) => records.extend(table.0),
            Err(skip) => {
                log::warn!(
                    "skipping page {} of {:?}: {}",
                    page_index + 1,
                    input_pdf,
                    skip
                );
            }
        }
    }

    sanitize_table(&mut records);

    Ok(records)
}

/// Cleans every cell of every record, in-place.
fn sanitize_table(table: &mut Table) {
    for row in table.iter_mut() {
        for cell in row.iter_mut() {
            parseutil::sanitize_cell(cell);
        }
    }
}

/// Writes the records as CSV: a header row with the layout's labels followed
/// by one row per record. Export happens only after the whole document has
/// been extracted, so a failed document leaves no partial output behind.
pub fn export_csv(table: &Table, layout: &Layout, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {:?}", parent))?;
    }

    let mut csv_writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("opening CSV output {:?}", output_path))?;

    csv_writer
        .write_record(&layout.labels)
        .with_context(|| "writing header row")?;

    for row in table.iter() {
        csv_writer
            .write_record(&row.0)
            .with_context(|| "writing record")?;
    }

    // Check for error rather than implicitly flushing and ignoring.
    csv_writer.flush().with_context(|| "flushing to CSV")?;

    log::info!("data exported to {:?}", output_path);

    Ok(())
}
