use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    config::LayoutArgs,
    extraction::{
        pdf::{PageReader, cachingreader::CachingPageReader, pdfiumreader::PdfiumPageReader},
        statementextract,
        tableextract::columns::HeaderSpanColumns,
    },
    filenames,
};

/// Extracts the transaction table of a single statement PDF as a CSV file.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF.
    input_pdf: PathBuf,

    /// Directory to write the CSV file into, created if absent.
    #[arg(long, default_value = "./data")]
    output_dir: PathBuf,

    /// Path to a page-content cache file, speeding up repeated runs over the
    /// same documents. No cache is used when omitted.
    #[arg(long)]
    page_cache: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let layout = cmd.layout.load_layout()?;
    let reader = new_page_reader(cmd.page_cache.clone())?;

    let table = statementextract::extract_statement(
        reader.as_ref(),
        &layout,
        &HeaderSpanColumns,
        &cmd.input_pdf,
    )?;

    let output_path = cmd
        .output_dir
        .join(filenames::output_filename(&cmd.input_pdf)?);
    statementextract::export_csv(&table, &layout, &output_path)?;

    reader.close()
}

/// Creates the PDF page reader, wrapped in the page-content cache when a
/// cache path is given.
pub(super) fn new_page_reader(page_cache: Option<PathBuf>) -> Result<Box<dyn PageReader>> {
    let pdfium_reader = PdfiumPageReader::new().with_context(|| "initialising Pdfium")?;
    match page_cache {
        Some(cache_path) => Ok(Box::new(CachingPageReader::load(
            pdfium_reader,
            cache_path,
        )?)),
        None => Ok(Box::new(pdfium_reader)),
    }
}
