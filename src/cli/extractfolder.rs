use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use simple_bar::ProgressBar;

use crate::{
    config::LayoutArgs,
    extraction::{statementextract, tableextract::columns::HeaderSpanColumns},
    filenames,
};

use super::extractstatement::new_page_reader;

/// Extracts every eligible statement PDF in a folder, one CSV file each.
#[derive(Args, Debug)]
pub struct Command {
    /// Folder containing statement PDFs.
    folder: PathBuf,

    /// Directory to write the CSV files into, created if absent.
    #[arg(long, default_value = "./data")]
    output_dir: PathBuf,

    /// Path to a page-content cache file, speeding up repeated runs over the
    /// same documents. No cache is used when omitted.
    #[arg(long)]
    page_cache: Option<PathBuf>,

    #[command(flatten)]
    layout: LayoutArgs,
}

/// Runs the subcommand. A document that fails to extract is logged and does
/// not stop the remaining documents.
pub fn run(cmd: &Command) -> Result<()> {
    let layout = cmd.layout.load_layout()?;
    let files = filenames::eligible_statements(&cmd.folder, &layout.account_marker)?;

    if files.is_empty() {
        log::warn!(
            "no {:?} statements found in {:?}",
            layout.account_marker,
            cmd.folder
        );
        return Ok(());
    }

    let reader = new_page_reader(cmd.page_cache.clone())?;
    let mut progress_bar = ProgressBar::cargo_style(files.len() as u32, 80, true);

    for input_pdf in &files {
        let result = statementextract::extract_statement(
            reader.as_ref(),
            &layout,
            &HeaderSpanColumns,
            input_pdf,
        )
        .and_then(|table| {
            let output_path = cmd
                .output_dir
                .join(filenames::output_filename(input_pdf)?);
            statementextract::export_csv(&table, &layout, &output_path)
        });

        if let Err(err) = result {
            log::error!("failed to extract {:?}: {:#}", input_pdf, err);
        }

        progress_bar.update();
    }

    reader.close()
}
