//! Statement filename policy: eligibility and output naming.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// Returns the account-type token of a statement filename: its first
/// whitespace-delimited part.
pub fn account_type(file_name: &str) -> Option<&str> {
    file_name.split_whitespace().next()
}

/// Derives the output CSV filename for a statement PDF: the lower-cased
/// account type and the extension-stripped final filename token (spaces and
/// hyphens replaced by underscores), joined with an underscore.
pub fn output_filename(input_pdf: &Path) -> Result<String> {
    let file_name = input_pdf
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("input path {:?} has no usable filename", input_pdf))?;

    let mut tokens = file_name.split_whitespace();
    let first = tokens
        .next()
        .ok_or_else(|| anyhow!("input filename {:?} is empty", file_name))?;
    let last = tokens.last().unwrap_or(first);

    let account_type = first.to_lowercase();
    let date_tag = last
        .split_once('.')
        .map_or(last, |(stem, _)| stem)
        .replace([' ', '-'], "_");

    Ok(format!("{}_{}.csv", account_type, date_tag))
}

/// Scans `folder` for statement PDFs eligible for extraction: regular files
/// with a `.pdf` extension whose account-type token equals `marker`.
/// Returned paths are sorted.
pub fn eligible_statements(folder: &Path, marker: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("scanning folder {:?}", folder))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let is_pdf = Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf && account_type(file_name) == Some(marker) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
