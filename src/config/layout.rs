//! Statement layout configuration.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Geometry and naming constants for one statement format. Owned by the
/// orchestrator and passed explicitly into each extraction component.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Column header labels, in output column order.
    pub labels: Vec<String>,
    /// Margin added to computed boundaries to absorb rendering jitter.
    pub boundary_buffer: f32,
    /// Line width of the table-grid rules.
    pub rule_width: f32,
    /// Filename token identifying statements of this layout.
    pub account_marker: String,
}

impl Layout {
    /// The built-in layout: RBC chequing statements.
    pub fn rbc_chequing() -> Self {
        Self {
            labels: [
                "Date",
                "Description",
                "Withdrawals ($)",
                "Deposits ($)",
                "Balance ($)",
            ]
            .iter()
            .map(|label| label.to_string())
            .collect(),
            boundary_buffer: 1.0,
            rule_width: 1.0,
            account_marker: "Chequing".to_owned(),
        }
    }

    /// Loads and validates a layout from the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let rdr = std::fs::File::open(path)
            .with_context(|| format!("opening layout file {:?}", path))?;
        let layout: YamlLayout = serde_yaml_ng::from_reader(rdr)
            .with_context(|| format!("parsing layout file {:?}", path))?;
        layout.prepare()
    }
}

/// Layout as read from a YAML file.
#[derive(Deserialize, Debug)]
struct YamlLayout {
    labels: Vec<String>,
    #[serde(default = "default_buffer")]
    boundary_buffer: f32,
    #[serde(default = "default_rule_width")]
    rule_width: f32,
    account_marker: String,
}

fn default_buffer() -> f32 {
    1.0
}

fn default_rule_width() -> f32 {
    1.0
}

impl YamlLayout {
    /// Validates and creates a `Layout` from self.
    fn prepare(self) -> Result<Layout> {
        if self.labels.len() < 2 {
            bail!(
                "layout must name at least two column labels, got {}",
                self.labels.len()
            );
        }
        if self.account_marker.split_whitespace().count() != 1 {
            bail!(
                "account marker {:?} must be a single filename token",
                self.account_marker
            );
        }
        Ok(Layout {
            labels: self.labels,
            boundary_buffer: self.boundary_buffer,
            rule_width: self.rule_width,
            account_marker: self.account_marker,
        })
    }
}
