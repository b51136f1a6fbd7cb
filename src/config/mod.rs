use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

pub mod layout;

pub use layout::Layout;

/// CLI arguments relating to [Layout].
#[derive(Args, Clone, Debug)]
pub struct LayoutArgs {
    /// Path to a YAML statement layout file. The built-in RBC chequing
    /// layout is used when omitted.
    #[arg(long)]
    layout: Option<PathBuf>,
}

impl LayoutArgs {
    /// Resolves the layout to extract with.
    pub fn load_layout(&self) -> Result<Layout> {
        match &self.layout {
            Some(path) => Layout::load(path),
            None => Ok(Layout::rbc_chequing()),
        }
    }
}
