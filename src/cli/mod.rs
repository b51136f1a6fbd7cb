use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod extractfolder;
mod extractstatement;

/// Extracts transaction tables from fixed-layout PDF bank statements as CSV
/// files.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    ExtractStatement(extractstatement::Command),
    ExtractFolder(extractfolder::Command),
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    use Command::*;
    match &args.command {
        ExtractStatement(cmd) => extractstatement::run(cmd),
        ExtractFolder(cmd) => extractfolder::run(cmd),
    }
}
