//! LaserPath command-line interface
//!
//! Reads a G-code file, collapses its cut moves into continuous paths and
//! writes the report to stdout or a file. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use laserpath::{init_logging, Config, OutputFormat, Pipeline, TieBreak, VERSION};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Collapse laser G-code into continuous cutting paths
#[derive(Parser)]
#[command(name = "laserpath")]
#[command(version = VERSION)]
#[command(long_version = LONG_VERSION)]
#[command(about = "Collapse laser G-code into continuous cutting paths")]
struct Cli {
    /// G-code file to read
    input: PathBuf,

    /// Configuration file (.toml or .json); defaults to the user config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the edge still open at end of input
    #[arg(long)]
    flush_open_edge: bool,

    /// Neighbour choice when several edges share the minimum length
    #[arg(long, value_enum)]
    tie_break: Option<TieBreakArg>,

    /// Include extracted edges in the report
    #[arg(long)]
    include_edges: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Report format accepted on the command line
#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    /// Pretty-printed JSON report
    Json,
    /// One path per line: density, tab, point keys
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Neighbour tie-break accepted on the command line
#[derive(Copy, Clone, Debug, ValueEnum)]
enum TieBreakArg {
    /// Hash map iteration order
    Unordered,
    /// Smallest neighbour key
    Lexicographic,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Unordered => TieBreak::Unordered,
            TieBreakArg::Lexicographic => TieBreak::Lexicographic,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default().context("Failed to load default config")?,
    };

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if let Some(tie_break) = cli.tie_break {
        config.decomposition.tie_break = tie_break.into();
    }
    config.extraction.flush_open_edge |= cli.flush_open_edge;
    config.output.include_edges |= cli.include_edges;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(&cli)?;
    let pipeline = Pipeline::new(config);
    let report = pipeline
        .run_file(&cli.input)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;

    tracing::info!(
        "{} paths, total density {:.1}",
        report.stats.paths,
        report.stats.total_density
    );

    let output = &pipeline.config().output;
    let rendered = report
        .render(output.format, output.precision)
        .context("Failed to render report")?;

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}
