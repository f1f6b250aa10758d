//! cssbundle CLI

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use cssbundle_core::output::write_json_pretty;
use cssbundle_core::{BuildResult, BundleLayout};

/// CLI entrypoint for cssbundle.
#[derive(Debug, Parser)]
#[command(
    name = "cssbundle",
    version,
    about = "Concatenate the design-system stylesheets into dist/style.css"
)]
pub struct Cli {
    /// Project root containing packages/css
    #[arg(
        long = "root",
        env = "CSSBUNDLE_ROOT",
        default_value = ".",
        value_hint = ValueHint::DirPath
    )]
    root: PathBuf,

    /// Print the build report as JSON instead of the summary line
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Log each directive and section to stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Parse CLI args and run the build.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    run_build(&cli, stdout.lock())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn run_build(cli: &Cli, mut w: impl Write) -> Result<()> {
    let layout = BundleLayout::for_root(&cli.root);
    tracing::debug!(entry = %layout.entry.display(), "building bundle");

    let result = layout
        .bundler()
        .build()
        .with_context(|| format!("failed to bundle {}", layout.entry_label()))?;

    if cli.json {
        write_json_pretty(&result, &mut w)?;
    } else {
        write_summary(&result, &layout.output_label(), &mut w)
            .context("failed to write build summary")?;
    }
    Ok(())
}

fn write_summary(result: &BuildResult, output_label: &str, mut w: impl Write) -> Result<()> {
    writeln!(
        w,
        "✓ Built {output_label} ({:.1} KB, {} modules)",
        result.kilobytes(),
        result.sections
    )?;
    Ok(())
}
