//! Project source aggregator CLI.
//!
//! Walks a project tree and concatenates every qualifying source file into
//! one delimited text document for review or sharing. A bare invocation
//! behaves like `run` with the compiled-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use projcat::aggregate::aggregate;
use projcat::exit_codes;
use projcat::io::config::{AggregateConfig, CONFIG_FILE_NAME, load_config, write_config};
use projcat::io::report::write_report;
use projcat::logging;

#[derive(Parser)]
#[command(
    name = "projcat",
    version,
    about = "Concatenate project sources into one reviewable document"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk the project tree and write the aggregate document.
    Run {
        /// Root directory to traverse.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Override the configured output path.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Config file (defaults to `projcat.toml` under the root).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write a JSON run report to this path.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Write a default `projcat.toml` under the root.
    Init {
        /// Root directory to place the config in.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run {
        root: PathBuf::from("."),
        output: None,
        config: None,
        report: None,
    });
    match command {
        Command::Run {
            root,
            output,
            config,
            report,
        } => cmd_run(&root, output, config, report),
        Command::Init { root, force } => cmd_init(&root, force),
    }
}

fn cmd_run(
    root: &Path,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<()> {
    let config_path = config.unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
    let mut cfg = load_config(&config_path)?;
    if let Some(output) = output {
        cfg.output = output;
    }

    let summary = aggregate(root, &cfg)?;
    if let Some(report_path) = report {
        write_report(&report_path, &summary)?;
    }

    println!(
        "aggregated {} files into {} ({} skipped, {} read errors)",
        summary.files_included,
        summary.output.display(),
        summary.files_skipped,
        summary.read_errors
    );
    Ok(())
}

fn cmd_init(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(&path, &AggregateConfig::default())?;
    println!("wrote {}", path.display());
    Ok(())
}
