mod document;
mod formatter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use document::{Focus, Profile, Transform};
use formatter::Formatter;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "lens")]
#[command(about = "Read and immutably update fields of a JSON profile through lenses.")]
#[command(
    long_about = "Loads a profile document ({user: {name, address: {city, zip}}, meta: {created, modified}}) and runs view, set or over through a named lens.\nUpdated documents are written to stdout with any other fields kept as they were; the input is never modified."
)]
#[command(version)]
struct Cli {
    /// Log lens activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the focused value
    View {
        /// Field to focus on
        #[arg(value_enum)]
        focus: Focus,
        /// Profile JSON file (reads stdin when omitted)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },
    /// Replace the focused value and print the new document
    Set {
        /// Field to focus on
        #[arg(value_enum)]
        focus: Focus,
        /// Replacement value
        value: String,
        /// Profile JSON file (reads stdin when omitted)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
        /// Print the document on a single line
        #[arg(short, long)]
        compact: bool,
    },
    /// Transform the focused value and print the new document
    Over {
        /// Field to focus on
        #[arg(value_enum)]
        focus: Focus,
        /// Transform to apply to the focused value
        #[arg(value_enum)]
        transform: Transform,
        /// Profile JSON file (reads stdin when omitted)
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
        /// Print the document on a single line
        #[arg(short, long)]
        compact: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::View { focus, file } => view_command(*focus, file.as_deref()),
        Commands::Set {
            focus,
            value,
            file,
            compact,
        } => set_command(*focus, value, file.as_deref(), *compact),
        Commands::Over {
            focus,
            transform,
            file,
            compact,
        } => over_command(*focus, *transform, file.as_deref(), *compact),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "lens=trace" } else { "lens=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn view_command(focus: Focus, file: Option<&Path>) -> Result<()> {
    let profile = load_profile(file)?;
    let value = focus.lens().view(&profile);
    println!("{}", value);
    Ok(())
}

fn set_command(focus: Focus, value: &str, file: Option<&Path>, compact: bool) -> Result<()> {
    let profile = load_profile(file)?;
    let updated = focus.lens().set(value.to_string(), &profile);
    println!("{}", Formatter::new(compact).format_profile(&updated)?);
    Ok(())
}

fn over_command(
    focus: Focus,
    transform: Transform,
    file: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let profile = load_profile(file)?;
    let updated = focus.lens().over(|value| transform.apply(value), &profile);
    println!("{}", Formatter::new(compact).format_profile(&updated)?);
    Ok(())
}

fn load_profile(file: Option<&Path>) -> Result<Profile> {
    let json = match file {
        Some(path) => {
            debug!(path = %path.display(), "Reading profile");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?
        }
        None => {
            debug!("Reading profile from stdin");
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read profile from stdin")?;
            json
        }
    };

    serde_json::from_str(&json).context("Invalid profile document")
}
