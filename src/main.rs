use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termtint::models::{FileConfig, GenerateOptions, RawOptions};
use termtint::services::generate_palette;

#[derive(Parser)]
#[command(name = "termtint", version)]
#[command(about = "Derive a legible 16-color terminal palette from one seed color")]
struct Cli {
    /// Seed color as hex RGB (e.g. "#3366cc" or "3366cc")
    base_color: String,

    /// Generate the light theme variant (default: dark)
    #[arg(long)]
    light: bool,

    /// Print kitty.conf color lines instead of `palette = N=#hex`
    #[arg(long)]
    kitty: bool,

    /// Derive magenta, cyan and bright blue from this color instead of the seed
    #[arg(long, value_name = "HEX")]
    honor_primary: Option<String>,

    /// Use this color as the background (slot 0)
    #[arg(long, value_name = "HEX")]
    background: Option<String>,

    /// YAML file with defaults (also read from TERMTINT_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn raw_options(&self) -> RawOptions {
        RawOptions {
            base_color: self.base_color.clone(),
            light: self.light,
            kitty: self.kitty,
            honor_primary: self.honor_primary.clone(),
            background: self.background.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1, not clap's default 2
            eprintln!("{e}");
            std::process::exit(1)
        }
    };

    init_logging(cli.verbose);

    let file_config = FileConfig::discover(cli.config.as_deref())?;
    let options = GenerateOptions::resolve(&cli.raw_options(), &file_config)?;
    let palette = generate_palette(&options);

    options
        .format
        .write_to(&palette, io::stdout().lock())
        .context("Failed to write palette to stdout")?;

    Ok(())
}

/// Stderr-only logging; stdout carries the palette.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "termtint=warn",
        1 => "termtint=debug",
        _ => "termtint=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}
