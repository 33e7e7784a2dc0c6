use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::stderr;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

mod cmd;
mod config;

use cmd::classify::ClassifyArgs;
use cmd::resolve::ResolveArgs;
use config::NetbootConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Network boot file selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output - shows more detailed logs
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a TFTP request path to the boot file it would be served
    Resolve(ResolveArgs),
    /// Classify a finished transfer and show any machine event
    Classify(ClassifyArgs),
    /// List boot loader coverage per firmware kind
    Firmware,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Respect RUST_LOG, fall back to verbose/info for our crates
    let level = if cli.verbose { "debug" } else { "info" };
    let default_directives = format!(
        "netboot={level},netboot_tftp={level},netboot_assets={level}",
        level = level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    registry()
        .with(filter)
        .with(fmt::layer().with_writer(stderr))
        .init();

    let config = NetbootConfig::load(cli.config.as_deref())?;
    debug!(?config, "Using configuration");
    let handler = config.build_handler()?;

    match cli.command {
        Commands::Resolve(args) => cmd::resolve::run_resolve(args, &handler),
        Commands::Classify(args) => cmd::classify::run_classify(args, &handler),
        Commands::Firmware => cmd::firmware::run_firmware(&config, &handler),
    }
}
