//! Build script generator CLI entrypoint.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod handlers;


use commands::Commands;

#[derive(Parser)]
#[command(name = "scriptgen")]
#[command(author, version, about = "Build script generator: directory cache commands", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Cache {
            stage,
            build,
            slug,
            time,
        } => handlers::cache_commands(stage, &build, slug, time)?,
        Commands::Backend { build, format } => handlers::show_backend(&build, format)?,
    }

    Ok(())
}
