use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::commands::{
    handle_connections, handle_info, handle_locations, handle_path, load_service,
};
use wayfinder_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest walking paths inside a facility")]
struct Cli {
    /// Topology JSON file; the built-in hospital layout is used when omitted.
    #[arg(long, global = true)]
    topology: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest walking path between two locations.
    Path {
        /// Starting location identifier (case-insensitive).
        start: String,
        /// Destination location identifier (case-insensitive).
        end: String,
    },
    /// List every location, sorted by name.
    Locations,
    /// Show the corridors leaving a location.
    Connections {
        /// Location identifier (case-insensitive).
        location: String,
    },
    /// Show location and corridor counts.
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = load_service(cli.topology.as_deref())?;
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Path { start, end } => handle_path(&mut out, &service, start, end, cli.format),
        Command::Locations => handle_locations(&mut out, &service, cli.format),
        Command::Connections { location } => {
            handle_connections(&mut out, &service, location, cli.format)
        }
        Command::Info => handle_info(&mut out, &service, cli.format),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
