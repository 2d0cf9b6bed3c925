//! CLI entry point.
//!
//! Parses arguments, wires the single data source via bootstrap and runs
//! one lookup. The rendered record goes to stdout; errors and logs go to
//! stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokedex_cli::handlers::lookup;
use pokedex_cli::{Cli, CliConfig, CliError, LookupArgs, bootstrap};

fn init_tracing(verbose: bool) {
    // An explicit RUST_LOG wins over --verbose
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(cli);
    let ctx = bootstrap(&config)?;

    let args = LookupArgs {
        pokemon_id: cli.pokemon_id,
        format: cli.format,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    lookup::execute(&ctx, args, &mut out).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before clap reads POKEDEX_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
