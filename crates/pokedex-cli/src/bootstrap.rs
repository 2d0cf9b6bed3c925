//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Exactly one data source is built per run:
//! - `SQLite` repository when a database path was given (via pokedex-db)
//! - PokeAPI client otherwise (via pokedex-api)
//!
//! Command handlers receive the composed context and delegate to the
//! pokedex service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use pokedex_api::{ApiClientConfig, DefaultApiClient};
use pokedex_core::{PokedexService, PokemonSource};
use pokedex_db::SourceFactory;
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// User agent sent to the remote API.
const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Which data source a run reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// The remote PokeAPI endpoint.
    Remote {
        /// Base URL the id is appended to.
        base_url: String,
        /// Request timeout.
        timeout: Duration,
    },
    /// A local `SQLite` database file.
    Local {
        /// Path of the database file.
        db_path: PathBuf,
    },
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Selected data source.
    pub source: SourceSelection,
}

impl CliConfig {
    /// Derive the configuration from parsed arguments.
    ///
    /// A database path always wins over the API URL.
    pub fn from_cli(cli: &Cli) -> Self {
        let source = cli.database.as_ref().map_or_else(
            || SourceSelection::Remote {
                base_url: cli.api_url.clone(),
                timeout: Duration::from_secs(cli.timeout),
            },
            |path| SourceSelection::Local {
                db_path: path.clone(),
            },
        );
        Self { source }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The lookup service.
    pub pokedex: PokedexService,
}

impl CliContext {
    /// Access the pokedex service.
    pub const fn pokedex(&self) -> &PokedexService {
        &self.pokedex
    }
}

/// Bootstrap the CLI with all dependencies wired together.
///
/// No connection or request is made here; the source is only touched by
/// the lookup itself.
///
/// # Errors
///
/// Returns `CliError::Config` if the remote client cannot be built from
/// the configured base URL.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let source: Arc<dyn PokemonSource> = match &config.source {
        SourceSelection::Local { db_path } => {
            debug!(path = %db_path.display(), "Using SQLite source");
            SourceFactory::pokemon_source(db_path.clone())
        }
        SourceSelection::Remote { base_url, timeout } => {
            debug!(%base_url, ?timeout, "Using remote API source");
            let api_config = ApiClientConfig::new()
                .with_base_url(base_url.as_str())
                .with_user_agent(USER_AGENT)
                .with_timeout(*timeout);
            Arc::new(DefaultApiClient::new(&api_config)?)
        }
    };

    Ok(bootstrap_with(source))
}

/// Build a context around an already-constructed source.
pub fn bootstrap_with(source: Arc<dyn PokemonSource>) -> CliContext {
    CliContext {
        pokedex: PokedexService::new(source),
    }
}
