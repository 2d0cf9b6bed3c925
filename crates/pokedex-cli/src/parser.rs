//! Main CLI parser.
//!
//! Every usage error (missing or non-numeric id, unknown format) is raised
//! here, before any data source is built.

use std::path::PathBuf;

use clap::Parser;
use pokedex_api::DEFAULT_BASE_URL;

use crate::presentation::OutputFormat;

/// Look up a Pokémon by id and print it as text, HTML or CSV.
#[derive(Debug, Parser)]
#[command(name = "pokedex")]
#[command(about = "Look up a Pokémon by id from PokeAPI or a local SQLite database")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Pokédex number of the Pokémon to look up
    #[arg(value_name = "POKEMON_ID")]
    pub pokemon_id: i64,

    /// Path to a SQLite database containing pokemons
    #[arg(short = 'd', long = "database", value_name = "DATABASE_FILE")]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Base URL of the remote pokemon endpoint
    #[arg(long = "api-url", env = "POKEDEX_API_URL", default_value = DEFAULT_BASE_URL, hide_env_values = true)]
    pub api_url: String,

    /// Timeout in seconds for the remote request
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pokedex", "25"]).unwrap();
        assert_eq!(cli.pokemon_id, 25);
        assert_eq!(cli.database, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.timeout, 30);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_short_and_long_options() {
        let cli = Cli::try_parse_from(["pokedex", "1", "-d", "pokedex.db", "-f", "csv"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("pokedex.db")));
        assert_eq!(cli.format, OutputFormat::Csv);

        let cli =
            Cli::try_parse_from(["pokedex", "--format", "html", "--database", "x.db", "7"])
                .unwrap();
        assert_eq!(cli.pokemon_id, 7);
        assert_eq!(cli.format, OutputFormat::Html);
    }

    #[test]
    fn test_missing_id_is_usage_error() {
        let err = Cli::try_parse_from(["pokedex", "-f", "csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_numeric_id_is_usage_error() {
        let err = Cli::try_parse_from(["pokedex", "pikachu"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_format_is_usage_error_regardless_of_other_flags() {
        for args in [
            vec!["pokedex", "25", "-f", "json"],
            vec!["pokedex", "25", "-d", "pokedex.db", "-f", "xml"],
            vec!["pokedex", "-f", "TEXT", "25", "-v"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_negative_id_parses() {
        let cli = Cli::try_parse_from(["pokedex", "-5"]).unwrap();
        assert_eq!(cli.pokemon_id, -5);
    }

    #[test]
    fn test_timeout_must_be_positive() {
        let cli = Cli::try_parse_from(["pokedex", "25", "--timeout", "3"]).unwrap();
        assert_eq!(cli.timeout, 3);

        let err = Cli::try_parse_from(["pokedex", "25", "--timeout", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_api_url_flag() {
        let cli = Cli::try_parse_from(["pokedex", "25", "--api-url", "http://localhost:9000/pokemon"])
            .unwrap();
        assert_eq!(cli.api_url, "http://localhost:9000/pokemon");
    }
}
