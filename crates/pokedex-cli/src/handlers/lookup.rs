//! Lookup command handler.
//!
//! Fetches one record through the configured source and writes its
//! rendering to the given output.

use std::io::Write;

use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutputFormat, render};

/// Arguments for the lookup command.
#[derive(Debug, Clone, Copy)]
pub struct LookupArgs {
    /// Id to look up.
    pub pokemon_id: i64,
    /// Output format.
    pub format: OutputFormat,
}

/// Execute the lookup command.
///
/// Nothing is written unless the lookup succeeds.
///
/// # Errors
///
/// Returns an error if the lookup fails or the output cannot be written.
pub async fn execute<W: Write>(
    ctx: &CliContext,
    args: LookupArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let entry = ctx.pokedex().lookup(args.pokemon_id).await?;

    debug!(format = args.format.as_str(), "Rendering entry");
    let rendered = render(&entry, args.format);
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
