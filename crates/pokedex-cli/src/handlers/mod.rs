//! Command handlers that delegate to the pokedex service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that call the service and format output for the terminal
//!
//! Handlers should NOT open databases or build HTTP clients.

pub mod lookup;
