//! Core services - the application's lookup logic.
//!
//! Services here are pure orchestrators - they don't know about concrete
//! data source implementations.

mod pokedex_service;

pub use pokedex_service::PokedexService;
