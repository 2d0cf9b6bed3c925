//! Domain types for the pokedex.
//!
//! These types are plain values, independent of where the data came from
//! (remote API or local database) and of how it will be rendered.

mod pokemon;

pub use pokemon::{DetailedPokemon, PokedexEntry, Pokemon};
