//! Pokemon domain types.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Record Types
// ─────────────────────────────────────────────────────────────────────────────

/// The basic record every source can supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National pokedex number.
    pub id: i64,
    /// Lowercase species name (e.g., "pikachu").
    pub name: String,
    /// Height in decimetres.
    pub height: i64,
    /// Weight in hectograms.
    pub weight: i64,
}

impl Pokemon {
    /// Create a new record.
    pub fn new(id: i64, name: impl Into<String>, height: i64, weight: i64) -> Self {
        Self {
            id,
            name: name.into(),
            height,
            weight,
        }
    }
}

/// A record carrying a non-empty free-text description.
///
/// Only constructed through [`PokedexEntry::new`], which guarantees the
/// description is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedPokemon {
    /// The base record.
    #[serde(flatten)]
    pub pokemon: Pokemon,
    /// Pokedex description text.
    pub description: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry
// ─────────────────────────────────────────────────────────────────────────────

/// A looked-up record, with or without a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PokedexEntry {
    /// Record without a description.
    Basic(Pokemon),
    /// Record with a non-empty description.
    Detailed(DetailedPokemon),
}

impl PokedexEntry {
    /// Build an entry from a record and an optional description.
    ///
    /// `None` and `Some("")` both produce [`PokedexEntry::Basic`].
    pub fn new(pokemon: Pokemon, description: Option<String>) -> Self {
        match description {
            Some(description) if !description.is_empty() => Self::Detailed(DetailedPokemon {
                pokemon,
                description,
            }),
            _ => Self::Basic(pokemon),
        }
    }

    /// The base record, regardless of variant.
    pub const fn pokemon(&self) -> &Pokemon {
        match self {
            Self::Basic(pokemon) => pokemon,
            Self::Detailed(detailed) => &detailed.pokemon,
        }
    }

    /// The description, if this entry has one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Basic(_) => None,
            Self::Detailed(detailed) => Some(&detailed.description),
        }
    }

    /// Whether the entry carries a description.
    pub const fn has_detail(&self) -> bool {
        matches!(self, Self::Detailed(_))
    }
}

impl From<Pokemon> for PokedexEntry {
    fn from(pokemon: Pokemon) -> Self {
        Self::Basic(pokemon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> Pokemon {
        Pokemon::new(25, "pikachu", 4, 60)
    }

    #[test]
    fn test_entry_without_description_is_basic() {
        let entry = PokedexEntry::new(pikachu(), None);
        assert!(!entry.has_detail());
        assert_eq!(entry.description(), None);
        assert_eq!(entry.pokemon(), &pikachu());
    }

    #[test]
    fn test_entry_with_empty_description_is_basic() {
        let entry = PokedexEntry::new(pikachu(), Some(String::new()));
        assert_eq!(entry, PokedexEntry::Basic(pikachu()));
    }

    #[test]
    fn test_entry_with_description_is_detailed() {
        let entry = PokedexEntry::new(pikachu(), Some("Electric mouse".to_string()));
        assert!(entry.has_detail());
        assert_eq!(entry.description(), Some("Electric mouse"));
        assert_eq!(entry.pokemon().name, "pikachu");
    }

    #[test]
    fn test_whitespace_description_counts_as_detail() {
        let entry = PokedexEntry::new(pikachu(), Some(" ".to_string()));
        assert!(entry.has_detail());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = PokedexEntry::new(pikachu(), Some("Electric mouse".to_string()));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "detailed");
        assert_eq!(json["name"], "pikachu");
        assert_eq!(json["description"], "Electric mouse");

        let back: PokedexEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_from_pokemon() {
        let entry: PokedexEntry = pikachu().into();
        assert!(matches!(entry, PokedexEntry::Basic(_)));
    }
}
