//! `pokedex/{region}` payload

use serde::{Deserialize, Serialize};

use crate::NamedResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokedexResponse {
    #[serde(rename = "pokemon_entries")]
    pub entries: Vec<PokedexEntry>,
}

/// One line of a regional listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokedexEntry {
    pub entry_number: u32,
    #[serde(rename = "pokemon_species")]
    pub species: NamedResource,
}

impl PokedexEntry {
    pub fn new(entry_number: u32, species: impl Into<String>) -> Self {
        Self {
            entry_number,
            species: NamedResource::new(species),
        }
    }

    pub fn species_name(&self) -> &str {
        &self.species.name
    }
}
