use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod detail;
pub mod pokedex;
pub mod species;


pub use detail::{AbilitySlot, PokemonDetailResponse, Sprites, TypeSlot};
pub use pokedex::{PokedexEntry, PokedexResponse};
pub use species::SpeciesResponse;

/// Base URL of the public PokeAPI directory
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/";

/// A `{name, url}` reference as returned all over the directory API
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectoryError {
    #[error("{resource} '{name}' not found")]
    NotFound { resource: Resource, name: String },

    #[error("Directory unreachable: {0}")]
    Transport(String),

    #[error("Malformed {resource} payload: {message}")]
    Decode { resource: Resource, message: String },
}

impl DirectoryError {
    pub fn not_found(resource: Resource, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            name: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// The three directory endpoints consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Species,
    Pokemon,
    Pokedex,
}

impl Resource {
    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Species => "pokemon-species",
            Resource::Pokemon => "pokemon",
            Resource::Pokedex => "pokedex",
        }
    }

    /// Relative URL for a named record, e.g. `pokemon-species/mew`
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.path(), name)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Resource::Species => "Species",
            Resource::Pokemon => "Pokemon",
            Resource::Pokedex => "Pokedex",
        };
        write!(f, "{}", label)
    }
}

/// Decode a JSON body into a directory payload
pub fn parse_payload<T: DeserializeOwned>(resource: Resource, body: &str) -> Result<T, DirectoryError> {
    serde_json::from_str(body).map_err(|e| DirectoryError::Decode {
        resource,
        message: e.to_string(),
    })
}

pub fn parse_species(body: &str) -> Result<SpeciesResponse, DirectoryError> {
    parse_payload(Resource::Species, body)
}

pub fn parse_detail(body: &str) -> Result<PokemonDetailResponse, DirectoryError> {
    parse_payload(Resource::Pokemon, body)
}

/// Parse a `pokedex/{region}` body straight into its ordered entries
pub fn parse_pokedex(body: &str) -> Result<Vec<PokedexEntry>, DirectoryError> {
    parse_payload::<PokedexResponse>(Resource::Pokedex, body).map(|dex| dex.entries)
}
