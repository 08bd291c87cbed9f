//! Pokedex entry types

use journey_protocol::PokemonDetailResponse;

use crate::text::capitalize;

/// What the player knows about one species
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexEntry {
    /// Stable identifier from the directory, unique within a registry
    pub id: u32,

    pub name: String,

    /// Last region the species was observed in
    pub region: String,

    pub seen: bool,

    /// Always implies `seen`
    pub captured: bool,

    pub types: Vec<String>,

    pub abilities: Vec<String>,

    /// Opaque sprite reference, never interpreted here
    pub sprite: Option<String>,

    pub height: Option<u32>,

    pub weight: Option<u32>,

    /// Legendary or mythical
    pub legendary: bool,
}

impl IndexEntry {
    /// A blank entry: nothing seen, nothing known
    pub fn new(id: u32, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            seen: false,
            captured: false,
            types: Vec::new(),
            abilities: Vec::new(),
            sprite: None,
            height: None,
            weight: None,
            legendary: false,
        }
    }

    /// Overwrite every descriptive field with `detail`
    pub fn apply_detail(&mut self, detail: &EntryDetail) {
        self.name = detail.name.clone();
        self.types = detail.types.clone();
        self.abilities = detail.abilities.clone();
        self.sprite = detail.sprite.clone();
        self.height = Some(detail.height);
        self.weight = Some(detail.weight);
        self.legendary = detail.legendary;
    }

    /// Whether the species has been looked at in detail
    pub fn is_identified(&self) -> bool {
        self.height.is_some() || !self.types.is_empty()
    }
}

/// Descriptive payload fetched from the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub sprite: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub legendary: bool,
}

impl EntryDetail {
    /// Build display-ready detail from a `pokemon/{name}` record
    pub fn from_response(detail: &PokemonDetailResponse, legendary: bool) -> Self {
        Self {
            name: capitalize(&detail.name),
            types: detail.type_names().into_iter().map(capitalize).collect(),
            abilities: detail.ability_names().into_iter().map(capitalize).collect(),
            sprite: detail.sprite().map(str::to_string),
            height: detail.height,
            weight: detail.weight,
            legendary,
        }
    }
}

/// One merge into the registry.
///
/// `seen` and `captured` are deltas: `true` raises the flag, `false` leaves
/// it as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryUpdate {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub seen: bool,
    pub captured: bool,
    pub detail: Option<EntryDetail>,
}

impl EntryUpdate {
    /// Mark a species as seen
    pub fn seen(id: u32, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            seen: true,
            captured: false,
            detail: None,
        }
    }

    /// Mark a species as captured (and therefore seen)
    pub fn captured(id: u32, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            captured: true,
            ..Self::seen(id, name, region)
        }
    }

    pub fn with_detail(mut self, detail: EntryDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}
