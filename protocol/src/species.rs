//! `pokemon-species/{name}` payload

use serde::{Deserialize, Serialize};

use crate::NamedResource;

/// Species descriptor: rarity flags, habitat and capture rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesResponse {
    pub name: String,

    #[serde(default)]
    pub is_legendary: bool,

    #[serde(default)]
    pub is_mythical: bool,

    /// 0..=255, higher is easier to catch
    pub capture_rate: u8,

    #[serde(default)]
    pub habitat: Option<NamedResource>,
}

impl SpeciesResponse {
    /// Legendary and mythical species share the same capture penalty
    pub fn is_rare(&self) -> bool {
        self.is_legendary || self.is_mythical
    }

    pub fn habitat_name(&self) -> Option<&str> {
        self.habitat.as_ref().map(|h| h.name.as_str())
    }
}
