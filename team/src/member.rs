//! Team members and team options

use serde::{Deserialize, Serialize};

use crate::TeamError;

/// Attacks given to every freshly captured Pokemon
pub const PLACEHOLDER_ATTACKS: [&str; 4] =
    ["Quick Attack", "Tackle", "Special Strike", "Secret Technique"];

/// Type shown for a captured Pokemon whose types were never revealed
pub const UNKNOWN_TYPE: &str = "Unknown";

/// A Pokemon as it appears in a team lineup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub types: Vec<String>,
    pub attacks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    #[serde(default)]
    pub legendary: bool,
}

impl TeamMember {
    pub fn new<T, A>(name: impl Into<String>, types: T, attacks: A) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            attacks: attacks.into_iter().map(Into::into).collect(),
            sprite: None,
            legendary: false,
        }
    }

    /// Build the lineup projection of a newly captured Pokemon.
    ///
    /// Captured Pokemon don't know any real moves yet, so they get the
    /// placeholder attack list. An empty type list becomes `["Unknown"]`.
    pub fn recruit(
        name: impl Into<String>,
        types: &[String],
        sprite: Option<String>,
        legendary: bool,
    ) -> Self {
        let types = if types.is_empty() {
            vec![UNKNOWN_TYPE.to_string()]
        } else {
            types.to_vec()
        };

        Self {
            name: name.into(),
            types,
            attacks: PLACEHOLDER_ATTACKS.iter().map(|a| a.to_string()).collect(),
            sprite,
            legendary,
        }
    }
}

/// A selectable team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOption {
    pub name: String,
    pub description: String,
    pub members: Vec<TeamMember>,
}

impl TeamOption {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        members: Vec<TeamMember>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            members,
        }
    }

    /// Export as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import from JSON. Teams without members are rejected.
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let team: TeamOption = serde_json::from_str(json)?;
        if team.members.is_empty() {
            return Err(TeamError::EmptyTeam(team.name));
        }
        Ok(team)
    }

    pub fn has_legendary(&self) -> bool {
        self.members.iter().any(|m| m.legendary)
    }
}
