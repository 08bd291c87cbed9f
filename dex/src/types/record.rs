//! Results produced by encounters, captures and battles

use super::entry::IndexEntry;

/// A wild Pokemon currently in front of the player
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterRecord {
    /// Number in the regional listing, also used as the registry id.
    ///
    /// Captures key the registry by national number instead, so outside
    /// Kanto the same id can name two different species.
    pub entry_id: u32,
    pub name: String,
    /// Display label, e.g. "Kanto"
    pub region: String,
    pub legendary: bool,
    pub habitat: Option<String>,
    /// 0..=255
    pub base_capture_rate: u8,
}

/// Result of a capture attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureOutcome {
    pub success: bool,
    pub message: String,
    /// 0..=100
    pub chance_percent: u8,
    pub region: String,
    /// Full detail of the target, marked captured whether or not it was
    pub enriched_entry: IndexEntry,
}

impl CaptureOutcome {
    pub fn chance_description(&self) -> String {
        format!("Estimated chance: {}%", self.chance_percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRecord {
    pub opponent_name: String,
    pub trainer_name: String,
    pub won: bool,
}

impl BattleRecord {
    pub fn new(opponent_name: impl Into<String>, trainer_name: impl Into<String>, won: bool) -> Self {
        Self {
            opponent_name: opponent_name.into(),
            trainer_name: trainer_name.into(),
            won,
        }
    }
}

impl std::fmt::Display for BattleRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = if self.won { "Victory" } else { "Defeat" };
        write!(f, "{} against {}'s {}", result, self.trainer_name, self.opponent_name)
    }
}
