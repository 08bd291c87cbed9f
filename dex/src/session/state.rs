use journey_team::{TeamMember, TeamOption, Trainer};

use crate::registry::Registry;
use crate::types::{BattleRecord, CaptureOutcome, EncounterRecord};

/// Region shown in a fresh session
const STARTING_REGION: &str = "Kanto";

/// Capture screen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptureState {
    pub region: String,
    pub pokemon_name: String,
    pub loading: bool,
    pub result: Option<CaptureOutcome>,
    pub error: Option<String>,
}

impl Default for CaptureState {
    fn default() -> Self {
        Self {
            region: STARTING_REGION.to_string(),
            pokemon_name: String::new(),
            loading: false,
            result: None,
            error: None,
        }
    }
}

/// Encounter and trainer battle screen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    pub region: String,
    pub loading: bool,
    pub current: Option<EncounterRecord>,
    pub error: Option<String>,
}

impl Default for EncounterState {
    fn default() -> Self {
        Self {
            region: STARTING_REGION.to_string(),
            loading: false,
            current: None,
            error: None,
        }
    }
}

/// Everything the UI renders. Replaced as a whole on every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub selected_team: Option<TeamOption>,
    pub selected_trainer: Option<Trainer>,
    /// Captured Pokemon, in capture order
    pub captured_roster: Vec<TeamMember>,
    pub capture: CaptureState,
    pub encounter: EncounterState,
    pub registry: Registry,
    /// Newest first, at most 8
    pub battle_log: Vec<BattleRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any command is waiting on the directory
    pub fn is_loading(&self) -> bool {
        self.capture.loading || self.encounter.loading
    }

    /// Battles won out of those still in the log
    pub fn recent_wins(&self) -> usize {
        self.battle_log.iter().filter(|b| b.won).count()
    }
}
