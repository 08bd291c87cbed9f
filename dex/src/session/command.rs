use journey_team::{TeamOption, Trainer};

use crate::battle::BattleResolution;
use crate::capture::CaptureResolution;
use crate::encounter::EncounterResolution;

/// Everything that can change a session.
///
/// The first group is issued by the player. The `*Resolved`/`*Failed`
/// group carries the result of an [`Effect`] back into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pick a team; clears the selected trainer
    SelectTeam(TeamOption),

    SelectTrainer(Trainer),

    /// Sets the capture and encounter regions together
    SetRegion(String),

    /// Free-text capture target
    SetPokemonName(String),

    GenerateEncounter,

    /// Capture `target`, or the current encounter, or the typed name
    AttemptCapture { target: Option<String> },

    /// Battle the selected trainer; ignored with no trainer selected
    SimulateTrainerBattle,

    /// Switch to a team made of captured Pokemon, if there are any
    UseCapturedRoster,

    EncounterResolved(EncounterResolution),
    EncounterFailed(String),

    CaptureResolved(CaptureResolution),
    CaptureFailed(String),

    BattleResolved(BattleResolution),
    BattleFailed(String),
}

/// Directory work requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    GenerateEncounter { region: String },
    AttemptCapture { target: String, region: String },
    TrainerBattle { trainer: Trainer, region: String },
}
