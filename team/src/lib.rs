//! Teams and trainers for Trainer Journey.
//!
//! This crate holds the static catalogue a player chooses from before
//! heading out: the predefined [`TeamOption`]s, the trainer roster and the
//! species each trainer sends out. Teams are plain serde types so they can
//! be exported to and imported from JSON.
//!
//! # Example
//!
//! ```
//! use journey_team::{predefined_teams, trainers, signature_opponent};
//!
//! let teams = predefined_teams();
//! assert_eq!(teams[0].members.len(), 4);
//!
//! let roster = trainers();
//! assert_eq!(signature_opponent(&roster[0]), "onix");
//! ```

mod catalogue;
mod member;
mod trainer;

use thiserror::Error;

pub use catalogue::{CAPTURED_TEAM_NAME, captured_team, predefined_teams};
pub use member::{PLACEHOLDER_ATTACKS, TeamMember, TeamOption, UNKNOWN_TYPE};
pub use trainer::{Difficulty, FALLBACK_OPPONENT, Trainer, signature_opponent, trainers};

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Invalid team JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Team '{0}' has no members")]
    EmptyTeam(String),
}
