//! Capture, encounter and Pokedex engine for Trainer Journey.
//!
//! This crate turns lookups against the species directory into game state:
//! wild encounters, capture attempts, trainer battles and the Pokedex
//! registry of everything seen or caught.
//!
//! # Overview
//!
//! ```text
//! journey-protocol (directory payloads)
//!        │
//!        ▼
//! journey-dex (registry + resolvers + session) ← THIS CRATE
//!        │
//!        └─> journey-client (PokeAPI over HTTP)
//! ```
//!
//! # Main Types
//!
//! ## Registry
//! - [`Registry`] - Sorted, deduplicated Pokedex keyed by id
//! - [`IndexEntry`] - What is known about one species
//! - [`EntryUpdate`] - One monotonic merge into the registry
//!
//! ## Resolution
//! - [`Engine`] - Runs captures, encounters and trainer battles against a [`Directory`]
//! - [`RegionCache`] - Regional listings fetched once per session
//! - [`capture_chance`] - The capture probability model
//!
//! ## Session
//! - [`SessionState`] - Everything the UI renders
//! - [`reduce`] - `(state, command) -> (state, effects)`
//! - [`Session`] - Runs effects and folds their results back in
//!
//! # Example Usage
//!
//! ```ignore
//! use journey_dex::{Command, Session};
//!
//! let mut session = Session::new(directory, rand::thread_rng());
//!
//! session.dispatch(Command::SetRegion("johto".into())).await;
//! session.dispatch(Command::GenerateEncounter).await;
//! session.dispatch(Command::AttemptCapture { target: None }).await;
//!
//! if let Some(outcome) = &session.state().capture.result {
//!     println!("{} ({})", outcome.message, outcome.chance_description());
//! }
//! ```

mod battle;
mod capture;
pub mod directory;
mod encounter;
mod engine;
mod error;
#[cfg(test)]
mod fixtures;
mod registry;
pub mod session;
mod text;
pub mod types;

pub use battle::{BATTLE_LOG_CAPACITY, BattleResolution, push_battle_record};
pub use capture::{
    CaptureResolution, LEGENDARY_PENALTY, MAX_BASE_CHANCE, MIN_BASE_CHANCE, capture_chance,
    chance_percent,
};
pub use directory::{Directory, MemoryDirectory};
pub use encounter::{DEFAULT_REGION, EncounterResolution, RegionCache};
pub use engine::Engine;
pub use error::{DexError, MAX_ERROR_LEN, MISSING_TARGET};
pub use registry::Registry;
pub use session::{
    CaptureState, Command, Effect, EncounterState, Session, SessionState, reduce,
};
pub use text::{capitalize, truncate_message};
pub use types::{BattleRecord, CaptureOutcome, EncounterRecord, EntryDetail, EntryUpdate, IndexEntry};

// Re-export the types the public API is built on
pub use journey_protocol::{DirectoryError, PokedexEntry, PokemonDetailResponse, SpeciesResponse};
pub use journey_team::{TeamMember, TeamOption, Trainer};
