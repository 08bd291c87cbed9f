mod api;
pub mod config;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use api::PokeApiClient;
pub use config::DirectoryConfig;

pub use journey_dex::{
    BattleRecord, CaptureOutcome, Command, Directory, EncounterRecord, IndexEntry, Registry,
    Session, SessionState,
};
pub use journey_protocol::{DirectoryError, POKEAPI_URL};
pub use journey_team::{TeamOption, Trainer, predefined_teams, trainers};

/// A session backed by the live directory
pub type LiveSession = Session<PokeApiClient, StdRng>;

/// Start a new session against the directory described by `config`.
///
/// Draws come from an entropy-seeded RNG; use [`Session::new`] directly to
/// supply your own.
pub fn start_session(config: &DirectoryConfig) -> Result<LiveSession> {
    let client = PokeApiClient::new(config)?;
    tracing::info!(base_url = %client.base_url(), "Starting session");
    Ok(Session::new(client, StdRng::from_entropy()))
}
