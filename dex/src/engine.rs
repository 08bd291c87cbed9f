//! Engine - runs resolutions against a directory

use journey_team::Trainer;
use rand::Rng;
use tracing::warn;

use crate::battle::{self, BattleResolution};
use crate::capture::{self, CaptureResolution};
use crate::directory::Directory;
use crate::encounter::{self, EncounterResolution, RegionCache};
use crate::error::DexError;
use crate::session::{Command, Effect};
use crate::text::truncate_message;

/// Owns the directory and the regional listing cache for one session.
///
/// Every method takes `&self`, so several commands may be resolved at once.
/// Randomness is passed in by the caller.
pub struct Engine<D> {
    directory: D,
    cache: RegionCache,
}

impl<D: Directory> Engine<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            cache: RegionCache::new(),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn cache(&self) -> &RegionCache {
        &self.cache
    }

    /// Try to capture `target` while exploring `region`
    pub async fn attempt_capture<R: Rng + ?Sized>(
        &self,
        target: &str,
        region: &str,
        rng: &mut R,
    ) -> Result<CaptureResolution, DexError> {
        capture::attempt_capture(&self.directory, target, region, rng).await
    }

    /// Draw a wild Pokemon from `region`
    pub async fn generate_encounter<R: Rng + ?Sized>(
        &self,
        region: &str,
        rng: &mut R,
    ) -> Result<EncounterResolution, DexError> {
        encounter::generate_encounter(&self.directory, &self.cache, region, rng).await
    }

    /// Battle `trainer` and record who won
    pub async fn simulate_trainer_battle<R: Rng + ?Sized>(
        &self,
        trainer: &Trainer,
        region: &str,
        rng: &mut R,
    ) -> Result<BattleResolution, DexError> {
        battle::simulate_trainer_battle(&self.directory, trainer, region, rng).await
    }

    /// Execute an effect and turn its result into the completion command.
    ///
    /// Errors never escape: they become the matching `*Failed` command
    /// carrying display text of at most 120 characters.
    pub async fn run<R: Rng + ?Sized>(&self, effect: Effect, rng: &mut R) -> Command {
        match effect {
            Effect::GenerateEncounter { region } => {
                match self.generate_encounter(&region, rng).await {
                    Ok(resolution) => Command::EncounterResolved(resolution),
                    Err(e) => {
                        warn!(region = %region, error = %e, "Encounter failed");
                        Command::EncounterFailed(truncate_message(&e.to_string()))
                    }
                }
            }
            Effect::AttemptCapture { target, region } => {
                match self.attempt_capture(&target, &region, rng).await {
                    Ok(resolution) => Command::CaptureResolved(resolution),
                    Err(e) => {
                        let target = target.trim();
                        warn!(pokemon = %target, error = %e, "Capture failed");
                        Command::CaptureFailed(truncate_message(&format!(
                            "Could not fetch {}: {}",
                            target, e
                        )))
                    }
                }
            }
            Effect::TrainerBattle { trainer, region } => {
                match self.simulate_trainer_battle(&trainer, &region, rng).await {
                    Ok(resolution) => Command::BattleResolved(resolution),
                    Err(e) => {
                        warn!(trainer = %trainer.name, error = %e, "Trainer battle failed");
                        Command::BattleFailed(truncate_message(&format!(
                            "Trainer data unavailable: {}",
                            e
                        )))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rand::rngs::mock::StepRng;

    #[tokio::test]
    async fn test_run_capture_failure_is_truncated() {
        let engine = Engine::new(fixtures::kanto());
        let target = "x".repeat(200);

        let command = engine
            .run(
                Effect::AttemptCapture {
                    target: target.clone(),
                    region: "kanto".into(),
                },
                &mut StepRng::new(0, 0),
            )
            .await;

        match command {
            Command::CaptureFailed(message) => {
                assert_eq!(message.chars().count(), 120);
                assert!(message.starts_with("Could not fetch xxx"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_capture_failure_uses_trimmed_name() {
        let engine = Engine::new(fixtures::kanto());

        let command = engine
            .run(
                Effect::AttemptCapture {
                    target: "  Onix ".into(),
                    region: "kanto".into(),
                },
                &mut StepRng::new(0, 0),
            )
            .await;

        assert_eq!(
            command,
            Command::CaptureFailed("Could not fetch Onix: Species 'onix' not found".into())
        );
    }

    #[tokio::test]
    async fn test_run_empty_region() {
        let engine = Engine::new(fixtures::kanto());

        let command = engine
            .run(
                Effect::GenerateEncounter {
                    region: "atlantis".into(),
                },
                &mut StepRng::new(0, 0),
            )
            .await;

        assert_eq!(
            command,
            Command::EncounterFailed("Pokedex is empty for Atlantis".into())
        );
    }

    #[tokio::test]
    async fn test_run_battle_failure_message() {
        let engine = Engine::new(fixtures::kanto());
        let brock = journey_team::trainers().remove(0);

        let command = engine
            .run(
                Effect::TrainerBattle {
                    trainer: brock,
                    region: "kanto".into(),
                },
                &mut StepRng::new(0, 0),
            )
            .await;

        assert_eq!(
            command,
            Command::BattleFailed("Trainer data unavailable: Species 'onix' not found".into())
        );
    }
}
