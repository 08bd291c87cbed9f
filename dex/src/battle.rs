//! Trainer battle simulation

use journey_team::{Trainer, signature_opponent};
use rand::Rng;
use tracing::info;

use crate::directory::Directory;
use crate::encounter::DEFAULT_REGION;
use crate::error::DexError;
use crate::text::capitalize;
use crate::types::{BattleRecord, EncounterRecord, EntryUpdate};

/// Number of battles kept in the log
pub const BATTLE_LOG_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct BattleResolution {
    pub record: BattleRecord,

    /// The opponent's Pokemon, shown as the current encounter
    pub opponent: EncounterRecord,

    /// Marks the opponent's species as seen
    pub update: EntryUpdate,
}

/// Prepend `record` to `log`, dropping the oldest battles past capacity
pub fn push_battle_record(log: &[BattleRecord], record: BattleRecord) -> Vec<BattleRecord> {
    std::iter::once(record)
        .chain(log.iter().cloned())
        .take(BATTLE_LOG_CAPACITY)
        .collect()
}

/// Battle `trainer` in `region`.
///
/// The winner is a fair coin flip, independent of any capture odds.
pub(crate) async fn simulate_trainer_battle<D, R>(
    directory: &D,
    trainer: &Trainer,
    region: &str,
    rng: &mut R,
) -> Result<BattleResolution, DexError>
where
    D: Directory + ?Sized,
    R: Rng + ?Sized,
{
    let opponent = signature_opponent(trainer);

    let species = directory.species(&opponent).await?;
    let detail = directory.detail(&opponent).await?;

    let name = capitalize(&detail.name);
    let region = region.trim();
    let region = if region.is_empty() {
        capitalize(DEFAULT_REGION)
    } else {
        capitalize(region)
    };

    let won = rng.gen_bool(0.5);
    info!(trainer = %trainer.name, opponent = %name, won, "Trainer battle resolved");

    Ok(BattleResolution {
        record: BattleRecord::new(name.clone(), trainer.name.clone(), won),
        opponent: EncounterRecord {
            entry_id: detail.id,
            name: name.clone(),
            region: region.clone(),
            legendary: species.is_rare(),
            habitat: species.habitat_name().map(capitalize),
            base_capture_rate: species.capture_rate,
        },
        update: EntryUpdate::seen(detail.id, name, region),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use journey_team::{Difficulty, trainers};
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_log_is_capped_newest_first() {
        let mut log = Vec::new();
        for i in 0..10 {
            log = push_battle_record(&log, BattleRecord::new(format!("#{}", i), "Brock", true));
        }

        assert_eq!(log.len(), BATTLE_LOG_CAPACITY);
        assert_eq!(log[0].opponent_name, "#9");
        assert_eq!(log[7].opponent_name, "#2");
    }

    #[tokio::test]
    async fn test_battle_against_fallback_opponent() {
        let directory = fixtures::kanto();
        let trainer = Trainer::new("Erika", "Bulbasaur Garden", Difficulty::Medium);

        let resolution = simulate_trainer_battle(&directory, &trainer, "", &mut StepRng::new(0, 0))
            .await
            .unwrap();

        assert!(resolution.record.won);
        assert_eq!(resolution.record.trainer_name, "Erika");
        assert_eq!(resolution.record.opponent_name, "Bulbasaur");
        assert_eq!(resolution.opponent.entry_id, 1);
        assert_eq!(resolution.opponent.region, "Kanto");
        assert_eq!(resolution.update, EntryUpdate::seen(1, "Bulbasaur", "Kanto"));
    }

    #[tokio::test]
    async fn test_losing_coin_flip() {
        let directory = fixtures::kanto();
        let trainer = Trainer::new("Giovanni", "Pidgey Fan", Difficulty::Hard);

        let resolution =
            simulate_trainer_battle(&directory, &trainer, "johto", &mut StepRng::new(u64::MAX, 0))
                .await
                .unwrap();

        assert!(!resolution.record.won);
        assert_eq!(resolution.opponent.region, "Johto");
    }

    #[tokio::test]
    async fn test_missing_opponent_data() {
        let directory = fixtures::kanto();
        let brock = trainers().remove(0);

        let result = simulate_trainer_battle(&directory, &brock, "kanto", &mut StepRng::new(0, 0)).await;

        assert!(result.unwrap_err().is_not_found());
    }
}
