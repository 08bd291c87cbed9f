use journey_team::captured_team;

use super::command::{Command, Effect};
use super::state::SessionState;
use crate::battle::push_battle_record;
use crate::error::MISSING_TARGET;

/// Apply `command` to `state`.
///
/// Returns the next state and the directory work it asks for. `state` itself
/// is never modified, so a half-applied command can't be observed.
pub fn reduce(state: &SessionState, command: Command) -> (SessionState, Vec<Effect>) {
    let mut next = state.clone();

    let effects = match command {
        Command::SelectTeam(team) => {
            next.selected_team = Some(team);
            next.selected_trainer = None;
            Vec::new()
        }
        Command::SelectTrainer(trainer) => {
            next.selected_trainer = Some(trainer);
            Vec::new()
        }
        Command::SetRegion(region) => {
            next.capture.region = region.clone();
            next.encounter.region = region;
            Vec::new()
        }
        Command::SetPokemonName(name) => {
            next.capture.pokemon_name = name;
            Vec::new()
        }
        Command::UseCapturedRoster => {
            if let Some(team) = captured_team(&next.captured_roster) {
                next.selected_team = Some(team);
                next.selected_trainer = None;
            }
            Vec::new()
        }
        Command::GenerateEncounter => {
            next.encounter.loading = true;
            next.encounter.error = None;
            vec![Effect::GenerateEncounter {
                region: next.encounter.region.clone(),
            }]
        }
        Command::AttemptCapture { target } => start_capture(&mut next, target),
        Command::SimulateTrainerBattle => match next.selected_trainer.clone() {
            Some(trainer) => {
                next.encounter.loading = true;
                next.encounter.error = None;
                vec![Effect::TrainerBattle {
                    trainer,
                    region: next.capture.region.clone(),
                }]
            }
            None => Vec::new(),
        },

        Command::EncounterResolved(resolution) => {
            next.registry = next.registry.merge(&resolution.update);
            next.encounter.loading = false;
            next.encounter.error = None;
            next.encounter.current = Some(resolution.encounter);
            Vec::new()
        }
        Command::EncounterFailed(message) | Command::BattleFailed(message) => {
            next.encounter.loading = false;
            next.encounter.error = Some(message);
            Vec::new()
        }
        Command::CaptureResolved(resolution) => {
            next.registry = next.registry.merge(&resolution.update);
            if let Some(member) = resolution.recruit {
                next.captured_roster.push(member);
            }
            next.capture.loading = false;
            next.capture.error = None;
            next.capture.result = Some(resolution.outcome);
            Vec::new()
        }
        Command::CaptureFailed(message) => {
            next.capture.loading = false;
            next.capture.error = Some(message);
            Vec::new()
        }
        Command::BattleResolved(resolution) => {
            next.registry = next.registry.merge(&resolution.update);
            next.battle_log = push_battle_record(&next.battle_log, resolution.record);
            next.encounter.loading = false;
            next.encounter.current = Some(resolution.opponent);
            Vec::new()
        }
    };

    (next, effects)
}

/// Pick the capture target: the explicit one, then the current encounter,
/// then whatever was typed.
fn start_capture(next: &mut SessionState, target: Option<String>) -> Vec<Effect> {
    let target = target
        .filter(|t| !t.trim().is_empty())
        .or_else(|| next.encounter.current.as_ref().map(|e| e.name.clone()))
        .unwrap_or_else(|| next.capture.pokemon_name.clone());

    if target.trim().is_empty() {
        next.capture.error = Some(MISSING_TARGET.to_string());
        return Vec::new();
    }

    next.capture.loading = true;
    next.capture.error = None;
    next.capture.result = None;
    vec![Effect::AttemptCapture {
        target,
        region: next.capture.region.clone(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BattleRecord, EncounterRecord, EntryUpdate};
    use crate::{BattleResolution, EncounterResolution};
    use journey_team::{TeamMember, predefined_teams, trainers};

    fn encounter(name: &str) -> EncounterRecord {
        EncounterRecord {
            entry_id: 16,
            name: name.to_string(),
            region: "Kanto".into(),
            legendary: false,
            habitat: None,
            base_capture_rate: 255,
        }
    }

    #[test]
    fn test_select_team_clears_trainer() {
        let (state, _) = reduce(&SessionState::new(), Command::SelectTrainer(trainers().remove(0)));
        let (state, effects) = reduce(&state, Command::SelectTeam(predefined_teams().remove(1)));

        assert!(effects.is_empty());
        assert!(state.selected_trainer.is_none());
        assert_eq!(state.selected_team.unwrap().name, "Galar Explorers");
    }

    #[test]
    fn test_set_region_updates_both_screens() {
        let (state, _) = reduce(&SessionState::new(), Command::SetRegion("Hoenn".into()));

        assert_eq!(state.capture.region, "Hoenn");
        assert_eq!(state.encounter.region, "Hoenn");
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let before = SessionState::new();
        let (after, _) = reduce(&before, Command::GenerateEncounter);

        assert!(!before.encounter.loading);
        assert!(after.encounter.loading);
    }

    #[test]
    fn test_generate_encounter_effect() {
        let (state, effects) = reduce(&SessionState::new(), Command::GenerateEncounter);

        assert!(state.is_loading());
        assert_eq!(
            effects,
            vec![Effect::GenerateEncounter {
                region: "Kanto".into()
            }]
        );
    }

    #[test]
    fn test_capture_target_priority() {
        let mut state = SessionState::new();
        state.capture.pokemon_name = "eevee".into();

        let (_, effects) = reduce(&state, Command::AttemptCapture { target: None });
        assert_eq!(
            effects,
            vec![Effect::AttemptCapture {
                target: "eevee".into(),
                region: "Kanto".into()
            }]
        );

        state.encounter.current = Some(encounter("Pidgey"));
        let (_, effects) = reduce(&state, Command::AttemptCapture { target: Some("  ".into()) });
        assert!(matches!(&effects[0], Effect::AttemptCapture { target, .. } if target == "Pidgey"));

        let (_, effects) = reduce(&state, Command::AttemptCapture { target: Some("mew".into()) });
        assert!(matches!(&effects[0], Effect::AttemptCapture { target, .. } if target == "mew"));
    }

    #[test]
    fn test_blank_capture_sets_error() {
        let (state, effects) = reduce(&SessionState::new(), Command::AttemptCapture { target: None });

        assert!(effects.is_empty());
        assert!(!state.capture.loading);
        assert_eq!(state.capture.error.as_deref(), Some(MISSING_TARGET));
    }

    #[test]
    fn test_battle_requires_trainer() {
        let (state, effects) = reduce(&SessionState::new(), Command::SimulateTrainerBattle);

        assert!(effects.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_use_captured_roster() {
        let (state, _) = reduce(&SessionState::new(), Command::UseCapturedRoster);
        assert!(state.selected_team.is_none());

        let mut state = state;
        state.captured_roster.push(TeamMember::recruit("Pidgey", &[], None, false));
        state.selected_trainer = Some(trainers().remove(0));

        let (state, _) = reduce(&state, Command::UseCapturedRoster);
        let team = state.selected_team.unwrap();
        assert_eq!(team.name, "Captured Team");
        assert_eq!(team.members.len(), 1);
        assert!(state.selected_trainer.is_none());
    }

    #[test]
    fn test_failure_keeps_registry() {
        let (state, _) = reduce(
            &SessionState::new(),
            Command::EncounterResolved(EncounterResolution {
                encounter: encounter("Pidgey"),
                update: EntryUpdate::seen(16, "Pidgey", "Kanto"),
            }),
        );
        let (loading, _) = reduce(&state, Command::GenerateEncounter);
        let (failed, _) = reduce(&loading, Command::EncounterFailed("Pokedex is empty for Atlantis".into()));

        assert_eq!(failed.registry, state.registry);
        assert!(!failed.encounter.loading);
        assert_eq!(failed.encounter.error.as_deref(), Some("Pokedex is empty for Atlantis"));
    }

    #[test]
    fn test_battle_resolved_prepends_record() {
        let mut state = SessionState::new();
        for _ in 0..8 {
            state.battle_log.push(BattleRecord::new("Onix", "Brock", false));
        }

        let (state, _) = reduce(
            &state,
            Command::BattleResolved(BattleResolution {
                record: BattleRecord::new("Starmie", "Misty", true),
                opponent: encounter("Starmie"),
                update: EntryUpdate::seen(121, "Starmie", "Kanto"),
            }),
        );

        assert_eq!(state.battle_log.len(), 8);
        assert_eq!(state.battle_log[0].opponent_name, "Starmie");
        assert_eq!(state.recent_wins(), 1);
        assert!(state.registry.contains(121));
    }
}
