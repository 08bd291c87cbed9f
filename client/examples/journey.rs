//! Trainer Journey Example
//!
//! Plays a short session against the live PokeAPI: pick a team, explore a
//! region, try to catch what shows up, then challenge a trainer.
//!
//! Set `JOURNEY_REGION` to explore somewhere other than Kanto and
//! `RUST_LOG=journey_dex=debug` to watch the directory traffic.

use anyhow::Result;
use journey_client::{Command, DirectoryConfig, predefined_teams, start_session, trainers};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let region = std::env::var("JOURNEY_REGION").unwrap_or_else(|_| "kanto".to_string());
    let mut session = start_session(&DirectoryConfig::from_env())?;

    if let Some(team) = predefined_teams().into_iter().next() {
        println!("Team: {} - {}", team.name, team.description);
        session.dispatch(Command::SelectTeam(team)).await;
    }
    session.dispatch(Command::SetRegion(region.clone())).await;

    for _ in 0..3 {
        let state = session.dispatch(Command::GenerateEncounter).await;
        if let Some(error) = &state.encounter.error {
            println!("No encounter in {}: {}", region, error);
            break;
        }
        if let Some(encounter) = &state.encounter.current {
            println!(
                "A wild {} appeared! (habitat: {}, legendary: {})",
                encounter.name,
                encounter.habitat.as_deref().unwrap_or("unknown"),
                encounter.legendary
            );
        }

        let state = session.dispatch(Command::AttemptCapture { target: None }).await;
        match (&state.capture.result, &state.capture.error) {
            (Some(outcome), _) => {
                println!("  {} ({})", outcome.message, outcome.chance_description())
            }
            (None, Some(error)) => println!("  {}", error),
            (None, None) => {}
        }
    }

    if let Some(trainer) = trainers().into_iter().next() {
        println!("Challenging {} ({})", trainer.name, trainer.difficulty);
        session.dispatch(Command::SelectTrainer(trainer)).await;
        let state = session.dispatch(Command::SimulateTrainerBattle).await;
        match state.battle_log.first() {
            Some(record) => println!("  {}", record),
            None => println!("  {}", state.encounter.error.as_deref().unwrap_or("No battle")),
        }
    }

    let state = session.dispatch(Command::UseCapturedRoster).await;
    if let Some(team) = &state.selected_team {
        println!("Now travelling with: {}", team.name);
    }

    println!(
        "Pokedex: {} seen, {} captured",
        state.registry.seen_count(),
        state.registry.captured_count()
    );
    for entry in state.registry.iter() {
        let mark = if entry.captured { "caught" } else { "seen" };
        println!("  #{:03} {} [{}] {}", entry.id, entry.name, mark, entry.region);
    }

    Ok(())
}
