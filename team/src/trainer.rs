//! Trainer roster and the species each trainer leads with

use serde::{Deserialize, Serialize};

/// Species used when a trainer has neither a signature Pokemon nor a
/// usable specialization
pub const FALLBACK_OPPONENT: &str = "pikachu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    pub specialization: String,
    pub difficulty: Difficulty,
}

impl Trainer {
    pub fn new(
        name: impl Into<String>,
        specialization: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
            difficulty,
        }
    }
}

/// The trainers a player can challenge
pub fn trainers() -> Vec<Trainer> {
    vec![
        Trainer::new("Brock", "Rock & Defense", Difficulty::Beginner),
        Trainer::new("Misty", "Water & Control", Difficulty::Medium),
        Trainer::new("Cynthia", "Strong Dragons", Difficulty::Hard),
        Trainer::new("Leon", "Galar Champion", Difficulty::VeryHard),
    ]
}

fn signature_species(trainer_name: &str) -> Option<&'static str> {
    match trainer_name {
        "Brock" => Some("onix"),
        "Misty" => Some("starmie"),
        "Cynthia" => Some("garchomp"),
        "Leon" => Some("charizard"),
        _ => None,
    }
}

/// Lower-cased species name the trainer sends out.
///
/// Known trainers use their signature Pokemon. Anyone else fights with the
/// first word of their specialization, or [`FALLBACK_OPPONENT`] when the
/// specialization is blank.
pub fn signature_opponent(trainer: &Trainer) -> String {
    if let Some(species) = signature_species(&trainer.name) {
        return species.to_string();
    }

    trainer
        .specialization
        .split_whitespace()
        .next()
        .map(|word| word.to_lowercase())
        .unwrap_or_else(|| FALLBACK_OPPONENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_opponents() {
        let names: Vec<String> = trainers().iter().map(signature_opponent).collect();

        assert_eq!(names, vec!["onix", "starmie", "garchomp", "charizard"]);
    }

    #[test]
    fn test_unknown_trainer_uses_specialization() {
        let trainer = Trainer::new("Bugsy", "Scyther Swarm", Difficulty::Medium);

        assert_eq!(signature_opponent(&trainer), "scyther");
    }

    #[test]
    fn test_unknown_trainer_blank_specialization() {
        let trainer = Trainer::new("Youngster Joey", "   ", Difficulty::Beginner);

        assert_eq!(signature_opponent(&trainer), FALLBACK_OPPONENT);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::VeryHard.to_string(), "Very Hard");
        assert_eq!(Difficulty::Beginner.to_string(), "Beginner");
    }
}
