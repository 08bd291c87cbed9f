//! Predefined teams

use crate::member::{TeamMember, TeamOption};

/// Name of the team assembled from captured Pokemon
pub const CAPTURED_TEAM_NAME: &str = "Captured Team";

fn legendary(mut member: TeamMember) -> TeamMember {
    member.legendary = true;
    member
}

/// The three starter teams offered at the beginning of a journey
pub fn predefined_teams() -> Vec<TeamOption> {
    vec![
        TeamOption::new(
            "Kanto Classics",
            "Balanced team built around the iconic starter types.",
            vec![
                TeamMember::new(
                    "Pikachu",
                    ["Electric"],
                    ["Thunder Shock", "Quick Attack", "Iron Tail"],
                ),
                TeamMember::new(
                    "Charizard",
                    ["Fire", "Flying"],
                    ["Flamethrower", "Air Slash", "Fire Blast"],
                ),
                TeamMember::new(
                    "Blastoise",
                    ["Water"],
                    ["Hydro Pump", "Rapid Spin", "Ice Beam"],
                ),
                TeamMember::new(
                    "Venusaur",
                    ["Grass", "Poison"],
                    ["Solar Beam", "Sleep Powder", "Flash"],
                ),
            ],
        ),
        TeamOption::new(
            "Galar Explorers",
            "Fast attackers with wide elemental coverage.",
            vec![
                TeamMember::new("Cinderace", ["Fire"], ["Pyro Ball", "Quick Attack", "Feint"]),
                TeamMember::new(
                    "Inteleon",
                    ["Water"],
                    ["Snipe Shot", "Hydro Pump", "Ice Punch"],
                ),
                TeamMember::new(
                    "Rillaboom",
                    ["Grass"],
                    ["Drum Beating", "Giga Drain", "Wood Hammer"],
                ),
                TeamMember::new(
                    "Corviknight",
                    ["Steel", "Flying"],
                    ["Brave Bird", "Steel Wing", "Metal Claw"],
                ),
            ],
        ),
        TeamOption::new(
            "Legendary Strategy",
            "Legendaries with control and massive damage.",
            vec![
                legendary(TeamMember::new(
                    "Suicune",
                    ["Water"],
                    ["Hydro Pump", "Icy Wind", "Aurora Beam"],
                )),
                legendary(TeamMember::new(
                    "Zapdos",
                    ["Electric", "Flying"],
                    ["Thunderbolt", "Hurricane", "Thunder Shock"],
                )),
                legendary(TeamMember::new(
                    "Mew",
                    ["Psychic"],
                    ["Psychic", "Shadow Ball", "Metronome"],
                )),
                TeamMember::new(
                    "Garchomp",
                    ["Dragon", "Ground"],
                    ["Dragon Claw", "Earthquake", "Stone Edge"],
                ),
            ],
        ),
    ]
}

/// Team built from the player's captured roster, `None` while the roster is
/// empty
pub fn captured_team(roster: &[TeamMember]) -> Option<TeamOption> {
    if roster.is_empty() {
        return None;
    }

    Some(TeamOption::new(
        CAPTURED_TEAM_NAME,
        "Using the Pokémon you captured",
        roster.to_vec(),
    ))
}
