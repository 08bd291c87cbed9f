//! Directory records shared by the unit tests

use journey_protocol::{
    AbilitySlot, NamedResource, PokedexEntry, PokemonDetailResponse, SpeciesResponse, Sprites,
    TypeSlot,
};

use crate::directory::MemoryDirectory;

pub fn species(name: &str, capture_rate: u8, legendary: bool, mythical: bool) -> SpeciesResponse {
    SpeciesResponse {
        name: name.to_string(),
        is_legendary: legendary,
        is_mythical: mythical,
        capture_rate,
        habitat: Some(NamedResource::new("grassland")),
    }
}

pub fn detail(id: u32, name: &str, types: &[&str]) -> PokemonDetailResponse {
    PokemonDetailResponse {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        types: types
            .iter()
            .enumerate()
            .map(|(i, t)| TypeSlot {
                slot: i as u8 + 1,
                kind: NamedResource::new(*t),
            })
            .collect(),
        sprites: Sprites {
            front_default: Some(format!("https://sprites.example/{}.png", id)),
        },
        abilities: vec![AbilitySlot {
            ability: NamedResource::new("overgrow"),
            is_hidden: false,
        }],
    }
}

/// A small Kanto directory: two commons, one legendary, one mythical
pub fn kanto() -> MemoryDirectory {
    MemoryDirectory::new()
        .with_species(species("bulbasaur", 45, false, false))
        .with_detail(detail(1, "bulbasaur", &["grass", "poison"]))
        .with_species(species("pidgey", 255, false, false))
        .with_detail(detail(16, "pidgey", &["normal", "flying"]))
        .with_species(species("mewtwo", 255, true, false))
        .with_detail(detail(150, "mewtwo", &["psychic"]))
        .with_species(species("mew", 3, false, true))
        .with_detail(detail(151, "mew", &["psychic"]))
        .with_listing(
            "kanto",
            vec![
                PokedexEntry::new(1, "bulbasaur"),
                PokedexEntry::new(16, "pidgey"),
            ],
        )
        .with_listing("atlantis", Vec::new())
}
