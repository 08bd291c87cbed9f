//! Wild encounters and the regional listing cache

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use journey_protocol::PokedexEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::directory::Directory;
use crate::error::DexError;
use crate::text::capitalize;
use crate::types::{EncounterRecord, EntryUpdate};

/// Region explored when none has been chosen
pub const DEFAULT_REGION: &str = "kanto";

/// Regional listings, fetched at most once per region.
///
/// Listings are static reference data, so entries are never invalidated.
/// Keys are lower-cased region names.
#[derive(Debug, Default)]
pub struct RegionCache {
    listings: RwLock<HashMap<String, Arc<[PokedexEntry]>>>,
}

impl RegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: &str) -> Option<Arc<[PokedexEntry]>> {
        self.listings.read().ok()?.get(region).cloned()
    }

    /// Store a listing unless one is already cached, returning the cached one
    pub fn insert(&self, region: &str, entries: Vec<PokedexEntry>) -> Arc<[PokedexEntry]> {
        let fresh: Arc<[PokedexEntry]> = entries.into();
        match self.listings.write() {
            Ok(mut listings) => listings
                .entry(region.to_string())
                .or_insert(fresh)
                .clone(),
            Err(_) => fresh,
        }
    }

    pub fn contains(&self, region: &str) -> bool {
        self.listings
            .read()
            .map(|l| l.contains_key(region))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.listings.read().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalized cache key for a region name
pub(crate) fn region_key(region: &str) -> String {
    let region = region.trim();
    if region.is_empty() {
        DEFAULT_REGION.to_string()
    } else {
        region.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncounterResolution {
    pub encounter: EncounterRecord,

    /// Marks the species as seen
    pub update: EntryUpdate,
}

/// Draw a random Pokemon from `region`'s listing.
///
/// The listing comes from `cache` when present and is fetched and cached
/// otherwise. The species descriptor of the drawn entry is always fetched.
pub(crate) async fn generate_encounter<D, R>(
    directory: &D,
    cache: &RegionCache,
    region: &str,
    rng: &mut R,
) -> Result<EncounterResolution, DexError>
where
    D: Directory + ?Sized,
    R: Rng + ?Sized,
{
    let key = region_key(region);

    let listing = match cache.get(&key) {
        Some(listing) => {
            debug!(region = %key, "Regional listing cache hit");
            listing
        }
        None => {
            debug!(region = %key, "Regional listing cache miss");
            let entries = directory.regional_listing(&key).await?;
            cache.insert(&key, entries)
        }
    };

    let selected = listing
        .choose(rng)
        .ok_or_else(|| DexError::EmptyRegion(capitalize(&key)))?;

    let species = directory.species(selected.species_name()).await?;

    let name = capitalize(selected.species_name());
    let label = capitalize(&key);

    debug!(region = %key, pokemon = %name, entry = selected.entry_number, "Encounter drawn");

    Ok(EncounterResolution {
        encounter: EncounterRecord {
            entry_id: selected.entry_number,
            name: name.clone(),
            region: label.clone(),
            legendary: species.is_rare(),
            habitat: species.habitat_name().map(capitalize),
            base_capture_rate: species.capture_rate,
        },
        update: EntryUpdate::seen(selected.entry_number, name, label),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use journey_protocol::Resource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_region_key() {
        assert_eq!(region_key("Kanto"), "kanto");
        assert_eq!(region_key("  JOHTO "), "johto");
        assert_eq!(region_key(""), DEFAULT_REGION);
    }

    #[test]
    fn test_cache_keeps_first_listing() {
        let cache = RegionCache::new();
        cache.insert("kanto", vec![PokedexEntry::new(1, "bulbasaur")]);
        let kept = cache.insert("kanto", vec![PokedexEntry::new(4, "charmander")]);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].species_name(), "bulbasaur");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_encounter_from_listing() {
        let directory = fixtures::kanto();
        let cache = RegionCache::new();
        let mut rng = StdRng::seed_from_u64(7);

        let resolution = generate_encounter(&directory, &cache, "Kanto", &mut rng)
            .await
            .unwrap();

        let encounter = &resolution.encounter;
        assert!(["Bulbasaur", "Pidgey"].contains(&encounter.name.as_str()));
        assert_eq!(encounter.region, "Kanto");
        assert_eq!(encounter.habitat.as_deref(), Some("Grassland"));
        assert!(!encounter.legendary);
        assert_eq!(resolution.update.id, encounter.entry_id);
        assert!(resolution.update.seen);
        assert!(!resolution.update.captured);
        assert!(cache.contains("kanto"));
    }

    #[tokio::test]
    async fn test_listing_fetched_once() {
        let directory = fixtures::kanto();
        let cache = RegionCache::new();
        let mut rng = StepRng::new(0, 0);

        generate_encounter(&directory, &cache, "kanto", &mut rng).await.unwrap();
        generate_encounter(&directory, &cache, "KANTO", &mut rng).await.unwrap();

        assert_eq!(directory.calls(Resource::Pokedex), 1);
        assert_eq!(directory.calls(Resource::Species), 2);
    }

    #[tokio::test]
    async fn test_empty_region() {
        let directory = fixtures::kanto();
        let cache = RegionCache::new();

        let result = generate_encounter(&directory, &cache, "atlantis", &mut StepRng::new(0, 0)).await;

        assert_eq!(result, Err(DexError::EmptyRegion("Atlantis".to_string())));
        assert_eq!(directory.calls(Resource::Species), 0);
    }

    #[tokio::test]
    async fn test_unknown_region() {
        let directory = fixtures::kanto();
        let cache = RegionCache::new();

        let result = generate_encounter(&directory, &cache, "narnia", &mut StepRng::new(0, 0)).await;

        assert!(result.unwrap_err().is_not_found());
        assert!(!cache.contains("narnia"));
    }
}
