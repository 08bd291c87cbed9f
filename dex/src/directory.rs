//! The species directory the engine reads from

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use journey_protocol::{
    DirectoryError, PokedexEntry, PokemonDetailResponse, Resource, SpeciesResponse,
};

/// Read-only access to species data.
///
/// Names passed in are already lower-cased; implementations look them up
/// as given.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Species descriptor (`pokemon-species/{name}`)
    async fn species(&self, name: &str) -> Result<SpeciesResponse, DirectoryError>;

    /// Detail record (`pokemon/{name}`)
    async fn detail(&self, name: &str) -> Result<PokemonDetailResponse, DirectoryError>;

    /// Regional listing (`pokedex/{region}`)
    async fn regional_listing(&self, region: &str) -> Result<Vec<PokedexEntry>, DirectoryError>;
}

#[async_trait]
impl<D: Directory + ?Sized> Directory for Arc<D> {
    async fn species(&self, name: &str) -> Result<SpeciesResponse, DirectoryError> {
        (**self).species(name).await
    }

    async fn detail(&self, name: &str) -> Result<PokemonDetailResponse, DirectoryError> {
        (**self).detail(name).await
    }

    async fn regional_listing(&self, region: &str) -> Result<Vec<PokedexEntry>, DirectoryError> {
        (**self).regional_listing(region).await
    }
}

/// An in-memory directory.
///
/// Useful for offline play and tests. Every lookup is counted per resource,
/// including the ones that miss.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    species: HashMap<String, SpeciesResponse>,
    details: HashMap<String, PokemonDetailResponse>,
    listings: HashMap<String, Vec<PokedexEntry>>,
    species_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    listing_calls: AtomicUsize,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, species: SpeciesResponse) -> Self {
        self.species.insert(species.name.clone(), species);
        self
    }

    pub fn with_detail(mut self, detail: PokemonDetailResponse) -> Self {
        self.details.insert(detail.name.clone(), detail);
        self
    }

    pub fn with_listing(mut self, region: &str, entries: Vec<PokedexEntry>) -> Self {
        self.listings.insert(region.to_string(), entries);
        self
    }

    /// Number of lookups made against `resource` so far
    pub fn calls(&self, resource: Resource) -> usize {
        self.counter(resource).load(Ordering::Relaxed)
    }

    pub fn total_calls(&self) -> usize {
        self.calls(Resource::Species) + self.calls(Resource::Pokemon) + self.calls(Resource::Pokedex)
    }

    fn counter(&self, resource: Resource) -> &AtomicUsize {
        match resource {
            Resource::Species => &self.species_calls,
            Resource::Pokemon => &self.detail_calls,
            Resource::Pokedex => &self.listing_calls,
        }
    }

    fn lookup<T: Clone>(
        &self,
        resource: Resource,
        table: &HashMap<String, T>,
        name: &str,
    ) -> Result<T, DirectoryError> {
        self.counter(resource).fetch_add(1, Ordering::Relaxed);
        table
            .get(name)
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(resource, name))
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn species(&self, name: &str) -> Result<SpeciesResponse, DirectoryError> {
        self.lookup(Resource::Species, &self.species, name)
    }

    async fn detail(&self, name: &str) -> Result<PokemonDetailResponse, DirectoryError> {
        self.lookup(Resource::Pokemon, &self.details, name)
    }

    async fn regional_listing(&self, region: &str) -> Result<Vec<PokedexEntry>, DirectoryError> {
        self.lookup(Resource::Pokedex, &self.listings, region)
    }
}
