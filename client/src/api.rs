use anyhow::{Context, Result};
use async_trait::async_trait;
use journey_dex::Directory;
use journey_protocol::{
    DirectoryError, PokedexEntry, PokemonDetailResponse, Resource, SpeciesResponse, parse_detail,
    parse_pokedex, parse_species,
};
use reqwest::StatusCode;

use crate::config::DirectoryConfig;

/// PokeAPI over HTTP.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a named record
    pub fn url(&self, resource: Resource, name: &str) -> String {
        format!("{}{}", self.base_url, resource.endpoint(name))
    }

    /// GET a record and hand back its body
    async fn fetch(&self, resource: Resource, name: &str) -> Result<String, DirectoryError> {
        let url = self.url(resource, name);
        tracing::debug!(url = %url, "Directory request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        if let Some(err) = status_error(status, resource, name) {
            tracing::debug!(url = %url, status = %status, "Directory request rejected");
            return Err(err);
        }

        response
            .text()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))
    }
}

/// Map an HTTP status to a directory error. `None` means success.
pub(crate) fn status_error(
    status: StatusCode,
    resource: Resource,
    name: &str,
) -> Option<DirectoryError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(DirectoryError::not_found(resource, name))
    } else {
        Some(DirectoryError::Transport(format!(
            "{} lookup for '{}' returned HTTP {}",
            resource, name, status
        )))
    }
}

#[async_trait]
impl Directory for PokeApiClient {
    async fn species(&self, name: &str) -> Result<SpeciesResponse, DirectoryError> {
        let body = self.fetch(Resource::Species, name).await?;
        parse_species(&body)
    }

    async fn detail(&self, name: &str) -> Result<PokemonDetailResponse, DirectoryError> {
        let body = self.fetch(Resource::Pokemon, name).await?;
        parse_detail(&body)
    }

    async fn regional_listing(&self, region: &str) -> Result<Vec<PokedexEntry>, DirectoryError> {
        let body = self.fetch(Resource::Pokedex, region).await?;
        parse_pokedex(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let client = PokeApiClient::new(&DirectoryConfig::default()).unwrap();

        assert_eq!(
            client.url(Resource::Species, "mew"),
            "https://pokeapi.co/api/v2/pokemon-species/mew"
        );
        assert_eq!(
            client.url(Resource::Pokedex, "kanto"),
            "https://pokeapi.co/api/v2/pokedex/kanto"
        );
    }

    #[test]
    fn test_status_ok() {
        assert_eq!(status_error(StatusCode::OK, Resource::Species, "mew"), None);
    }

    #[test]
    fn test_status_not_found() {
        let err = status_error(StatusCode::NOT_FOUND, Resource::Pokemon, "missingno").unwrap();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Pokemon 'missingno' not found");
    }

    #[test]
    fn test_status_server_error() {
        let err = status_error(StatusCode::BAD_GATEWAY, Resource::Pokedex, "kanto").unwrap();

        assert_eq!(
            err,
            DirectoryError::Transport(
                "Pokedex lookup for 'kanto' returned HTTP 502 Bad Gateway".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_unreachable_directory_is_transport_error() {
        let config = DirectoryConfig::default()
            .with_base_url("http://127.0.0.1:9/api/v2")
            .with_timeout(std::time::Duration::from_secs(2));
        let client = PokeApiClient::new(&config).unwrap();

        let err = client.species("mew").await.unwrap_err();

        assert!(matches!(err, DirectoryError::Transport(_)));
    }
}
