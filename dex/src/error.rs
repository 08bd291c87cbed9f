use journey_protocol::DirectoryError;
use thiserror::Error;

/// Longest error text kept for display
pub const MAX_ERROR_LEN: usize = 120;

/// Shown when a capture is attempted with nothing to capture
pub const MISSING_TARGET: &str = "Type or pick a Pokémon to capture.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DexError {
    /// Rejected before any lookup
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Lookup(#[from] DirectoryError),

    /// The regional listing resolved but has no entries
    #[error("Pokedex is empty for {0}")]
    EmptyRegion(String),
}

impl DexError {
    pub fn missing_target() -> Self {
        Self::Validation(MISSING_TARGET.to_string())
    }

    /// Whether the directory reported that the record doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup(e) if e.is_not_found())
    }
}
