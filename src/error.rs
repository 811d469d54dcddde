use crate::config::{ConfigError, ImmutableFieldError};
use thiserror::Error;

/// Top-level error type for the dragon-envcfg library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Immutable(#[from] ImmutableFieldError),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] toml::de::Error),
}
