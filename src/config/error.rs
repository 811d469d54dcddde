use std::fmt;

use thiserror::Error;

/// Why a single field could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolutionFailure {
    #[error("{key} is not set")]
    NotSet { field: String, key: String },

    #[error("{key} is not a number")]
    NotANumber {
        field: String,
        key: String,
        value: String,
    },
}

impl ResolutionFailure {
    /// The schema field that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::NotSet { field, .. } | Self::NotANumber { field, .. } => field,
        }
    }

    /// The source key the field was looked up under.
    pub fn key(&self) -> &str {
        match self {
            Self::NotSet { key, .. } | Self::NotANumber { key, .. } => key,
        }
    }
}

/// Every field failure from one resolution pass.
///
/// The message lists the failures in schema order, separated by `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", Joined(.failures))]
pub struct ConfigError {
    failures: Vec<ResolutionFailure>,
}

impl ConfigError {
    pub(crate) fn new(failures: Vec<ResolutionFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    pub fn failures(&self) -> &[ResolutionFailure] {
        &self.failures
    }
}

/// Returned by any attempt to write to a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot assign to read only field '{field}'")]
pub struct ImmutableFieldError {
    pub field: String,
}

pub(crate) struct Joined<'a>(pub &'a [ResolutionFailure]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}
