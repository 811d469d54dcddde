use std::collections::{BTreeMap, HashMap};

/// Read-only lookup of raw configuration values by key.
///
/// Lookups are exact: no trimming, no case folding, no fallback keys.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// An immutable snapshot of key/value pairs to resolve a schema against.
///
/// In production this is usually the process environment
/// ([`from_env`](Self::from_env)); tests can build one from any mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigContext {
    vars: HashMap<String, String>,
}

impl ConfigContext {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Snapshots the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_env() -> Self {
        Self::new(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ConfigSource for ConfigContext {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}
