//! Schema resolution against a [`ConfigSource`].
//!
//! Every field is resolved before any decision is made, so a single pass
//! reports every misconfigured field at once.

use tracing::debug;

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::env::derive_key;
use super::error::{ConfigError, Joined, ResolutionFailure};
use super::{ConfigSource, Field, FieldKind, ResolvedConfig, Schema, Value};

/// Resolves a schema against a source.
///
/// With `skip_errors` unset, any failing field makes the whole call fail with
/// a [`ConfigError`] listing every failure. With `skip_errors` set, failures
/// are reported once through `tracing` and the failing fields resolve to no
/// value.
///
/// ```
/// use dragon_envcfg::{new_config, number, string, ConfigContext, FieldOptions, Schema};
///
/// let schema = Schema::new()
///     .with_field("name", string(FieldOptions::new().env("NAME")))
///     .with_field("port", number(FieldOptions::new().env("PORT")));
///
/// let config = new_config(&schema, &ConfigContext::new([("NAME", "app"), ("PORT", "8080")]), false)?;
/// assert_eq!(config.get_str("name"), Some("app"));
/// assert_eq!(config.get_number("port"), Some(8080.0));
///
/// let err = new_config(&schema, &ConfigContext::default(), false).unwrap_err();
/// assert_eq!(err.to_string(), "NAME is not set, PORT is not set");
/// # Ok::<(), dragon_envcfg::ConfigError>(())
/// ```
pub fn new_config(
    schema: &Schema,
    source: &dyn ConfigSource,
    skip_errors: bool,
) -> Result<ResolvedConfig, ConfigError> {
    Resolver::new(schema).skip_errors(skip_errors).resolve(source)
}

/// Like [`new_config`], reporting tolerated failures to `sink` instead of
/// `tracing`.
pub fn new_config_with_sink(
    schema: &Schema,
    source: &dyn ConfigSource,
    skip_errors: bool,
    sink: &dyn DiagnosticSink,
) -> Result<ResolvedConfig, ConfigError> {
    Resolver::new(schema)
        .skip_errors(skip_errors)
        .with_sink(sink)
        .resolve(source)
}

/// Builder for a single resolution pass over a [`Schema`].
#[must_use = "resolvers do nothing until .resolve() is called"]
pub struct Resolver<'a> {
    schema: &'a Schema,
    skip_errors: bool,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Resolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            skip_errors: false,
            sink: &TracingSink,
        }
    }

    /// Tolerates field failures instead of failing the whole pass.
    pub fn skip_errors(mut self, skip: bool) -> Self {
        self.skip_errors = skip;
        self
    }

    /// Sets where the tolerated-failure diagnostic is recorded.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn resolve(self, source: &dyn ConfigSource) -> Result<ResolvedConfig, ConfigError> {
        let mut entries = Vec::with_capacity(self.schema.len());
        let mut failures = Vec::new();

        for (name, field) in self.schema.iter() {
            match resolve_field(name, field, source) {
                Ok(value) => entries.push((name.to_string(), value)),
                Err(failure) => {
                    entries.push((name.to_string(), None));
                    failures.push(failure);
                }
            }
        }

        debug!(
            fields = entries.len(),
            failures = failures.len(),
            "resolved config schema"
        );

        if !failures.is_empty() {
            if !self.skip_errors {
                return Err(ConfigError::new(failures));
            }
            self.sink.record(&format!(
                "Ignoring errors while instantiating config: {}",
                Joined(&failures)
            ));
        }

        Ok(ResolvedConfig::new(entries))
    }
}

/// Resolves one field.
///
/// `Ok(None)` means the field is optional and its key is absent.
pub fn resolve_field(
    name: &str,
    field: &Field,
    source: &dyn ConfigSource,
) -> Result<Option<Value>, ResolutionFailure> {
    let key = match field.env() {
        Some(key) => key.to_string(),
        None => derive_key(name),
    };

    match source.lookup(&key) {
        Some(raw) => parse_value(field.kind(), raw)
            .map(Some)
            .ok_or_else(|| ResolutionFailure::NotANumber {
                field: name.to_string(),
                key,
                value: raw.to_string(),
            }),
        None => match field.default_value() {
            Some(default) => Ok(Some(default.clone())),
            None if field.is_optional() => Ok(None),
            None => Err(ResolutionFailure::NotSet {
                field: name.to_string(),
                key,
            }),
        },
    }
}

fn parse_value(kind: FieldKind, raw: &str) -> Option<Value> {
    match kind {
        FieldKind::String => Some(Value::String(raw.to_string())),
        FieldKind::Number => raw
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Number),
    }
}
