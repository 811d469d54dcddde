pub mod config;
mod error;

pub use config::{
    derive_key, new_config, new_config_with_sink, number, string, ConfigContext, ConfigError,
    ConfigSource, DiagnosticSink, Field, FieldKind, FieldOptions, ImmutableFieldError,
    ResolutionFailure, ResolvedConfig, Resolver, Schema, TracingSink, Value,
};
pub use error::Error;
