//! Schema-driven configuration resolution.

mod diagnostics;
mod env;
mod error;
mod field;
mod resolve;
mod resolved;
mod schema;
mod source;

pub use diagnostics::{DiagnosticSink, TracingSink};
pub use env::derive_key;
pub use error::{ConfigError, ImmutableFieldError, ResolutionFailure};
pub use field::{number, string, Field, FieldKind, FieldOptions, Value};
pub use resolve::{new_config, new_config_with_sink, resolve_field, Resolver};
pub use resolved::ResolvedConfig;
pub use schema::Schema;
pub use source::{ConfigContext, ConfigSource};
