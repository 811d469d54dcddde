//! Field descriptors and the `string` / `number` builders.

use std::fmt;

/// The primitive type a field resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(_) => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Value::String(_) => FieldKind::String,
            Value::Number(_) => FieldKind::Number,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Options accepted by [`string`] and [`number`].
///
/// Every option is optional. `FieldOptions::default()` derives the source key
/// from the field name, has no default, and marks the field as required.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct FieldOptions<T> {
    pub env: Option<String>,
    pub default: Option<T>,
    pub optional: bool,
}

impl<T> Default for FieldOptions<T> {
    fn default() -> Self {
        Self {
            env: None,
            default: None,
            optional: false,
        }
    }
}

impl<T> FieldOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the field from `key` instead of the key derived from its name.
    pub fn env(mut self, key: impl Into<String>) -> Self {
        self.env = Some(key.into());
        self
    }

    /// Value used when the source key is absent.
    ///
    /// Takes precedence over [`optional`](Self::optional).
    pub fn default_value(mut self, value: impl Into<T>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Lets the field resolve to no value when the source key is absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Immutable description of one configuration field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    kind: FieldKind,
    env: Option<String>,
    default: Option<Value>,
    optional: bool,
}

impl Field {
    /// A required string field read from the key derived from its name.
    pub fn string() -> Self {
        string(FieldOptions::default())
    }

    /// A required number field read from the key derived from its name.
    pub fn number() -> Self {
        number(FieldOptions::default())
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The explicit source key, if one was given.
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Describes a string field.
pub fn string(options: FieldOptions<String>) -> Field {
    Field {
        kind: FieldKind::String,
        env: options.env,
        default: options.default.map(Value::String),
        optional: options.optional,
    }
}

/// Describes a number field.
pub fn number(options: FieldOptions<f64>) -> Field {
    Field {
        kind: FieldKind::Number,
        env: options.env,
        default: options.default.map(Value::Number),
        optional: options.optional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_options_is_required_with_derived_key() {
        let field = Field::string();

        assert_eq!(field.kind(), FieldKind::String);
        assert_eq!(field.env(), None);
        assert_eq!(field.default_value(), None);
        assert!(!field.is_optional());
    }

    #[test]
    fn test_options_carry_through() {
        let field = number(FieldOptions::new().env("PORT").default_value(8081).optional());

        assert_eq!(field.kind(), FieldKind::Number);
        assert_eq!(field.env(), Some("PORT"));
        assert_eq!(field.default_value(), Some(&Value::Number(8081.0)));
        assert!(field.is_optional());
    }

    #[test]
    fn test_string_default_is_typed() {
        let field = string(FieldOptions::new().default_value("DEFAULT"));

        assert_eq!(
            field.default_value(),
            Some(&Value::String("DEFAULT".into()))
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(8080.0).to_string(), "8080");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::String("app".into()).to_string(), "app");
    }
}
