use serde::de::DeserializeOwned;

use super::error::ImmutableFieldError;
use super::Value;
use crate::Error;

/// The outcome of resolving a schema: one entry per schema field, in schema
/// order.
///
/// A field holds `None` when it was optional and unset, or when its failure
/// was tolerated by [`skip_errors`](crate::Resolver::skip_errors).
///
/// The value is immutable once built. There is no mutable access to its
/// entries:
///
/// ```compile_fail
/// # use dragon_envcfg::{new_config, ConfigContext, Field, Schema, Value};
/// let schema = Schema::new().with_field("name", Field::string());
/// let mut config = new_config(&schema, &ConfigContext::new([("NAME", "app")]), false).unwrap();
/// for (_, value) in config.iter() {
///     if let Some(Value::String(name)) = value {
///         name.push_str("-changed");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    entries: Vec<(String, Option<Value>)>,
}

impl ResolvedConfig {
    pub(crate) fn new(entries: Vec<(String, Option<Value>)>) -> Self {
        Self { entries }
    }

    /// Returns the value of `field`, or `None` if it resolved to no value or
    /// is not part of the schema.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_number)
    }

    /// Whether `field` is part of the schema this config was resolved from.
    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    /// Always rejects the write; the config is left unchanged.
    pub fn set(&self, field: &str, _value: Value) -> Result<(), ImmutableFieldError> {
        Err(ImmutableFieldError {
            field: field.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deserializes the resolved values into a typed struct.
    ///
    /// Keys are the schema field names. Fields without a value are left out,
    /// so they map to `Option::None` on the target type. Numbers with no
    /// fractional part are passed as integers so they fit integer fields.
    ///
    /// ```
    /// use dragon_envcfg::{new_config, number, string, ConfigContext, FieldOptions, Schema};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct AppConfig {
    ///     name: String,
    ///     port: u16,
    /// }
    ///
    /// let schema = Schema::new()
    ///     .with_field("name", string(FieldOptions::new().env("NAME")))
    ///     .with_field("port", number(FieldOptions::new().env("PORT")));
    /// let context = ConfigContext::new([("NAME", "app"), ("PORT", "8080")]);
    ///
    /// let config: AppConfig = new_config(&schema, &context, false)?.deserialize()?;
    /// assert_eq!(config.port, 8080);
    /// # Ok::<(), dragon_envcfg::Error>(())
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let table: toml::Table = self
            .entries
            .iter()
            .filter_map(|(name, value)| Some((name.clone(), to_toml(value.as_ref()?))))
            .collect();

        toml::Value::Table(table)
            .try_into()
            .map_err(Error::Deserialize)
    }
}

fn to_toml(value: &Value) -> toml::Value {
    match value {
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
            toml::Value::Integer(*n as i64)
        }
        Value::Number(n) => toml::Value::Float(*n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn sample() -> ResolvedConfig {
        ResolvedConfig::new(vec![
            ("name".into(), Some(Value::String("app".into()))),
            ("port".into(), Some(Value::Number(8080.0))),
            ("ratio".into(), Some(Value::Number(0.25))),
            ("nameOptional".into(), None),
        ])
    }

    #[test]
    fn test_accessors() {
        let config = sample();

        assert_eq!(config.get_str("name"), Some("app"));
        assert_eq!(config.get_number("port"), Some(8080.0));
        assert_eq!(config.get_number("name"), None);
        assert_eq!(config.get("nameOptional"), None);
        assert!(config.contains_field("nameOptional"));
        assert!(!config.contains_field("missing"));
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_iter_keeps_schema_order() {
        let config = sample();
        let names: Vec<_> = config.iter().map(|(name, _)| name).collect();

        assert_eq!(names, ["name", "port", "ratio", "nameOptional"]);
    }

    #[test]
    fn test_set_is_rejected() {
        let config = sample();
        let before = config.clone();

        let err = config
            .set("name", Value::String("something else".into()))
            .unwrap_err();

        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "cannot assign to read only field 'name'");
        assert_eq!(config, before);
    }

    #[test]
    fn test_deserialize_into_struct() {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Typed {
            name: String,
            port: u16,
            ratio: f64,
            name_optional: Option<String>,
        }

        let typed: Typed = sample().deserialize().unwrap();

        assert_eq!(typed.name, "app");
        assert_eq!(typed.port, 8080);
        assert_eq!(typed.ratio, 0.25);
        assert_eq!(typed.name_optional, None);
    }

    #[test]
    fn test_deserialize_type_mismatch() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Typed {
            name: u16,
        }

        let result = sample().deserialize::<Typed>();

        assert!(matches!(result, Err(Error::Deserialize(_))));
    }
}
