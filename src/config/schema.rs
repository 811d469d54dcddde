use super::Field;

/// An ordered set of named field descriptors.
///
/// Fields resolve, and failures are reported, in the order they were added.
///
/// ## Example
///
/// ```
/// use dragon_envcfg::{number, string, Field, FieldOptions, Schema};
///
/// let schema = Schema::new()
///     .with_field("name", string(FieldOptions::new().env("NAME")))
///     .with_field("port", number(FieldOptions::new().default_value(8080)))
///     .with_field("someUrl", Field::string());
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct Schema {
    fields: Vec<(String, Field)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field.
    ///
    /// Adding a name that is already present replaces its descriptor but
    /// keeps its original position.
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = field,
            None => self.fields.push((name, field)),
        }
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, field)| field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{number, FieldKind, FieldOptions};

    #[test]
    fn test_definition_order() {
        let schema = Schema::new()
            .with_field("port", Field::number())
            .with_field("name", Field::string())
            .with_field("host", Field::string());

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["port", "name", "host"]);
    }

    #[test]
    fn test_redeclared_field_replaces_in_place() {
        let schema = Schema::new()
            .with_field("port", Field::string())
            .with_field("name", Field::string())
            .with_field("port", number(FieldOptions::new().env("HTTP_PORT")));

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["port", "name"]);

        let port = schema.field("port").unwrap();
        assert_eq!(port.kind(), FieldKind::Number);
        assert_eq!(port.env(), Some("HTTP_PORT"));
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new();

        assert!(schema.is_empty());
        assert!(schema.field("anything").is_none());
    }
}
