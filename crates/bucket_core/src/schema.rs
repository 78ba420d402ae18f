//! Bucket schema types.

use bucket_error::QueryError;
use derive_getters::Getters;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Declared type of a bucket column.
///
/// Only the three types the renderer treats specially get their own
/// variant. Every other declared type is carried through verbatim.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Title of a wiki page, rendered as an internal link
    #[display("PAGE")]
    Page,
    /// Free text, escaped before rendering
    #[display("TEXT")]
    Text,
    /// Boolean flag, rendered as `True` / `False`
    #[display("BOOLEAN")]
    Boolean,
    /// Any other declared type (`INTEGER`, `DOUBLE`, ...), rendered raw
    #[display("{_0}")]
    #[strum(default)]
    Other(String),
}

impl From<String> for ColumnType {
    fn from(s: String) -> Self {
        match ColumnType::from_str(&s) {
            Ok(column_type) => column_type,
            Err(_) => ColumnType::Other(s),
        }
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.to_string()
    }
}

/// Declared shape of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ColumnDescriptor {
    /// Declared data type
    #[serde(rename = "type")]
    data_type: ColumnType,
    /// Whether the column holds zero or more values per row
    #[serde(default)]
    repeated: bool,
}

impl ColumnDescriptor {
    /// Creates a column descriptor.
    pub fn new(data_type: ColumnType, repeated: bool) -> Self {
        Self {
            data_type,
            repeated,
        }
    }

    /// Single-valued column of the given type.
    pub fn single(data_type: ColumnType) -> Self {
        Self::new(data_type, false)
    }

    /// Repeated column of the given type.
    pub fn repeated_of(data_type: ColumnType) -> Self {
        Self::new(data_type, true)
    }
}

/// Ordered mapping from column name to its descriptor.
///
/// Declaration order is significant: tables render their columns in schema
/// order, not in the order the caller selected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<(String, ColumnDescriptor)>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, replacing the descriptor in place if the name is taken.
    pub fn with_column(mut self, name: impl Into<String>, descriptor: ColumnDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Inserts a column, keeping the original position of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: ColumnDescriptor) {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = descriptor,
            None => self.columns.push((name, descriptor)),
        }
    }

    /// Looks up a column descriptor by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Whether the schema declares the named column.
    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Columns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDescriptor)> {
        self.columns
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema declares no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reads a schema from the JSON object the bucket action reports.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, QueryError> {
        Ok(Schema::deserialize(value)?)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, descriptor) in &self.columns {
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}

struct SchemaVisitor;

impl<'de> Visitor<'de> for SchemaVisitor {
    type Value = Schema;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of column names to column descriptors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schema, A::Error> {
        let mut schema = Schema::new();
        while let Some((name, descriptor)) = access.next_entry::<String, ColumnDescriptor>()? {
            schema.insert(name, descriptor);
        }
        Ok(schema)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SchemaVisitor)
    }
}
