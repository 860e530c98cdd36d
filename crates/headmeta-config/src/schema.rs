use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merge::Merge;

/// Default `@context` for structured data records.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

const TYPE_KEY: &str = "@type";
const CONTEXT_KEY: &str = "@context";

/// One JSON-LD record.
///
/// Only `@type` is required. Every property, `@type` and `@context`
/// included, is kept in the order it was written or inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct JsonLdSchema {
  fields: Map<String, Value>,
}

impl JsonLdSchema {
  pub fn new(schema_type: impl Into<String>) -> Self {
    let mut fields = Map::new();
    fields.insert(TYPE_KEY.to_string(), Value::String(schema_type.into()));
    Self { fields }
  }

  /// Overrides the default `https://schema.org` context. `null` is kept as
  /// an explicit context.
  #[must_use]
  pub fn with_context(self, context: impl Into<Value>) -> Self {
    self.with(CONTEXT_KEY, context)
  }

  /// Set a property.
  #[must_use]
  pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.fields.insert(key.into(), value.into());
    self
  }

  /// Set a property only when a value is given.
  #[must_use]
  pub fn with_opt<V: Into<Value>>(
    self,
    key: impl Into<String>,
    value: Option<V>,
  ) -> Self {
    match value {
      Some(value) => self.with(key, value),
      None => self,
    }
  }

  #[must_use]
  pub fn schema_type(&self) -> &str {
    self
      .fields
      .get(TYPE_KEY)
      .and_then(Value::as_str)
      .unwrap_or_default()
  }

  /// The context the record sets itself, if any.
  #[must_use]
  pub fn context(&self) -> Option<&Value> {
    self.fields.get(CONTEXT_KEY)
  }

  #[must_use]
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }

  /// Every property except `@context`, in order.
  pub fn properties(&self) -> impl Iterator<Item = (&String, &Value)> {
    self.fields.iter().filter(|(key, _)| key.as_str() != CONTEXT_KEY)
  }
}

impl TryFrom<Map<String, Value>> for JsonLdSchema {
  type Error = String;

  fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
    match fields.get(TYPE_KEY) {
      Some(Value::String(_)) => Ok(Self { fields }),
      Some(other) => Err(format!("`@type` must be a string, found {other}")),
      None => Err("missing field `@type`".to_string()),
    }
  }
}

impl From<JsonLdSchema> for Map<String, Value> {
  fn from(schema: JsonLdSchema) -> Self {
    schema.fields
  }
}

impl Merge for JsonLdSchema {
  fn merge(&mut self, other: Self) {
    self.fields.merge(other.fields);
  }
}
