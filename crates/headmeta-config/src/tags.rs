use serde::{Deserialize, Serialize};

/// Attribute that identifies a `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetaKey {
  Name(String),
  Property(String),
  HttpEquiv(String),
}

/// A single `<meta>` element: exactly one identifying attribute plus content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
  #[serde(flatten)]
  pub key:     MetaKey,
  pub content: String,
}

impl MetaTag {
  pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      key:     MetaKey::Name(name.into()),
      content: content.into(),
    }
  }

  pub fn property(
    property: impl Into<String>,
    content: impl Into<String>,
  ) -> Self {
    Self {
      key:     MetaKey::Property(property.into()),
      content: content.into(),
    }
  }

  pub fn http_equiv(
    http_equiv: impl Into<String>,
    content: impl Into<String>,
  ) -> Self {
    Self {
      key:     MetaKey::HttpEquiv(http_equiv.into()),
      content: content.into(),
    }
  }

  /// The `name` attribute, if this is a name tag.
  #[must_use]
  pub fn name_attr(&self) -> Option<&str> {
    match &self.key {
      MetaKey::Name(name) => Some(name),
      _ => None,
    }
  }

  /// The `property` attribute, if this is a property tag.
  #[must_use]
  pub fn property_attr(&self) -> Option<&str> {
    match &self.key {
      MetaKey::Property(property) => Some(property),
      _ => None,
    }
  }

  /// The `http-equiv` attribute, if this is a pragma tag.
  #[must_use]
  pub fn http_equiv_attr(&self) -> Option<&str> {
    match &self.key {
      MetaKey::HttpEquiv(http_equiv) => Some(http_equiv),
      _ => None,
    }
  }
}

/// A single `<link>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTag {
  pub rel:  String,
  pub href: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hreflang: Option<String>,

  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub link_type: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sizes: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub media: Option<String>,
}

impl LinkTag {
  pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
    Self {
      rel:       rel.into(),
      href:      href.into(),
      hreflang:  None,
      link_type: None,
      sizes:     None,
      media:     None,
    }
  }
}
