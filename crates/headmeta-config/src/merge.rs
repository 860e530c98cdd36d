//! Merging of metadata configuration.
//!
//! [`merge`] is deep: records are merged field by field, everything else
//! (strings, numbers and lists) is replaced by the incoming value. A field the
//! incoming value leaves unset never touches the existing one.
//! [`merge_configs`] only goes one level into each section.

use serde_json::{Map, Value};

use crate::SeoConfig;

/// Combine another value of the same type into `self`, with `other` taking
/// precedence.
pub trait Merge {
  fn merge(&mut self, other: Self);
}

macro_rules! replace_on_merge {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Merge for $ty {
        fn merge(&mut self, other: Self) {
          *self = other;
        }
      }
    )+
  };
}

replace_on_merge!(String, bool, u32, u64, i64);

impl<T> Merge for Vec<T> {
  fn merge(&mut self, other: Self) {
    *self = other;
  }
}

impl Merge for Value {
  fn merge(&mut self, other: Self) {
    match (self, other) {
      (Self::Object(current), Self::Object(incoming)) => {
        current.merge(incoming);
      },
      // Arrays and scalars are replaced; an explicit null is a value too
      (current, incoming) => *current = incoming,
    }
  }
}

impl Merge for Map<String, Value> {
  fn merge(&mut self, other: Self) {
    for (key, incoming) in other {
      match self.get_mut(&key) {
        Some(current) => current.merge(incoming),
        None => {
          self.insert(key, incoming);
        },
      }
    }
  }
}

/// Deep-merge `source` over `target` without touching either input.
#[must_use]
pub fn merge(target: &SeoConfig, source: &SeoConfig) -> SeoConfig {
  let mut merged = target.clone();
  merged.merge(source.clone());
  merged
}

/// Merge a sequence of configurations in order, later ones taking precedence.
///
/// Each named section is overlaid one level deep: a field set in a later
/// config replaces the earlier value whole, so robots directives, images and
/// app ids are never combined. JSON-LD and additional tags are replaced when
/// set. Every named section is present in the result once anything has been
/// merged.
#[must_use]
pub fn merge_configs<I>(configs: I) -> SeoConfig
where
  I: IntoIterator<Item = SeoConfig>,
{
  configs
    .into_iter()
    .fold(SeoConfig::default(), |mut acc, config| {
      overlay_section(&mut acc.base, config.base);
      overlay_section(&mut acc.open_graph, config.open_graph);
      overlay_section(&mut acc.twitter, config.twitter);
      overlay_section(&mut acc.facebook, config.facebook);
      overlay_section(&mut acc.article, config.article);
      overlay_section(&mut acc.linkedin, config.linkedin);
      if config.json_ld.is_some() {
        acc.json_ld = config.json_ld;
      }
      if config.additional_meta_tags.is_some() {
        acc.additional_meta_tags = config.additional_meta_tags;
      }
      if config.additional_link_tags.is_some() {
        acc.additional_link_tags = config.additional_link_tags;
      }
      acc
    })
}

trait Overlay: Default {
  fn overlay(&mut self, other: Self);
}

macro_rules! overlay_sections {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl Overlay for $ty {
        fn overlay(&mut self, other: Self) {
          self.overlay_fields(other);
        }
      }
    )+
  };
}

overlay_sections!(
  crate::BaseMeta,
  crate::OpenGraphMeta,
  crate::TwitterMeta,
  crate::FacebookMeta,
  crate::ArticleMeta,
  crate::LinkedInMeta,
);

fn overlay_section<T: Overlay>(current: &mut Option<T>, incoming: Option<T>) {
  let section = current.get_or_insert_with(T::default);
  if let Some(incoming) = incoming {
    section.overlay(incoming);
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]

  use serde_json::json;

  use super::*;
  use crate::{
    ArticleMeta,
    BaseMeta,
    JsonLdSchema,
    Media,
    OgImage,
    OneOrMany,
    OpenGraphMeta,
    Robots,
    RobotsDirective,
  };

  fn sample() -> SeoConfig {
    SeoConfig {
      base: Some(BaseMeta {
        title: Some("Home".to_string()),
        description: Some("Welcome".to_string()),
        robots: Some(Robots::Directive(RobotsDirective {
          index: Some(true),
          max_snippet: Some(-1),
          ..Default::default()
        })),
        ..Default::default()
      }),
      open_graph: Some(OpenGraphMeta {
        site_name: Some("Site".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    }
  }

  #[test]
  fn test_merge_with_empty_source_is_identity() {
    let config = sample();
    assert_eq!(merge(&config, &SeoConfig::default()), config);
  }

  #[test]
  fn test_merge_overrides_single_field() {
    let config = sample();
    let source = SeoConfig {
      base: Some(BaseMeta {
        title: Some("X".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge(&config, &source);
    let base = merged.base.as_ref().unwrap();
    assert_eq!(base.title.as_deref(), Some("X"));
    assert_eq!(base.description.as_deref(), Some("Welcome"));
    assert_eq!(base.robots, config.base.as_ref().unwrap().robots);
    assert_eq!(merged.open_graph, config.open_graph);

    // Inputs are untouched
    assert_eq!(config.base.unwrap().title.as_deref(), Some("Home"));
  }

  #[test]
  fn test_merge_replaces_lists() {
    let target = SeoConfig {
      article: Some(ArticleMeta {
        tag: Some(vec!["a", "b"].into()),
        ..Default::default()
      }),
      ..Default::default()
    };
    let source = SeoConfig {
      article: Some(ArticleMeta {
        tag: Some(vec!["c"].into()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge(&target, &source);
    assert_eq!(
      merged.article.unwrap().tag,
      Some(OneOrMany::Many(vec!["c".to_string()]))
    );
  }

  #[test]
  fn test_merge_recurses_into_directives() {
    let target = sample();
    let source = SeoConfig {
      base: Some(BaseMeta {
        robots: Some(Robots::Directive(RobotsDirective {
          follow: Some(false),
          ..Default::default()
        })),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge(&target, &source);
    let Some(Robots::Directive(directive)) = merged.base.unwrap().robots else {
      panic!("expected a robots directive");
    };
    assert_eq!(directive.index, Some(true));
    assert_eq!(directive.follow, Some(false));
    assert_eq!(directive.max_snippet, Some(-1));
  }

  #[test]
  fn test_merge_text_robots_replaces_directive() {
    let target = sample();
    let source = SeoConfig {
      base: Some(BaseMeta {
        robots: Some(Robots::Text("noindex".to_string())),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge(&target, &source);
    assert_eq!(
      merged.base.unwrap().robots,
      Some(Robots::Text("noindex".to_string()))
    );
  }

  #[test]
  fn test_merge_recurses_into_single_image_objects() {
    let target = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        image: Some(OneOrMany::One(Media::Object(OgImage {
          url: "https://x/a.png".to_string(),
          width: Some(1200),
          ..Default::default()
        }))),
        ..Default::default()
      }),
      ..Default::default()
    };
    let source = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        image: Some(OneOrMany::One(Media::Object(OgImage {
          url: "https://x/b.png".to_string(),
          alt: Some("B".to_string()),
          ..Default::default()
        }))),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge(&target, &source);
    let image = merged.open_graph.unwrap().image.unwrap();
    let expected = OneOrMany::One(Media::Object(OgImage {
      url: "https://x/b.png".to_string(),
      width: Some(1200),
      alt: Some("B".to_string()),
      ..Default::default()
    }));
    assert_eq!(image, expected);
  }

  #[test]
  fn test_merge_json_ld_records() {
    let target = SeoConfig {
      json_ld: Some(OneOrMany::One(
        JsonLdSchema::new("Article")
          .with("headline", "Old")
          .with("author", json!({ "@type": "Person", "name": "A" }))
          .with("keywords", json!(["x", "y"])),
      )),
      ..Default::default()
    };
    let source = SeoConfig {
      json_ld: Some(OneOrMany::One(
        JsonLdSchema::new("Article")
          .with("author", json!({ "name": "B" }))
          .with("keywords", json!(["z"]))
          .with("image", Value::Null),
      )),
      ..Default::default()
    };

    let merged = merge(&target, &source);
    let OneOrMany::One(schema) = merged.json_ld.unwrap() else {
      panic!("expected a single schema");
    };
    assert_eq!(schema.get("headline"), Some(&json!("Old")));
    assert_eq!(
      schema.get("author"),
      Some(&json!({ "@type": "Person", "name": "B" }))
    );
    assert_eq!(schema.get("keywords"), Some(&json!(["z"])));
    assert_eq!(schema.get("image"), Some(&Value::Null));
  }

  #[test]
  fn test_merge_configs_folds_in_order() {
    let first = SeoConfig {
      base: Some(BaseMeta {
        title: Some("One".to_string()),
        author: Some("Ann".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };
    let second = SeoConfig {
      base: Some(BaseMeta {
        title: Some("Two".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge_configs([first, second]);
    let base = merged.base.unwrap();
    assert_eq!(base.title.as_deref(), Some("Two"));
    assert_eq!(base.author.as_deref(), Some("Ann"));
  }

  #[test]
  fn test_merge_configs_replaces_nested_values_whole() {
    let first = SeoConfig {
      base: Some(BaseMeta {
        description: Some("Kept".to_string()),
        robots: Some(Robots::Directive(RobotsDirective {
          index: Some(false),
          ..Default::default()
        })),
        ..Default::default()
      }),
      ..Default::default()
    };
    let second = SeoConfig {
      base: Some(BaseMeta {
        robots: Some(Robots::Directive(RobotsDirective {
          follow: Some(false),
          ..Default::default()
        })),
        ..Default::default()
      }),
      ..Default::default()
    };

    let merged = merge_configs([first, second]);
    let base = merged.base.unwrap();
    assert_eq!(base.description.as_deref(), Some("Kept"));
    assert_eq!(
      base.robots,
      Some(Robots::Directive(RobotsDirective {
        follow: Some(false),
        ..Default::default()
      }))
    );
  }

  #[test]
  fn test_merge_configs_creates_named_sections() {
    let merged = merge_configs([SeoConfig::default()]);
    assert_eq!(merged.base, Some(BaseMeta::default()));
    assert_eq!(merged.open_graph, Some(OpenGraphMeta::default()));
    assert_eq!(merged.article, Some(ArticleMeta::default()));
    assert!(merged.twitter.is_some());
    assert!(merged.facebook.is_some());
    assert!(merged.linkedin.is_some());
    assert_eq!(merged.json_ld, None);

    assert_eq!(merge_configs(Vec::new()), SeoConfig::default());
  }
}
