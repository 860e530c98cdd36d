//! Server-side rendering of head markup.

use std::{borrow::Cow, fmt::Write};

use headmeta_config::{LinkTag, MetaKey, MetaTag, SeoConfig};
use html_escape::encode_quoted_attribute;

use crate::{
  jsonld::generate_json_ld,
  tags::{generate_link_tags, generate_meta_tags},
};

/// Escape `& < > " '` for use in element text or a quoted attribute.
#[must_use]
pub fn sanitize_attribute(value: &str) -> Cow<'_, str> {
  encode_quoted_attribute(value)
}

fn write_meta(html: &mut String, tag: &MetaTag) {
  let (attr, key) = match &tag.key {
    MetaKey::Name(name) => ("name", name),
    MetaKey::Property(property) => ("property", property),
    MetaKey::HttpEquiv(http_equiv) => ("http-equiv", http_equiv),
  };
  let _ = writeln!(
    html,
    "<meta {attr}=\"{}\" content=\"{}\">",
    sanitize_attribute(key),
    sanitize_attribute(&tag.content)
  );
}

fn write_link(html: &mut String, link: &LinkTag) {
  let _ = write!(
    html,
    "<link rel=\"{}\" href=\"{}\"",
    sanitize_attribute(&link.rel),
    sanitize_attribute(&link.href)
  );

  let optional = [
    ("hreflang", link.hreflang.as_deref()),
    ("type", link.link_type.as_deref()),
    ("sizes", link.sizes.as_deref()),
    ("media", link.media.as_deref()),
  ];
  for (attr, value) in optional {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
      let _ = write!(html, " {attr}=\"{}\"", sanitize_attribute(value));
    }
  }

  html.push_str(">\n");
}

/// Render the complete head markup for a configuration.
///
/// Emits, one element per line: the `<title>`, every `<meta>` and `<link>`
/// record, then a JSON-LD `<script>` when structured data is configured.
#[must_use]
pub fn render_seo_tags(config: &SeoConfig) -> String {
  let mut html = String::new();

  if let Some(title) = config
    .base
    .as_ref()
    .and_then(|base| base.title.as_deref())
    .filter(|title| !title.is_empty())
  {
    let _ = writeln!(html, "<title>{}</title>", sanitize_attribute(title));
  }

  for tag in generate_meta_tags(config) {
    write_meta(&mut html, &tag);
  }
  for link in generate_link_tags(config) {
    write_link(&mut html, &link);
  }

  if let Some(json_ld) = &config.json_ld {
    // `</` would end the script element early
    let script = generate_json_ld(json_ld).replace("</", "<\\/");
    let _ =
      writeln!(html, "<script type=\"application/ld+json\">{script}</script>");
  }

  html
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use headmeta_config::{BaseMeta, JsonLdSchema, OneOrMany};

  use super::*;

  #[test]
  fn test_title_is_escaped() {
    let config = SeoConfig {
      base: Some(BaseMeta {
        title: Some("A & B <C>".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };
    assert_eq!(render_seo_tags(&config), "<title>A &amp; B &lt;C&gt;</title>\n");
  }

  #[test]
  fn test_sanitize_attribute() {
    assert_eq!(sanitize_attribute("plain"), "plain");
    assert_eq!(sanitize_attribute("\"a\" & <b>"), "&quot;a&quot; &amp; &lt;b&gt;");
    assert!(!sanitize_attribute("it's").contains('\''));
  }

  #[test]
  fn test_meta_attribute_kinds() {
    let config = SeoConfig {
      additional_meta_tags: Some(vec![
        MetaTag::name("a", "1"),
        MetaTag::property("og:b", "2"),
        MetaTag::http_equiv("refresh", "3"),
      ]),
      ..Default::default()
    };
    assert_eq!(
      render_seo_tags(&config),
      "<meta name=\"a\" content=\"1\">\n<meta property=\"og:b\" \
       content=\"2\">\n<meta http-equiv=\"refresh\" content=\"3\">\n"
    );
  }

  #[test]
  fn test_link_optional_attributes() {
    let mut alternate = LinkTag::new("alternate", "https://s/de");
    alternate.hreflang = Some("de".to_string());
    alternate.media = Some("screen".to_string());
    let config = SeoConfig {
      additional_link_tags: Some(vec![alternate]),
      ..Default::default()
    };
    assert_eq!(
      render_seo_tags(&config),
      "<link rel=\"alternate\" href=\"https://s/de\" hreflang=\"de\" \
       media=\"screen\">\n"
    );
  }

  #[test]
  fn test_script_is_last_and_cannot_close_early() {
    let config = SeoConfig {
      base: Some(BaseMeta {
        canonical: Some("https://s/p".to_string()),
        ..Default::default()
      }),
      json_ld: Some(OneOrMany::One(
        JsonLdSchema::new("Thing").with("name", "</script>"),
      )),
      ..Default::default()
    };

    let html = render_seo_tags(&config);
    let lines: Vec<_> = html.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "<link rel=\"canonical\" href=\"https://s/p\">");
    assert_eq!(
      lines[1],
      "<script type=\"application/ld+json\">{\"@context\":\"https://schema.org\",\"@type\":\"Thing\",\"name\":\"<\\/script>\"}</script>"
    );
  }

  #[test]
  fn test_empty_config_renders_nothing() {
    assert_eq!(render_seo_tags(&SeoConfig::default()), "");
  }
}
