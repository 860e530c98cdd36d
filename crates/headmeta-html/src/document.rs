//! Standalone HTML documents built around generated head markup.

use color_eyre::eyre::{Context, Result};
use headmeta_config::SeoConfig;
use headmeta_templates as templates;
use tera::Tera;

use crate::render::render_seo_tags;

const DOCUMENT_TEMPLATE: &str = templates::DOCUMENT_TEMPLATE;

/// Indent every line of the head markup to sit inside `<head>`.
fn indent(markup: &str, prefix: &str) -> String {
  markup
    .lines()
    .map(|line| format!("{prefix}{line}\n"))
    .collect()
}

/// Render a full HTML document whose `<head>` holds the markup for `config`.
///
/// The document language is taken from `base.language` when set.
///
/// # Errors
///
/// Returns an error if the embedded document template cannot be rendered.
pub fn render_document(config: &SeoConfig, body: &str) -> Result<String> {
  let mut tera = Tera::default();
  tera
    .add_raw_template("document.html", DOCUMENT_TEMPLATE)
    .wrap_err("Failed to load document template")?;

  let lang = config
    .base
    .as_ref()
    .and_then(|base| base.language.as_deref())
    .filter(|lang| !lang.is_empty());
  let charset = config
    .base
    .as_ref()
    .and_then(|base| base.charset.as_deref())
    .filter(|charset| !charset.is_empty());

  let mut context = tera::Context::new();
  context.insert("lang", &lang);
  context.insert("charset", &charset);
  context.insert("head", &indent(&render_seo_tags(config), "    "));
  context.insert("body", body);

  let html = tera
    .render("document.html", &context)
    .wrap_err("Failed to render document template")?;
  log::debug!("Rendered document of {} bytes", html.len());
  Ok(html)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use headmeta_config::BaseMeta;

  use super::*;

  #[test]
  fn test_document_wraps_head_markup() {
    let config = SeoConfig {
      base: Some(BaseMeta {
        title: Some("Home".to_string()),
        description: Some("Welcome".to_string()),
        language: Some("en".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let html = render_document(&config, "<p>hi</p>").unwrap();
    assert!(html.starts_with("<!doctype html>\n<html lang=\"en\">"));
    assert!(html.contains("    <title>Home</title>\n"));
    assert!(html.contains("    <meta name=\"description\" content=\"Welcome\">\n"));
    assert!(html.contains("<p>hi</p>"));
    assert!(html.trim_end().ends_with("</html>"));
  }

  #[test]
  fn test_document_without_language() {
    let html = render_document(&SeoConfig::default(), "").unwrap();
    assert!(html.contains("<html>"));
  }
}
