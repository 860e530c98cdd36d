use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use headmeta_config::SeoConfig;
use headmeta_html::{
  generate_link_tags,
  generate_meta_tags,
  json_ld_value,
  render_document,
  render_seo_tags,
};
use serde_json::json;

use crate::error::HeadmetaError;

/// Head markup for `config`, optionally wrapped in a full document whose body
/// is read from `body`.
///
/// # Errors
///
/// Returns an error if the body file cannot be read or the document cannot be
/// rendered.
pub fn render_markup(
  config: &SeoConfig,
  document: bool,
  body: Option<&Path>,
) -> Result<String, HeadmetaError> {
  if !document {
    return Ok(render_seo_tags(config));
  }

  let body = match body {
    Some(path) => fs::read_to_string(path)?,
    None => String::new(),
  };
  Ok(render_document(config, body.trim_end())?)
}

/// The generated records as pretty-printed JSON with `meta`, `link` and, when
/// configured, `jsonLd` keys.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn tags_json(config: &SeoConfig) -> Result<String, HeadmetaError> {
  let mut value = json!({
    "meta": generate_meta_tags(config),
    "link": generate_link_tags(config),
  });
  if let (Some(json_ld), Some(object)) =
    (&config.json_ld, value.as_object_mut())
  {
    object.insert("jsonLd".to_string(), json_ld_value(json_ld));
  }
  Ok(serde_json::to_string_pretty(&value)?)
}

/// Write `content` to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn write_output(
  output: Option<&Path>,
  content: &str,
) -> Result<(), HeadmetaError> {
  let Some(path) = output else {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
      stdout.write_all(b"\n")?;
    }
    return Ok(());
  };

  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  log::info!("Wrote {}", path.display());
  Ok(())
}
