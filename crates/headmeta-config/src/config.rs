use std::{
  fs,
  path::{Path, PathBuf},
};

use headmeta_macros::Configurable;
use serde::{Deserialize, Serialize};

use crate::{
  error::ConfigError,
  merge::Merge,
  meta::{
    ArticleMeta,
    BaseMeta,
    FacebookMeta,
    LinkedInMeta,
    OpenGraphMeta,
    TwitterMeta,
  },
  schema::JsonLdSchema,
  tags::{LinkTag, MetaTag},
  value::OneOrMany,
};

/// One structured-data record or a list of them.
pub type JsonLd = OneOrMany<JsonLdSchema>;

/// Search-engine and social-sharing metadata for a page.
///
/// Every section is optional. An absent section produces no tags, while a
/// present but empty one is expanded to nothing. Configurations are usually
/// layered: site defaults first, then presets, then per-page values, combined
/// with [`Merge`].
#[derive(
  Debug, Clone, PartialEq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub base: Option<BaseMeta>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub open_graph: Option<OpenGraphMeta>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub article: Option<ArticleMeta>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter: Option<TwitterMeta>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub facebook: Option<FacebookMeta>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub linkedin: Option<LinkedInMeta>,

  #[config(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub json_ld: Option<JsonLd>,

  /// Extra `<meta>` elements appended after the generated ones.
  #[config(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub additional_meta_tags: Option<Vec<MetaTag>>,

  /// Extra `<link>` elements appended after the canonical link.
  #[config(skip)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub additional_link_tags: Option<Vec<LinkTag>>,
}

impl SeoConfig {
  /// Returns a copy of `self` with `other` merged on top.
  #[must_use]
  pub fn merged(&self, other: &Self) -> Self {
    crate::merge::merge(self, other)
  }

  /// Parse a configuration from TOML or JSON text.
  ///
  /// # Errors
  ///
  /// Returns an error if the text does not match the configuration model, or
  /// the format is not `toml` or `json`.
  pub fn parse(content: &str, format: &str) -> Result<Self, ConfigError> {
    match format.to_lowercase().as_str() {
      "json" => Ok(serde_json::from_str(content)?),
      "toml" => Ok(toml::from_str(content)?),
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config format: {format}"
        )))
      },
    }
  }

  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    match ext.to_lowercase().as_str() {
      "json" | "toml" => {
        Self::parse(&content, ext).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to parse {} config from {}: {}",
            ext.to_uppercase(),
            path.display(),
            e
          ))
        })
      },
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from files and `KEY=VALUE` overrides.
  ///
  /// Files are merged in order, later files overriding earlier ones. Without
  /// any file, a discovered config file is used if one exists, otherwise an
  /// empty configuration. Overrides are applied last.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        log::info!("Using discovered config file: {}", discovered.display());
        Self::from_file(&discovered)?
      } else {
        log::debug!("No config file found, starting from an empty config");
        Self::default()
      }
    } else {
      let mut merged = Self::default();
      for config_path in config_files {
        let additional = Self::from_file(config_path).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
          ))
        })?;
        merged.merge(additional);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// Keys are dotted paths using the same camelCase names as config files,
  /// e.g. `base.title`, `openGraph.type` or `twitter.app.id.iphone`. An empty
  /// value unsets the field.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&vec![
  ///     "base.title=My Page".to_string(),
  ///     "base.robots.index=false".to_string(),
  /// ])?;
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      let key = key.trim();
      let value = value.trim();

      // `base.robots` holds either a string or a directive; the dotted form
      // always addresses the directive.
      if let Some(subkey) = key.strip_prefix("base.robots.") {
        self.apply_robots_override(subkey, value)?;
      } else {
        self.apply_override(key, value)?;
      }
      log::debug!("Applied config override: {key}={value}");
    }

    Ok(())
  }

  fn apply_robots_override(
    &mut self,
    subkey: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    use crate::meta::{Robots, RobotsDirective};

    let base = self.base.get_or_insert_with(BaseMeta::default);
    if !matches!(base.robots, Some(Robots::Directive(_))) {
      if let Some(Robots::Text(text)) = &base.robots {
        log::warn!(
          "Replacing robots string '{text}' with a structured directive"
        );
      }
      base.robots = Some(Robots::Directive(RobotsDirective::default()));
    }

    match base.robots.as_mut() {
      Some(Robots::Directive(directive)) => {
        directive.apply_override(subkey, value)
      },
      _ => Ok(()),
    }
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames = [
      "headmeta.toml",
      "headmeta.json",
      ".headmeta.toml",
      ".headmeta.json",
      ".config/headmeta.toml",
      ".config/headmeta.json",
    ];

    let current_dir = std::env::current_dir().ok()?;
    for filename in &config_filenames {
      let config_path = current_dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
      let xdg_config_dir = PathBuf::from(xdg_config_home).join("headmeta");
      for filename in &["config.toml", "config.json"] {
        let config_path = xdg_config_dir.join(filename);
        if config_path.exists() {
          return Some(config_path);
        }
      }
    }

    None
  }

  /// Write the starter configuration file for a format.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content)?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
