use std::fmt;

/// Error type for template operations.
///
/// Represents the errors that can occur while looking up an embedded starter
/// configuration.
#[derive(Debug)]
pub enum TemplateError {
  /// Indicates that the requested configuration format is not supported.
  /// Contains the name of the unsupported format.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Get the starter configuration for a format (`toml` or `json`).
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for any other format.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(headmeta_templates::DEFAULT_TOML_CONFIG),
    "json" => Ok(headmeta_templates::DEFAULT_JSON_CONFIG),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
