use std::io;

use headmeta_config::ConfigError;
use thiserror::Error;

/// Top-level error type for the headmeta crate.
#[derive(Debug, Error)]
pub enum HeadmetaError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("Rendering error: {0}")]
  Render(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),
}

impl From<color_eyre::Report> for HeadmetaError {
  fn from(e: color_eyre::Report) -> Self {
    Self::Render(format!("{e:#}"))
  }
}
