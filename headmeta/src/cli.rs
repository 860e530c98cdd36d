use std::path::PathBuf;

use clap::{Parser, Subcommand};
use headmeta_config::{Preset, SeoConfig, merge, merge_configs};

use crate::error::HeadmetaError;

/// Command line interface for headmeta
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "headmeta: search-engine and social-sharing head markup"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", global = true, action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times), e.g. `base.title=Home` or `openGraph.type=article`
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,

  /// Preset(s) applied underneath the configuration, in order (default,
  /// blog, ecommerce, landing-page, no-index)
  #[arg(short, long = "preset", global = true, action = clap::ArgAction::Append)]
  pub presets: Vec<Preset>,
}

/// All supported subcommands for the headmeta CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Render head markup (title, meta, link and JSON-LD elements)
  Render {
    /// Wrap the markup in a complete HTML document
    #[arg(short, long)]
    document: bool,

    /// HTML file whose contents become the document body (with --document)
    #[arg(short, long, requires = "document")]
    body: Option<PathBuf>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Print the generated meta and link records as JSON
  Tags {
    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Initialize a new headmeta configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "headmeta.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Build the configuration for this invocation.
  ///
  /// Presets are merged first, in the order given, then configuration files
  /// on top. `--config` overrides are applied to the result last, so an empty
  /// value unsets a field whichever layer set it.
  ///
  /// # Errors
  ///
  /// Returns an error if a configuration file cannot be loaded or an override
  /// is invalid.
  pub fn resolve_config(&self) -> Result<SeoConfig, HeadmetaError> {
    let presets = merge_configs(self.presets.iter().map(|preset| {
      log::debug!("Applying preset: {preset}");
      preset.config()
    }));
    let loaded = SeoConfig::load(&self.config_files, &[])?;

    let mut config = merge(&presets, &loaded);
    config.apply_overrides(&self.config_overrides)?;
    Ok(config)
  }
}
