use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use headmeta::{
  SeoConfig,
  cli::{Cli, Commands},
  output::{render_markup, tags_json, write_output},
};
use log::{LevelFilter, info};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      // Create parent directories if needed
      if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
          info!("Created directory: {}", parent.display());
        }
      }

      SeoConfig::generate_default_config(format, output).wrap_err_with(
        || {
          format!(
            "Failed to generate configuration file: {}",
            output.display()
          )
        },
      )?;

      info!(
        "Configuration file created successfully. Edit it to describe your \
         site's metadata."
      );
    },

    Commands::Render {
      document,
      body,
      output,
    } => {
      let config = cli.resolve_config()?;
      let markup = render_markup(&config, *document, body.as_deref())?;
      write_output(output.as_deref(), &markup)?;
    },

    Commands::Tags { output } => {
      let config = cli.resolve_config()?;
      let json = tags_json(&config)?;
      write_output(output.as_deref(), &json)?;
    },
  }

  Ok(())
}
