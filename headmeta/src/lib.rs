//! Layered search-engine and social-sharing metadata, rendered as head markup.
//!
//! The configuration model and merging live in [`config`], tag generation and
//! rendering in [`html`]. This crate adds per-render state ([`scope`]),
//! request helpers ([`request`]) and the command line front-end.
pub mod cli;
pub mod error;
pub mod output;
pub mod request;
pub mod scope;

pub use error::HeadmetaError;
pub use headmeta_config as config;
pub use headmeta_config::{Merge, Preset, SeoConfig, merge, merge_configs};
pub use headmeta_html as html;
pub use headmeta_html::{
  generate_json_ld,
  generate_link_tags,
  generate_meta_tags,
  render_seo_tags,
};
pub use request::{Locals, SeoHandle, canonical_url, og_image_url};
pub use scope::RenderScope;
