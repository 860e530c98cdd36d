pub mod document;
pub mod jsonld;
pub mod render;
pub mod tags;

// Re-export the generation entry points
pub use document::render_document;
pub use jsonld::{generate_json_ld, json_ld_value};
pub use render::{render_seo_tags, sanitize_attribute};
pub use tags::{
  generate_link_tags,
  generate_meta_tags,
  keywords_to_string,
  robots_to_string,
};
