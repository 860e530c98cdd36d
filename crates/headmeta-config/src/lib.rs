pub mod config;
pub mod error;
pub mod helpers;
pub mod merge;
pub mod meta;
pub mod presets;
pub mod schema;
pub mod tags;
pub mod templates;
pub mod value;

pub use config::{JsonLd, SeoConfig};
pub use error::ConfigError;
pub use merge::{Merge, merge, merge_configs};
pub use meta::{
  AppPlatforms,
  ArticleMeta,
  BaseMeta,
  FacebookMeta,
  LinkedInMeta,
  OgAudio,
  OgImage,
  OgVideo,
  OpenGraphMeta,
  Robots,
  RobotsDirective,
  TwitterApp,
  TwitterImage,
  TwitterMeta,
};
pub use presets::Preset;
pub use schema::{JsonLdSchema, SCHEMA_ORG_CONTEXT};
pub use tags::{LinkTag, MetaKey, MetaTag};
pub use value::{
  Determiner,
  MaxImagePreview,
  Media,
  OgType,
  OneOrMany,
  TwitterCard,
};
