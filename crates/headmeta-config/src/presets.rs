//! Ready-made configurations for common kinds of pages.
//!
//! Presets are partial configurations meant to be merged under page-specific
//! values.

use std::{fmt, str::FromStr};

use crate::{
  SeoConfig,
  meta::{BaseMeta, OpenGraphMeta, Robots, RobotsDirective, TwitterMeta},
  value::{MaxImagePreview, OgType, TwitterCard},
};

/// Viewport used by the default preset.
pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1";

/// Charset used by the default preset.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Robots presets in both string and directive form.
pub mod robots {
  use super::{MaxImagePreview, RobotsDirective};

  pub const DEFAULT: &str = "index, follow";
  pub const NO_INDEX: &str = "noindex, follow";
  pub const NO_FOLLOW: &str = "index, nofollow";
  pub const NONE: &str = "noindex, nofollow";

  /// Keep the page out of indexes, caches and snippets entirely.
  #[must_use]
  pub const fn restrictive() -> RobotsDirective {
    RobotsDirective {
      index:             Some(false),
      follow:            Some(false),
      noarchive:         Some(true),
      nosnippet:         Some(true),
      noimageindex:      Some(true),
      max_snippet:       None,
      max_image_preview: None,
      max_video_preview: None,
    }
  }

  /// Allow unlimited snippets and large previews.
  #[must_use]
  pub const fn permissive() -> RobotsDirective {
    RobotsDirective {
      index:             Some(true),
      follow:            Some(true),
      noarchive:         None,
      nosnippet:         None,
      noimageindex:      None,
      max_snippet:       Some(-1),
      max_image_preview: Some(MaxImagePreview::Large),
      max_video_preview: Some(-1),
    }
  }
}

/// Single-field shortcuts for social sections.
pub mod social {
  use super::{OgType, OpenGraphMeta, TwitterCard, TwitterMeta};

  #[must_use]
  pub fn twitter(card: TwitterCard) -> TwitterMeta {
    TwitterMeta {
      card: Some(card),
      ..Default::default()
    }
  }

  #[must_use]
  pub fn open_graph(og_type: OgType) -> OpenGraphMeta {
    OpenGraphMeta {
      og_type: Some(og_type),
      ..Default::default()
    }
  }
}

/// Viewport, charset and a permissive robots string.
#[must_use]
pub fn default_preset() -> SeoConfig {
  SeoConfig {
    base: Some(BaseMeta {
      viewport: Some(DEFAULT_VIEWPORT.to_string()),
      charset: Some(DEFAULT_CHARSET.to_string()),
      robots: Some(Robots::Text(robots::DEFAULT.to_string())),
      ..Default::default()
    }),
    ..Default::default()
  }
}

fn social_preset(og_type: OgType) -> SeoConfig {
  SeoConfig {
    open_graph: Some(social::open_graph(og_type)),
    twitter: Some(social::twitter(TwitterCard::SummaryLargeImage)),
    ..Default::default()
  }
}

/// Article pages with large-image cards.
#[must_use]
pub fn blog_preset() -> SeoConfig {
  social_preset(OgType::Article)
}

#[must_use]
pub fn ecommerce_preset() -> SeoConfig {
  social_preset(OgType::Website)
}

#[must_use]
pub fn landing_page_preset() -> SeoConfig {
  social_preset(OgType::Website)
}

/// Pages that must stay out of search results.
#[must_use]
pub fn no_index_preset() -> SeoConfig {
  SeoConfig {
    base: Some(BaseMeta {
      robots: Some(Robots::Text(robots::NONE.to_string())),
      ..Default::default()
    }),
    ..Default::default()
  }
}

/// Named presets, selectable by name from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  Default,
  Blog,
  Ecommerce,
  LandingPage,
  NoIndex,
}

impl Preset {
  pub const ALL: [Self; 5] = [
    Self::Default,
    Self::Blog,
    Self::Ecommerce,
    Self::LandingPage,
    Self::NoIndex,
  ];

  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::Blog => "blog",
      Self::Ecommerce => "ecommerce",
      Self::LandingPage => "landing-page",
      Self::NoIndex => "no-index",
    }
  }

  #[must_use]
  pub fn config(self) -> SeoConfig {
    match self {
      Self::Default => default_preset(),
      Self::Blog => blog_preset(),
      Self::Ecommerce => ecommerce_preset(),
      Self::LandingPage => landing_page_preset(),
      Self::NoIndex => no_index_preset(),
    }
  }
}

impl fmt::Display for Preset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.to_lowercase().replace('_', "-");
    Self::ALL
      .into_iter()
      .find(|preset| preset.name() == normalized)
      .ok_or_else(|| {
        let names: Vec<_> = Self::ALL.iter().map(|p| p.name()).collect();
        format!("unknown preset '{s}', expected one of: {}", names.join(", "))
      })
  }
}
