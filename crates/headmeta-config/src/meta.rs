use std::{convert::Infallible, str::FromStr};

use headmeta_macros::Configurable;
use serde::{Deserialize, Serialize};

use crate::{
  merge::Merge,
  value::{
    Determiner,
    MaxImagePreview,
    Media,
    OgType,
    OneOrMany,
    TwitterCard,
  },
};

/// Document-level metadata: title, description and crawler hints.
#[derive(
  Debug, Clone, PartialEq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct BaseMeta {
  /// Page title, rendered as the `<title>` element.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  /// Keywords as a list or a pre-joined string.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub keywords: Option<OneOrMany<String>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub robots: Option<Robots>,

  /// Authoritative URL, emitted as `<link rel="canonical">`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub canonical: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub viewport: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub charset: Option<String>,

  /// Content language, emitted as an `http-equiv` tag.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub theme_color: Option<String>,
}

/// Crawler instructions, either verbatim or as a structured directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Robots {
  Text(String),
  Directive(RobotsDirective),
}

impl From<&str> for Robots {
  fn from(text: &str) -> Self {
    Self::Text(text.to_owned())
  }
}

impl From<RobotsDirective> for Robots {
  fn from(directive: RobotsDirective) -> Self {
    Self::Directive(directive)
  }
}

impl FromStr for Robots {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::Text(s.to_owned()))
  }
}

impl Merge for Robots {
  fn merge(&mut self, other: Self) {
    match (self, other) {
      (Self::Directive(current), Self::Directive(incoming)) => {
        current.merge(incoming);
      },
      (current, incoming) => *current = incoming,
    }
  }
}

/// Structured robots directive.
///
/// `index` and `follow` only contribute when explicitly `false`; the other
/// flags only when `true`. Numeric limits accept `-1` for "unlimited".
#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct RobotsDirective {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub index: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub follow: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub noarchive: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub nosnippet: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub noimageindex: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_snippet: Option<i64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_image_preview: Option<MaxImagePreview>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_video_preview: Option<i64>,
}

/// Open Graph properties (`og:*`).
#[derive(
  Debug, Clone, PartialEq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphMeta {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[config(key = "type")]
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub og_type: Option<OgType>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<OneOrMany<Media<OgImage>>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub site_name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub locale: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub locale_alternate: Option<OneOrMany<String>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub determiner: Option<Determiner>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub audio: Option<OneOrMany<Media<OgAudio>>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub video: Option<OneOrMany<Media<OgVideo>>>,
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct OgImage {
  pub url: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub secure_url: Option<String>,

  /// MIME type, e.g. `image/png`.
  #[config(key = "type")]
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub alt: Option<String>,
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct OgAudio {
  pub url: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub secure_url: Option<String>,

  #[config(key = "type")]
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct OgVideo {
  pub url: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub secure_url: Option<String>,

  #[config(key = "type")]
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<u32>,
}

/// Article properties (`article:*`), meaningful when `og:type` is `article`.
#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub published_time: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub modified_time: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub expiration_time: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<OneOrMany<String>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub section: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub tag: Option<OneOrMany<String>>,
}

/// Twitter card properties (`twitter:*`).
#[derive(
  Debug, Clone, PartialEq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct TwitterMeta {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub card: Option<TwitterCard>,

  /// `@username` of the website.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub site: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub site_id: Option<String>,

  /// `@username` of the content creator.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub creator: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub creator_id: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<Media<TwitterImage>>,

  /// Alt text emitted in addition to any `image.alt`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_alt: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub player: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub player_width: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub player_height: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub player_stream: Option<String>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub app: Option<TwitterApp>,
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct TwitterImage {
  pub url: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub alt: Option<String>,
}

/// App deep-link data for `app` cards, grouped by field.
#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct TwitterApp {
  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<AppPlatforms>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<AppPlatforms>,

  #[config(nested)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<AppPlatforms>,
}

/// One value per app store platform.
#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct AppPlatforms {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub iphone: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub ipad: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub googleplay: Option<String>,
}

/// Facebook properties (`fb:*`).
#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct FacebookMeta {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub app_id: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub admins: Option<OneOrMany<String>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub pages: Option<String>,
}

/// LinkedIn metadata.
///
/// LinkedIn reads Open Graph tags, so this section is carried and merged but
/// never expanded into tags of its own.
#[derive(
  Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configurable,
)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInMeta {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
}
