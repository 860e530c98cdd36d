//! Expansion of a configuration into ordered `<meta>` and `<link>` records.
//!
//! Sections are expanded in a fixed order: base, Open Graph, article,
//! Twitter, Facebook, then any additional tags. Empty strings and zero
//! dimensions count as absent. Nothing is validated: unknown enum values and
//! malformed URLs are passed through as they are.

use headmeta_config::{
  AppPlatforms,
  ArticleMeta,
  BaseMeta,
  FacebookMeta,
  LinkTag,
  Media,
  MetaTag,
  OgAudio,
  OgImage,
  OgVideo,
  OneOrMany,
  OpenGraphMeta,
  Robots,
  SeoConfig,
  TwitterMeta,
};

/// Robots value used when a directive sets nothing.
pub const DEFAULT_ROBOTS: &str = "index, follow";

/// Returns the value if it is set and not empty.
fn text(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

/// Entries of a single-or-list field. A lone empty value counts as absent,
/// while empty entries inside a list are kept.
fn entries<'a, T>(
  value: Option<&'a OneOrMany<T>>,
  is_empty: fn(&T) -> bool,
) -> impl Iterator<Item = &'a T> {
  value
    .filter(|v| !matches!(v, OneOrMany::One(item) if is_empty(item)))
    .into_iter()
    .flatten()
}

fn empty_url<T>(media: &Media<T>) -> bool {
  matches!(media, Media::Url(url) if url.is_empty())
}

/// Returns the value as a decimal string if it is set and not zero.
fn dimension(value: Option<u32>) -> Option<String> {
  value.filter(|v| *v != 0).map(|v| v.to_string())
}

/// Render a robots value as the content of `<meta name="robots">`.
#[must_use]
pub fn robots_to_string(robots: &Robots) -> String {
  let directive = match robots {
    Robots::Text(text) => return text.clone(),
    Robots::Directive(directive) => directive,
  };

  let mut parts = Vec::new();
  if directive.index == Some(false) {
    parts.push("noindex".to_string());
  }
  if directive.follow == Some(false) {
    parts.push("nofollow".to_string());
  }
  if directive.noarchive == Some(true) {
    parts.push("noarchive".to_string());
  }
  if directive.nosnippet == Some(true) {
    parts.push("nosnippet".to_string());
  }
  if directive.noimageindex == Some(true) {
    parts.push("noimageindex".to_string());
  }
  // Zero and negative limits are meaningful
  if let Some(max_snippet) = directive.max_snippet {
    parts.push(format!("max-snippet:{max_snippet}"));
  }
  if let Some(preview) = directive
    .max_image_preview
    .as_ref()
    .filter(|p| !p.as_str().is_empty())
  {
    parts.push(format!("max-image-preview:{preview}"));
  }
  if let Some(max_video_preview) = directive.max_video_preview {
    parts.push(format!("max-video-preview:{max_video_preview}"));
  }

  if parts.is_empty() {
    DEFAULT_ROBOTS.to_string()
  } else {
    parts.join(", ")
  }
}

/// Join a keyword list with `", "`; a single string is used as is.
#[must_use]
pub fn keywords_to_string(keywords: &OneOrMany<String>) -> String {
  match keywords {
    OneOrMany::One(keyword) => keyword.clone(),
    OneOrMany::Many(keywords) => keywords.join(", "),
  }
}

/// Generate the ordered `<meta>` records for a configuration.
#[must_use]
pub fn generate_meta_tags(config: &SeoConfig) -> Vec<MetaTag> {
  let mut tags = Vec::new();

  if let Some(base) = &config.base {
    push_base(&mut tags, base);
  }
  if let Some(og) = &config.open_graph {
    push_open_graph(&mut tags, og);
  }
  if let Some(article) = &config.article {
    push_article(&mut tags, article);
  }
  if let Some(twitter) = &config.twitter {
    push_twitter(&mut tags, twitter);
  }
  if let Some(facebook) = &config.facebook {
    push_facebook(&mut tags, facebook);
  }
  if let Some(additional) = &config.additional_meta_tags {
    tags.extend(additional.iter().cloned());
  }

  log::debug!("Generated {} meta tags", tags.len());
  tags
}

/// Generate the ordered `<link>` records for a configuration.
#[must_use]
pub fn generate_link_tags(config: &SeoConfig) -> Vec<LinkTag> {
  let mut links = Vec::new();

  if let Some(canonical) =
    text(config.base.as_ref().and_then(|b| b.canonical.as_deref()))
  {
    links.push(LinkTag::new("canonical", canonical));
  }
  if let Some(additional) = &config.additional_link_tags {
    links.extend(additional.iter().cloned());
  }

  links
}

fn push_base(tags: &mut Vec<MetaTag>, base: &BaseMeta) {
  if let Some(description) = text(base.description.as_deref()) {
    tags.push(MetaTag::name("description", description));
  }
  // A list is emitted even when empty; only an empty string is skipped
  if let Some(keywords) = base.keywords.as_ref().filter(|k| {
    !matches!(k, OneOrMany::One(keyword) if keyword.is_empty())
  }) {
    tags.push(MetaTag::name("keywords", keywords_to_string(keywords)));
  }
  if let Some(author) = text(base.author.as_deref()) {
    tags.push(MetaTag::name("author", author));
  }
  if let Some(robots) = base
    .robots
    .as_ref()
    .filter(|r| !matches!(r, Robots::Text(text) if text.is_empty()))
  {
    tags.push(MetaTag::name("robots", robots_to_string(robots)));
  }
  if let Some(viewport) = text(base.viewport.as_deref()) {
    tags.push(MetaTag::name("viewport", viewport));
  }
  if let Some(charset) = text(base.charset.as_deref()) {
    tags.push(MetaTag::name("charset", charset));
  }
  if let Some(language) = text(base.language.as_deref()) {
    tags.push(MetaTag::http_equiv("content-language", language));
  }
  if let Some(theme_color) = text(base.theme_color.as_deref()) {
    tags.push(MetaTag::name("theme-color", theme_color));
  }
}

fn push_open_graph(tags: &mut Vec<MetaTag>, og: &OpenGraphMeta) {
  let direct = [
    ("og:title", og.title.as_deref()),
    ("og:description", og.description.as_deref()),
    ("og:type", og.og_type.as_ref().map(|t| t.as_str())),
    ("og:url", og.url.as_deref()),
    ("og:site_name", og.site_name.as_deref()),
    ("og:locale", og.locale.as_deref()),
    ("og:determiner", og.determiner.as_ref().map(|d| d.as_str())),
  ];
  for (property, value) in direct {
    if let Some(value) = text(value) {
      tags.push(MetaTag::property(property, value));
    }
  }

  for image in entries(og.image.as_ref(), empty_url) {
    push_og_image(tags, image);
  }
  for locale in entries(og.locale_alternate.as_ref(), String::is_empty) {
    tags.push(MetaTag::property("og:locale:alternate", locale));
  }
  for audio in entries(og.audio.as_ref(), empty_url) {
    push_og_audio(tags, audio);
  }
  for video in entries(og.video.as_ref(), empty_url) {
    push_og_video(tags, video);
  }
}

fn push_og_image(tags: &mut Vec<MetaTag>, image: &Media<OgImage>) {
  let image = match image {
    Media::Url(url) => {
      tags.push(MetaTag::property("og:image", url));
      return;
    },
    Media::Object(image) => image,
  };

  tags.push(MetaTag::property("og:image", &image.url));
  if let Some(secure_url) = text(image.secure_url.as_deref()) {
    tags.push(MetaTag::property("og:image:secure_url", secure_url));
  }
  if let Some(mime_type) = text(image.mime_type.as_deref()) {
    tags.push(MetaTag::property("og:image:type", mime_type));
  }
  if let Some(width) = dimension(image.width) {
    tags.push(MetaTag::property("og:image:width", width));
  }
  if let Some(height) = dimension(image.height) {
    tags.push(MetaTag::property("og:image:height", height));
  }
  if let Some(alt) = text(image.alt.as_deref()) {
    tags.push(MetaTag::property("og:image:alt", alt));
  }
}

fn push_og_audio(tags: &mut Vec<MetaTag>, audio: &Media<OgAudio>) {
  match audio {
    Media::Url(url) => tags.push(MetaTag::property("og:audio", url)),
    Media::Object(audio) => {
      tags.push(MetaTag::property("og:audio", &audio.url));
      if let Some(secure_url) = text(audio.secure_url.as_deref()) {
        tags.push(MetaTag::property("og:audio:secure_url", secure_url));
      }
      if let Some(mime_type) = text(audio.mime_type.as_deref()) {
        tags.push(MetaTag::property("og:audio:type", mime_type));
      }
    },
  }
}

fn push_og_video(tags: &mut Vec<MetaTag>, video: &Media<OgVideo>) {
  match video {
    Media::Url(url) => tags.push(MetaTag::property("og:video", url)),
    Media::Object(video) => {
      tags.push(MetaTag::property("og:video", &video.url));
      if let Some(secure_url) = text(video.secure_url.as_deref()) {
        tags.push(MetaTag::property("og:video:secure_url", secure_url));
      }
      if let Some(mime_type) = text(video.mime_type.as_deref()) {
        tags.push(MetaTag::property("og:video:type", mime_type));
      }
      if let Some(width) = dimension(video.width) {
        tags.push(MetaTag::property("og:video:width", width));
      }
      if let Some(height) = dimension(video.height) {
        tags.push(MetaTag::property("og:video:height", height));
      }
    },
  }
}

fn push_article(tags: &mut Vec<MetaTag>, article: &ArticleMeta) {
  let direct = [
    ("article:published_time", article.published_time.as_deref()),
    ("article:modified_time", article.modified_time.as_deref()),
    ("article:expiration_time", article.expiration_time.as_deref()),
    ("article:section", article.section.as_deref()),
  ];
  for (property, value) in direct {
    if let Some(value) = text(value) {
      tags.push(MetaTag::property(property, value));
    }
  }

  for author in entries(article.author.as_ref(), String::is_empty) {
    tags.push(MetaTag::property("article:author", author));
  }
  for tag in entries(article.tag.as_ref(), String::is_empty) {
    tags.push(MetaTag::property("article:tag", tag));
  }
}

fn push_twitter(tags: &mut Vec<MetaTag>, twitter: &TwitterMeta) {
  let direct = [
    ("twitter:card", twitter.card.as_ref().map(|c| c.as_str())),
    ("twitter:site", twitter.site.as_deref()),
    ("twitter:site:id", twitter.site_id.as_deref()),
    ("twitter:creator", twitter.creator.as_deref()),
    ("twitter:creator:id", twitter.creator_id.as_deref()),
    ("twitter:title", twitter.title.as_deref()),
    ("twitter:description", twitter.description.as_deref()),
  ];
  for (name, value) in direct {
    if let Some(value) = text(value) {
      tags.push(MetaTag::name(name, value));
    }
  }

  match &twitter.image {
    Some(Media::Url(url)) if !url.is_empty() => {
      tags.push(MetaTag::name("twitter:image", url));
    },
    Some(Media::Object(image)) => {
      tags.push(MetaTag::name("twitter:image", &image.url));
      if let Some(alt) = text(image.alt.as_deref()) {
        tags.push(MetaTag::name("twitter:image:alt", alt));
      }
    },
    _ => {},
  }

  // Emitted even when the image object already carried an alt
  if let Some(alt) = text(twitter.image_alt.as_deref()) {
    tags.push(MetaTag::name("twitter:image:alt", alt));
  }

  if let Some(player) = text(twitter.player.as_deref()) {
    tags.push(MetaTag::name("twitter:player", player));
  }
  if let Some(width) = dimension(twitter.player_width) {
    tags.push(MetaTag::name("twitter:player:width", width));
  }
  if let Some(height) = dimension(twitter.player_height) {
    tags.push(MetaTag::name("twitter:player:height", height));
  }
  if let Some(stream) = text(twitter.player_stream.as_deref()) {
    tags.push(MetaTag::name("twitter:player:stream", stream));
  }

  if let Some(app) = &twitter.app {
    let groups = [
      ("name", app.name.as_ref()),
      ("id", app.id.as_ref()),
      ("url", app.url.as_ref()),
    ];
    for (field, platforms) in groups {
      let Some(platforms) = platforms else {
        continue;
      };
      for (platform, value) in platform_values(platforms) {
        if let Some(value) = text(value) {
          tags.push(MetaTag::name(
            format!("twitter:app:{field}:{platform}"),
            value,
          ));
        }
      }
    }
  }
}

fn platform_values(platforms: &AppPlatforms) -> [(&str, Option<&str>); 3] {
  [
    ("iphone", platforms.iphone.as_deref()),
    ("ipad", platforms.ipad.as_deref()),
    ("googleplay", platforms.googleplay.as_deref()),
  ]
}

fn push_facebook(tags: &mut Vec<MetaTag>, facebook: &FacebookMeta) {
  if let Some(app_id) = text(facebook.app_id.as_deref()) {
    tags.push(MetaTag::property("fb:app_id", app_id));
  }
  if let Some(pages) = text(facebook.pages.as_deref()) {
    tags.push(MetaTag::property("fb:pages", pages));
  }
  for admin in entries(facebook.admins.as_ref(), String::is_empty) {
    tags.push(MetaTag::property("fb:admins", admin));
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]

  use headmeta_config::{
    MaxImagePreview,
    OgType,
    RobotsDirective,
    TwitterApp,
    TwitterCard,
    TwitterImage,
  };

  use super::*;

  fn contents<'a>(tags: &'a [MetaTag], key: &str) -> Vec<&'a str> {
    tags
      .iter()
      .filter(|t| t.name_attr() == Some(key) || t.property_attr() == Some(key))
      .map(|t| t.content.as_str())
      .collect()
  }

  #[test]
  fn test_robots_empty_directive_defaults() {
    let robots = Robots::Directive(RobotsDirective::default());
    assert_eq!(robots_to_string(&robots), "index, follow");
  }

  #[test]
  fn test_robots_directive_order() {
    let robots = Robots::Directive(RobotsDirective {
      max_snippet: Some(-1),
      follow: Some(false),
      index: Some(false),
      ..Default::default()
    });
    assert_eq!(robots_to_string(&robots), "noindex, nofollow, max-snippet:-1");

    let robots = Robots::Directive(RobotsDirective {
      index: Some(true),
      noarchive: Some(true),
      max_snippet: Some(0),
      max_image_preview: Some(MaxImagePreview::Large),
      max_video_preview: Some(30),
      ..Default::default()
    });
    assert_eq!(
      robots_to_string(&robots),
      "noarchive, max-snippet:0, max-image-preview:large, max-video-preview:30"
    );
  }

  #[test]
  fn test_robots_text_verbatim() {
    assert_eq!(robots_to_string(&Robots::from("none")), "none");
  }

  #[test]
  fn test_keywords_to_string() {
    assert_eq!(keywords_to_string(&vec!["a", "b"].into()), "a, b");
    assert_eq!(keywords_to_string(&"a,b".into()), "a,b");
  }

  #[test]
  fn test_base_order_and_language() {
    let config = SeoConfig {
      base: Some(BaseMeta {
        title: Some("T".to_string()),
        description: Some("D".to_string()),
        keywords: Some(vec!["x", "y"].into()),
        author: Some(String::new()),
        robots: Some(Robots::from("noindex")),
        viewport: Some("v".to_string()),
        charset: Some("utf-8".to_string()),
        language: Some("en".to_string()),
        theme_color: Some("#000".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(tags, vec![
      MetaTag::name("description", "D"),
      MetaTag::name("keywords", "x, y"),
      MetaTag::name("robots", "noindex"),
      MetaTag::name("viewport", "v"),
      MetaTag::name("charset", "utf-8"),
      MetaTag::http_equiv("content-language", "en"),
      MetaTag::name("theme-color", "#000"),
    ]);
  }

  #[test]
  fn test_absent_and_empty_sections() {
    assert!(generate_meta_tags(&SeoConfig::default()).is_empty());

    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta::default()),
      twitter: Some(TwitterMeta::default()),
      ..Default::default()
    };
    assert!(generate_meta_tags(&config).is_empty());
  }

  #[test]
  fn test_og_image_url_only() {
    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        image: Some(OneOrMany::One(Media::Url("https://x/img.png".to_string()))),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(tags, vec![MetaTag::property("og:image", "https://x/img.png")]);
  }

  #[test]
  fn test_og_image_object_expansion() {
    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        image: Some(OneOrMany::One(Media::Object(OgImage {
          url: "https://x/img.png".to_string(),
          width: Some(1200),
          height: Some(630),
          alt: Some("A".to_string()),
          ..Default::default()
        }))),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(tags, vec![
      MetaTag::property("og:image", "https://x/img.png"),
      MetaTag::property("og:image:width", "1200"),
      MetaTag::property("og:image:height", "630"),
      MetaTag::property("og:image:alt", "A"),
    ]);
  }

  #[test]
  fn test_og_zero_dimensions_skipped() {
    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        video: Some(OneOrMany::Many(vec![
          Media::Url("https://x/a.mp4".to_string()),
          Media::Object(OgVideo {
            url: "https://x/b.mp4".to_string(),
            mime_type: Some("video/mp4".to_string()),
            width: Some(0),
            height: Some(360),
            ..Default::default()
          }),
        ])),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(tags, vec![
      MetaTag::property("og:video", "https://x/a.mp4"),
      MetaTag::property("og:video", "https://x/b.mp4"),
      MetaTag::property("og:video:type", "video/mp4"),
      MetaTag::property("og:video:height", "360"),
    ]);
  }

  #[test]
  fn test_og_section_order() {
    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        title: Some("T".to_string()),
        og_type: Some(OgType::Article),
        site_name: Some("S".to_string()),
        locale: Some("en_US".to_string()),
        locale_alternate: Some(vec!["de_DE", "fr_FR"].into()),
        image: Some(OneOrMany::One(Media::Url("https://x/i.png".to_string()))),
        audio: Some(OneOrMany::One(Media::Object(OgAudio {
          url: "https://x/a.mp3".to_string(),
          secure_url: Some("https://x/a.mp3".to_string()),
          ..Default::default()
        }))),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    let keys: Vec<_> = tags.iter().filter_map(MetaTag::property_attr).collect();
    assert_eq!(keys, [
      "og:title",
      "og:type",
      "og:site_name",
      "og:locale",
      "og:image",
      "og:locale:alternate",
      "og:locale:alternate",
      "og:audio",
      "og:audio:secure_url",
    ]);
  }

  #[test]
  fn test_lone_empty_values_are_absent() {
    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        image: Some(OneOrMany::One(Media::Url(String::new()))),
        audio: Some(OneOrMany::One(Media::Url(String::new()))),
        video: Some(OneOrMany::One(Media::Url(String::new()))),
        locale_alternate: Some("".into()),
        ..Default::default()
      }),
      article: Some(ArticleMeta {
        author: Some("".into()),
        tag: Some("".into()),
        ..Default::default()
      }),
      facebook: Some(FacebookMeta {
        admins: Some("".into()),
        ..Default::default()
      }),
      ..Default::default()
    };

    assert!(generate_meta_tags(&config).is_empty());
  }

  #[test]
  fn test_empty_entries_inside_lists_are_kept() {
    let config = SeoConfig {
      open_graph: Some(OpenGraphMeta {
        image: Some(OneOrMany::Many(vec![
          Media::Url(String::new()),
          Media::Url("https://s.test/a.png".to_string()),
        ])),
        ..Default::default()
      }),
      article: Some(ArticleMeta {
        tag: Some(vec!["", "b"].into()),
        ..Default::default()
      }),
      facebook: Some(FacebookMeta {
        admins: Some(vec![""].into()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(contents(&tags, "og:image"), ["", "https://s.test/a.png"]);
    assert_eq!(contents(&tags, "article:tag"), ["", "b"]);
    assert_eq!(contents(&tags, "fb:admins"), [""]);
  }

  #[test]
  fn test_article_lists() {
    let config = SeoConfig {
      article: Some(ArticleMeta {
        section: Some("Tech".to_string()),
        published_time: Some("2024-01-01".to_string()),
        author: Some("Ann".into()),
        tag: Some(vec!["a", "b"].into()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(tags, vec![
      MetaTag::property("article:published_time", "2024-01-01"),
      MetaTag::property("article:section", "Tech"),
      MetaTag::property("article:author", "Ann"),
      MetaTag::property("article:tag", "a"),
      MetaTag::property("article:tag", "b"),
    ]);
  }

  #[test]
  fn test_twitter_alt_emitted_twice() {
    let config = SeoConfig {
      twitter: Some(TwitterMeta {
        card: Some(TwitterCard::SummaryLargeImage),
        image: Some(Media::Object(TwitterImage {
          url: "https://x/t.png".to_string(),
          alt: Some("one".to_string()),
        })),
        image_alt: Some("two".to_string()),
        player_width: Some(640),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(contents(&tags, "twitter:image:alt"), ["one", "two"]);
    assert_eq!(contents(&tags, "twitter:player:width"), ["640"]);
    assert_eq!(tags[0], MetaTag::name("twitter:card", "summary_large_image"));
  }

  #[test]
  fn test_twitter_app_field_major_order() {
    let platforms = |prefix: &str| {
      Some(AppPlatforms {
        iphone:     Some(format!("{prefix}-iphone")),
        ipad:       None,
        googleplay: Some(format!("{prefix}-play")),
      })
    };
    let config = SeoConfig {
      twitter: Some(TwitterMeta {
        app: Some(TwitterApp {
          name: platforms("name"),
          id:   platforms("id"),
          url:  None,
        }),
        ..Default::default()
      }),
      ..Default::default()
    };

    let names: Vec<_> = generate_meta_tags(&config)
      .iter()
      .filter_map(|t| t.name_attr().map(str::to_string))
      .collect();
    assert_eq!(names, [
      "twitter:app:name:iphone",
      "twitter:app:name:googleplay",
      "twitter:app:id:iphone",
      "twitter:app:id:googleplay",
    ]);
  }

  #[test]
  fn test_facebook_and_additional_tags_last() {
    let config = SeoConfig {
      facebook: Some(FacebookMeta {
        app_id: Some("1".to_string()),
        admins: Some(vec!["a", "b"].into()),
        pages: Some("p".to_string()),
      }),
      additional_meta_tags: Some(vec![MetaTag::name("custom", "")]),
      base: Some(BaseMeta {
        description: Some("D".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };

    let tags = generate_meta_tags(&config);
    assert_eq!(tags, vec![
      MetaTag::name("description", "D"),
      MetaTag::property("fb:app_id", "1"),
      MetaTag::property("fb:pages", "p"),
      MetaTag::property("fb:admins", "a"),
      MetaTag::property("fb:admins", "b"),
      MetaTag::name("custom", ""),
    ]);
  }

  #[test]
  fn test_linkedin_not_expanded() {
    let config = SeoConfig {
      linkedin: Some(headmeta_config::LinkedInMeta {
        title: Some("T".to_string()),
        ..Default::default()
      }),
      ..Default::default()
    };
    assert!(generate_meta_tags(&config).is_empty());
  }

  #[test]
  fn test_link_tags() {
    let mut icon = LinkTag::new("icon", "/favicon.ico");
    icon.sizes = Some("32x32".to_string());
    let config = SeoConfig {
      base: Some(BaseMeta {
        canonical: Some("https://s/p".to_string()),
        ..Default::default()
      }),
      additional_link_tags: Some(vec![icon.clone()]),
      ..Default::default()
    };

    assert_eq!(generate_link_tags(&config), vec![
      LinkTag::new("canonical", "https://s/p"),
      icon,
    ]);
    assert!(generate_link_tags(&SeoConfig::default()).is_empty());
  }
}
