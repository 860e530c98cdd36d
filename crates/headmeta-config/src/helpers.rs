//! Constructors for common configuration shapes.

use serde_json::{Value, json};

use crate::{
  JsonLd,
  SeoConfig,
  merge::merge,
  meta::{ArticleMeta, BaseMeta, FacebookMeta, OpenGraphMeta, TwitterMeta},
  presets::default_preset,
  schema::JsonLdSchema,
  value::{Media, OgType, OneOrMany, TwitterCard},
};

#[must_use]
pub fn create_base_seo(base: BaseMeta) -> SeoConfig {
  SeoConfig {
    base: Some(base),
    ..Default::default()
  }
}

#[must_use]
pub fn create_open_graph(open_graph: OpenGraphMeta) -> SeoConfig {
  SeoConfig {
    open_graph: Some(open_graph),
    ..Default::default()
  }
}

#[must_use]
pub fn create_twitter_card(twitter: TwitterMeta) -> SeoConfig {
  SeoConfig {
    twitter: Some(twitter),
    ..Default::default()
  }
}

#[must_use]
pub fn create_facebook(facebook: FacebookMeta) -> SeoConfig {
  SeoConfig {
    facebook: Some(facebook),
    ..Default::default()
  }
}

#[must_use]
pub fn create_article(article: ArticleMeta) -> SeoConfig {
  SeoConfig {
    article: Some(article),
    ..Default::default()
  }
}

#[must_use]
pub fn create_json_ld(schema: impl Into<JsonLd>) -> SeoConfig {
  SeoConfig {
    json_ld: Some(schema.into()),
    ..Default::default()
  }
}

/// Merge `config` over the default preset (viewport, charset, robots).
#[must_use]
pub fn create_seo_config(config: &SeoConfig) -> SeoConfig {
  merge(&default_preset(), config)
}

/// Inputs for [`create_article_seo`].
#[derive(Debug, Clone, Default)]
pub struct ArticleSeoOptions {
  pub title:          String,
  pub description:    String,
  pub url:            String,
  pub image:          String,
  pub author:         String,
  pub published_time: String,
  pub modified_time:  Option<String>,
  pub section:        Option<String>,
  pub tags:           Option<Vec<String>>,
  pub site_name:      Option<String>,
  pub twitter_handle: Option<String>,
}

/// Full configuration for a blog post or news article.
#[must_use]
pub fn create_article_seo(options: ArticleSeoOptions) -> SeoConfig {
  let date_modified = options
    .modified_time
    .clone()
    .unwrap_or_else(|| options.published_time.clone());

  let schema = JsonLdSchema::new("Article")
    .with("headline", options.title.as_str())
    .with("description", options.description.as_str())
    .with("image", options.image.as_str())
    .with("author", json!({ "@type": "Person", "name": options.author }))
    .with("datePublished", options.published_time.as_str())
    .with("dateModified", date_modified);

  create_seo_config(&SeoConfig {
    base: Some(BaseMeta {
      title: Some(options.title.clone()),
      description: Some(options.description.clone()),
      canonical: Some(options.url.clone()),
      ..Default::default()
    }),
    open_graph: Some(OpenGraphMeta {
      og_type: Some(OgType::Article),
      title: Some(options.title.clone()),
      description: Some(options.description.clone()),
      url: Some(options.url),
      image: Some(OneOrMany::One(Media::Url(options.image.clone()))),
      site_name: options.site_name,
      ..Default::default()
    }),
    article: Some(ArticleMeta {
      published_time: Some(options.published_time),
      modified_time: options.modified_time,
      author: Some(OneOrMany::One(options.author)),
      section: options.section,
      tag: options.tags.map(OneOrMany::Many),
      ..Default::default()
    }),
    twitter: Some(TwitterMeta {
      card: Some(TwitterCard::SummaryLargeImage),
      title: Some(options.title),
      description: Some(options.description),
      image: Some(Media::Url(options.image)),
      creator: options.twitter_handle,
      ..Default::default()
    }),
    json_ld: Some(OneOrMany::One(schema)),
    ..Default::default()
  })
}

/// Stock state of a product offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
  #[default]
  InStock,
  OutOfStock,
  PreOrder,
}

impl Availability {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::InStock => "InStock",
      Self::OutOfStock => "OutOfStock",
      Self::PreOrder => "PreOrder",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
  pub value: f64,
  pub count: u64,
}

/// Inputs for [`create_product_seo`].
#[derive(Debug, Clone, Default)]
pub struct ProductSeoOptions {
  pub name:         String,
  pub description:  String,
  pub url:          String,
  pub image:        OneOrMany<String>,
  pub price:        String,
  pub currency:     String,
  pub availability: Option<Availability>,
  pub brand:        Option<String>,
  pub rating:       Option<Rating>,
}

/// Whole numbers are written without a fractional part, as a browser would.
#[allow(
  clippy::cast_possible_truncation,
  clippy::float_cmp,
  clippy::cast_precision_loss,
  reason = "Guarded by the round-trip check"
)]
fn number_value(value: f64) -> Value {
  let whole = value as i64;
  if whole as f64 == value {
    json!(whole)
  } else {
    json!(value)
  }
}

/// Full configuration for a product page.
#[must_use]
pub fn create_product_seo(options: ProductSeoOptions) -> SeoConfig {
  let images: Vec<String> = options.image.as_slice().to_vec();
  let primary_image = images.first().cloned();

  let availability = options.availability.unwrap_or_default();
  let schema = JsonLdSchema::new("Product")
    .with("name", options.name.as_str())
    .with("description", options.description.as_str())
    .with("image", images)
    .with_opt(
      "brand",
      options
        .brand
        .map(|brand| json!({ "@type": "Brand", "name": brand })),
    )
    .with(
      "offers",
      json!({
        "@type": "Offer",
        "price": options.price,
        "priceCurrency": options.currency,
        "availability": format!("https://schema.org/{}", availability.as_str()),
      }),
    )
    .with_opt(
      "aggregateRating",
      options.rating.map(|rating| {
        json!({
          "@type": "AggregateRating",
          "ratingValue": number_value(rating.value),
          "reviewCount": rating.count,
        })
      }),
    );

  create_seo_config(&SeoConfig {
    base: Some(BaseMeta {
      title: Some(options.name.clone()),
      description: Some(options.description.clone()),
      canonical: Some(options.url.clone()),
      ..Default::default()
    }),
    open_graph: Some(OpenGraphMeta {
      og_type: Some(OgType::Website),
      title: Some(options.name.clone()),
      description: Some(options.description.clone()),
      url: Some(options.url),
      image: primary_image.clone().map(|url| OneOrMany::One(Media::Url(url))),
      ..Default::default()
    }),
    twitter: Some(TwitterMeta {
      card: Some(TwitterCard::SummaryLargeImage),
      title: Some(options.name),
      description: Some(options.description),
      image: primary_image.map(Media::Url),
      ..Default::default()
    }),
    json_ld: Some(OneOrMany::One(schema)),
    ..Default::default()
  })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPoint {
  pub telephone:    String,
  pub contact_type: String,
}

/// Inputs for [`create_organization_seo`].
#[derive(Debug, Clone, Default)]
pub struct OrganizationSeoOptions {
  pub name:            String,
  pub description:     String,
  pub url:             String,
  pub logo:            String,
  pub social_profiles: Option<Vec<String>>,
  pub contact_point:   Option<ContactPoint>,
}

/// Full configuration for an organization's home page.
///
/// Produces two structured-data records: the organization and its website.
#[must_use]
pub fn create_organization_seo(options: OrganizationSeoOptions) -> SeoConfig {
  let organization = JsonLdSchema::new("Organization")
    .with("name", options.name.as_str())
    .with("url", options.url.as_str())
    .with("logo", options.logo.as_str())
    .with_opt("sameAs", options.social_profiles)
    .with_opt(
      "contactPoint",
      options.contact_point.map(|contact| {
        json!({
          "@type": "ContactPoint",
          "telephone": contact.telephone,
          "contactType": contact.contact_type,
        })
      }),
    );
  let website = JsonLdSchema::new("WebSite")
    .with("name", options.name.as_str())
    .with("url", options.url.as_str());

  create_seo_config(&SeoConfig {
    base: Some(BaseMeta {
      title: Some(options.name.clone()),
      description: Some(options.description.clone()),
      canonical: Some(options.url.clone()),
      ..Default::default()
    }),
    open_graph: Some(OpenGraphMeta {
      og_type: Some(OgType::Website),
      title: Some(options.name.clone()),
      description: Some(options.description.clone()),
      url: Some(options.url),
      image: Some(OneOrMany::One(Media::Url(options.logo.clone()))),
      ..Default::default()
    }),
    twitter: Some(TwitterMeta {
      card: Some(TwitterCard::Summary),
      title: Some(options.name),
      description: Some(options.description),
      image: Some(Media::Url(options.logo)),
      ..Default::default()
    }),
    json_ld: Some(OneOrMany::Many(vec![organization, website])),
    ..Default::default()
  })
}
