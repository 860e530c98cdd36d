//! Per-render configuration state.
//!
//! A [`RenderScope`] holds the site defaults and the configuration being
//! assembled for one page. Each render creates its own scope, so concurrent
//! renders never share state.

use headmeta_config::{
  ArticleMeta,
  BaseMeta,
  FacebookMeta,
  JsonLd,
  LinkedInMeta,
  Merge,
  OpenGraphMeta,
  SeoConfig,
  TwitterMeta,
};
use headmeta_html::render_seo_tags;

use crate::request::Locals;

/// Defaults plus the current configuration of a single render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScope {
  defaults: SeoConfig,
  current:  SeoConfig,
}

impl RenderScope {
  /// Start a render with `defaults` as both the defaults and the current
  /// configuration.
  #[must_use]
  pub fn begin(defaults: SeoConfig) -> Self {
    Self {
      current: defaults.clone(),
      defaults,
    }
  }

  /// Start a render from the defaults attached to the request, if any.
  #[must_use]
  pub fn from_locals(locals: &Locals) -> Self {
    Self::begin(locals.seo.clone().unwrap_or_default())
  }

  /// Replace the defaults and make them current.
  pub fn set_default(&mut self, config: SeoConfig) {
    self.current = config.clone();
    self.defaults = config;
  }

  #[must_use]
  pub const fn config(&self) -> &SeoConfig {
    &self.current
  }

  #[must_use]
  pub const fn defaults(&self) -> &SeoConfig {
    &self.defaults
  }

  /// Set the current configuration to the defaults with `partial` on top,
  /// discarding earlier updates.
  pub fn update(&mut self, partial: SeoConfig) {
    self.current = self.defaults.clone();
    self.current.merge(partial);
    log::debug!("Render scope updated from defaults");
  }

  /// Merge `partial` on top of the current configuration.
  pub fn merge(&mut self, partial: SeoConfig) {
    self.current.merge(partial);
  }

  /// Drop every update and return to the defaults.
  pub fn reset(&mut self) {
    self.current = self.defaults.clone();
  }

  #[must_use]
  pub const fn base(&self) -> Option<&BaseMeta> {
    self.current.base.as_ref()
  }

  #[must_use]
  pub const fn open_graph(&self) -> Option<&OpenGraphMeta> {
    self.current.open_graph.as_ref()
  }

  #[must_use]
  pub const fn article(&self) -> Option<&ArticleMeta> {
    self.current.article.as_ref()
  }

  #[must_use]
  pub const fn twitter(&self) -> Option<&TwitterMeta> {
    self.current.twitter.as_ref()
  }

  #[must_use]
  pub const fn facebook(&self) -> Option<&FacebookMeta> {
    self.current.facebook.as_ref()
  }

  #[must_use]
  pub const fn linkedin(&self) -> Option<&LinkedInMeta> {
    self.current.linkedin.as_ref()
  }

  #[must_use]
  pub const fn json_ld(&self) -> Option<&JsonLd> {
    self.current.json_ld.as_ref()
  }

  /// Head markup for the current configuration.
  #[must_use]
  pub fn render(&self) -> String {
    render_seo_tags(&self.current)
  }

  /// End the render and hand back the resolved configuration.
  #[must_use]
  pub fn finish(self) -> SeoConfig {
    self.current
  }
}
