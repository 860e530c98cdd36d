//! Request-side helpers for servers that render head markup.

use headmeta_config::SeoConfig;

use crate::scope::RenderScope;

/// Values attached to a request for downstream handlers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locals {
  /// Site-wide metadata defaults for this request.
  pub seo: Option<SeoConfig>,
}

/// Request handler stage that seeds every request with default metadata.
#[derive(Debug, Clone, Default)]
pub struct SeoHandle {
  default_config: Option<SeoConfig>,
}

impl SeoHandle {
  #[must_use]
  pub const fn new(default_config: Option<SeoConfig>) -> Self {
    Self { default_config }
  }

  /// Attach the defaults to `locals`, then continue with `resolve`.
  ///
  /// Without defaults the locals are passed on untouched.
  pub fn handle<R>(
    &self,
    locals: &mut Locals,
    resolve: impl FnOnce(&mut Locals) -> R,
  ) -> R {
    if let Some(config) = &self.default_config {
      locals.seo = Some(config.clone());
    }
    resolve(locals)
  }

  /// Attach the defaults and open a render scope seeded from them.
  #[must_use]
  pub fn begin_render(&self, locals: &mut Locals) -> RenderScope {
    self.handle(locals, |locals| RenderScope::from_locals(locals))
  }
}

/// Path component of a request target, without query or fragment.
fn pathname(path: &str) -> &str {
  let end = path.find(['?', '#']).unwrap_or(path.len());
  match &path[..end] {
    "" => "/",
    pathname => pathname,
  }
}

/// Canonical URL for a request: `base_url` (or the request origin) followed
/// by the request path.
#[must_use]
pub fn canonical_url(origin: &str, path: &str, base_url: Option<&str>) -> String {
  let prefix = base_url.unwrap_or(origin);
  format!("{prefix}{}", pathname(path))
}

/// Absolute URL for an Open Graph image; absolute inputs are returned as is.
#[must_use]
pub fn og_image_url(origin: &str, image_path: &str) -> String {
  if image_path.starts_with("http") {
    return image_path.to_string();
  }
  let separator = if image_path.starts_with('/') { "" } else { "/" };
  format!("{origin}{separator}{image_path}")
}
