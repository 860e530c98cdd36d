//! Files embedded into headmeta at build time.

/// Starter configuration written by `headmeta init --format toml`.
pub const DEFAULT_TOML_CONFIG: &str = include_str!("../templates/headmeta.toml");

/// Starter configuration written by `headmeta init --format json`.
pub const DEFAULT_JSON_CONFIG: &str = include_str!("../templates/headmeta.json");

/// Tera template for standalone documents; receives `lang`, `charset`, `head`
/// and `body`.
pub const DOCUMENT_TEMPLATE: &str = include_str!("../templates/document.html");
