//! Router Configuration

use serde::Serialize;

use crate::matcher::MatchOptions;

/// Environment variable holding the deployment base path
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Router configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouterConfig {
    /// Normalized base path ("" for the site root, otherwise "/segment...")
    base: String,

    /// Trailing slash is significant when matching
    pub strict: bool,

    /// Path matching is case-sensitive
    pub sensitive: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            strict: false,
            sensitive: false,
        }
    }
}

impl RouterConfig {
    /// Configuration rooted at `base`
    pub fn with_base(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            ..Default::default()
        }
    }

    /// Read the base path from `BASE_URL`, defaulting to the site root
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = lookup(BASE_URL_ENV).unwrap_or_else(|| "/".into());
        Self::with_base(&base)
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Normalized base path
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            strict: self.strict,
            sensitive: self.sensitive,
        }
    }
}

/// Normalize a deployment base path
///
/// Drops surrounding whitespace, any `scheme://host` prefix and relative
/// dots, ensures a leading slash and removes trailing slashes. The site root
/// normalizes to the empty string.
pub fn normalize_base(base: &str) -> String {
    let mut base = base.trim();

    if let Some(idx) = base.find("://") {
        let rest = &base[idx + 3..];
        base = rest.find('/').map_or("", |slash| &rest[slash..]);
    }

    let base = base.trim_start_matches('.');
    let mut normalized = if base.starts_with('/') {
        base.to_string()
    } else {
        format!("/{base}")
    };

    while normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}
