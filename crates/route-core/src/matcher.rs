//! Path Matching
//!
//! Exact matching on a canonical form of the path. By default a single
//! trailing slash is ignored and comparison is case-insensitive.

/// Matching switches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Trailing slash is significant
    pub strict: bool,

    /// Comparison is case-sensitive
    pub sensitive: bool,
}

/// Canonical form of `path` under `options`
///
/// Two paths match when their canonical forms are equal. The empty path is
/// the root.
pub fn canonical(path: &str, options: MatchOptions) -> String {
    let mut path = if path.is_empty() { "/" } else { path };

    if !options.strict && path.len() > 1 {
        if let Some(trimmed) = path.strip_suffix('/') {
            path = trimmed;
        }
    }

    if options.sensitive {
        path.to_string()
    } else {
        path.to_lowercase()
    }
}

/// Whether `path` matches `pattern`
pub fn matches(pattern: &str, path: &str, options: MatchOptions) -> bool {
    canonical(pattern, options) == canonical(path, options)
}
