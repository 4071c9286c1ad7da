//! History Mode
//!
//! Path-based (not fragment-based) URL handling under a deployment base.
//! The browser keeps the history stack itself; these helpers translate
//! between its locations and route paths.

/// Route path addressed by a browser `location`
///
/// Drops `?query` and `#hash` and removes `base` when the path lies under it
/// (case-insensitive, on a segment boundary). Paths outside the base come
/// back unchanged and will normally fail to match.
pub fn strip_base(base: &str, location: &str) -> String {
    let path = location.split(['?', '#']).next().unwrap_or_default();

    let under_base = !base.is_empty()
        && path.len() >= base.len()
        && path.is_char_boundary(base.len())
        && path[..base.len()].eq_ignore_ascii_case(base)
        && matches!(path[base.len()..].chars().next(), None | Some('/'));

    let rest = if under_base { &path[base.len()..] } else { path };
    if rest.is_empty() {
        "/".into()
    } else {
        rest.into()
    }
}

/// Browser URL for a route path under `base`
pub fn join_base(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
