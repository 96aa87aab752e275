//! Path helpers: slug derivation and route pattern matching
//!
//! Both are pure so the navbar's link targets and highlighting can be tested
//! without a browser.

/// Derive the catalog slug for a category name.
///
/// Spaces become hyphens and the result is lowercased. Nothing else is
/// normalised: punctuation, repeated spaces and non-ASCII characters pass
/// through as they are.
pub fn slugify(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

/// Storefront path of a category's catalog page
pub fn catalog_path(name: &str) -> String {
    format!("/catalog/{}", slugify(name))
}

/// Result of a successful [`match_path`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMatch {
    params: Vec<(String, String)>,
}

impl PathMatch {
    /// Value captured for a `:name` segment (or `*` for a trailing splat)
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

fn segments(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

/// Match `pathname` against a route `pattern`.
///
/// Matching is per segment and covers the whole path:
/// - static segments compare case-insensitively,
/// - `:name` matches exactly one non-empty segment and captures it,
/// - a final `*` matches the remainder (possibly empty),
/// - one trailing slash on either side is ignored.
///
/// `/catalog` does not match `/catalog/:catalogName`, and `/catalogue/x`
/// never matches `/catalog/...`.
pub fn match_path(pattern: &str, pathname: &str) -> Option<PathMatch> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(pathname);
    let mut params = Vec::new();

    for (index, pattern_segment) in pattern_segments.iter().enumerate() {
        if *pattern_segment == "*" && index == pattern_segments.len() - 1 {
            let rest = path_segments.get(index..).unwrap_or_default().join("/");
            params.push(("*".to_string(), rest));
            return Some(PathMatch { params });
        }

        let path_segment = path_segments.get(index)?;

        if let Some(name) = pattern_segment.strip_prefix(':') {
            if path_segment.is_empty() {
                return None;
            }
            params.push((name.to_string(), path_segment.to_string()));
        } else if pattern_segment.to_lowercase() != path_segment.to_lowercase() {
            return None;
        }
    }

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    Some(PathMatch { params })
}
