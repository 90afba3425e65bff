//! URL slash normalization.
//!
//! Joins a base URL with relative paths without ever doubling or dropping
//! the boundary slash.

/// Remove a single leading and a single trailing slash, if present.
///
/// Only the boundary characters are stripped, never repeated slashes.
///
/// # Examples
///
/// ```
/// use siteplan_core::url::unslash;
///
/// assert_eq!(unslash("/a/"), "a");
/// assert_eq!(unslash("a"), "a");
/// assert_eq!(unslash("//a//"), "/a/");
/// ```
#[must_use]
pub fn unslash(s: &str) -> &str {
    let s = s.strip_prefix('/').unwrap_or(s);
    s.strip_suffix('/').unwrap_or(s)
}

/// Normalize to no leading slash and exactly one trailing slash.
///
/// # Examples
///
/// ```
/// use siteplan_core::url::adslash;
///
/// assert_eq!(adslash("a"), "a/");
/// assert_eq!(adslash("/a/"), "a/");
/// ```
#[must_use]
pub fn adslash(s: &str) -> String {
    format!("{}/", unslash(s))
}

/// Join a base URL and a relative path with exactly one slash between them.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{}", adslash(base), unslash(path))
}
