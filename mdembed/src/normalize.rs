//! URL normalization for candidate link text.
//!
//! Text without the `http` prefix is read as a schemeless address and gets
//! `https://` prepended. Whatever `url` can parse is returned in its
//! canonical serialization; everything else is not a URL.

use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Canonical absolute URL for `raw`, or `None` when it does not parse.
///
/// # Example
///
/// ```
/// use mdembed::normalize::normalize_url;
///
/// assert_eq!(normalize_url("some-site.com/config").as_deref(), Some("https://some-site.com/config"));
/// assert_eq!(normalize_url("not a url"), None);
/// ```
pub fn normalize_url(raw: &str) -> Option<String> {
    let candidate = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{raw}")
    };

    Url::parse(&candidate).ok().map(|url| url.to_string())
}
