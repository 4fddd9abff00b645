//! Canonical URL building and site URL validation.
//!
//! [`build_canonical_url`] is deliberately string-based and never fails: the
//! engine accepts whatever base URL the caller hands it. Validation of the
//! configured site URL happens once, at the edge, through [`validate_site_url`].

use url::Url;

/// Errors that can occur while validating a configured site URL.
#[derive(Debug, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Site URL must include a host")]
    MissingHost,
}

/// Joins a base site URL and an optional path into a canonical URL.
///
/// Exactly one trailing `/` is removed from `site_url`. A present, non-empty
/// `path` is appended verbatim and is expected to start with `/`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(build_canonical_url("https://site.com/", None), "https://site.com");
/// assert_eq!(build_canonical_url("https://site.com", Some("/about")), "https://site.com/about");
/// ```
pub fn build_canonical_url(site_url: &str, path: Option<&str>) -> String {
    let base = site_url.strip_suffix('/').unwrap_or(site_url);

    match path {
        Some(p) if !p.is_empty() => format!("{base}{p}"),
        _ => base.to_string(),
    }
}

/// Checks that a site URL is an absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// Returns [`SiteUrlError::InvalidFormat`] for unparsable input,
/// [`SiteUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`SiteUrlError::MissingHost`] when no host is present.
pub fn validate_site_url(input: &str) -> Result<(), SiteUrlError> {
    let url = Url::parse(input).map_err(|e| SiteUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(SiteUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(SiteUrlError::MissingHost);
    }

    Ok(())
}
