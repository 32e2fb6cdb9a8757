//! Resource URL validation and endpoint construction.
//!
//! Every request goes to an absolute `http`/`https` URL. Endpoint URLs are
//! built by appending path segments to the configured API base.

use url::Url;

/// Errors that can occur while validating or building a resource URL.
#[derive(Debug, thiserror::Error)]
pub enum ResourceUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL cannot be used as a base: {0}")]
    CannotBeABase(String),
}

/// Parses an absolute resource URL.
///
/// # Errors
///
/// Returns [`ResourceUrlError::InvalidFormat`] for relative or malformed URLs.
/// Returns [`ResourceUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert!(parse_resource_url("https://pokeapi.co/api/v2/ability/65/").is_ok());
/// assert!(parse_resource_url("/api/v2/ability/65/").is_err());
/// ```
pub fn parse_resource_url(input: &str) -> Result<Url, ResourceUrlError> {
    let url = Url::parse(input).map_err(|e| ResourceUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ResourceUrlError::UnsupportedProtocol),
    }
}

/// Appends path segments to `base`, percent-encoding each segment.
///
/// A trailing slash on the base is ignored, so `https://host/api/v2` and
/// `https://host/api/v2/` produce the same endpoint.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     endpoint_url("https://pokeapi.co/api/v2", &["pokemon", "pichu"]).unwrap(),
///     "https://pokeapi.co/api/v2/pokemon/pichu"
/// );
/// ```
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<String, ResourceUrlError> {
    let mut url = parse_resource_url(base)?;

    url.path_segments_mut()
        .map_err(|_| ResourceUrlError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url.to_string())
}
