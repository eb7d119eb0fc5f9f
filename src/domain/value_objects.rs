use crate::domain::errors::TraceError;
use std::fmt;

/// Represents a validated absolute http(s) URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url(pub url::Url);

impl Url {
    /// Creates a new Url with validation
    ///
    /// # Arguments
    /// * `url` - The URL string to parse
    ///
    /// # Returns
    /// * `Ok(Url)` - Validated URL
    /// * `Err(TraceError::InvalidUrl)` - If the URL is not an absolute http(s) URL
    pub fn new(url: &str) -> Result<Self, TraceError> {
        let parsed = url::Url::parse(url).map_err(|e| TraceError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Self::checked(parsed, url)
    }

    /// Resolves a `Location` value against this URL
    ///
    /// Absolute locations replace the URL, path-absolute ones keep the
    /// scheme and authority, relative ones are joined with the current path.
    pub fn join(&self, location: &str) -> Result<Self, TraceError> {
        let joined = self.0.join(location).map_err(|e| TraceError::InvalidUrl {
            url: location.to_string(),
            reason: e.to_string(),
        })?;
        Self::checked(joined, location)
    }

    fn checked(parsed: url::Url, raw: &str) -> Result<Self, TraceError> {
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TraceError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(TraceError::InvalidUrl {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }
        Ok(Url(parsed))
    }

    /// Returns the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_https(&self) -> bool {
        self.0.scheme() == "https"
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
