use thiserror::Error;

/// Reasons a redirect trace can fail. A failed trace carries no hops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Connection, DNS, TLS or protocol failure for a single exchange.
    #[error("Error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The start URL or a `Location` value could not be resolved.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Exceeded the maximum of {limit} redirects")]
    TooManyRedirects { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display_names_url() {
        let err = TraceError::Network {
            url: "http://bit.ly/x".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Error fetching http://bit.ly/x: connection refused");
    }

    #[test]
    fn test_too_many_redirects_display() {
        let err = TraceError::TooManyRedirects { limit: 5 };
        assert_eq!(err.to_string(), "Exceeded the maximum of 5 redirects");
    }
}
