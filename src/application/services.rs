use crate::domain::entities::{Hop, Response, Trace, TraceResult};
use crate::domain::errors::TraceError;
use crate::domain::value_objects::Url;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};

/// Trait for HTTP clients to enable mocking and dependency inversion
///
/// Implementations issue exactly one GET and must not follow redirects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Response>;
}

/// Application service that walks a redirect chain hop by hop
pub struct RedirectTracer {
    http_client: Box<dyn HttpClient>,
    max_redirects: Option<usize>,
}

impl RedirectTracer {
    /// Creates a tracer with no limit on the number of redirects
    pub fn new(http_client: Box<dyn HttpClient>) -> Self {
        Self {
            http_client,
            max_redirects: None,
        }
    }

    /// `None` follows redirects for as long as the server keeps sending them
    pub fn with_max_redirects(mut self, max_redirects: Option<usize>) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Follows redirects from `start` until a non-redirect response
    ///
    /// Any failure discards the hops collected so far.
    pub async fn trace(&self, start: &str) -> TraceResult {
        let start_url = Url::new(start)?;
        let mut trace = Trace::new();
        let mut response = self.fetch(&start_url).await?;

        while response.is_redirect() {
            let Some(location) = response.location.as_deref().filter(|l| !l.is_empty()) else {
                warn!(
                    "Redirect status {} for {} but no Location header",
                    response.status.as_u16(),
                    response.url
                );
                break;
            };

            if let Some(limit) = self.max_redirects.filter(|&limit| trace.len() >= limit) {
                return Err(TraceError::TooManyRedirects { limit });
            }

            let next = response.url.join(location)?;
            debug!("[{}] {} -> {}", response.status.as_u16(), response.url, next);
            trace.push(Hop::redirect(response.status, &response.url, &next));
            response = self.fetch(&next).await?;
        }

        debug!("[{}] {} (final)", response.status.as_u16(), response.url);
        trace.push(Hop::terminal(response.status, &response.url));
        Ok(trace)
    }

    async fn fetch(&self, url: &Url) -> Result<Response, TraceError> {
        self.http_client
            .get(url)
            .await
            .map_err(|e| TraceError::Network {
                url: url.to_string(),
                message: format!("{e:#}"),
            })
    }
}
