use crate::application::services::{HttpClient, RedirectTracer};
use crate::domain::entities::Response;
use crate::domain::value_objects::Url;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use http::header::{CONNECTION, HOST, HeaderValue, LOCATION, USER_AGENT};
use http_body_util::Empty;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request as HyperRequest};
use hyper_util::rt::TokioIo;
use log::debug;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_native_tls::{TlsConnector, native_tls};
use url::Position;

const USER_AGENT_VALUE: &str = concat!("followme/", env!("CARGO_PKG_VERSION"));

/// Infrastructure implementation of HttpClient using Hyper
///
/// Opens one HTTP/1.1 connection per request and never follows redirects,
/// so the tracer sees every 3xx response as-is.
pub struct HyperHttpClient {
    tls: TlsConnector,
}

impl HyperHttpClient {
    pub fn new() -> Result<Self> {
        let tls = native_tls::TlsConnector::new().context("Failed to initialize TLS")?;
        Ok(Self {
            tls: TlsConnector::from(tls),
        })
    }

    /// Creates a redirect tracer backed by this client
    pub fn create_tracer(self) -> RedirectTracer {
        RedirectTracer::new(Box::new(self))
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn get(&self, url: &Url) -> Result<Response> {
        let hyper_request = RequestAdapter::to_hyper_request(url)?;
        let hyper_response = self.execute_http_request(url, hyper_request).await?;
        ResponseAdapter::to_domain_response(url, &hyper_response)
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        url: &Url,
        request: HyperRequest<Empty<Bytes>>,
    ) -> Result<hyper::Response<Incoming>> {
        let (host, port) = AddressAdapter::to_host_port(url)?;
        debug!("Connecting to {}:{}", host, port);
        let tcp = TcpStream::connect((host, port))
            .await
            .map_err(|e| anyhow!("Connection to {}:{} failed: {}", host, port, e))?;

        if url.is_https() {
            let tls = self
                .tls
                .connect(host, tcp)
                .await
                .map_err(|e| anyhow!("TLS handshake with {} failed: {}", host, e))?;
            Self::send_over(tls, request).await
        } else {
            Self::send_over(tcp, request).await
        }
    }

    async fn send_over<S>(
        stream: S,
        request: HyperRequest<Empty<Bytes>>,
    ) -> Result<hyper::Response<Incoming>>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| anyhow!("HTTP handshake failed: {}", e))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                debug!("Connection closed with error: {}", e);
            }
        });

        sender
            .send_request(request)
            .await
            .map_err(|e| anyhow!("HTTP request execution failed: {}", e))
    }
}

/// Adapter for converting domain URLs to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(url: &Url) -> Result<HyperRequest<Empty<Bytes>>> {
        let target = &url.0[Position::BeforePath..Position::AfterQuery];
        let authority = &url.0[Position::BeforeHost..Position::AfterPort];

        HyperRequest::builder()
            .method(Method::GET)
            .uri(target)
            .header(HOST, authority)
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .header(CONNECTION, HeaderValue::from_static("close"))
            .body(Empty::new())
            .map_err(|e| anyhow!("Failed to build HTTP request: {}", e))
    }
}

/// Adapter for converting Hyper responses to domain responses
struct ResponseAdapter;

impl ResponseAdapter {
    /// Only the status line and headers matter; the body is never read.
    fn to_domain_response(
        url: &Url,
        hyper_response: &hyper::Response<Incoming>,
    ) -> Result<Response> {
        let location = hyper_response
            .headers()
            .get(LOCATION)
            .map(|value| {
                value
                    .to_str()
                    .map(str::to_string)
                    .map_err(|e| anyhow!("Location header is not valid text: {}", e))
            })
            .transpose()?;

        Ok(Response {
            status: hyper_response.status(),
            location,
            url: url.clone(),
        })
    }
}

/// Adapter for extracting a connectable address from a domain URL
struct AddressAdapter;

impl AddressAdapter {
    fn to_host_port(url: &Url) -> Result<(&str, u16)> {
        let host = url
            .0
            .host_str()
            .ok_or_else(|| anyhow!("URL has no host: {}", url))?;
        let port = url
            .0
            .port_or_known_default()
            .ok_or_else(|| anyhow!("URL has no port: {}", url))?;
        // IPv6 literals come back bracketed
        Ok((host.trim_start_matches('[').trim_end_matches(']'), port))
    }
}
