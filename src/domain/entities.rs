use crate::domain::errors::TraceError;
use crate::domain::value_objects::Url;
use hyper::StatusCode;
use serde::Serialize;

/// One HTTP exchange in a redirect chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub status: u16,
    pub from: String,
    /// Absolute redirect target, `None` on the terminal hop
    pub to: Option<String>,
}

impl Hop {
    pub fn redirect(status: StatusCode, from: &Url, to: &Url) -> Self {
        Self {
            status: status.as_u16(),
            from: from.to_string(),
            to: Some(to.to_string()),
        }
    }

    pub fn terminal(status: StatusCode, from: &Url) -> Self {
        Self {
            status: status.as_u16(),
            from: from.to_string(),
            to: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.to.is_none()
    }
}

/// Hops in the order they were requested
///
/// Only the tracer appends; once handed out a trace is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    hops: Vec<Hop>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, hop: Hop) {
        self.hops.push(hop);
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn final_hop(&self) -> Option<&Hop> {
        self.hops.last()
    }

    /// Number of redirects followed, i.e. every hop but the terminal one
    pub fn redirect_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hop> {
        self.hops.iter()
    }
}

impl FromIterator<Hop> for Trace {
    fn from_iter<I: IntoIterator<Item = Hop>>(iter: I) -> Self {
        Self {
            hops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

/// Outcome of tracing a URL: every hop, or the failure that aborted it
pub type TraceResult = Result<Trace, TraceError>;

/// Represents an HTTP response as seen by the tracer
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    /// Raw `Location` header value, if the server sent one
    pub location: Option<String>,
    /// The URL that was actually requested
    pub url: Url,
}

impl Response {
    /// 301, 302, 303, 307 and 308 are followed. 300, 304 and 305 are not.
    pub fn is_redirect(&self) -> bool {
        matches!(
            self.status,
            StatusCode::MOVED_PERMANENTLY
                | StatusCode::FOUND
                | StatusCode::SEE_OTHER
                | StatusCode::TEMPORARY_REDIRECT
                | StatusCode::PERMANENT_REDIRECT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> Response {
        Response {
            status: StatusCode::from_u16(status).unwrap(),
            location: None,
            url: Url::new("http://example.com/").unwrap(),
        }
    }

    #[test]
    fn test_redirect_statuses() {
        for status in [301, 302, 303, 307, 308] {
            assert!(response(status).is_redirect(), "{status} should redirect");
        }
        for status in [200, 300, 304, 305, 404, 500] {
            assert!(!response(status).is_redirect(), "{status} should not redirect");
        }
    }

    #[test]
    fn test_trace_serializes_as_array() {
        let from = Url::new("http://bit.ly/x").unwrap();
        let to = Url::new("http://example.com/y").unwrap();
        let trace: Trace = [
            Hop::redirect(StatusCode::MOVED_PERMANENTLY, &from, &to),
            Hop::terminal(StatusCode::OK, &to),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json[0]["status"], 301);
        assert_eq!(json[0]["to"], "http://example.com/y");
        assert!(json[1]["to"].is_null());
        assert_eq!(trace.redirect_count(), 1);
    }
}
