//! followme: follow a URL's HTTP redirect chain and report every hop.
//!
//! The [`RedirectTracer`](application::services::RedirectTracer) walks the
//! chain one non-following GET at a time and the
//! [`ReportFormatter`](application::report::ReportFormatter) renders it as
//! an aligned table, an arrow chain, or JSON.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
