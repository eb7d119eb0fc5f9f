//! Rendering of a traced redirect chain into display text.

pub mod paint;
pub mod table;

use crate::domain::entities::{Trace, TraceResult};
use anyhow::{Result, anyhow};
use paint::{Paint, paint};
use serde_json::json;
use std::str::FromStr;
use table::FINAL_MARKER;

/// Shown in place of a report when the trace failed
pub const ERROR_REPORT: &str = "No redirects logged due to error.";

/// Layout of a successful report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    /// Aligned `Step | Status | From URL | To URL` columns
    #[default]
    Table,
    /// One `n. from --[status]--> to` line per hop
    Arrow,
    /// Pretty-printed JSON, never colorized
    Json,
}

impl FromStr for ReportStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportStyle::Table),
            "arrow" => Ok(ReportStyle::Arrow),
            "json" => Ok(ReportStyle::Json),
            other => Err(anyhow!(
                "Unsupported report style: '{}' (expected table, arrow or json)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub colorize: bool,
    pub style: ReportStyle,
}

/// Application service turning a trace outcome into report text
///
/// Formatting never fails and never touches the trace.
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn format(&self, url: &str, result: &TraceResult) -> String {
        let Ok(trace) = result else {
            return ERROR_REPORT.to_string();
        };

        let colorize = self.options.colorize;
        let mut lines = vec![format!(
            "{} {}:",
            paint("Redirect chain for", Paint::Bold, colorize),
            paint(url, Paint::Cyan, colorize)
        )];

        match self.options.style {
            ReportStyle::Json => return format!("{:#}", json!({ "url": url, "hops": trace })),
            ReportStyle::Table => table::render(&mut lines, trace, colorize),
            ReportStyle::Arrow => render_arrows(&mut lines, trace, colorize),
        }

        lines.join("\n")
    }
}

fn render_arrows(lines: &mut Vec<String>, trace: &Trace, colorize: bool) {
    for (index, hop) in trace.iter().enumerate() {
        let status = paint(
            &format!("[{}]", hop.status),
            Paint::for_status(hop.status),
            colorize,
        );
        let to = match &hop.to {
            Some(to) => paint(to, Paint::Magenta, colorize),
            None => paint(FINAL_MARKER, Paint::Green, colorize),
        };
        lines.push(format!(
            "{} {} --{}--> {}",
            paint(&format!("{}.", index + 1), Paint::Yellow, colorize),
            paint(&hop.from, Paint::Blue, colorize),
            status,
            to
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Hop;
    use crate::domain::errors::TraceError;
    use paint::strip_ansi;

    fn sample() -> TraceResult {
        Ok([
            Hop {
                status: 301,
                from: "http://bit.ly/x".to_string(),
                to: Some("http://example.com/y".to_string()),
            },
            Hop {
                status: 200,
                from: "http://example.com/y".to_string(),
                to: None,
            },
        ]
        .into_iter()
        .collect())
    }

    fn formatter(style: ReportStyle, colorize: bool) -> ReportFormatter {
        ReportFormatter::new(ReportOptions { colorize, style })
    }

    #[test]
    fn test_arrow_report() {
        let report = formatter(ReportStyle::Arrow, false).format("http://bit.ly/x", &sample());
        assert_eq!(
            report,
            "Redirect chain for http://bit.ly/x:\n\
             1. http://bit.ly/x --[301]--> http://example.com/y\n\
             2. http://example.com/y --[200]--> (final)"
        );
    }

    #[test]
    fn test_table_report_starts_with_header_and_blank_line() {
        let report = formatter(ReportStyle::Table, false).format("http://bit.ly/x", &sample());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Redirect chain for http://bit.ly/x:");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("Step  Status  From URL"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_colorized_arrow_line() {
        let report = formatter(ReportStyle::Arrow, true).format("http://bit.ly/x", &sample());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[0],
            "\x1b[1mRedirect chain for\x1b[0m \x1b[96mhttp://bit.ly/x\x1b[0m:"
        );
        assert_eq!(
            lines[1],
            "\x1b[93m1.\x1b[0m \x1b[94mhttp://bit.ly/x\x1b[0m --\x1b[93m[301]\x1b[0m--> \x1b[95mhttp://example.com/y\x1b[0m"
        );
        assert!(lines[2].ends_with("--\x1b[92m[200]\x1b[0m--> \x1b[92m(final)\x1b[0m"));
    }

    #[test]
    fn test_stripping_color_yields_plain_report() {
        for style in [ReportStyle::Table, ReportStyle::Arrow] {
            let plain = formatter(style, false).format("http://bit.ly/x", &sample());
            let colored = formatter(style, true).format("http://bit.ly/x", &sample());
            assert_ne!(plain, colored);
            assert_eq!(strip_ansi(&colored), plain);
        }
    }

    #[test]
    fn test_failure_report_ignores_options() {
        let failure: TraceResult = Err(TraceError::Network {
            url: "http://bit.ly/x".to_string(),
            message: "dns error".to_string(),
        });
        for style in [ReportStyle::Table, ReportStyle::Arrow, ReportStyle::Json] {
            for colorize in [true, false] {
                assert_eq!(
                    formatter(style, colorize).format("http://bit.ly/x", &failure),
                    "No redirects logged due to error."
                );
            }
        }
    }

    #[test]
    fn test_json_report() {
        let report = formatter(ReportStyle::Json, true).format("http://bit.ly/x", &sample());
        assert!(!report.contains('\x1b'));

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["url"], "http://bit.ly/x");
        assert_eq!(value["hops"][0]["status"], 301);
        assert_eq!(value["hops"][1]["from"], "http://example.com/y");
        assert!(value["hops"][1]["to"].is_null());
    }

    #[test]
    fn test_status_colors_in_report() {
        let trace: TraceResult = Ok([Hop {
            status: 503,
            from: "http://example.com/".to_string(),
            to: None,
        }]
        .into_iter()
        .collect());
        let report = formatter(ReportStyle::Arrow, true).format("http://example.com/", &trace);
        assert!(report.contains("\x1b[91m[503]\x1b[0m"));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("TABLE".parse::<ReportStyle>().unwrap(), ReportStyle::Table);
        assert_eq!("arrow".parse::<ReportStyle>().unwrap(), ReportStyle::Arrow);
        assert!("csv".parse::<ReportStyle>().is_err());
    }
}
