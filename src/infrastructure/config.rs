use crate::application::report::{ReportOptions, ReportStyle};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Redirects followed before giving up, unless overridden on the command line
pub const DEFAULT_MAX_REDIRECTS: usize = 30;

/// Runtime settings resolved from command-line flags and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub output: Option<PathBuf>,
    pub colorize: bool,
    pub style: ReportStyle,
    /// `None` means no limit
    pub max_redirects: Option<usize>,
}

impl Config {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            colorize: self.colorize,
            style: self.style,
        }
    }
}

/// Whether color should default on for stdout
pub fn supports_color() -> bool {
    color_allowed(
        std::io::stdout().is_terminal(),
        std::env::var("NO_COLOR").ok().as_deref(),
        std::env::var("TERM").ok().as_deref(),
    )
}

/// An interactive terminal that is not `dumb`, with `NO_COLOR` unset or empty
pub fn color_allowed(is_tty: bool, no_color: Option<&str>, term: Option<&str>) -> bool {
    if !is_tty {
        return false;
    }
    if no_color.is_some_and(|value| !value.is_empty()) {
        return false;
    }
    term != Some("dumb")
}

/// `0` on the command line disables the limit
pub fn redirect_limit(max_redirects: usize) -> Option<usize> {
    (max_redirects > 0).then_some(max_redirects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_requires_terminal() {
        assert!(!color_allowed(false, None, Some("xterm-256color")));
        assert!(color_allowed(true, None, Some("xterm-256color")));
    }

    #[test]
    fn test_no_color_disables() {
        assert!(!color_allowed(true, Some("1"), Some("xterm")));
        assert!(color_allowed(true, Some(""), Some("xterm")));
    }

    #[test]
    fn test_dumb_terminal_disables() {
        assert!(!color_allowed(true, None, Some("dumb")));
        assert!(color_allowed(true, None, None));
    }

    #[test]
    fn test_redirect_limit() {
        assert_eq!(redirect_limit(0), None);
        assert_eq!(redirect_limit(30), Some(30));
    }

    #[test]
    fn test_report_options_follow_config() {
        let config = Config {
            url: "http://example.com/".to_string(),
            output: None,
            colorize: true,
            style: ReportStyle::Arrow,
            max_redirects: Some(DEFAULT_MAX_REDIRECTS),
        };
        assert_eq!(
            config.report_options(),
            ReportOptions {
                colorize: true,
                style: ReportStyle::Arrow,
            }
        );
    }
}
