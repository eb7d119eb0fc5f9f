use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Prints the report, or writes it to `path` as UTF-8 and says where it went
pub fn write_report(report: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            save_report(report, path)?;
            println!("{} {}", "Report saved to".green(), path.display());
        }
        None => println!("{}", report),
    }
    Ok(())
}

fn save_report(report: &str, path: &Path) -> Result<()> {
    std::fs::write(path, report).context("Error saving report")
}
