use super::types::SmokeReport;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "smoke-results.json";

/// Write JSON report
pub fn write_report(report: &SmokeReport, output_dir: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(report)?;
    let path = output_dir.join(FILE_NAME);
    std::fs::write(&path, json).context(format!("Failed to write {}", path.display()))?;

    log::debug!("wrote JSON report to {}", path.display());
    println!(
        "{} JSON report saved to: {}",
        "📄".to_string().blue(),
        path.display().to_string().cyan()
    );
    Ok(path)
}
