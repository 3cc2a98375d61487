pub mod json;
pub mod junit;
pub mod types;

use anyhow::{Context, Result};
use std::path::Path;

use types::SmokeReport;

/// Write the JSON and JUnit reports into `output_dir`
pub fn write_reports(report: &SmokeReport, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir).context(format!(
        "Failed to create output directory: {}",
        output_dir.display()
    ))?;

    json::write_report(report, output_dir)?;
    junit::write_report(report, output_dir)?;
    Ok(())
}
