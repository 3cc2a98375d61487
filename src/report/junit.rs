use super::types::SmokeReport;
use crate::runner::state::{ScenarioOutcome, ScenarioStatus};
use anyhow::{Context, Result};
use colored::Colorize;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "junit.xml";

const SUITE_NAME: &str = "webbot-smoke";

/// Generate JUnit XML report string from a smoke run
pub fn generate_junit_xml(report: &SmokeReport) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let scenarios = &report.summary.scenarios;
    let total_tests = scenarios.len().to_string();
    let failures = scenarios
        .iter()
        .filter(|s| matches!(s.status, ScenarioStatus::Failed { .. }))
        .count()
        .to_string();
    let skipped = scenarios
        .iter()
        .filter(|s| matches!(s.status, ScenarioStatus::Skipped { .. }))
        .count()
        .to_string();
    let total_duration: u64 = scenarios.iter().map(|s| s.duration_ms).sum();
    let time = seconds(total_duration);

    let mut suites_start = BytesStart::new("testsuites");
    suites_start.push_attribute(("name", SUITE_NAME));
    suites_start.push_attribute(("tests", total_tests.as_str()));
    suites_start.push_attribute(("failures", failures.as_str()));
    suites_start.push_attribute(("skipped", skipped.as_str()));
    suites_start.push_attribute(("time", time.as_str()));
    writer.write_event(Event::Start(suites_start))?;

    let mut suite_start = BytesStart::new("testsuite");
    suite_start.push_attribute(("name", report.base_url.as_str()));
    suite_start.push_attribute(("tests", total_tests.as_str()));
    suite_start.push_attribute(("failures", failures.as_str()));
    suite_start.push_attribute(("skipped", skipped.as_str()));
    suite_start.push_attribute(("id", report.session_id.as_str()));
    suite_start.push_attribute(("time", time.as_str()));
    suite_start.push_attribute(("timestamp", report.generated_at.as_str()));
    writer.write_event(Event::Start(suite_start))?;

    for scenario in scenarios {
        write_test_case(&mut writer, scenario)?;
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

    let result = writer.into_inner().into_inner();
    let xml = String::from_utf8(result)?;
    Ok(xml)
}

fn seconds(ms: u64) -> String {
    (ms as f64 / 1000.0).to_string()
}

fn write_test_case<W: std::io::Write>(
    writer: &mut Writer<W>,
    scenario: &ScenarioOutcome,
) -> Result<()> {
    let mut case_start = BytesStart::new("testcase");
    let time = seconds(scenario.duration_ms);
    case_start.push_attribute(("name", scenario.name.as_str()));
    case_start.push_attribute(("classname", SUITE_NAME));
    case_start.push_attribute(("time", time.as_str()));

    writer.write_event(Event::Start(case_start))?;

    match &scenario.status {
        ScenarioStatus::Passed => {}
        ScenarioStatus::Failed { error } => {
            let mut fail_start = BytesStart::new("failure");
            fail_start.push_attribute(("message", error.as_str()));
            fail_start.push_attribute(("type", "AssertionError"));
            writer.write_event(Event::Start(fail_start))?;
            writer.write_event(Event::Text(BytesText::new(error)))?;
            writer.write_event(Event::End(BytesEnd::new("failure")))?;
        }
        ScenarioStatus::Skipped { reason } => {
            let mut skip = BytesStart::new("skipped");
            skip.push_attribute(("message", reason.as_str()));
            writer.write_event(Event::Empty(skip))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("testcase")))?;
    Ok(())
}

/// Write report to file
pub fn write_report(report: &SmokeReport, output_dir: &Path) -> Result<PathBuf> {
    let xml = generate_junit_xml(report)?;
    let path = output_dir.join(FILE_NAME);
    std::fs::write(&path, xml).context(format!("Failed to write {}", path.display()))?;

    log::debug!("wrote JUnit report to {}", path.display());
    println!(
        "{} JUnit report saved to: {}",
        "📄".to_string().blue(),
        path.display().to_string().cyan()
    );
    Ok(path)
}
