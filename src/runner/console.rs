use colored::{ColoredString, Colorize};

use super::state::{Summary, TestResult};

const RULE_WIDTH: usize = 60;

/// Color of a console line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Info,
    Success,
    Failure,
    Warning,
}

impl Tone {
    fn paint(self, message: &str) -> ColoredString {
        match self {
            Tone::Info => message.blue(),
            Tone::Success => message.green(),
            Tone::Failure => message.red(),
            Tone::Warning => message.yellow(),
        }
    }
}

/// Timestamped console line; only the message is colored
pub fn format_line(message: &str, tone: Tone) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    format!("[{}] {}", timestamp, tone.paint(message))
}

pub fn log(message: &str, tone: Tone) {
    println!("{}", format_line(message, tone));
}

/// Line reporting one request: status match, status mismatch or transport failure
pub fn probe_line(result: &TestResult, url: &str) -> (String, Tone) {
    match result.status_code {
        Some(status) if result.success => (
            format!(
                "✅ {} {} - {} ({:.3}s)",
                result.method, result.endpoint, status, result.response_time
            ),
            Tone::Success,
        ),
        Some(status) => (
            format!(
                "❌ {} {} - {} (expected: {})",
                result.method, result.endpoint, status, result.expected_status
            ),
            Tone::Failure,
        ),
        None => (
            format!(
                "❌ {}: {}",
                result.error.as_deref().unwrap_or("No response"),
                url
            ),
            Tone::Failure,
        ),
    }
}

/// Tones of the "Failed" and "Success rate" summary lines
pub fn summary_tones(summary: &Summary) -> (Tone, Tone) {
    let failed = if summary.failed > 0 {
        Tone::Failure
    } else {
        Tone::Success
    };
    let rate = if summary.passed == summary.total {
        Tone::Success
    } else {
        Tone::Warning
    };
    (failed, rate)
}

fn rule() {
    log(&"=".repeat(RULE_WIDTH), Tone::Info);
}

pub fn print_header(base_url: &str) {
    rule();
    log("SMOKE TEST - WEB-BOT BACKEND", Tone::Info);
    rule();
    log(&format!("Base URL: {}", base_url), Tone::Info);
    log("", Tone::Info);
}

pub fn print_summary(summary: &Summary) {
    log("", Tone::Info);
    rule();
    log("TEST SUMMARY", Tone::Info);
    rule();
    log(&format!("Total: {}", summary.total), Tone::Info);
    let (failed_tone, rate_tone) = summary_tones(summary);
    log(&format!("Passed: {}", summary.passed), Tone::Success);
    log(&format!("Failed: {}", summary.failed), failed_tone);
    log(
        &format!("Success rate: {:.1}%", summary.success_rate),
        rate_tone,
    );
    rule();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::error::ProbeError;
    use crate::runner::state::{ResponseData, ScenarioOutcome, ScenarioStatus};
    use std::time::Duration;

    fn summary_with(statuses: Vec<ScenarioStatus>) -> Summary {
        let scenarios = statuses
            .into_iter()
            .enumerate()
            .map(|(i, status)| ScenarioOutcome {
                name: format!("s{}", i),
                status,
                duration_ms: 1,
            })
            .collect();
        Summary::new(scenarios, Vec::new())
    }

    #[test]
    fn test_format_line_has_timestamp_prefix() {
        let line = format_line("GET /health - 200", Tone::Success);
        assert!(line.starts_with('['));
        assert_eq!(&line[9..11], "] ");
        assert!(line[1..9].chars().filter(|c| *c == ':').count() == 2);
        assert!(line.contains("GET /health - 200"));
    }

    #[test]
    fn test_probe_line_success() {
        let result = TestResult::completed(
            "GET",
            "/health",
            200,
            200,
            Duration::from_millis(1234),
            ResponseData::Text("OK".to_string()),
        );
        let (line, tone) = probe_line(&result, "http://localhost:3001/health");
        assert_eq!(line, "✅ GET /health - 200 (1.234s)");
        assert_eq!(tone, Tone::Success);
    }

    #[test]
    fn test_probe_line_status_mismatch() {
        let result = TestResult::completed(
            "POST",
            "/api/auth/login",
            401,
            200,
            Duration::from_millis(5),
            ResponseData::Text(String::new()),
        );
        let (line, tone) = probe_line(&result, "http://localhost:3001/api/auth/login");
        assert_eq!(line, "❌ POST /api/auth/login - 401 (expected: 200)");
        assert_eq!(tone, Tone::Failure);
    }

    #[test]
    fn test_probe_line_transport_failure() {
        let url = "http://localhost:3001/api/gateways";
        let refused = ProbeError::ConnectionRefused {
            url: url.to_string(),
        };
        let result =
            TestResult::failed("GET", "/api/gateways", 200, Duration::from_millis(3), &refused);
        let (line, tone) = probe_line(&result, url);
        assert_eq!(line, "❌ Connection refused: http://localhost:3001/api/gateways");
        assert_eq!(tone, Tone::Failure);

        let timeout = ProbeError::Timeout {
            url: url.to_string(),
        };
        let result =
            TestResult::failed("GET", "/api/gateways", 200, Duration::from_secs(10), &timeout);
        let (line, _) = probe_line(&result, url);
        assert_eq!(line, "❌ Timeout: http://localhost:3001/api/gateways");
    }

    #[test]
    fn test_summary_tones() {
        let all_passed = summary_with(vec![ScenarioStatus::Passed; 5]);
        assert_eq!(summary_tones(&all_passed), (Tone::Success, Tone::Success));

        let mut statuses = vec![ScenarioStatus::Passed; 4];
        statuses.push(ScenarioStatus::Skipped {
            reason: "no token".to_string(),
        });
        let one_skipped = summary_with(statuses);
        assert_eq!(summary_tones(&one_skipped), (Tone::Failure, Tone::Warning));

        let none_passed = summary_with(vec![
            ScenarioStatus::Failed {
                error: "Timeout".to_string()
            };
            5
        ]);
        assert_eq!(summary_tones(&none_passed), (Tone::Failure, Tone::Warning));
    }
}
