use serde::Serialize;
use std::time::Duration;

use super::error::ProbeError;

/// Response bodies that are not JSON are cut to this many characters
pub const TEXT_BODY_LIMIT: usize = 100;

/// Parsed response body
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseData {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseData {
    /// Parse as JSON, falling back to the first characters of the raw text
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.chars().take(TEXT_BODY_LIMIT).collect()),
        }
    }

    /// Token-like field of a JSON object body: strings as-is, numbers in their JSON form
    pub fn token_field(&self, key: &str) -> Option<String> {
        match self {
            Self::Json(value) => match value.get(key)? {
                serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            },
            Self::Text(_) => None,
        }
    }
}

/// Outcome of one HTTP request
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub method: String,
    pub endpoint: String,
    /// None when the request never got a response
    pub status_code: Option<u16>,
    pub expected_status: u16,
    pub success: bool,
    /// Seconds
    pub response_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<ResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    pub fn completed(
        method: &str,
        endpoint: &str,
        status_code: u16,
        expected_status: u16,
        elapsed: Duration,
        response_data: ResponseData,
    ) -> Self {
        Self {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            status_code: Some(status_code),
            expected_status,
            success: status_code == expected_status,
            response_time: elapsed.as_secs_f64(),
            response_data: Some(response_data),
            error: None,
        }
    }

    pub fn failed(
        method: &str,
        endpoint: &str,
        expected_status: u16,
        elapsed: Duration,
        error: &ProbeError,
    ) -> Self {
        Self {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            status_code: None,
            expected_status,
            success: false,
            response_time: elapsed.as_secs_f64(),
            response_data: None,
            error: Some(error.description()),
        }
    }

    /// Human-readable reason this result did not pass
    pub fn failure_reason(&self) -> Option<String> {
        if self.success {
            return None;
        }
        match (&self.error, self.status_code) {
            (Some(error), _) => Some(error.clone()),
            (None, Some(status)) => Some(format!(
                "expected status {}, got {}",
                self.expected_status, status
            )),
            (None, None) => Some("no response".to_string()),
        }
    }
}

/// Scenario execution status
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScenarioStatus {
    Passed,
    Failed { error: String },
    Skipped { reason: String },
}

impl ScenarioStatus {
    pub fn from_result(result: &TestResult) -> Self {
        match result.failure_reason() {
            None => Self::Passed,
            Some(error) => Self::Failed { error },
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub status: ScenarioStatus,
    pub duration_ms: u64,
}

/// Aggregate outcome of a run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage, 0.0 to 100.0
    pub success_rate: f64,
    pub scenarios: Vec<ScenarioOutcome>,
    pub results: Vec<TestResult>,
}

impl Summary {
    pub fn new(scenarios: Vec<ScenarioOutcome>, results: Vec<TestResult>) -> Self {
        let total = scenarios.len();
        let passed = scenarios.iter().filter(|s| s.status.is_passed()).count();
        let success_rate = if total == 0 {
            0.0
        } else {
            passed as f64 * 100.0 / total as f64
        };

        Self {
            total,
            passed,
            failed: total - passed,
            success_rate,
            scenarios,
            results,
        }
    }

    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.success_rate >= threshold
    }

    /// Process exit code for this run
    pub fn exit_code(&self, threshold: f64) -> i32 {
        if self.meets_threshold(threshold) {
            0
        } else {
            1
        }
    }
}
