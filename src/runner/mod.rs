pub mod console;
pub mod error;
pub mod probe;
pub mod scenario;
pub mod state;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::json;
use std::time::Instant;
use uuid::Uuid;

use crate::report::types::SmokeReport;
use crate::utils::config::RunConfig;
use console::Tone;
use probe::HttpProbe;
use scenario::Scenario;

pub use error::ProbeError;
pub use state::*;

/// Characters of the captured token shown in the log
const TOKEN_PREVIEW_CHARS: usize = 20;

/// Run every scenario against the configured backend and return the summary
pub async fn run_smoke_test(config: RunConfig) -> Result<Summary> {
    let mut smoke = SmokeTest::new(config)?;
    Ok(smoke.run_all().await)
}

/// State of one smoke run
pub struct SmokeTest {
    config: RunConfig,
    probe: HttpProbe,
    session_id: String,
    token: Option<String>,
    results: Vec<TestResult>,
}

impl SmokeTest {
    pub fn new(config: RunConfig) -> Result<Self> {
        let probe = HttpProbe::new(&config.base_url, config.timeout)?;

        Ok(Self {
            config,
            probe,
            session_id: Uuid::new_v4().to_string(),
            token: None,
            results: Vec::new(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Token captured by the login scenario, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Run all scenarios in order. A failing scenario never stops the run.
    pub async fn run_all(&mut self) -> Summary {
        console::print_header(self.probe.base_url());

        let mut outcomes = Vec::with_capacity(Scenario::ALL.len());
        for scenario in Scenario::ALL {
            let started = Instant::now();
            let status = match self.run_scenario(scenario).await {
                Ok(status) => status,
                Err(e) => {
                    console::log(
                        &format!("❌ Error in test {}: {:#}", scenario.name(), e),
                        Tone::Failure,
                    );
                    log::warn!("scenario {} aborted: {:?}", scenario.name(), e);
                    ScenarioStatus::Failed {
                        error: format!("{:#}", e),
                    }
                }
            };

            outcomes.push(ScenarioOutcome {
                name: scenario.name().to_string(),
                status,
                duration_ms: started.elapsed().as_millis() as u64,
            });
        }

        let summary = Summary::new(outcomes, std::mem::take(&mut self.results));
        console::print_summary(&summary);
        summary
    }

    /// Report envelope for a finished run
    pub fn report(&self, summary: &Summary) -> SmokeReport {
        SmokeReport {
            session_id: self.session_id.clone(),
            base_url: self.config.base_url.clone(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            summary: summary.clone(),
        }
    }

    async fn run_scenario(&mut self, scenario: Scenario) -> Result<ScenarioStatus> {
        match scenario {
            Scenario::Login => self.login().await,
            Scenario::VerifyToken => self.verify_token().await,
            _ => {
                console::log(scenario.banner(), Tone::Info);
                let result = self
                    .probe
                    .request(
                        scenario.method(),
                        scenario.endpoint(),
                        scenario.expected_status(),
                        None,
                        None,
                    )
                    .await;
                Ok(self.record(result))
            }
        }
    }

    async fn login(&mut self) -> Result<ScenarioStatus> {
        let scenario = Scenario::Login;
        console::log(scenario.banner(), Tone::Info);

        let credentials = json!({
            "username": self.config.username,
            "password": self.config.password,
        });
        let result = self
            .probe
            .request(
                scenario.method(),
                scenario.endpoint(),
                scenario.expected_status(),
                Some(&credentials),
                None,
            )
            .await;

        if result.success {
            self.token = result
                .response_data
                .as_ref()
                .and_then(|data| data.token_field("token"));

            match &self.token {
                Some(token) => {
                    let preview: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
                    console::log(&format!("✅ Token obtained: {}...", preview), Tone::Success);
                }
                None => log::debug!("login response carried no token"),
            }
        }

        Ok(self.record(result))
    }

    async fn verify_token(&mut self) -> Result<ScenarioStatus> {
        let scenario = Scenario::VerifyToken;
        let Some(token) = self.token.clone() else {
            console::log(
                "⚠️  Skipping token verification (login failed)",
                Tone::Warning,
            );
            return Ok(ScenarioStatus::Skipped {
                reason: "no token captured from login".to_string(),
            });
        };

        console::log(scenario.banner(), Tone::Info);

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("Token is not a valid header value")?;
        headers.insert(AUTHORIZATION, bearer);

        let result = self
            .probe
            .request(
                scenario.method(),
                scenario.endpoint(),
                scenario.expected_status(),
                None,
                Some(headers),
            )
            .await;

        Ok(self.record(result))
    }

    /// Append to the result log and derive the scenario status
    fn record(&mut self, result: TestResult) -> ScenarioStatus {
        let status = ScenarioStatus::from_result(&result);
        self.results.push(result);
        status
    }
}
