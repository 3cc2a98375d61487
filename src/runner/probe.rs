//! HTTP probe
//!
//! Issues one request against the backend and turns whatever comes back,
//! including transport failures, into a `TestResult`.

use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::time::{Duration, Instant};

use super::console;
use super::error::ProbeError;
use super::state::{ResponseData, TestResult};

pub struct HttpProbe {
    /// Base URL (e.g., "http://localhost:3001")
    base_url: String,
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Perform one request. Never fails: transport errors come back as a failed result.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        expected_status: u16,
        body: Option<&serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> TestResult {
        let url = self.url(endpoint);
        let method_name = method.as_str().to_string();
        log::debug!("{} {}", method_name, url);

        let start = Instant::now();
        match self.send(method, &url, body, headers).await {
            Ok((status, text)) => {
                let elapsed = start.elapsed();
                log::debug!("{} {} -> {} ({} bytes)", method_name, url, status, text.len());

                let result = TestResult::completed(
                    &method_name,
                    endpoint,
                    status,
                    expected_status,
                    elapsed,
                    ResponseData::parse(&text),
                );

                let (line, tone) = console::probe_line(&result, &url);
                console::log(&line, tone);
                result
            }
            Err(err) => {
                log::debug!("{} {} failed: {}", method_name, url, err);
                let result = TestResult::failed(
                    &method_name,
                    endpoint,
                    expected_status,
                    start.elapsed(),
                    &err,
                );
                let (line, tone) = console::probe_line(&result, &url);
                console::log(&line, tone);
                result
            }
        }
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
        headers: Option<HeaderMap>,
    ) -> std::result::Result<(u16, String), ProbeError> {
        let mut req = self.client.request(method, url);

        if let Some(headers) = headers {
            req = req.headers(headers);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, e))?;
        let status = res.status().as_u16();
        let text = res
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, e))?;

        Ok((status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_endpoint() {
        let probe = HttpProbe::new("http://localhost:3001", Duration::from_secs(10)).unwrap();
        assert_eq!(probe.url("/health"), "http://localhost:3001/health");
        assert_eq!(probe.base_url(), "http://localhost:3001");
    }
}
