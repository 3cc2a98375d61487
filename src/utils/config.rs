use std::time::Duration;

/// Backend address used when none is given on the command line
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Minimum success rate (percent) for a run to count as passing
pub const SUCCESS_THRESHOLD: f64 = 80.0;

/// Run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,

    /// Timeout applied to every request
    pub timeout: Duration,

    /// Login credentials
    pub username: String,
    pub password: String,

    /// Success rate (percent) required for exit code 0
    pub threshold: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            threshold: SUCCESS_THRESHOLD,
        }
    }
}

impl RunConfig {
    /// Default configuration pointed at another backend
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }
}

/// Strip surrounding whitespace and trailing slashes so endpoints can be appended directly
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
