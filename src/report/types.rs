use crate::runner::state::Summary;
use serde::Serialize;

/// Smoke run results for report generation
#[derive(Debug, Clone, Serialize)]
pub struct SmokeReport {
    pub session_id: String,
    pub base_url: String,
    pub generated_at: String,
    #[serde(flatten)]
    pub summary: Summary,
}
