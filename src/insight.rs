//! Client for the external insight-generation service.
//!
//! The service turns derived daily/weekly figures into two plain-English
//! insight strings. It is a downstream consumer only: scoring never
//! depends on it, and a failed call degrades to fixed fallback text at
//! the orchestration boundary.

use crate::core::summary::PeakAnalysis;
use serde::{Deserialize, Serialize};

/// Fallback daily insight used when the service call fails.
pub const FALLBACK_DAILY_INSIGHT: &str = "Could not generate daily insight.";

/// Fallback weekly insight used when the service call fails.
pub const FALLBACK_WEEKLY_INSIGHT: &str = "Could not generate weekly insight.";

/// Insight text used when there are no scored windows to describe.
pub const NOT_ENOUGH_DATA_INSIGHT: &str = "Not enough data for insights.";

/// Insight service configuration.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    /// Service base URL, e.g. `http://127.0.0.1:8787`
    pub base_url: String,
    /// Optional bearer token for hosted deployments
    pub api_key: Option<String>,
}

impl InsightConfig {
    /// Create a new insight service configuration.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the insight generation endpoint URL.
    pub fn insights_url(&self) -> String {
        format!("{}/v1/insights", self.base_url.trim_end_matches('/'))
    }
}

/// Insight client error types.
#[derive(Debug)]
pub enum InsightError {
    /// Configuration error
    Config(String),
    /// Network/HTTP error
    Network(String),
    /// Server returned an error response
    Server { status: u16, message: String },
    /// JSON serialization error
    Serialization(String),
}

impl std::fmt::Display for InsightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightError::Config(msg) => write!(f, "Insight config error: {msg}"),
            InsightError::Network(msg) => write!(f, "Insight network error: {msg}"),
            InsightError::Server { status, message } => {
                write!(f, "Insight server error ({status}): {message}")
            }
            InsightError::Serialization(msg) => write!(f, "Insight serialization error: {msg}"),
        }
    }
}

impl std::error::Error for InsightError {}

/// The exact figures the insight service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    /// Local wall-clock time of the focus peak
    pub peak_focus_time: String,
    /// Local wall-clock time of the stress peak
    pub peak_stress_time: String,
    pub daily_focus_average: f64,
    pub daily_stress_average: f64,
    pub weekly_focus_score_average: f64,
    pub last_week_focus_score_average: f64,
}

impl InsightRequest {
    /// Assemble a request from the daily peak analysis and the weekly
    /// comparison figures chosen by the caller.
    pub fn from_analysis(
        analysis: &PeakAnalysis,
        weekly_focus_score_average: f64,
        last_week_focus_score_average: f64,
    ) -> Self {
        Self {
            peak_focus_time: analysis.peak_focus_time.clone(),
            peak_stress_time: analysis.peak_stress_time.clone(),
            daily_focus_average: analysis.daily_focus_average,
            daily_stress_average: analysis.daily_stress_average,
            weekly_focus_score_average,
            last_week_focus_score_average,
        }
    }
}

/// Insight text pair returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub daily_insight: String,
    pub weekly_insight: String,
}

impl InsightResponse {
    /// The fixed fallback pair substituted when generation fails.
    pub fn fallback() -> Self {
        Self {
            daily_insight: FALLBACK_DAILY_INSIGHT.to_string(),
            weekly_insight: FALLBACK_WEEKLY_INSIGHT.to_string(),
        }
    }

    /// The pair used when the score series is empty.
    pub fn not_enough_data() -> Self {
        Self {
            daily_insight: NOT_ENOUGH_DATA_INSIGHT.to_string(),
            weekly_insight: NOT_ENOUGH_DATA_INSIGHT.to_string(),
        }
    }
}

/// Async client for the insight service.
pub struct InsightClient {
    config: InsightConfig,
    client: reqwest::Client,
}

impl InsightClient {
    /// Create a new insight client.
    pub fn new(config: InsightConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Request a daily/weekly insight pair for the given figures.
    pub async fn generate(&self, request: &InsightRequest) -> Result<InsightResponse, InsightError> {
        let mut builder = self
            .client
            .post(self.config.insights_url())
            .header("Content-Type", "application/json")
            .json(request);

        if let Some(ref key) = self.config.api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| InsightError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InsightError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| InsightError::Serialization(e.to_string()))
    }
}

/// Blocking insight client for use in synchronous contexts.
pub struct BlockingInsightClient {
    inner: InsightClient,
    runtime: tokio::runtime::Runtime,
}

impl BlockingInsightClient {
    /// Create a new blocking insight client.
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| InsightError::Config(format!("Failed to create runtime: {e}")))?;

        Ok(Self {
            inner: InsightClient::new(config),
            runtime,
        })
    }

    /// Request a daily/weekly insight pair for the given figures.
    pub fn generate(&self, request: &InsightRequest) -> Result<InsightResponse, InsightError> {
        self.runtime.block_on(self.inner.generate(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_url() {
        let config = InsightConfig::new("http://127.0.0.1:8787");
        assert_eq!(config.insights_url(), "http://127.0.0.1:8787/v1/insights");

        let trailing = InsightConfig::new("http://127.0.0.1:8787/");
        assert_eq!(trailing.insights_url(), "http://127.0.0.1:8787/v1/insights");
    }

    #[test]
    fn test_request_carries_exactly_six_fields() {
        let request = InsightRequest {
            peak_focus_time: "09:30 AM".to_string(),
            peak_stress_time: "03:10 PM".to_string(),
            daily_focus_average: 62.5,
            daily_stress_average: 31.0,
            weekly_focus_score_average: 58.0,
            last_week_focus_score_average: 49.7,
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(json["peakFocusTime"], "09:30 AM");
        assert_eq!(json["peakStressTime"], "03:10 PM");
        assert_eq!(json["dailyFocusAverage"], 62.5);
        assert_eq!(json["dailyStressAverage"], 31.0);
        assert_eq!(json["weeklyFocusScoreAverage"], 58.0);
        assert_eq!(json["lastWeekFocusScoreAverage"], 49.7);
    }

    #[test]
    fn test_response_parsing() {
        let response: InsightResponse = serde_json::from_str(
            r#"{"dailyInsight": "Peak focus mid-morning.", "weeklyInsight": "Up 10% this week."}"#,
        )
        .unwrap();
        assert_eq!(response.daily_insight, "Peak focus mid-morning.");
        assert_eq!(response.weekly_insight, "Up 10% this week.");
    }

    #[test]
    fn test_fallback_pair() {
        let fallback = InsightResponse::fallback();
        assert_eq!(fallback.daily_insight, FALLBACK_DAILY_INSIGHT);
        assert_eq!(fallback.weekly_insight, FALLBACK_WEEKLY_INSIGHT);
    }
}
