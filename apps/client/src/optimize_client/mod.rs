/// Optimize client: the single point of entry for all calls to the
/// optimization service.
///
/// ARCHITECTURAL RULE: no other module may talk to the service directly.
/// All HTTP traffic MUST go through this module.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::submission::request::SubmissionRequest;

/// Path of the optimize operation, relative to the service base URL.
pub const OPTIMIZE_PATH: &str = "/optimize";

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("request carries no resume file")]
    MissingFile,

    #[error("download URL is empty")]
    EmptyDownloadUrl,
}

/// Decoded body of an optimize response. `success: false` bodies usually
/// carry only `error`, so every other field tolerates absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    #[serde(default)]
    pub success: bool,
    /// 0 to 100. The deployed service has been observed emitting this as a
    /// JSON string as well as a number; both decode.
    #[serde(default, deserialize_with = "score_from_number_or_string")]
    pub ats_score: u8,
    #[serde(default)]
    pub optimized_resume: String,
    #[serde(default)]
    pub changes_summary: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn score_from_number_or_string<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreRepr {
        Num(i64),
        Text(String),
    }

    let raw = match ScoreRepr::deserialize(deserializer)? {
        ScoreRepr::Num(n) => n,
        ScoreRepr::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
    };
    Ok(raw.clamp(0, 100) as u8)
}

/// Seam between the controller and the network. Production code uses
/// `OptimizeClient`; tests substitute scripted responses.
#[async_trait]
pub trait OptimizeBackend: Send + Sync {
    async fn optimize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<OptimizationResult, OptimizeError>;
}

/// The HTTP client for the optimization service. Holds one `reqwest::Client`
/// built with a bounded request timeout, so a submission can never wait
/// forever.
#[derive(Clone)]
pub struct OptimizeClient {
    client: Client,
    base_url: String,
}

impl OptimizeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POSTs the multipart payload (file part `resume`, text field
    /// `job_description`) and decodes the body as an `OptimizationResult`
    /// regardless of HTTP status: the service reports its own failures as
    /// JSON bodies carrying `error`, and those must surface as decoded
    /// results, not transport errors. A body that is not JSON is a
    /// transport error.
    pub async fn optimize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<OptimizationResult, OptimizeError> {
        let resume = request.resume.as_ref().ok_or(OptimizeError::MissingFile)?;

        let form = Form::new()
            .part(
                "resume",
                Part::bytes(resume.content.to_vec()).file_name(resume.file_name.clone()),
            )
            .text("job_description", request.job_description.clone());

        let url = format!("{}{}", self.base_url, OPTIMIZE_PATH);
        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let result: OptimizationResult = serde_json::from_slice(&body)?;
        debug!(status = %status, success = result.success, "optimize response decoded");
        Ok(result)
    }

    /// Fetches the optimized artifact. Relative URLs resolve against the
    /// service base, matching how the browser resolved `download_url`.
    pub async fn download(&self, url: &str) -> Result<Bytes, OptimizeError> {
        if url.is_empty() {
            return Err(OptimizeError::EmptyDownloadUrl);
        }
        let absolute = self.resolve(url);
        let response = self.client.get(&absolute).send().await?.error_for_status()?;
        Ok(response.bytes().await?)
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}

#[async_trait]
impl OptimizeBackend for OptimizeClient {
    async fn optimize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<OptimizationResult, OptimizeError> {
        OptimizeClient::optimize(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_body() {
        let body = r#"{
            "success": true,
            "ats_score": 87,
            "optimized_resume": "better resume",
            "changes_summary": ["a", "b"],
            "recommendations": [],
            "download_url": "/download/opt.docx"
        }"#;
        let result: OptimizationResult = serde_json::from_str(body).unwrap();
        assert!(result.success);
        assert_eq!(result.ats_score, 87);
        assert_eq!(result.changes_summary, vec!["a", "b"]);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.download_url.as_deref(), Some("/download/opt.docx"));
    }

    #[test]
    fn test_decode_score_as_string() {
        let result: OptimizationResult =
            serde_json::from_str(r#"{"success": true, "ats_score": "87"}"#).unwrap();
        assert_eq!(result.ats_score, 87);
    }

    #[test]
    fn test_decode_garbled_score_defaults_to_zero() {
        let result: OptimizationResult =
            serde_json::from_str(r#"{"success": true, "ats_score": "high"}"#).unwrap();
        assert_eq!(result.ats_score, 0);
    }

    #[test]
    fn test_decode_out_of_range_score_clamps() {
        let result: OptimizationResult =
            serde_json::from_str(r#"{"success": true, "ats_score": 250}"#).unwrap();
        assert_eq!(result.ats_score, 100);
    }

    #[test]
    fn test_decode_error_only_body() {
        let result: OptimizationResult =
            serde_json::from_str(r#"{"error": "No resume file uploaded"}"#).unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("No resume file uploaded"));
        assert!(result.optimized_resume.is_empty());
    }

    #[test]
    fn test_decode_empty_object() {
        let result: OptimizationResult = serde_json::from_str("{}").unwrap();
        assert!(!result.success);
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_resolve_relative_url() {
        let client = OptimizeClient::new("http://localhost:5000/", Duration::from_secs(1));
        assert_eq!(
            client.resolve("/download/opt.docx"),
            "http://localhost:5000/download/opt.docx"
        );
    }

    #[test]
    fn test_resolve_absolute_url_untouched() {
        let client = OptimizeClient::new("http://localhost:5000", Duration::from_secs(1));
        assert_eq!(
            client.resolve("https://cdn.example.com/opt.docx"),
            "https://cdn.example.com/opt.docx"
        );
    }
}
