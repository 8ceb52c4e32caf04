//! Live HTTP implementation of [`ReportApi`] over reqwest.

use crate::error::ApiError;
use crate::wire::{DefectReportWire, RemediationUpdate, UploadResponse};
use crate::ReportApi;
use async_trait::async_trait;
use podryad_core::ReportId;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Podryad-PRO backend.
#[derive(Debug, Clone)]
pub struct HttpReportApi {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpReportApi {
    /// Build a client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    /// Attach a bearer token to every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn check_status(status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReportApi for HttpReportApi {
    async fn fetch_report(&self, id: ReportId) -> Result<DefectReportWire, ApiError> {
        tracing::debug!(report_id = id.0, "fetching defect report");
        let req = self
            .http
            .get(self.url("/defect-report"))
            .query(&[("report_id", id.0)]);
        let resp = self.authorize(req).send().await?;
        Self::check_status(resp.status())?;
        resp.json::<DefectReportWire>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_remediation(&self, update: RemediationUpdate) -> Result<(), ApiError> {
        tracing::info!(
            remediation_id = update.remediation_id.0,
            status = ?update.status,
            "writing remediation update"
        );
        let req = self.http.put(self.url("/remediation")).json(&update);
        let resp = self.authorize(req).send().await?;
        Self::check_status(resp.status())
    }

    async fn upload_photo(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        tracing::debug!(filename, size = bytes.len(), "uploading photo");
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        let req = self.http.post(self.url("/upload")).multipart(form);
        let resp = self.authorize(req).send().await?;
        Self::check_status(resp.status())?;
        let payload = resp
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(payload.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpReportApi::new("https://api.example.com/").unwrap();
        assert_eq!(api.url("/remediation"), "https://api.example.com/remediation");
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            HttpReportApi::check_status(StatusCode::NOT_FOUND),
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            HttpReportApi::check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status { code: 500 })
        ));
        assert!(HttpReportApi::check_status(StatusCode::OK).is_ok());
        assert!(HttpReportApi::check_status(StatusCode::NO_CONTENT).is_ok());
    }
}
