//! Remote REST contract for Podryad-PRO.
//!
//! The [`ReportApi`] trait is the seam between the workflow controller
//! and the backend: production code talks to [`HttpReportApi`], tests
//! talk to an in-memory double. Authoritative state always lives
//! server-side; every write here is followed by a wholesale refetch.

pub mod error;
pub mod http;
pub mod wire;

pub use error::ApiError;
pub use http::HttpReportApi;
pub use wire::{DefectReportWire, RemediationUpdate, ReportData, UploadResponse};

use async_trait::async_trait;
use podryad_core::ReportId;

/// Data source for defect reports and remediation writes.
#[async_trait]
pub trait ReportApi: Send + Sync {
    /// Fetch the full defect report, defects and remediations included.
    async fn fetch_report(&self, id: ReportId) -> Result<DefectReportWire, ApiError>;

    /// Apply one remediation status write. Atomic on the server; there
    /// is no partial success to handle.
    async fn update_remediation(&self, update: RemediationUpdate) -> Result<(), ApiError>;

    /// Upload one image, returning the URL the backend stored it under.
    async fn upload_photo(&self, filename: &str, bytes: Vec<u8>) -> Result<String, ApiError>;
}
