use podryad_api::ApiError;
use podryad_core::{RemediationId, ReportId, WorkflowError};

/// Failures surfaced to the caller as user-facing notifications.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// The action was refused before any network call.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// The backend refused or was unreachable; local state unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Acting on a report that was never loaded into the store.
    #[error("report {0} is not loaded")]
    ReportNotLoaded(ReportId),

    /// The remediation id is not in the loaded report.
    #[error("remediation {0} is not in the loaded report")]
    UnknownRemediation(RemediationId),
}

impl ControllerError {
    /// Not-found renders as a placeholder view, everything else as a
    /// toast.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ControllerError::Api(ApiError::NotFound))
    }
}
