use crate::error::ControllerError;
use chrono::Utc;
use podryad_api::{RemediationUpdate, ReportApi};
use podryad_core::{
    can_attach_photos, next_status, Actor, RemediationAction, RemediationId, RemediationStatus,
    ReportId, WorkflowError,
};
use podryad_store::{ReportSnapshot, ReportStore, VerdictRecord};
use std::sync::Arc;

/// Orchestrates remediation status transitions.
///
/// Every mutation follows the same shape: look up the current status
/// in the loaded snapshot, run the pure transition function (all
/// validation and gating happens here, before any I/O), write the
/// update, record history, then refetch the report and replace the
/// snapshot. The sequential awaits are the only ordering guarantee
/// needed: the write completes before the refetch is issued.
pub struct RemediationController<A: ReportApi> {
    api: Arc<A>,
    store: Arc<ReportStore>,
}

impl<A: ReportApi> RemediationController<A> {
    #[must_use]
    pub fn new(api: Arc<A>, store: Arc<ReportStore>) -> Self {
        Self { api, store }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<ReportStore> {
        &self.store
    }

    /// Fetch a report and replace its snapshot in the store.
    pub async fn load_report(
        &self,
        id: ReportId,
    ) -> Result<Arc<ReportSnapshot>, ControllerError> {
        let wire = self.api.fetch_report(id).await?;
        Ok(self.store.replace(id, ReportSnapshot::from_wire(wire)))
    }

    /// Contractor submits (or resubmits) a fix.
    pub async fn submit_remediation(
        &self,
        report_id: ReportId,
        remediation_id: RemediationId,
        description: String,
        photos: Vec<String>,
        actor: Actor,
    ) -> Result<Arc<ReportSnapshot>, ControllerError> {
        let action = RemediationAction::Submit {
            description,
            photos,
        };
        self.perform(report_id, remediation_id, action, actor).await
    }

    /// Reviewer approves a completed fix. Terminal.
    pub async fn approve(
        &self,
        report_id: ReportId,
        remediation_id: RemediationId,
        actor: Actor,
    ) -> Result<Arc<ReportSnapshot>, ControllerError> {
        let action = RemediationAction::Approve {
            verified_by: actor.user_id,
        };
        self.perform(report_id, remediation_id, action, actor).await
    }

    /// Reviewer sends a completed fix back with notes.
    pub async fn reject(
        &self,
        report_id: ReportId,
        remediation_id: RemediationId,
        notes: String,
        actor: Actor,
    ) -> Result<Arc<ReportSnapshot>, ControllerError> {
        let action = RemediationAction::Reject {
            verified_by: actor.user_id,
            notes,
        };
        self.perform(report_id, remediation_id, action, actor).await
    }

    /// Upload photo files and collect their URLs for a later submit.
    ///
    /// Independent of any status transition, but only available while
    /// the contractor can still submit; after that the evidence is
    /// frozen.
    pub async fn attach_photos(
        &self,
        report_id: ReportId,
        remediation_id: RemediationId,
        actor: Actor,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<Vec<String>, ControllerError> {
        let status = self.current_status(report_id, remediation_id)?;
        if !can_attach_photos(actor.role, status) {
            return Err(WorkflowError::Forbidden {
                role: actor.role,
                status,
            }
            .into());
        }

        let mut urls = Vec::with_capacity(files.len());
        for (filename, bytes) in files {
            let url = self.api.upload_photo(&filename, bytes).await?;
            urls.push(url);
        }
        Ok(urls)
    }

    fn current_status(
        &self,
        report_id: ReportId,
        remediation_id: RemediationId,
    ) -> Result<RemediationStatus, ControllerError> {
        let snapshot = self
            .store
            .get(report_id)
            .ok_or(ControllerError::ReportNotLoaded(report_id))?;
        let remediation = snapshot
            .remediation_by_id(remediation_id)
            .ok_or(ControllerError::UnknownRemediation(remediation_id))?;
        Ok(remediation.status)
    }

    async fn perform(
        &self,
        report_id: ReportId,
        remediation_id: RemediationId,
        action: RemediationAction,
        actor: Actor,
    ) -> Result<Arc<ReportSnapshot>, ControllerError> {
        let current = self.current_status(report_id, remediation_id)?;

        // Guards run before any network call; a refused action leaves
        // both the backend and the store untouched.
        let target = next_status(current, &action, actor.role)?;
        tracing::info!(
            remediation_id = remediation_id.0,
            from = ?current,
            to = ?target,
            role = ?actor.role,
            "remediation transition accepted"
        );

        let update = RemediationUpdate::from_action(remediation_id, &action);
        self.api.update_remediation(update).await?;

        match &action {
            RemediationAction::Reject { verified_by, notes } => {
                self.store.record_verdict(
                    remediation_id,
                    VerdictRecord {
                        status: RemediationStatus::Rejected,
                        verified_by: *verified_by,
                        notes: Some(notes.clone()),
                        recorded_at: Utc::now(),
                    },
                );
            }
            RemediationAction::Approve { verified_by } => {
                self.store.record_verdict(
                    remediation_id,
                    VerdictRecord {
                        status: RemediationStatus::Verified,
                        verified_by: *verified_by,
                        notes: None,
                        recorded_at: Utc::now(),
                    },
                );
            }
            RemediationAction::Submit { .. } => {}
        }

        // Write completed; now refresh the authoritative view.
        self.load_report(report_id).await
    }
}
