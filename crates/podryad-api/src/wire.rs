//! Serde payload types matching the backend contract.
//!
//! Field names mirror the JSON the backend emits and accepts; nothing
//! here is renamed or normalized. Normalization (keyed indexes, orphan
//! detection) happens in the store when a snapshot is built.

use chrono::{DateTime, Utc};
use podryad_core::{
    Defect, Remediation, RemediationAction, RemediationId, RemediationStatus, UserId,
};
use serde::{Deserialize, Serialize};

/// Response body of `GET /defect-report?report_id={id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectReportWire {
    pub report_number: String,
    pub object_title: String,
    pub work_title: String,
    pub report_data: ReportData,
    #[serde(default)]
    pub remediations: Vec<Remediation>,
    pub total_defects: usize,
    pub critical_defects: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub defects: Vec<Defect>,
}

/// Request body of `PUT /remediation`.
///
/// One endpoint carries both write shapes: a contractor submission
/// (description + photos, status `completed`) and a reviewer verdict
/// (verified_by + notes, status `verified` or `rejected`). Absent
/// fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationUpdate {
    pub remediation_id: RemediationId,
    pub status: RemediationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_photos: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_notes: Option<String>,
}

impl RemediationUpdate {
    /// Contractor submission: pending/rejected -> completed.
    #[must_use]
    pub fn submit(id: RemediationId, description: String, photos: Vec<String>) -> Self {
        Self {
            remediation_id: id,
            status: RemediationStatus::Completed,
            remediation_description: Some(description),
            remediation_photos: Some(photos),
            verified_by: None,
            verification_notes: None,
        }
    }

    /// Reviewer approval: completed -> verified.
    #[must_use]
    pub fn approve(id: RemediationId, verified_by: UserId) -> Self {
        Self {
            remediation_id: id,
            status: RemediationStatus::Verified,
            remediation_description: None,
            remediation_photos: None,
            verified_by: Some(verified_by),
            verification_notes: None,
        }
    }

    /// Reviewer rejection: completed -> rejected, notes required
    /// (validated upstream by the workflow).
    #[must_use]
    pub fn reject(id: RemediationId, verified_by: UserId, notes: String) -> Self {
        Self {
            remediation_id: id,
            status: RemediationStatus::Rejected,
            remediation_description: None,
            remediation_photos: None,
            verified_by: Some(verified_by),
            verification_notes: Some(notes),
        }
    }

    /// Build the wire body for a workflow action that already passed
    /// `next_status`.
    #[must_use]
    pub fn from_action(id: RemediationId, action: &RemediationAction) -> Self {
        match action {
            RemediationAction::Submit {
                description,
                photos,
            } => Self::submit(id, description.clone(), photos.clone()),
            RemediationAction::Approve { verified_by } => Self::approve(id, *verified_by),
            RemediationAction::Reject { verified_by, notes } => {
                Self::reject(id, *verified_by, notes.clone())
            }
        }
    }
}

/// Response of the multipart upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn submit_body_shape() {
        let body = RemediationUpdate::submit(
            RemediationId(42),
            "Fixed crack".to_string(),
            vec!["a.jpg".to_string()],
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "remediation_id": 42,
                "status": "completed",
                "remediation_description": "Fixed crack",
                "remediation_photos": ["a.jpg"],
            })
        );
    }

    #[test]
    fn verdict_body_shape() {
        let body = RemediationUpdate::reject(
            RemediationId(42),
            UserId(5),
            "Redo the sealant".to_string(),
        );
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "remediation_id": 42,
                "status": "rejected",
                "verified_by": 5,
                "verification_notes": "Redo the sealant",
            })
        );
    }

    #[test]
    fn approve_body_carries_no_notes() {
        let body = RemediationUpdate::approve(RemediationId(7), UserId(3));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "remediation_id": 7,
                "status": "verified",
                "verified_by": 3,
            })
        );
    }

    #[test]
    fn report_payload_round_trips() {
        let raw = json!({
            "report_number": "DR-2026-031",
            "object_title": "Корпус Б",
            "work_title": "Фасадные работы",
            "report_data": {
                "defects": [
                    {
                        "id": "d-1",
                        "description": "Трещина в штукатурке",
                        "severity": "critical",
                        "photos": ["before.jpg"],
                    }
                ]
            },
            "remediations": [
                {
                    "id": 1,
                    "defect_id": "d-1",
                    "contractor_id": 9,
                    "status": "pending",
                    "remediation_photos": [],
                }
            ],
            "total_defects": 1,
            "critical_defects": 1,
            "created_at": "2026-08-01T10:00:00Z",
        });

        let report: DefectReportWire = serde_json::from_value(raw).unwrap();
        assert_eq!(report.report_data.defects.len(), 1);
        assert_eq!(report.remediations.len(), 1);
        assert_eq!(
            report.remediations[0].status,
            RemediationStatus::Pending
        );
        assert_eq!(report.critical_defects, 1);
    }

    #[test]
    fn from_action_mirrors_constructors() {
        let action = RemediationAction::Submit {
            description: "done".to_string(),
            photos: vec![],
        };
        assert_eq!(
            RemediationUpdate::from_action(RemediationId(1), &action),
            RemediationUpdate::submit(RemediationId(1), "done".to_string(), vec![]),
        );

        let action = RemediationAction::Approve {
            verified_by: UserId(2),
        };
        assert_eq!(
            RemediationUpdate::from_action(RemediationId(1), &action),
            RemediationUpdate::approve(RemediationId(1), UserId(2)),
        );
    }
}
