use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defect identifier, unique within an inspection's defect list.
/// Assigned server-side as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefectId(pub String);

impl DefectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for DefectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemediationId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractorId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InspectionId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub i64);

impl fmt::Display for RemediationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three user roles gating remediation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Contractor,
    Client,
    Admin,
}

impl Role {
    /// Clients and admins review completed remediations.
    #[inline]
    #[must_use]
    pub fn is_reviewer(self) -> bool {
        matches!(self, Role::Client | Role::Admin)
    }
}

/// The acting user for a workflow operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    #[inline]
    #[must_use]
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Lifecycle status of a single remediation.
///
/// `verified` is terminal. The only backward edge is
/// `rejected -> completed` (contractor resubmission).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemediationStatus {
    Pending,
    Completed,
    Verified,
    Rejected,
}

impl RemediationStatus {
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RemediationStatus::Verified)
    }

    /// Whether the contractor may still edit description and photos.
    #[inline]
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            RemediationStatus::Pending | RemediationStatus::Rejected
        )
    }
}

/// Severity bucket for report aggregation. The backend stores severity
/// as a free-form optional string; anything that is not `critical` or
/// `high` (including absent) counts as medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("critical") => Severity::Critical,
            Some(s) if s.eq_ignore_ascii_case("high") => Severity::High,
            _ => Severity::Medium,
        }
    }
}

/// A deficiency recorded by an inspector during an inspection.
///
/// Immutable once the inspection is completed; never deleted, only
/// referenced by its remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    pub id: DefectId,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Defect {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: DefectId::new(id),
            description: description.into(),
            location: None,
            severity: None,
            responsible: None,
            deadline: None,
            photos: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn severity_bucket(&self) -> Severity {
        Severity::parse(self.severity.as_deref())
    }
}

/// Tracks the lifecycle of fixing one defect. Exactly one per defect,
/// seeded `pending` when the containing inspection completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remediation {
    pub id: RemediationId,
    pub defect_id: DefectId,
    pub contractor_id: ContractorId,
    pub status: RemediationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_description: Option<String>,
    #[serde(default)]
    pub remediation_photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_notes: Option<String>,
}

impl Remediation {
    /// A fresh pending remediation for a defect.
    #[must_use]
    pub fn seeded(id: RemediationId, defect_id: DefectId, contractor_id: ContractorId) -> Self {
        Self {
            id,
            defect_id,
            contractor_id,
            status: RemediationStatus::Pending,
            remediation_description: None,
            remediation_photos: Vec::new(),
            completed_at: None,
            verified_at: None,
            verified_by: None,
            verification_notes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionStatus {
    Draft,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionKind {
    Scheduled,
    Unscheduled,
}

/// A quality-control pass over a work. Completion locks defect entry
/// and unlocks remediation tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: InspectionId,
    pub work_id: WorkId,
    pub inspection_number: String,
    pub status: InspectionStatus,
    pub kind: InspectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub defects: Vec<Defect>,
}

impl Inspection {
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == InspectionStatus::Completed
    }

    /// Seed one pending remediation per defect, with sequential ids
    /// starting at `first_id`. Only meaningful once the inspection is
    /// completed; an incomplete inspection yields nothing.
    #[must_use]
    pub fn seed_remediations(
        &self,
        contractor_id: ContractorId,
        first_id: i64,
    ) -> Vec<Remediation> {
        if !self.is_completed() {
            return Vec::new();
        }
        self.defects
            .iter()
            .enumerate()
            .map(|(i, defect)| {
                Remediation::seeded(
                    RemediationId(first_id + i as i64),
                    defect.id.clone(),
                    contractor_id,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!(Severity::parse(Some("critical")), Severity::Critical);
        assert_eq!(Severity::parse(Some("CRITICAL")), Severity::Critical);
        assert_eq!(Severity::parse(Some(" High ")), Severity::High);
        assert_eq!(Severity::parse(Some("cosmetic")), Severity::Medium);
        assert_eq!(Severity::parse(None), Severity::Medium);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&RemediationStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let back: RemediationStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, RemediationStatus::Rejected);
    }

    #[test]
    fn seeded_remediation_is_pending_and_empty() {
        let r = Remediation::seeded(
            RemediationId(1),
            DefectId::new("d-1"),
            ContractorId(7),
        );
        assert_eq!(r.status, RemediationStatus::Pending);
        assert!(r.remediation_description.is_none());
        assert!(r.remediation_photos.is_empty());
        assert!(r.verified_by.is_none());
    }

    #[test]
    fn completed_inspection_seeds_one_remediation_per_defect() {
        let inspection = Inspection {
            id: InspectionId(1),
            work_id: WorkId(2),
            inspection_number: "2026-014".to_string(),
            status: InspectionStatus::Completed,
            kind: InspectionKind::Scheduled,
            scheduled_date: None,
            defects: vec![Defect::new("d-1", "crack"), Defect::new("d-2", "leak")],
        };

        let seeded = inspection.seed_remediations(ContractorId(9), 100);
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].id, RemediationId(100));
        assert_eq!(seeded[0].defect_id, DefectId::new("d-1"));
        assert_eq!(seeded[1].id, RemediationId(101));
        assert!(seeded.iter().all(|r| r.status == RemediationStatus::Pending));
    }

    #[test]
    fn draft_inspection_seeds_nothing() {
        let inspection = Inspection {
            id: InspectionId(1),
            work_id: WorkId(2),
            inspection_number: "2026-015".to_string(),
            status: InspectionStatus::Draft,
            kind: InspectionKind::Unscheduled,
            scheduled_date: None,
            defects: vec![Defect::new("d-1", "crack")],
        };
        assert!(inspection.seed_remediations(ContractorId(9), 1).is_empty());
    }
}
