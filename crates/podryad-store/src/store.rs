use crate::snapshot::ReportSnapshot;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use podryad_core::{RemediationId, RemediationStatus, ReportId, UserId};
use std::sync::Arc;

/// One reviewer verdict, kept as client-side history context.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictRecord {
    pub status: RemediationStatus,
    pub verified_by: UserId,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Holds the current snapshot per report, replaced wholesale after
/// every successful write. Single writer per report (the dispatching
/// controller); readers get cheap `Arc` clones of a consistent
/// snapshot.
#[derive(Debug, Default)]
pub struct ReportStore {
    snapshots: DashMap<ReportId, Arc<ReportSnapshot>>,
    // Rejection notes stay visible across refetches even though the
    // backend only returns the latest verdict fields.
    verdicts: DashMap<RemediationId, Vec<VerdictRecord>>,
}

impl ReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot for `id`, returning the shared handle.
    pub fn replace(&self, id: ReportId, snapshot: ReportSnapshot) -> Arc<ReportSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.snapshots.insert(id, Arc::clone(&snapshot));
        tracing::debug!(report_id = id.0, "report snapshot replaced");
        snapshot
    }

    pub fn get(&self, id: ReportId) -> Option<Arc<ReportSnapshot>> {
        self.snapshots.get(&id).map(|entry| Arc::clone(&entry))
    }

    pub fn remove(&self, id: ReportId) {
        self.snapshots.remove(&id);
    }

    /// Append a verdict to a remediation's history.
    pub fn record_verdict(&self, remediation_id: RemediationId, record: VerdictRecord) {
        self.verdicts
            .entry(remediation_id)
            .or_default()
            .push(record);
    }

    /// All recorded verdicts for a remediation, oldest first.
    #[must_use]
    pub fn verdicts(&self, remediation_id: RemediationId) -> Vec<VerdictRecord> {
        self.verdicts
            .get(&remediation_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podryad_api::{DefectReportWire, ReportData};
    use podryad_core::Defect;

    fn snapshot(title: &str) -> ReportSnapshot {
        ReportSnapshot::from_wire(DefectReportWire {
            report_number: "DR-1".to_string(),
            object_title: title.to_string(),
            work_title: "Facade".to_string(),
            report_data: ReportData {
                defects: vec![Defect::new("d-1", "crack")],
            },
            remediations: vec![],
            total_defects: 1,
            critical_defects: 0,
            created_at: Utc::now(),
        })
    }

    #[test]
    fn replace_swaps_the_whole_snapshot() {
        let store = ReportStore::new();
        let id = ReportId(1);

        store.replace(id, snapshot("old"));
        store.replace(id, snapshot("new"));

        assert_eq!(store.get(id).unwrap().object_title, "new");
    }

    #[test]
    fn get_of_unknown_report_is_none() {
        let store = ReportStore::new();
        assert!(store.get(ReportId(404)).is_none());
    }

    #[test]
    fn verdict_history_survives_snapshot_replacement() {
        let store = ReportStore::new();
        let id = ReportId(1);
        store.replace(id, snapshot("v1"));

        store.record_verdict(
            RemediationId(7),
            VerdictRecord {
                status: RemediationStatus::Rejected,
                verified_by: UserId(5),
                notes: Some("uneven sealant".to_string()),
                recorded_at: Utc::now(),
            },
        );

        store.replace(id, snapshot("v2"));

        let history = store.verdicts(RemediationId(7));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].notes.as_deref(), Some("uneven sealant"));
    }

    #[test]
    fn verdicts_accumulate_in_order() {
        let store = ReportStore::new();
        for (i, status) in [RemediationStatus::Rejected, RemediationStatus::Verified]
            .into_iter()
            .enumerate()
        {
            store.record_verdict(
                RemediationId(1),
                VerdictRecord {
                    status,
                    verified_by: UserId(i as i64),
                    notes: None,
                    recorded_at: Utc::now(),
                },
            );
        }
        let history = store.verdicts(RemediationId(1));
        assert_eq!(history[0].status, RemediationStatus::Rejected);
        assert_eq!(history[1].status, RemediationStatus::Verified);
    }
}
