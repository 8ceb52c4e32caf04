use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use podryad_api::DefectReportWire;
use podryad_core::{Defect, DefectId, Remediation, RemediationId, RemediationStatus, ReportStats};

/// One loaded defect report, normalized for rendering.
///
/// Defects keep their report order. Remediations are indexed by
/// defect id at build time, so pairing is a map lookup instead of a
/// linear scan, and a missing pairing is an explicit branch.
#[derive(Debug, Clone)]
pub struct ReportSnapshot {
    pub report_number: String,
    pub object_title: String,
    pub work_title: String,
    pub created_at: DateTime<Utc>,
    defects: IndexMap<DefectId, Defect>,
    remediations: IndexMap<DefectId, Remediation>,
    orphans: Vec<Remediation>,
}

impl ReportSnapshot {
    /// Build a snapshot from the wire payload.
    ///
    /// Remediations whose defect id matches no defect are kept out of
    /// the rendered pairing but retained as orphans: they still count
    /// toward progress, and the drift is logged so it is observable
    /// upstream.
    #[must_use]
    pub fn from_wire(wire: DefectReportWire) -> Self {
        let defects: IndexMap<DefectId, Defect> = wire
            .report_data
            .defects
            .into_iter()
            .map(|d| (d.id.clone(), d))
            .collect();

        let mut remediations: IndexMap<DefectId, Remediation> = IndexMap::new();
        let mut orphans = Vec::new();
        for remediation in wire.remediations {
            if !defects.contains_key(&remediation.defect_id) {
                tracing::warn!(
                    remediation_id = remediation.id.0,
                    defect_id = %remediation.defect_id,
                    "remediation references a defect that is not in this report"
                );
                orphans.push(remediation);
                continue;
            }
            if let Some(previous) =
                remediations.insert(remediation.defect_id.clone(), remediation)
            {
                // 1:1 invariant broken upstream; the later record wins.
                tracing::warn!(
                    remediation_id = previous.id.0,
                    defect_id = %previous.defect_id,
                    "duplicate remediation for defect, keeping the later one"
                );
            }
        }

        Self {
            report_number: wire.report_number,
            object_title: wire.object_title,
            work_title: wire.work_title,
            created_at: wire.created_at,
            defects,
            remediations,
            orphans,
        }
    }

    /// Defects in report order.
    pub fn defects(&self) -> impl Iterator<Item = &Defect> {
        self.defects.values()
    }

    /// Each defect paired with its remediation, if one exists.
    pub fn pairs(&self) -> impl Iterator<Item = (&Defect, Option<&Remediation>)> {
        self.defects
            .values()
            .map(|d| (d, self.remediations.get(&d.id)))
    }

    pub fn remediation_for(&self, defect_id: &DefectId) -> Option<&Remediation> {
        self.remediations.get(defect_id)
    }

    pub fn remediation_by_id(&self, id: RemediationId) -> Option<&Remediation> {
        self.remediations.values().find(|r| r.id == id)
    }

    /// Remediations excluded from rendering because their defect is
    /// missing from this report.
    pub fn orphaned_remediations(&self) -> &[Remediation] {
        &self.orphans
    }

    /// Statuses of every remediation in the report, orphans included.
    pub fn statuses(&self) -> impl Iterator<Item = RemediationStatus> + '_ {
        self.remediations
            .values()
            .chain(self.orphans.iter())
            .map(|r| r.status)
    }

    /// Current summary statistics, recomputed on every call.
    #[must_use]
    pub fn stats(&self) -> ReportStats {
        ReportStats::compute(self.defects.values(), self.statuses())
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        podryad_core::progress_percent(self.statuses())
    }
}
