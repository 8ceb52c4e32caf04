//! Canned report payloads for tests.

use chrono::Utc;
use podryad_api::{DefectReportWire, ReportData};
use podryad_core::{ContractorId, Defect, DefectId, Remediation, RemediationId};

/// Two-defect report, both remediations pending, one critical defect.
#[must_use]
pub fn sample_report() -> DefectReportWire {
    let mut crack = Defect::new("d-1", "Crack in plaster, stairwell wall");
    crack.severity = Some("critical".to_string());
    crack.location = Some("Stairwell, floor 3".to_string());
    crack.photos = vec!["crack-before.jpg".to_string()];

    let leak = Defect::new("d-2", "Water stain under window sill");

    DefectReportWire {
        report_number: "DR-2026-031".to_string(),
        object_title: "Residential block B".to_string(),
        work_title: "Facade finishing".to_string(),
        report_data: ReportData {
            defects: vec![crack, leak],
        },
        remediations: vec![
            Remediation::seeded(RemediationId(1), DefectId::new("d-1"), ContractorId(9)),
            Remediation::seeded(RemediationId(2), DefectId::new("d-2"), ContractorId(9)),
        ],
        total_defects: 2,
        critical_defects: 1,
        created_at: Utc::now(),
    }
}
