//! Read-path aggregation for defect report views.
//!
//! Purely derived values, recomputed from current data on demand.
//! There is no cache to invalidate: the source of truth is refetched
//! per navigation.

use crate::types::{Defect, RemediationStatus, Severity};

/// Share of verified remediations, rounded to the nearest whole
/// percent. Zero when there are no remediations at all.
pub fn progress_percent<I>(statuses: I) -> u8
where
    I: IntoIterator<Item = RemediationStatus>,
{
    let mut total: u64 = 0;
    let mut verified: u64 = 0;
    for status in statuses {
        total += 1;
        if status == RemediationStatus::Verified {
            verified += 1;
        }
    }
    if total == 0 {
        return 0;
    }
    ((verified * 200 + total) / (total * 2)) as u8
}

/// Summary statistics for a defect report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportStats {
    pub total_defects: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub progress_percent: u8,
}

impl ReportStats {
    /// Compute from the current defect list and remediation statuses.
    pub fn compute<'a, D, S>(defects: D, statuses: S) -> Self
    where
        D: IntoIterator<Item = &'a Defect>,
        S: IntoIterator<Item = RemediationStatus>,
    {
        let mut stats = ReportStats {
            progress_percent: progress_percent(statuses),
            ..ReportStats::default()
        };
        for defect in defects {
            stats.total_defects += 1;
            match defect.severity_bucket() {
                Severity::Critical => stats.critical += 1,
                Severity::High => stats.high += 1,
                Severity::Medium => stats.medium += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Defect;
    use pretty_assertions::assert_eq;

    use RemediationStatus::*;

    #[test]
    fn progress_of_nothing_is_zero() {
        assert_eq!(progress_percent(std::iter::empty()), 0);
    }

    #[test]
    fn progress_half_verified() {
        assert_eq!(progress_percent([Verified, Pending]), 50);
    }

    #[test]
    fn progress_all_verified() {
        assert_eq!(progress_percent([Verified, Verified]), 100);
    }

    #[test]
    fn progress_rounds_to_nearest() {
        // 1/3 -> 33.33 -> 33; 2/3 -> 66.67 -> 67
        assert_eq!(progress_percent([Verified, Pending, Completed]), 33);
        assert_eq!(progress_percent([Verified, Verified, Rejected]), 67);
    }

    #[test]
    fn stats_bucket_severities() {
        let mut critical = Defect::new("d-1", "collapse risk");
        critical.severity = Some("critical".to_string());
        let mut high = Defect::new("d-2", "water ingress");
        high.severity = Some("High".to_string());
        let plain = Defect::new("d-3", "scuffed paint");

        let stats = ReportStats::compute(
            [&critical, &high, &plain],
            [Verified, Pending, Pending],
        );
        assert_eq!(
            stats,
            ReportStats {
                total_defects: 3,
                critical: 1,
                high: 1,
                medium: 1,
                progress_percent: 33,
            }
        );
    }

    #[test]
    fn stats_of_empty_report() {
        let stats = ReportStats::compute([], std::iter::empty());
        assert_eq!(stats, ReportStats::default());
    }
}
