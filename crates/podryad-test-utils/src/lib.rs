//! Testing utilities for the Podryad-PRO workspace.
//!
//! [`InMemoryApi`] is a [`ReportApi`] double backed by a mutex-guarded
//! world: writes mutate the stored report the way the backend would,
//! per-endpoint call counters make "no network call happened"
//! assertions possible, and one-shot failure injection simulates a
//! flaky backend.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use podryad_api::{ApiError, DefectReportWire, RemediationUpdate, ReportApi};
use podryad_core::{RemediationStatus, ReportId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub mod fixtures;

/// Initialize tracing for tests. Safe to call repeatedly.
pub fn init_tracing() {
    use once_cell::sync::OnceCell;
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .init();
    });
}

/// In-memory [`ReportApi`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryApi {
    reports: Mutex<HashMap<ReportId, DefectReportWire>>,
    fetch_calls: AtomicUsize,
    update_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    fail_next_update: AtomicBool,
    fail_next_fetch: AtomicBool,
}

impl InMemoryApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed (or replace) a stored report.
    pub fn put_report(&self, id: ReportId, report: DefectReportWire) {
        self.reports.lock().insert(id, report);
    }

    /// Make the next `update_remediation` fail with a 500.
    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    /// Make the next `fetch_report` fail with a 500.
    pub fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    /// Apply a remediation write the way the backend would.
    fn apply_update(
        report: &mut DefectReportWire,
        update: &RemediationUpdate,
    ) -> Result<(), ApiError> {
        let remediation = report
            .remediations
            .iter_mut()
            .find(|r| r.id == update.remediation_id)
            .ok_or(ApiError::NotFound)?;

        remediation.status = update.status;
        match update.status {
            RemediationStatus::Completed => {
                remediation.remediation_description =
                    update.remediation_description.clone();
                if let Some(photos) = &update.remediation_photos {
                    remediation.remediation_photos = photos.clone();
                }
                remediation.completed_at = Some(Utc::now());
            }
            RemediationStatus::Verified | RemediationStatus::Rejected => {
                remediation.verified_by = update.verified_by;
                remediation.verification_notes = update.verification_notes.clone();
                remediation.verified_at = Some(Utc::now());
            }
            RemediationStatus::Pending => {}
        }
        Ok(())
    }
}

#[async_trait]
impl ReportApi for InMemoryApi {
    async fn fetch_report(&self, id: ReportId) -> Result<DefectReportWire, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_fetch.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Status { code: 500 });
        }
        self.reports.lock().get(&id).cloned().ok_or(ApiError::NotFound)
    }

    async fn update_remediation(&self, update: RemediationUpdate) -> Result<(), ApiError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Status { code: 500 });
        }
        let mut reports = self.reports.lock();
        for report in reports.values_mut() {
            match Self::apply_update(report, &update) {
                Ok(()) => return Ok(()),
                Err(ApiError::NotFound) => continue,
                Err(other) => return Err(other),
            }
        }
        Err(ApiError::NotFound)
    }

    async fn upload_photo(&self, filename: &str, _bytes: Vec<u8>) -> Result<String, ApiError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("https://cdn.test/uploads/{filename}"))
    }
}
