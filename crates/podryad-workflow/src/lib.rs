//! Remediation workflow controller.
//!
//! Mediates status transitions for the defect-remediation lifecycle:
//! validate locally first (no network call on a guard failure), write
//! to the backend, then refetch the whole report and replace the store
//! snapshot. Authoritative state never lives on this side.

pub mod controller;
pub mod error;

pub use controller::RemediationController;
pub use error::ControllerError;
