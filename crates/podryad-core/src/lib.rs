//! Domain core for the Podryad-PRO defect-remediation workflow.
//!
//! Everything in this crate is pure: entity types, the remediation
//! status state machine, role-gating predicates, and report
//! aggregation. No I/O, no async, no framework coupling — the
//! surrounding crates (store, api, workflow) build on these types.

pub mod error;
pub mod gating;
pub mod report;
pub mod transition;
pub mod types;

pub use error::*;
pub use gating::*;
pub use report::*;
pub use transition::*;
pub use types::*;
