//! Client-side state container for defect reports.
//!
//! The backend owns all state; this crate holds a denormalized cache
//! of it. A [`ReportSnapshot`] is built once per load from the wire
//! payload and replaced wholesale after every write — snapshots are
//! never merged or mutated in place. Verdict history is the one
//! exception: it is client-side context that survives replacement.

pub mod snapshot;
pub mod store;

pub use snapshot::ReportSnapshot;
pub use store::{ReportStore, VerdictRecord};
