//! Role-gated visibility predicates.
//!
//! Pure functions answering "may this role see/use this action right
//! now". The transition function in [`crate::transition`] enforces the
//! same rules; these exist so UI layers can enable/disable controls
//! without constructing an action.

use crate::types::{RemediationStatus, Role};

/// A contractor may submit (or resubmit) while the remediation is
/// still editable.
#[inline]
#[must_use]
pub fn can_submit(role: Role, status: RemediationStatus) -> bool {
    role == Role::Contractor && status.is_editable()
}

/// A client or admin may approve or reject a completed remediation.
#[inline]
#[must_use]
pub fn can_verify(role: Role, status: RemediationStatus) -> bool {
    role.is_reviewer() && status == RemediationStatus::Completed
}

/// Photo attachment follows the submit gate: evidence can be added or
/// removed only while the contractor can still submit.
#[inline]
#[must_use]
pub fn can_attach_photos(role: Role, status: RemediationStatus) -> bool {
    can_submit(role, status)
}
