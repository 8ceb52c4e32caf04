//! Error taxonomy for the remediation workflow.
//!
//! Validation failures are caught before any network call is made;
//! gating and transition failures mean the requested action is not
//! available to this actor in this state.

use crate::types::{RemediationStatus, Role};

/// A required field was missing or empty. Always raised before any
/// side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("remediation description must not be empty")]
    EmptyDescription,

    #[error("verification notes are required when rejecting")]
    EmptyVerificationNotes,
}

/// The workflow refused an action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// Required field missing or empty.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The actor's role may not perform this action in this status.
    #[error("role {role:?} may not act on a {status:?} remediation")]
    Forbidden {
        role: Role,
        status: RemediationStatus,
    },

    /// The requested edge does not exist in the transition table.
    #[error("illegal status transition: {from:?} -> {to:?}")]
    IllegalTransition {
        from: RemediationStatus,
        to: RemediationStatus,
    },

    /// A verified remediation accepts no further actions.
    #[error("remediation is verified and closed")]
    Terminal,
}

impl WorkflowError {
    /// Validation errors are the user's to fix; the rest indicate the
    /// action was never available and the UI should not have offered it.
    #[inline]
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, WorkflowError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_user_correctable() {
        let err = WorkflowError::from(ValidationError::EmptyDescription);
        assert!(err.is_user_correctable());
        assert!(!WorkflowError::Terminal.is_user_correctable());
    }

    #[test]
    fn display_names_the_offending_pair() {
        let err = WorkflowError::Forbidden {
            role: Role::Contractor,
            status: RemediationStatus::Completed,
        };
        let text = err.to_string();
        assert!(text.contains("Contractor"));
        assert!(text.contains("Completed"));
    }
}
