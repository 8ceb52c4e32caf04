use crate::error::{ValidationError, WorkflowError};
use crate::types::{RemediationStatus, Role, UserId};

/// An action a user attempts against a remediation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemediationAction {
    /// Contractor reports the fix. Photos are optional; the
    /// description is not.
    Submit {
        description: String,
        photos: Vec<String>,
    },
    /// Reviewer accepts the fix. Terminal.
    Approve { verified_by: UserId },
    /// Reviewer sends the fix back. Notes are required.
    Reject { verified_by: UserId, notes: String },
}

impl RemediationAction {
    /// The status this action drives toward, ignoring guards.
    #[inline]
    #[must_use]
    pub fn target(&self) -> RemediationStatus {
        match self {
            RemediationAction::Submit { .. } => RemediationStatus::Completed,
            RemediationAction::Approve { .. } => RemediationStatus::Verified,
            RemediationAction::Reject { .. } => RemediationStatus::Rejected,
        }
    }
}

/// Statuses reachable in one step from `from`.
pub fn allowed_transitions(from: RemediationStatus) -> &'static [RemediationStatus] {
    use RemediationStatus::*;
    match from {
        Pending => &[Completed],
        Completed => &[Verified, Rejected],
        Rejected => &[Completed],
        Verified => &[],
    }
}

/// Validates an attempted action and returns the status it produces.
///
/// Checks run in a fixed order: terminal state, edge existence, role
/// gate, field validation. Field validation runs last so that a
/// forbidden actor is never told their payload was merely incomplete.
/// All failures happen before any side effect; callers only contact
/// the backend on `Ok`.
pub fn next_status(
    current: RemediationStatus,
    action: &RemediationAction,
    role: Role,
) -> Result<RemediationStatus, WorkflowError> {
    if current.is_terminal() {
        return Err(WorkflowError::Terminal);
    }

    let to = action.target();
    if !allowed_transitions(current).contains(&to) {
        return Err(WorkflowError::IllegalTransition { from: current, to });
    }

    match action {
        RemediationAction::Submit { description, .. } => {
            if role != Role::Contractor {
                return Err(WorkflowError::Forbidden {
                    role,
                    status: current,
                });
            }
            if description.trim().is_empty() {
                return Err(ValidationError::EmptyDescription.into());
            }
        }
        RemediationAction::Approve { .. } => {
            if !role.is_reviewer() {
                return Err(WorkflowError::Forbidden {
                    role,
                    status: current,
                });
            }
        }
        RemediationAction::Reject { notes, .. } => {
            if !role.is_reviewer() {
                return Err(WorkflowError::Forbidden {
                    role,
                    status: current,
                });
            }
            if notes.trim().is_empty() {
                return Err(ValidationError::EmptyVerificationNotes.into());
            }
        }
    }

    Ok(to)
}
