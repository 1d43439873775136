//! Booking workflow state machine.
//!
//! `Idle -> DraftSelected -> Submitting -> {Recorded | Failed}`

use super::model::{BookingConfirmation, BookingDraft};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    DraftSelected(BookingDraft),
    Submitting(BookingDraft),
    Recorded(BookingConfirmation),
    /// The draft is kept so the caller can retry.
    Failed { draft: BookingDraft, reason: String },
}

impl WorkflowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    /// The draft this state still holds, if any.
    pub fn draft(&self) -> Option<&BookingDraft> {
        match self {
            Self::DraftSelected(draft) | Self::Submitting(draft) => Some(draft),
            Self::Failed { draft, .. } => Some(draft),
            Self::Idle | Self::Recorded(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_survives_failure() {
        let draft = BookingDraft::new(1u32, "Live Performance");
        let failed = WorkflowState::Failed {
            draft: draft.clone(),
            reason: "offline".into(),
        };
        assert_eq!(failed.draft(), Some(&draft));
        assert_eq!(WorkflowState::default().draft(), None);
        assert!(WorkflowState::Submitting(draft).is_submitting());
    }
}
