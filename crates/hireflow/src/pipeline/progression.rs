//! Candidate state-transition rules for the fixed stage order.

use super::domain::{CandidateStatus, HrDecision, Stage};
use super::evaluation::StageAssessment;

/// The (stage, status) pair a candidate moves to after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTransition {
    pub next_stage: Stage,
    pub status: CandidateStatus,
}

/// Transition applied when an evaluation for a stage is completed.
///
/// Non-final stages advance `current_stage` one step and mark the candidate
/// in progress. Completing the final HR stage leaves `current_stage` at HR
/// and maps the explicit HR decision onto the candidate status.
pub fn transition_on_completion(assessment: &StageAssessment) -> StageTransition {
    let stage = assessment.stage();

    if let StageAssessment::Hr(hr) = assessment {
        let status = match hr.decision {
            HrDecision::ProceedToOffer => CandidateStatus::Hired,
            HrDecision::Reject => CandidateStatus::Rejected,
            HrDecision::OnHold => CandidateStatus::OnHold,
        };
        return StageTransition {
            next_stage: stage,
            status,
        };
    }

    StageTransition {
        next_stage: stage.next().unwrap_or(stage),
        status: CandidateStatus::InProgress,
    }
}

/// Out-of-band rejection: the status flips immediately, the stage freezes
/// wherever the candidate currently is.
pub fn freeze_on_rejection(current_stage: Stage) -> StageTransition {
    StageTransition {
        next_stage: current_stage,
        status: CandidateStatus::Rejected,
    }
}
