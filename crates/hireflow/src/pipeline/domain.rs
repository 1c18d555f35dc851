use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidates moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// The five evaluation stages, in pipeline order.
///
/// The order is load-bearing: every "how far has this candidate progressed"
/// comparison goes through [`Stage::index`], never through label comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Initial,
    SystemTask,
    Technical,
    Manager,
    Hr,
}

impl Stage {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Initial,
            Self::SystemTask,
            Self::Technical,
            Self::Manager,
            Self::Hr,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Initial => 0,
            Self::SystemTask => 1,
            Self::Technical => 2,
            Self::Manager => 3,
            Self::Hr => 4,
        }
    }

    /// The stage immediately after this one, `None` for the final stage.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Initial => Some(Self::SystemTask),
            Self::SystemTask => Some(Self::Technical),
            Self::Technical => Some(Self::Manager),
            Self::Manager => Some(Self::Hr),
            Self::Hr => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial Form",
            Self::SystemTask => "System Task",
            Self::Technical => "Technical Interview",
            Self::Manager => "Manager Interview",
            Self::Hr => "HR Interview",
        }
    }

    /// Fixed contribution of each stage to the weighted candidate score.
    /// Weights sum to 1.0 across the full pipeline.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Initial => 0.10,
            Self::SystemTask => 0.20,
            Self::Technical => 0.40,
            Self::Manager => 0.20,
            Self::Hr => 0.10,
        }
    }
}

/// Candidate lifecycle status. `Hired` and `Rejected` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStatus {
    Applied,
    InProgress,
    Hired,
    Rejected,
    OnHold,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::InProgress => "in-progress",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::OnHold => "on-hold",
        }
    }
}

/// Interviewer recommendation captured on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    StrongHire,
    Hire,
    NoHire,
    StrongNoHire,
}

/// Explicit decision recorded during the HR interview. Completing the final
/// stage maps this onto the candidate status instead of advancing further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HrDecision {
    ProceedToOffer,
    Reject,
    OnHold,
}

/// Derived hire/reject verdict on the consolidated report. Computed from the
/// overall score alone; independent of any explicit HR decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalDecision {
    Hired,
    Rejected,
    OnHold,
    Pending,
}

impl FinalDecision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::OnHold => "on-hold",
            Self::Pending => "pending",
        }
    }
}

/// Who performed an action. Threaded explicitly through every mutating
/// operation; the core keeps no ambient current-user state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorIdentity {
    pub id: String,
    pub name: String,
}

/// A candidate as stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience_years: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: CandidateStatus,
    pub current_stage: Stage,
}

/// Append-only record created when a candidate is explicitly rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub stage: Stage,
    pub reason: String,
    pub rejected_at: DateTime<Utc>,
    pub rejected_by: ActorIdentity,
}
