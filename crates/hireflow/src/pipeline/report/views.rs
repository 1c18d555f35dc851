use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{CandidateId, FinalDecision, Stage};

/// Outcome of a single stage on the consolidated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOutcome {
    Pass,
    Fail,
    Pending,
}

impl StageOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Pending => "pending",
        }
    }

    /// Pass boundary is inclusive: a rating of exactly 3 passes.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 3.0 {
            Self::Pass
        } else {
            Self::Fail
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StageStatusEntry {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub status: StageOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer_name: Option<String>,
}

/// Consolidated per-candidate report, recomputed on demand; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ConsolidatedReport {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub position: String,
    pub stage_status: Vec<StageStatusEntry>,
    pub completed_stages: usize,
    /// Unweighted mean of completed stage ratings.
    pub overall_score: f64,
    /// Weight-renormalized mean over completed stages.
    pub weighted_score: f64,
    pub final_decision: FinalDecision,
    pub key_strengths: Vec<String>,
    pub key_weaknesses: Vec<String>,
    pub recommendation_summary: String,
}
