//! Evaluation records and their stage-specific assessment payloads.

mod scoring;

pub use scoring::split_fragments;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ActorIdentity, CandidateId, HrDecision, Recommendation, Stage};

/// Identifier wrapper for recorded evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub String);

/// One interviewer's recorded assessment for one candidate at one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: EvaluationId,
    pub candidate_id: CandidateId,
    pub interviewer: ActorIdentity,
    pub is_completed: bool,
    /// 0-5, two-decimal precision, derived from the assessment sub-ratings.
    pub overall_rating: f64,
    pub recommendation: Recommendation,
    pub comments: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub assessment: StageAssessment,
}

impl Evaluation {
    pub fn stage(&self) -> Stage {
        self.assessment.stage()
    }
}

/// Stage-specific assessment payload. Exactly one variant per stage; every
/// consumer switches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum StageAssessment {
    Initial(InitialAssessment),
    SystemTask(SystemTaskAssessment),
    Technical(TechnicalAssessment),
    Manager(ManagerAssessment),
    Hr(HrAssessment),
}

impl StageAssessment {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Initial(_) => Stage::Initial,
            Self::SystemTask(_) => Stage::SystemTask,
            Self::Technical(_) => Stage::Technical,
            Self::Manager(_) => Stage::Manager,
            Self::Hr(_) => Stage::Hr,
        }
    }

    /// The explicit HR decision, present only on the final stage's payload.
    pub fn hr_decision(&self) -> Option<HrDecision> {
        match self {
            Self::Hr(assessment) => Some(assessment.decision),
            _ => None,
        }
    }
}

/// Resume/eligibility screening captured on the initial form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialAssessment {
    pub eligibility_confirmed: bool,
    pub resume_quality: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub documentation_complete: bool,
    pub background_verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    Coding,
    CaseStudy,
    Design,
    Other,
}

/// Take-home / system task review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemTaskAssessment {
    pub task_type: TaskType,
    pub task_description: String,
    pub completion_time_minutes: u32,
    pub code_quality: u8,
    pub problem_solving_approach: u8,
    pub creativity: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_cases_passed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_test_cases: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_url: Option<String>,
}

/// Technical interview deep-dive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAssessment {
    pub technical_skills: u8,
    pub problem_solving_ability: u8,
    pub coding_skills: u8,
    pub system_design_skills: u8,
    pub architectural_knowledge: u8,
    pub communication_during_technical: u8,
    #[serde(default)]
    pub questions_asked: Vec<String>,
    #[serde(default)]
    pub solutions_provided: Vec<String>,
    #[serde(default)]
    pub technical_challenges: Vec<String>,
}

/// Hiring-manager round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerAssessment {
    pub leadership_potential: u8,
    pub team_fit: u8,
    pub decision_making_ability: u8,
    pub domain_expertise: u8,
    pub project_management_skills: u8,
    pub strategic_thinking: u8,
    pub conflict_resolution: u8,
    #[serde(default)]
    pub past_projects_discussion: String,
    #[serde(default)]
    pub leadership_examples: String,
}

/// Closing HR round, including the explicit offer decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrAssessment {
    pub culture_fit: u8,
    pub communication_skills: u8,
    pub motivation: u8,
    #[serde(default)]
    pub career_aspiration: String,
    pub salary_expectation: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negotiated_salary: Option<u32>,
    #[serde(default)]
    pub availability_to_join: String,
    #[serde(default)]
    pub work_from_home_preference: String,
    pub relocation_willingness: bool,
    pub background_check: bool,
    pub reference_check: bool,
    pub decision: HrDecision,
}

/// Validation errors raised before an evaluation reaches the scorer.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("{field} must be a whole rating between 1 and 5, got {value}")]
    SubRatingOutOfRange { field: &'static str, value: i64 },
    #[error("{field} must be a whole rating between 1 and 5, got {resolved}")]
    FractionalRating { field: &'static str, resolved: f64 },
    #[error("{field} carries no rating signal: '{input}'")]
    NoSignal { field: &'static str, input: String },
}
