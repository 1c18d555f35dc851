//! Wire-side evaluation drafts and their conversion into validated
//! assessments.
//!
//! Form collaborators submit sub-ratings as dropdown labels or numbers. The
//! resolve step maps every value through the rating normalizer and rejects
//! anything that does not land on a whole 1-5 score, so nothing out of range
//! ever reaches the scorer or the stores.

use serde::Deserialize;

use super::domain::{ActorIdentity, CandidateId, HrDecision, Recommendation};
use super::evaluation::{
    EvaluationError, HrAssessment, InitialAssessment, ManagerAssessment, StageAssessment,
    SystemTaskAssessment, TaskType, TechnicalAssessment,
};
use super::rating::{self, RatingValue};

/// Inbound evaluation submission before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationDraft {
    pub candidate_id: CandidateId,
    pub interviewer: ActorIdentity,
    #[serde(default)]
    pub is_completed: bool,
    pub recommendation: Recommendation,
    #[serde(default)]
    pub comments: String,
    /// Raw text; split on newlines/commas during recording.
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub areas_for_improvement: String,
    pub assessment: AssessmentDraft,
}

/// Stage-specific draft payload with normalizer-friendly rating inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum AssessmentDraft {
    Initial(InitialDraft),
    SystemTask(SystemTaskDraft),
    Technical(TechnicalDraft),
    Manager(ManagerDraft),
    Hr(HrDraft),
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitialDraft {
    pub eligibility_confirmed: bool,
    pub resume_quality: RatingValue,
    pub experience_match: RatingValue,
    pub education_match: RatingValue,
    pub documentation_complete: bool,
    pub background_verified: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemTaskDraft {
    pub task_type: TaskType,
    #[serde(default)]
    pub task_description: String,
    pub completion_time_minutes: u32,
    pub code_quality: RatingValue,
    pub problem_solving_approach: RatingValue,
    pub creativity: RatingValue,
    #[serde(default)]
    pub test_cases_passed: Option<u32>,
    #[serde(default)]
    pub total_test_cases: Option<u32>,
    #[serde(default)]
    pub submission_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalDraft {
    pub technical_skills: RatingValue,
    pub problem_solving_ability: RatingValue,
    pub coding_skills: RatingValue,
    pub system_design_skills: RatingValue,
    pub architectural_knowledge: RatingValue,
    pub communication_during_technical: RatingValue,
    #[serde(default)]
    pub questions_asked: Vec<String>,
    #[serde(default)]
    pub solutions_provided: Vec<String>,
    #[serde(default)]
    pub technical_challenges: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManagerDraft {
    pub leadership_potential: RatingValue,
    pub team_fit: RatingValue,
    pub decision_making_ability: RatingValue,
    pub domain_expertise: RatingValue,
    pub project_management_skills: RatingValue,
    pub strategic_thinking: RatingValue,
    pub conflict_resolution: RatingValue,
    #[serde(default)]
    pub past_projects_discussion: String,
    #[serde(default)]
    pub leadership_examples: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HrDraft {
    pub culture_fit: RatingValue,
    pub communication_skills: RatingValue,
    pub motivation: RatingValue,
    #[serde(default)]
    pub career_aspiration: String,
    pub salary_expectation: u32,
    #[serde(default)]
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

impl AssessmentDraft {
    /// Resolve every rating input to a whole 1-5 score.
    pub fn resolve(self) -> Result<StageAssessment, EvaluationError> {
        match self {
            Self::Initial(draft) => Ok(StageAssessment::Initial(InitialAssessment {
                eligibility_confirmed: draft.eligibility_confirmed,
                resume_quality: resolve_rating("resume_quality", &draft.resume_quality)?,
                experience_match: resolve_rating("experience_match", &draft.experience_match)?,
                education_match: resolve_rating("education_match", &draft.education_match)?,
                documentation_complete: draft.documentation_complete,
                background_verified: draft.background_verified,
            })),
            Self::SystemTask(draft) => Ok(StageAssessment::SystemTask(SystemTaskAssessment {
                task_type: draft.task_type,
                task_description: draft.task_description,
                completion_time_minutes: draft.completion_time_minutes,
                code_quality: resolve_rating("code_quality", &draft.code_quality)?,
                problem_solving_approach: resolve_rating(
                    "problem_solving_approach",
                    &draft.problem_solving_approach,
                )?,
                creativity: resolve_rating("creativity", &draft.creativity)?,
                test_cases_passed: draft.test_cases_passed,
                total_test_cases: draft.total_test_cases,
                submission_url: draft.submission_url,
            })),
            Self::Technical(draft) => Ok(StageAssessment::Technical(TechnicalAssessment {
                technical_skills: resolve_rating("technical_skills", &draft.technical_skills)?,
                problem_solving_ability: resolve_rating(
                    "problem_solving_ability",
                    &draft.problem_solving_ability,
                )?,
                coding_skills: resolve_rating("coding_skills", &draft.coding_skills)?,
                system_design_skills: resolve_rating(
                    "system_design_skills",
                    &draft.system_design_skills,
                )?,
                architectural_knowledge: resolve_rating(
                    "architectural_knowledge",
                    &draft.architectural_knowledge,
                )?,
                communication_during_technical: resolve_rating(
                    "communication_during_technical",
                    &draft.communication_during_technical,
                )?,
                questions_asked: draft.questions_asked,
                solutions_provided: draft.solutions_provided,
                technical_challenges: draft.technical_challenges,
            })),
            Self::Manager(draft) => Ok(StageAssessment::Manager(ManagerAssessment {
                leadership_potential: resolve_rating(
                    "leadership_potential",
                    &draft.leadership_potential,
                )?,
                team_fit: resolve_rating("team_fit", &draft.team_fit)?,
                decision_making_ability: resolve_rating(
                    "decision_making_ability",
                    &draft.decision_making_ability,
                )?,
                domain_expertise: resolve_rating("domain_expertise", &draft.domain_expertise)?,
                project_management_skills: resolve_rating(
                    "project_management_skills",
                    &draft.project_management_skills,
                )?,
                strategic_thinking: resolve_rating(
                    "strategic_thinking",
                    &draft.strategic_thinking,
                )?,
                conflict_resolution: resolve_rating(
                    "conflict_resolution",
                    &draft.conflict_resolution,
                )?,
                past_projects_discussion: draft.past_projects_discussion,
                leadership_examples: draft.leadership_examples,
            })),
            Self::Hr(draft) => Ok(StageAssessment::Hr(HrAssessment {
                culture_fit: resolve_rating("culture_fit", &draft.culture_fit)?,
                communication_skills: resolve_rating(
                    "communication_skills",
                    &draft.communication_skills,
                )?,
                motivation: resolve_rating("motivation", &draft.motivation)?,
                career_aspiration: draft.career_aspiration,
                salary_expectation: draft.salary_expectation,
                negotiated_salary: draft.negotiated_salary,
                availability_to_join: draft.availability_to_join,
                work_from_home_preference: draft.work_from_home_preference,
                relocation_willingness: draft.relocation_willingness,
                background_check: draft.background_check,
                reference_check: draft.reference_check,
                decision: draft.decision,
            })),
        }
    }
}

fn resolve_rating(field: &'static str, value: &RatingValue) -> Result<u8, EvaluationError> {
    match value {
        RatingValue::Score(score) => {
            if score.fract() != 0.0 {
                return Err(EvaluationError::FractionalRating {
                    field,
                    resolved: *score,
                });
            }
            let whole = *score as i64;
            if !(1..=5).contains(&whole) {
                return Err(EvaluationError::SubRatingOutOfRange {
                    field,
                    value: whole,
                });
            }
            Ok(whole as u8)
        }
        RatingValue::Label(label) => {
            let mapped = rating::normalize_label(label);
            if mapped == 0.0 {
                return Err(EvaluationError::NoSignal {
                    field,
                    input: label.clone(),
                });
            }
            Ok(mapped as u8)
        }
    }
}
