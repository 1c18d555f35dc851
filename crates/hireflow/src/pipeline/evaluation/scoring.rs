//! Per-stage overall-rating formulas and free-text fragment handling.

use super::{EvaluationError, StageAssessment};
use crate::pipeline::rating::round2;

impl StageAssessment {
    /// Reject any sub-rating outside 1-5. Runs at the input boundary so the
    /// scoring formulas below can assume clean values.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        for (field, value) in self.rated_fields() {
            if !(1..=5).contains(&value) {
                return Err(EvaluationError::SubRatingOutOfRange {
                    field,
                    value: value as i64,
                });
            }
        }
        Ok(())
    }

    /// Mean of the stage-defined sub-rating subset, rounded to two decimals.
    pub fn overall_rating(&self) -> f64 {
        let rated = self.rated_fields();
        let sum: u32 = rated.iter().map(|(_, value)| *value as u32).sum();
        round2(sum as f64 / rated.len() as f64)
    }

    fn rated_fields(&self) -> Vec<(&'static str, u8)> {
        match self {
            Self::Initial(form) => vec![
                ("resume_quality", form.resume_quality),
                ("experience_match", form.experience_match),
                ("education_match", form.education_match),
            ],
            Self::SystemTask(task) => vec![
                ("code_quality", task.code_quality),
                ("problem_solving_approach", task.problem_solving_approach),
                ("creativity", task.creativity),
            ],
            Self::Technical(tech) => vec![
                ("technical_skills", tech.technical_skills),
                ("problem_solving_ability", tech.problem_solving_ability),
                ("coding_skills", tech.coding_skills),
                ("system_design_skills", tech.system_design_skills),
                ("architectural_knowledge", tech.architectural_knowledge),
                (
                    "communication_during_technical",
                    tech.communication_during_technical,
                ),
            ],
            Self::Manager(mgr) => vec![
                ("leadership_potential", mgr.leadership_potential),
                ("team_fit", mgr.team_fit),
                ("decision_making_ability", mgr.decision_making_ability),
                ("domain_expertise", mgr.domain_expertise),
                ("project_management_skills", mgr.project_management_skills),
                ("strategic_thinking", mgr.strategic_thinking),
                ("conflict_resolution", mgr.conflict_resolution),
            ],
            Self::Hr(hr) => vec![
                ("culture_fit", hr.culture_fit),
                ("communication_skills", hr.communication_skills),
                ("motivation", hr.motivation),
            ],
        }
    }
}

/// Split raw strengths/weaknesses text on newlines or commas, trimming each
/// fragment and dropping empties. Order-preserving; duplicates allowed.
pub fn split_fragments(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
