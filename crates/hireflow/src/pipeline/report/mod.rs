//! Consolidated-report derivation for a single candidate.

pub mod views;

pub use views::{ConsolidatedReport, StageOutcome, StageStatusEntry};

use std::collections::HashSet;

use super::domain::{Candidate, FinalDecision, Stage};
use super::evaluation::Evaluation;
use super::rating::round2;

/// Assemble the consolidated report from a candidate and their evaluations.
///
/// The decision here is derived purely from the overall score; it can
/// disagree with the candidate's persisted status (set by the explicit HR
/// decision). Both are reported side by side on purpose.
pub fn build_report(candidate: &Candidate, evaluations: &[Evaluation]) -> ConsolidatedReport {
    let mut stage_status = Vec::with_capacity(Stage::ordered().len());
    let mut rating_sum = 0.0;
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut completed_stages = 0;
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for stage in Stage::ordered() {
        let canonical = canonical_for_stage(evaluations, stage);

        let completed = canonical.map(|e| e.is_completed).unwrap_or(false);
        let status = match canonical {
            Some(evaluation) if evaluation.is_completed => {
                StageOutcome::from_rating(evaluation.overall_rating)
            }
            _ => StageOutcome::Pending,
        };

        if let Some(evaluation) = canonical.filter(|e| e.is_completed) {
            rating_sum += evaluation.overall_rating;
            weighted_sum += evaluation.overall_rating * stage.weight();
            weight_total += stage.weight();
            completed_stages += 1;
            strengths.extend(evaluation.strengths.iter().cloned());
            weaknesses.extend(evaluation.areas_for_improvement.iter().cloned());
        }

        stage_status.push(StageStatusEntry {
            stage,
            stage_label: stage.label(),
            completed,
            rating: canonical.map(|e| e.overall_rating),
            status,
            completed_at: canonical.and_then(|e| e.completed_at),
            interviewer_name: canonical.map(|e| e.interviewer.name.clone()),
        });
    }

    let overall_score = if completed_stages > 0 {
        round2(rating_sum / completed_stages as f64)
    } else {
        0.0
    };
    let weighted_score = if weight_total > 0.0 {
        round2(weighted_sum / weight_total)
    } else {
        0.0
    };

    ConsolidatedReport {
        candidate_id: candidate.id.clone(),
        candidate_name: candidate.name.clone(),
        position: candidate.position.clone(),
        stage_status,
        completed_stages,
        overall_score,
        weighted_score,
        final_decision: determine_final_decision(overall_score, completed_stages),
        key_strengths: dedup_preserving(strengths),
        key_weaknesses: dedup_preserving(weaknesses),
        recommendation_summary: recommendation_summary(overall_score, completed_stages),
    }
}

/// Decision matrix over (overall score, completed stage count). The
/// completed-stage gate dominates: fewer than three finished stages is
/// always pending, regardless of score.
pub fn determine_final_decision(overall_score: f64, completed_stages: usize) -> FinalDecision {
    if completed_stages < 3 {
        FinalDecision::Pending
    } else if overall_score >= 4.0 {
        FinalDecision::Hired
    } else if overall_score >= 3.0 {
        FinalDecision::OnHold
    } else {
        FinalDecision::Rejected
    }
}

/// The authoritative evaluation for a stage: the latest completed one, or the
/// latest recorded one when nothing has been completed yet.
fn canonical_for_stage(evaluations: &[Evaluation], stage: Stage) -> Option<&Evaluation> {
    evaluations
        .iter()
        .filter(|e| e.stage() == stage && e.is_completed)
        .max_by_key(|e| e.completed_at)
        .or_else(|| evaluations.iter().filter(|e| e.stage() == stage).next_back())
}

fn dedup_preserving(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn recommendation_summary(overall_score: f64, completed_stages: usize) -> String {
    if completed_stages == 0 {
        return "No evaluations completed yet.".to_string();
    }
    if overall_score >= 4.0 {
        "Strong candidate with excellent performance across all stages. Recommended for hire."
            .to_string()
    } else if overall_score >= 3.0 {
        "Good candidate with solid performance. Consider for hire based on team needs.".to_string()
    } else {
        "Candidate did not meet the required standards. Not recommended for hire.".to_string()
    }
}
