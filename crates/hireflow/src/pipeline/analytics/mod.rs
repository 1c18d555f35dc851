//! Dashboard metric aggregation over the full candidate and evaluation
//! collections.
//!
//! Everything here is computed fresh from immutable snapshots; there is no
//! incremental state. Empty inputs always produce defined zero values rather
//! than dividing by zero.

pub mod views;

pub use views::{
    DashboardMetrics, FunnelEntry, InterviewerStats, MonthlyTrend, PositionStats, StageStatsEntry,
};

use std::collections::{BTreeMap, HashSet};

use chrono::Datelike;

use super::domain::{Candidate, CandidateId, CandidateStatus, Stage};
use super::evaluation::Evaluation;
use super::rating::{round1, round2};

const PASS_THRESHOLD: f64 = 3.0;
const TOP_ENTRIES: usize = 10;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn build_dashboard(candidates: &[Candidate], evaluations: &[Evaluation]) -> DashboardMetrics {
    let interviews_completed = evaluations.iter().filter(|e| e.is_completed).count();

    DashboardMetrics {
        total_candidates: candidates.len(),
        interviews_scheduled: evaluations.len(),
        interviews_completed,
        stage_stats: stage_stats(evaluations),
        overall_pass_rate: overall_pass_rate(evaluations),
        funnel: funnel(candidates, evaluations),
        interviewer_stats: interviewer_stats(evaluations),
        monthly_trends: monthly_trends(candidates),
        position_stats: position_stats(candidates, evaluations),
    }
}

fn stage_stats(evaluations: &[Evaluation]) -> Vec<StageStatsEntry> {
    Stage::ordered()
        .into_iter()
        .map(|stage| {
            let total = evaluations.iter().filter(|e| e.stage() == stage).count();
            let completed: Vec<&Evaluation> = evaluations
                .iter()
                .filter(|e| e.stage() == stage && e.is_completed)
                .collect();
            let passed = completed
                .iter()
                .filter(|e| e.overall_rating >= PASS_THRESHOLD)
                .count();

            StageStatsEntry {
                stage,
                stage_label: stage.label(),
                total,
                completed: completed.len(),
                passed,
                failed: completed.len() - passed,
                average_rating: mean_rating(&completed),
            }
        })
        .collect()
}

fn overall_pass_rate(evaluations: &[Evaluation]) -> f64 {
    let completed: Vec<&Evaluation> = evaluations.iter().filter(|e| e.is_completed).collect();
    if completed.is_empty() {
        return 0.0;
    }
    let passed = completed
        .iter()
        .filter(|e| e.overall_rating >= PASS_THRESHOLD)
        .count();
    round2(passed as f64 / completed.len() as f64 * 100.0)
}

/// Candidates counted per stage: anyone whose current stage is at or beyond
/// it, or who has any evaluation recorded for it. The union deliberately
/// keeps candidates who were rejected at a stage in that stage's count.
fn funnel(candidates: &[Candidate], evaluations: &[Evaluation]) -> Vec<FunnelEntry> {
    let mut entries = Vec::with_capacity(Stage::ordered().len());
    let mut previous: Option<usize> = None;

    for stage in Stage::ordered() {
        let count = candidates
            .iter()
            .filter(|candidate| {
                candidate.current_stage.index() >= stage.index()
                    || evaluations
                        .iter()
                        .any(|e| e.candidate_id == candidate.id && e.stage() == stage)
            })
            .count();

        // The union rule lets a later stage out-count an earlier one, so the
        // rate can go negative; keep the subtraction in float space.
        let drop_off_rate = match previous {
            Some(prev) if prev > 0 => {
                round2((prev as f64 - count as f64) / prev as f64 * 100.0)
            }
            _ => 0.0,
        };

        entries.push(FunnelEntry {
            stage,
            stage_label: stage.label(),
            candidate_count: count,
            drop_off_rate,
        });
        previous = Some(count);
    }

    entries
}

fn interviewer_stats(evaluations: &[Evaluation]) -> Vec<InterviewerStats> {
    let mut by_interviewer: BTreeMap<&str, Vec<&Evaluation>> = BTreeMap::new();
    for evaluation in evaluations.iter().filter(|e| e.is_completed) {
        by_interviewer
            .entry(evaluation.interviewer.id.as_str())
            .or_default()
            .push(evaluation);
    }

    let mut stats: Vec<InterviewerStats> = by_interviewer
        .into_iter()
        .map(|(interviewer_id, completed)| {
            let average = completed
                .iter()
                .map(|e| e.overall_rating)
                .sum::<f64>()
                / completed.len() as f64;
            let variance = completed
                .iter()
                .map(|e| (e.overall_rating - average).powi(2))
                .sum::<f64>()
                / completed.len() as f64;
            let consistency = (1.0 - variance.sqrt() / 5.0).max(0.0) * 100.0;

            let mut specialization = Vec::new();
            for evaluation in &completed {
                if !specialization.contains(&evaluation.stage()) {
                    specialization.push(evaluation.stage());
                }
            }

            InterviewerStats {
                interviewer_id: interviewer_id.to_string(),
                interviewer_name: completed[0].interviewer.name.clone(),
                total_interviews: completed.len(),
                average_rating: round2(average),
                consistency: round1(consistency),
                specialization,
            }
        })
        .collect();

    // BTreeMap iteration yields ids ascending, so the stable sort keeps the
    // id tie-break deterministic.
    stats.sort_by(|a, b| b.total_interviews.cmp(&a.total_interviews));
    stats.truncate(TOP_ENTRIES);
    stats
}

/// Candidates bucketed by creation year and month, in calendar order.
fn monthly_trends(candidates: &[Candidate]) -> Vec<MonthlyTrend> {
    let mut buckets: BTreeMap<(i32, u32), (usize, usize, usize)> = BTreeMap::new();

    for candidate in candidates {
        let key = (candidate.created_at.year(), candidate.created_at.month());
        let bucket = buckets.entry(key).or_default();
        bucket.0 += 1;
        if candidate.status == CandidateStatus::Hired {
            bucket.1 += 1;
        }
        if candidate.status == CandidateStatus::Rejected {
            bucket.2 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|((year, month), (total, hired, rejected))| MonthlyTrend {
            month: MONTH_LABELS[(month - 1) as usize],
            year,
            total_candidates: total,
            hired,
            rejected,
        })
        .collect()
}

fn position_stats(candidates: &[Candidate], evaluations: &[Evaluation]) -> Vec<PositionStats> {
    let mut by_position: BTreeMap<&str, Vec<&Candidate>> = BTreeMap::new();
    for candidate in candidates {
        by_position
            .entry(candidate.position.as_str())
            .or_default()
            .push(candidate);
    }

    let mut stats: Vec<PositionStats> = by_position
        .into_iter()
        .map(|(position, group)| {
            let hired = group
                .iter()
                .filter(|c| c.status == CandidateStatus::Hired)
                .count();

            let ids: HashSet<&CandidateId> = group.iter().map(|c| &c.id).collect();
            let completed: Vec<&Evaluation> = evaluations
                .iter()
                .filter(|e| e.is_completed && ids.contains(&e.candidate_id))
                .collect();

            PositionStats {
                position: position.to_string(),
                total_candidates: group.len(),
                hired,
                average_rating: mean_rating(&completed),
                most_common_failure_stage: most_common_failure_stage(&completed),
            }
        })
        .collect();

    // Same deterministic pattern as interviewer stats: position ascending
    // from the map, then a stable sort by group size.
    stats.sort_by(|a, b| b.total_candidates.cmp(&a.total_candidates));
    stats.truncate(TOP_ENTRIES);
    stats
}

/// The stage with the most failing (rating < 3) completed evaluations.
/// Ties resolve to the earliest stage in pipeline order.
fn most_common_failure_stage(completed: &[&Evaluation]) -> Option<Stage> {
    let mut counts = [0usize; 5];
    for evaluation in completed {
        if evaluation.overall_rating < PASS_THRESHOLD {
            counts[evaluation.stage().index()] += 1;
        }
    }

    let mut best: Option<(Stage, usize)> = None;
    for stage in Stage::ordered() {
        let count = counts[stage.index()];
        if count > 0 && best.map_or(true, |(_, top)| count > top) {
            best = Some((stage, count));
        }
    }
    best.map(|(stage, _)| stage)
}

fn mean_rating(evaluations: &[&Evaluation]) -> f64 {
    if evaluations.is_empty() {
        return 0.0;
    }
    round2(
        evaluations.iter().map(|e| e.overall_rating).sum::<f64>() / evaluations.len() as f64,
    )
}
