use serde::Serialize;

use super::super::domain::Stage;

/// Organization-wide dashboard snapshot, recomputed per request.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub total_candidates: usize,
    pub interviews_scheduled: usize,
    pub interviews_completed: usize,
    pub stage_stats: Vec<StageStatsEntry>,
    /// Percentage of completed evaluations with a passing rating.
    pub overall_pass_rate: f64,
    pub funnel: Vec<FunnelEntry>,
    pub interviewer_stats: Vec<InterviewerStats>,
    pub monthly_trends: Vec<MonthlyTrend>,
    pub position_stats: Vec<PositionStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageStatsEntry {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub total: usize,
    pub completed: usize,
    pub passed: usize,
    pub failed: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunnelEntry {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub candidate_count: usize,
    pub drop_off_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewerStats {
    pub interviewer_id: String,
    pub interviewer_name: String,
    pub total_interviews: usize,
    pub average_rating: f64,
    /// 0-100; penalizes rating variance, 100 for a perfectly consistent
    /// interviewer.
    pub consistency: f64,
    pub specialization: Vec<Stage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub year: i32,
    pub total_candidates: usize,
    pub hired: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionStats {
    pub position: String,
    pub total_candidates: usize,
    pub hired: usize,
    pub average_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_failure_stage: Option<Stage>,
}
