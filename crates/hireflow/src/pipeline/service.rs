use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::analytics::{self, DashboardMetrics};
use super::domain::{
    ActorIdentity, Candidate, CandidateId, CandidateStatus, RejectionRecord, Stage,
};
use super::evaluation::{split_fragments, Evaluation, EvaluationError, EvaluationId};
use super::intake::EvaluationDraft;
use super::progression::{freeze_on_rejection, transition_on_completion};
use super::report::{self, ConsolidatedReport};
use super::repository::{AuditEntry, AuditError, AuditSink, AuditTarget, PipelineStore, StoreError};

/// Service facade composing the store, the audit sink, and the scoring and
/// aggregation rules. Stateless; every call works on fresh store snapshots.
pub struct HiringPipelineService<S, A> {
    store: Arc<S>,
    audit: Arc<A>,
}

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static EVALUATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:06}"))
}

fn next_evaluation_id() -> EvaluationId {
    let id = EVALUATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EvaluationId(format!("eval-{id:06}"))
}

/// Inbound candidate registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience_years: u8,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Result of recording an evaluation: the stored record plus the candidate's
/// post-transition state.
#[derive(Debug, Clone)]
pub struct RecordedEvaluation {
    pub evaluation: Evaluation,
    pub candidate: Candidate,
}

impl RecordedEvaluation {
    pub fn progress_view(&self) -> CandidateProgressView {
        CandidateProgressView {
            evaluation_id: self.evaluation.id.clone(),
            candidate_id: self.candidate.id.clone(),
            stage: self.evaluation.stage().label(),
            overall_rating: self.evaluation.overall_rating,
            candidate_status: self.candidate.status.label(),
            current_stage: self.candidate.current_stage.label(),
        }
    }
}

/// Sanitized view of a candidate's progression after an evaluation lands.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateProgressView {
    pub evaluation_id: EvaluationId,
    pub candidate_id: CandidateId,
    pub stage: &'static str,
    pub overall_rating: f64,
    pub candidate_status: &'static str,
    pub current_stage: &'static str,
}

/// Error raised by the pipeline service.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] EvaluationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl<S, A> HiringPipelineService<S, A>
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    pub fn new(store: Arc<S>, audit: Arc<A>) -> Self {
        Self { store, audit }
    }

    /// Register a new candidate at the start of the pipeline.
    pub fn register_candidate(
        &self,
        draft: CandidateDraft,
        actor: &ActorIdentity,
        registered_at: DateTime<Utc>,
    ) -> Result<Candidate, PipelineError> {
        let candidate = Candidate {
            id: next_candidate_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            position: draft.position,
            experience_years: draft.experience_years,
            resume_url: draft.resume_url,
            created_at: registered_at,
            status: CandidateStatus::Applied,
            current_stage: Stage::Initial,
        };

        let stored = self.store.insert_candidate(candidate)?;
        self.audit.record(AuditEntry {
            action: "register_candidate".to_string(),
            actor: actor.clone(),
            target_id: stored.id.0.clone(),
            target: AuditTarget::Candidate,
            at: registered_at,
        })?;
        info!(candidate = %stored.id.0, position = %stored.position, "candidate registered");
        Ok(stored)
    }

    /// Validate, score, and persist an evaluation; a completed one advances
    /// the candidate's stage exactly once.
    ///
    /// Validation runs before any write so a failure never leaves partial
    /// state behind.
    pub fn record_evaluation(
        &self,
        draft: EvaluationDraft,
        recorded_at: DateTime<Utc>,
    ) -> Result<RecordedEvaluation, PipelineError> {
        let mut candidate = self
            .store
            .fetch_candidate(&draft.candidate_id)?
            .ok_or(StoreError::NotFound)?;

        let assessment = draft.assessment.resolve()?;
        assessment.validate()?;

        let evaluation = Evaluation {
            id: next_evaluation_id(),
            candidate_id: draft.candidate_id,
            interviewer: draft.interviewer.clone(),
            is_completed: draft.is_completed,
            overall_rating: assessment.overall_rating(),
            recommendation: draft.recommendation,
            comments: draft.comments,
            strengths: split_fragments(&draft.strengths),
            areas_for_improvement: split_fragments(&draft.areas_for_improvement),
            completed_at: draft.is_completed.then_some(recorded_at),
            assessment,
        };

        let stored = self.store.insert_evaluation(evaluation)?;

        if stored.is_completed {
            let transition = transition_on_completion(&stored.assessment);
            self.store
                .update_candidate_progress(&candidate.id, transition.next_stage, transition.status)?;
            candidate.current_stage = transition.next_stage;
            candidate.status = transition.status;
        }

        self.audit.record(AuditEntry {
            action: "record_evaluation".to_string(),
            actor: draft.interviewer,
            target_id: stored.id.0.clone(),
            target: AuditTarget::Evaluation,
            at: recorded_at,
        })?;
        info!(
            candidate = %candidate.id.0,
            stage = stored.stage().label(),
            rating = stored.overall_rating,
            completed = stored.is_completed,
            "evaluation recorded"
        );

        Ok(RecordedEvaluation {
            evaluation: stored,
            candidate,
        })
    }

    /// Reject a candidate out of band: the status flips immediately, the
    /// current stage stays frozen, and an append-only rejection record is
    /// written. Rejecting an already-rejected candidate is a no-op and
    /// writes no second record.
    pub fn reject_candidate(
        &self,
        id: &CandidateId,
        stage: Stage,
        reason: String,
        actor: &ActorIdentity,
        rejected_at: DateTime<Utc>,
    ) -> Result<(), PipelineError> {
        let candidate = self
            .store
            .fetch_candidate(id)?
            .ok_or(StoreError::NotFound)?;

        if candidate.status == CandidateStatus::Rejected {
            return Ok(());
        }

        let frozen = freeze_on_rejection(candidate.current_stage);
        self.store
            .update_candidate_progress(&candidate.id, frozen.next_stage, frozen.status)?;
        self.store.append_rejection(RejectionRecord {
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.name.clone(),
            stage,
            reason,
            rejected_at,
            rejected_by: actor.clone(),
        })?;

        self.audit.record(AuditEntry {
            action: "reject_candidate".to_string(),
            actor: actor.clone(),
            target_id: candidate.id.0.clone(),
            target: AuditTarget::Candidate,
            at: rejected_at,
        })?;
        info!(candidate = %candidate.id.0, stage = stage.label(), "candidate rejected");
        Ok(())
    }

    /// Fetch a candidate's current record.
    pub fn candidate(&self, id: &CandidateId) -> Result<Candidate, PipelineError> {
        let candidate = self
            .store
            .fetch_candidate(id)?
            .ok_or(StoreError::NotFound)?;
        Ok(candidate)
    }

    /// All rejection records appended for a candidate.
    pub fn rejection_history(
        &self,
        id: &CandidateId,
    ) -> Result<Vec<RejectionRecord>, PipelineError> {
        self.store
            .fetch_candidate(id)?
            .ok_or(StoreError::NotFound)?;
        Ok(self.store.rejections_for(id)?)
    }

    /// A candidate's evaluations in pipeline order, completion time breaking
    /// ties within a stage.
    pub fn evaluation_flow(&self, id: &CandidateId) -> Result<Vec<Evaluation>, PipelineError> {
        self.store
            .fetch_candidate(id)?
            .ok_or(StoreError::NotFound)?;
        let mut evaluations = self.store.fetch_evaluations(id)?;
        evaluations.sort_by_key(|e| (e.stage().index(), e.completed_at));
        Ok(evaluations)
    }

    /// Recompute the consolidated report for one candidate. Aborts whole on a
    /// missing candidate; partial reports are never returned.
    pub fn consolidated_report(
        &self,
        id: &CandidateId,
    ) -> Result<ConsolidatedReport, PipelineError> {
        let candidate = self
            .store
            .fetch_candidate(id)?
            .ok_or(StoreError::NotFound)?;
        let evaluations = self.store.fetch_evaluations(id)?;
        Ok(report::build_report(&candidate, &evaluations))
    }

    /// Recompute organization-wide dashboard metrics from full snapshots.
    pub fn dashboard_metrics(&self) -> Result<DashboardMetrics, PipelineError> {
        let candidates = self.store.fetch_all_candidates()?;
        let evaluations = self.store.fetch_all_evaluations()?;
        Ok(analytics::build_dashboard(&candidates, &evaluations))
    }
}
