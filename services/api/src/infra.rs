use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

use hireflow::pipeline::domain::{
    Candidate, CandidateId, CandidateStatus, RejectionRecord, Stage,
};
use hireflow::pipeline::evaluation::Evaluation;
use hireflow::pipeline::repository::{
    AuditEntry, AuditError, AuditSink, PipelineStore, StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store backing the service until a durable collaborator is
/// wired in. Mutex-per-collection keeps the single-writer guarantee the core
/// expects.
#[derive(Default)]
pub(crate) struct InMemoryPipelineStore {
    candidates: Mutex<HashMap<CandidateId, Candidate>>,
    evaluations: Mutex<Vec<Evaluation>>,
    rejections: Mutex<Vec<RejectionRecord>>,
}

impl PipelineStore for InMemoryPipelineStore {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        if guard.contains_key(&candidate.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(candidate.id.clone(), candidate.clone());
        Ok(candidate)
    }

    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn fetch_all_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn update_candidate_progress(
        &self,
        id: &CandidateId,
        stage: Stage,
        status: CandidateStatus,
    ) -> Result<(), StoreError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        let candidate = guard.get_mut(id).ok_or(StoreError::NotFound)?;
        candidate.current_stage = stage;
        candidate.status = status;
        Ok(())
    }

    fn insert_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, StoreError> {
        let mut guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        guard.push(evaluation.clone());
        Ok(evaluation)
    }

    fn fetch_evaluations(&self, candidate_id: &CandidateId) -> Result<Vec<Evaluation>, StoreError> {
        let guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        Ok(guard
            .iter()
            .filter(|e| &e.candidate_id == candidate_id)
            .cloned()
            .collect())
    }

    fn fetch_all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        let guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        Ok(guard.clone())
    }

    fn append_rejection(&self, rejection: RejectionRecord) -> Result<(), StoreError> {
        let mut guard = self.rejections.lock().expect("rejection mutex poisoned");
        guard.push(rejection);
        Ok(())
    }

    fn rejections_for(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<RejectionRecord>, StoreError> {
        let guard = self.rejections.lock().expect("rejection mutex poisoned");
        Ok(guard
            .iter()
            .filter(|r| &r.candidate_id == candidate_id)
            .cloned()
            .collect())
    }
}

/// Audit sink that lands entries on the structured log until a dedicated
/// audit collaborator exists.
#[derive(Default)]
pub(crate) struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: AuditEntry) -> Result<(), AuditError> {
        info!(
            action = %entry.action,
            actor = %entry.actor.id,
            target = %entry.target_id,
            "audit"
        );
        Ok(())
    }
}
