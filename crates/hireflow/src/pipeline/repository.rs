use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ActorIdentity, Candidate, CandidateId, CandidateStatus, RejectionRecord, Stage};
use super::evaluation::Evaluation;

/// Persistence collaborator owning the candidate and evaluation collections.
///
/// The core never caches anything returned from here; every read hands back a
/// snapshot and every aggregate is recomputed per call. Single-writer
/// semantics per candidate are the implementor's responsibility.
pub trait PipelineStore: Send + Sync {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, StoreError>;
    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError>;
    fn fetch_all_candidates(&self) -> Result<Vec<Candidate>, StoreError>;
    fn update_candidate_progress(
        &self,
        id: &CandidateId,
        stage: Stage,
        status: CandidateStatus,
    ) -> Result<(), StoreError>;

    fn insert_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, StoreError>;
    fn fetch_evaluations(&self, candidate_id: &CandidateId) -> Result<Vec<Evaluation>, StoreError>;
    fn fetch_all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError>;

    fn append_rejection(&self, rejection: RejectionRecord) -> Result<(), StoreError>;
    fn rejections_for(&self, candidate_id: &CandidateId)
        -> Result<Vec<RejectionRecord>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound audit hook; every mutation reports who did what to which record.
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: AuditEntry) -> Result<(), AuditError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditTarget {
    Candidate,
    Evaluation,
}

/// Append-only audit trail entry with an explicit actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub action: String,
    pub actor: ActorIdentity,
    pub target_id: String,
    pub target: AuditTarget,
    pub at: DateTime<Utc>,
}

/// Audit dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit transport unavailable: {0}")]
    Transport(String),
}
