//! The hiring pipeline core: stage progression, evaluation scoring, and the
//! derived report and dashboard aggregations.

pub mod analytics;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub(crate) mod progression;
pub mod rating;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use analytics::DashboardMetrics;
pub use domain::{
    ActorIdentity, Candidate, CandidateId, CandidateStatus, FinalDecision, HrDecision,
    Recommendation, RejectionRecord, Stage,
};
pub use evaluation::{Evaluation, EvaluationError, EvaluationId, StageAssessment};
pub use intake::{AssessmentDraft, EvaluationDraft};
pub use rating::RatingValue;
pub use report::ConsolidatedReport;
pub use repository::{
    AuditEntry, AuditError, AuditSink, AuditTarget, PipelineStore, StoreError,
};
pub use router::pipeline_router;
pub use service::{
    CandidateDraft, CandidateProgressView, HiringPipelineService, PipelineError, RecordedEvaluation,
};
