use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::{ActorIdentity, CandidateId, Stage};
use super::intake::EvaluationDraft;
use super::repository::{AuditSink, PipelineStore, StoreError};
use super::service::{CandidateDraft, HiringPipelineService, PipelineError};

/// Router builder exposing the pipeline operations over HTTP.
pub fn pipeline_router<S, A>(service: Arc<HiringPipelineService<S, A>>) -> Router
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/pipeline/candidates",
            post(register_candidate_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/evaluations",
            post(record_evaluation_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/candidates/:candidate_id",
            get(candidate_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/candidates/:candidate_id/rejection",
            post(reject_candidate_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/candidates/:candidate_id/rejections",
            get(rejection_history_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/candidates/:candidate_id/report",
            get(report_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/candidates/:candidate_id/flow",
            get(flow_handler::<S, A>),
        )
        .route(
            "/api/v1/pipeline/dashboard",
            get(dashboard_handler::<S, A>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterCandidateRequest {
    #[serde(flatten)]
    candidate: CandidateDraft,
    actor: ActorIdentity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RejectCandidateRequest {
    stage: Stage,
    reason: String,
    actor: ActorIdentity,
}

pub(crate) async fn register_candidate_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    axum::Json(request): axum::Json<RegisterCandidateRequest>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.register_candidate(request.candidate, &request.actor, Utc::now()) {
        Ok(candidate) => (StatusCode::CREATED, axum::Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_evaluation_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    axum::Json(draft): axum::Json<EvaluationDraft>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.record_evaluation(draft, Utc::now()) {
        Ok(recorded) => {
            (StatusCode::ACCEPTED, axum::Json(recorded.progress_view())).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reject_candidate_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<RejectCandidateRequest>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    let id = CandidateId(candidate_id);
    match service.reject_candidate(
        &id,
        request.stage,
        request.reason,
        &request.actor,
        Utc::now(),
    ) {
        Ok(()) => {
            let payload = json!({
                "candidate_id": id.0,
                "status": "rejected",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn candidate_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.candidate(&CandidateId(candidate_id)) {
        Ok(candidate) => (StatusCode::OK, axum::Json(candidate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rejection_history_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.rejection_history(&CandidateId(candidate_id)) {
        Ok(rejections) => (StatusCode::OK, axum::Json(rejections)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.consolidated_report(&CandidateId(candidate_id)) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn flow_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.evaluation_flow(&CandidateId(candidate_id)) {
        Ok(evaluations) => (StatusCode::OK, axum::Json(evaluations)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_handler<S, A>(
    State(service): State<Arc<HiringPipelineService<S, A>>>,
) -> Response
where
    S: PipelineStore + 'static,
    A: AuditSink + 'static,
{
    match service.dashboard_metrics() {
        Ok(metrics) => (StatusCode::OK, axum::Json(metrics)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PipelineError) -> Response {
    let status = match &error {
        PipelineError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        PipelineError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        PipelineError::Store(StoreError::Unavailable(_)) | PipelineError::Audit(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
