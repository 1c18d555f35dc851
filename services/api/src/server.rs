use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPipelineStore, TracingAuditSink};
use crate::routes::with_pipeline_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use hireflow::config::AppConfig;
use hireflow::error::AppError;
use hireflow::pipeline::service::HiringPipelineService;
use hireflow::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryPipelineStore::default());
    let audit = Arc::new(TracingAuditSink);
    let pipeline_service = Arc::new(HiringPipelineService::new(store, audit));

    let app = with_pipeline_routes(pipeline_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "interview evaluation pipeline ready");

    axum::serve(listener, app).await?;
    Ok(())
}
