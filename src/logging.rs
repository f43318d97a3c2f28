use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::middleware::guard::GuardDecision;

/// Initialize console logging.
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info")
/// - **Filtering**: `RUST_LOG` overrides the whole filter when set
/// - **Format**: compact, with targets, file and line numbers
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},warden_auth={},hyper=warn",
            env!("CARGO_CRATE_NAME"),
            log_level,
            log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}

/// Logs each request inside a `request` span carrying its id.
///
/// Guard evaluation runs inside the span, so denials logged by the gate
/// share the request id. The completion line reports the
/// [`GuardDecision`] attached by the guard middleware, or `none` when the
/// request never reached it.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = Uuid::new_v4();
    let span = info_span!("request", request_id = %request_id, method = %method, path = %path);

    let response = next.run(req).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    let guard = response
        .extensions()
        .get::<GuardDecision>()
        .map_or("none", GuardDecision::as_str);

    span.in_scope(|| match status {
        400..=499 => warn!(status, latency_ms, guard, "Client error"),
        500..=599 => error!(status, latency_ms, guard, "Server error"),
        _ => info!(status, latency_ms, guard, "Request completed"),
    });

    response
}
