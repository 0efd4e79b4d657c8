use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{appointment, availability, block, customer, health};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Guided booking flow
        .route("/api/v1/venues/{venue_id}/availability", get(availability::get_availability))
        .route("/api/v1/venues/{venue_id}/appointments", post(appointment::create_appointment).get(appointment::list_my_appointments))
        .route("/api/v1/venues/{venue_id}/appointments/{appointment_id}/cancel", post(appointment::cancel_appointment))
        .route("/api/v1/venues/{venue_id}/appointments/{appointment_id}/ics", get(appointment::download_ics))
        .route("/api/v1/venues/{venue_id}/customers/check", get(customer::check_customer))

        // Agenda administration
        .route("/api/v1/venues/{venue_id}/blocks", post(block::create_block).get(block::list_blocks))
        .route("/api/v1/venues/{venue_id}/blocks/{block_id}", delete(block::delete_block))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        venue_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
