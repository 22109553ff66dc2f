use actix_web::{web, HttpResponse};
use relay_shared::types::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// Handler for GET /health
///
/// Always 200 while the process serves requests; reports `degraded` when the
/// outbound channel is down.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let mut health = HealthResponse::healthy("otp-relay", env!("CARGO_PKG_VERSION"));
    if !state.dispatch.channel().is_ready() {
        health = health.with_status(HealthStatus::Degraded);
    }
    HttpResponse::Ok().json(health)
}
