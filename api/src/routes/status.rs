use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::app::AppState;
use crate::dto::{PoolEntryDto, PoolResponse, StatusResponse};

/// Handler for GET /status
pub async fn get_status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        channel_ready: state.dispatch.channel().is_ready(),
        active_otps: state.dispatch.store().size(),
        timestamp: Utc::now(),
    })
}

/// Handler for GET /pool
///
/// Codes are redacted; only the first two digits are shown.
pub async fn get_pool(state: web::Data<AppState>) -> HttpResponse {
    let entries: Vec<PoolEntryDto> = state
        .dispatch
        .store()
        .snapshot()
        .into_iter()
        .map(PoolEntryDto::from)
        .collect();

    HttpResponse::Ok().json(PoolResponse {
        pool_count: entries.len(),
        entries,
        timestamp: Utc::now(),
    })
}
