//! Route handlers
//!
//! - `POST /otp` - deposit a code from the upstream system
//! - `POST /inbound` - message pushed by the messaging gateway
//! - `GET /status`, `GET /pool` - relay introspection
//! - `GET /health` - liveness

pub mod health;
pub mod inbound;
pub mod otp;
pub mod status;

use actix_web::web;

/// Register every relay route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/otp", web::post().to(otp::deposit_otp))
        .route("/inbound", web::post().to(inbound::receive_inbound))
        .route("/status", web::get().to(status::get_status))
        .route("/pool", web::get().to(status::get_pool))
        .route("/health", web::get().to(health::health_check));
}
