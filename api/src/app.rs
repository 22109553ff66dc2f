//! Application state and factory
//!
//! This module wires the relay services together and provides the factory
//! for creating the Actix-web application.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use relay_core::services::{ChannelSender, DispatchService, OtpStore, PhoneNormalizer};
use relay_infra::{create_channel, InboundDeduplicator};
use relay_shared::errors::{error_codes, ErrorResponse};

use crate::config::AppConfig;
use crate::handlers::json_error_handler;
use crate::routes;

/// Application state that holds shared services
pub struct AppState {
    pub dispatch: Arc<DispatchService>,
    pub dedup: Arc<InboundDeduplicator>,
}

impl AppState {
    pub fn new(dispatch: Arc<DispatchService>, dedup: Arc<InboundDeduplicator>) -> Self {
        Self { dispatch, dedup }
    }

    /// Build the store, channel and dispatch service described by `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let store = Arc::new(OtpStore::new(
            config.store.clone(),
            PhoneNormalizer::new(config.normalizer.clone()),
        ));
        let channel = create_channel(&config.channel);
        Self::with_channel(config, store, channel)
    }

    /// Like [`AppState::from_config`] with a caller-supplied store and channel
    pub fn with_channel(
        config: &AppConfig,
        store: Arc<OtpStore>,
        channel: Arc<dyn ChannelSender>,
    ) -> Self {
        let dispatch = Arc::new(DispatchService::new(store, channel, config.dispatch.clone()));
        let dedup = Arc::new(InboundDeduplicator::new(config.dedup.clone()));
        Self::new(dispatch, dedup)
    }

    pub fn store(&self) -> Arc<OtpStore> {
        Arc::clone(self.dispatch.store())
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        .configure(routes::configure)
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
