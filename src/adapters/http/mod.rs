//! HTTP surface over the submission service.
//!
//! | Method | Path                | Behaviour                                  |
//! |--------|---------------------|--------------------------------------------|
//! | GET    | `/api/stats`        | aggregated frequency tables                |
//! | POST   | `/api/testimonials` | validate and persist one testimonial       |
//! | GET    | anything else       | static file under the static root, or 404  |
//!
//! Every response carries `Cache-Control: no-store`.

mod handlers;
mod static_files;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::core::service::SubmissionService;
use crate::core::{ConfigProvider, SubmissionStore};

pub use handlers::{CreatedResponse, THANK_YOU_MESSAGE};

pub struct AppState<S: SubmissionStore> {
    pub service: Arc<SubmissionService<S>>,
    pub body_limit: usize,
}

impl<S: SubmissionStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            body_limit: self.body_limit,
        }
    }
}

pub fn router<S, C>(service: SubmissionService<S>, config: &C) -> Router
where
    S: SubmissionStore + 'static,
    C: ConfigProvider,
{
    let state = AppState {
        service: Arc::new(service),
        body_limit: config.body_limit(),
    };

    Router::new()
        .route(
            "/api/stats",
            get(handlers::stats::<S>).fallback(handlers::not_found),
        )
        .route(
            "/api/testimonials",
            post(handlers::create_testimonial::<S>)
                .fallback(handlers::not_found)
                .layer(DefaultBodyLimit::max(state.body_limit)),
        )
        .fallback_service(static_files::router(config.static_dir()))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
