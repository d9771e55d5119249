use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::account::login::login;
use super::handlers::account::me::me;
use super::handlers::account::signup::signup;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_user::get_user;
use super::handlers::users::list_users::list_users;
use super::handlers::users::update_user::update_user;
use super::handlers::vendors::create_vendor::create_vendor;
use super::handlers::vendors::delete_vendor::delete_vendor;
use super::handlers::vendors::get_vendor::get_vendor;
use super::handlers::vendors::list_vendors::list_vendors;
use super::handlers::vendors::update_vendor::update_vendor;
use super::middleware::authenticate;
use crate::domain::user::ports::UserServicePort;
use crate::vendor::ports::VendorServicePort;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub vendor_service: Arc<dyn VendorServicePort>,
    /// Base URL used to render image links.
    pub public_url: String,
}

/// Build the HTTP application.
///
/// `/signup`, `/login` and `/uploads/*` are public; everything else passes
/// the access gate first.
pub fn create_router(
    state: AppState,
    authenticator: Arc<Authenticator>,
    uploads_dir: impl AsRef<Path>,
) -> Router {
    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/me", get(me))
        .route("/users", get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/vendors", get(list_vendors).post(create_vendor))
        .route(
            "/vendors/:id",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
        .route_layer(middleware::from_fn_with_state(authenticator, authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
