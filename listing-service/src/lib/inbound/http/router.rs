use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::addresses;
use super::handlers::agents;
use super::handlers::cities;
use super::handlers::login::login;
use super::handlers::properties;
use super::handlers::states;
use super::middleware::authenticate as auth_middleware;
use crate::agent::ports::AgentServicePort;
use crate::property::ports::PropertyServicePort;
use crate::refdata::ports::ReferenceDataServicePort;

#[derive(Clone)]
pub struct AppState {
    pub agent_service: Arc<dyn AgentServicePort>,
    pub property_service: Arc<dyn PropertyServicePort>,
    pub refdata_service: Arc<dyn ReferenceDataServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub token_ttl_minutes: i64,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/token", post(login))
        .route("/api/agents", post(agents::register_agent))
        .route("/api/properties", get(properties::read_all))
        .route("/api/properties/:property_id", get(properties::read_property))
        .route("/api/states", get(states::read_all))
        .route("/api/states/:state_id", get(states::read_state))
        .route("/api/cities", get(cities::read_all))
        .route("/api/cities/:city_id", get(cities::read_city))
        .route("/api/addresses", get(addresses::read_all))
        .route("/api/addresses/:address_id", get(addresses::read_address));

    let protected_routes = Router::new()
        .route("/api/agents/me", get(agents::read_current_agent))
        .route("/api/agents/password", put(agents::change_password))
        .route("/api/properties", post(properties::create_property))
        .route("/api/properties/:property_id", put(properties::update_property))
        .route(
            "/api/properties/:property_id",
            delete(properties::delete_property),
        )
        .route(
            "/api/admin/properties/:property_id",
            delete(properties::admin_delete_property),
        )
        .route("/api/states", post(states::create_state))
        .route("/api/states/:state_id", put(states::update_state))
        .route("/api/states/:state_id", delete(states::delete_state))
        .route("/api/cities", post(cities::create_city))
        .route("/api/cities/:city_id", put(cities::update_city))
        .route("/api/cities/:city_id", delete(cities::delete_city))
        .route("/api/addresses", post(addresses::create_address))
        .route("/api/addresses/:address_id", put(addresses::update_address))
        .route(
            "/api/addresses/:address_id",
            delete(addresses::delete_address),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
