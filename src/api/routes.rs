use std::net::IpAddr;
use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use crate::registry::{Registry, ServiceRecord};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceRecord>,
}

/// Resolution result. The protocol field is deliberately omitted here;
/// clients that need it read `/services`.
#[derive(Serialize)]
pub struct ResolveResponse {
    pub name: String,
    pub addresses: Vec<IpAddr>,
    pub port: u16,
}

#[derive(Serialize)]
pub struct RouteNotFound {
    pub error: &'static str,
    pub path: String,
}

#[derive(Serialize)]
pub struct ServiceNotFound {
    pub error: &'static str,
    pub name: String,
}

/// Builds the registry router. Routes are registered with and without a
/// trailing slash so `/health/` behaves like `/health`; any other method or
/// path falls through to the not-found handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health).fallback(not_found))
        .route("/health/", get(get_health).fallback(not_found))
        .route("/services", get(get_services).fallback(not_found))
        .route("/services/", get(get_services).fallback(not_found))
        .route("/resolve/*name", get(resolve_service).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "mock-registry",
    })
}

async fn get_services(State(state): State<AppState>) -> Json<ServicesResponse> {
    Json(ServicesResponse {
        services: state.registry.all().to_vec(),
    })
}

async fn resolve_service(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    // The wildcard capture keeps a trailing slash; strip a single one so
    // "/resolve/db.test/" resolves the same name as "/resolve/db.test".
    let name = match name.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => name,
    };

    match state.registry.resolve(&name) {
        Some(record) => Json(ResolveResponse {
            name: record.name.clone(),
            addresses: record.addresses.clone(),
            port: record.port,
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ServiceNotFound {
                error: "service not found",
                name,
            }),
        )
            .into_response(),
    }
}

async fn not_found(uri: Uri) -> (StatusCode, Json<RouteNotFound>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            error: "not found",
            path: uri.path().to_string(),
        }),
    )
}
