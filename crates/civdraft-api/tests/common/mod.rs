//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use civdraft_catalog::Catalog;
use civdraft_core::clock::Clock;
use civdraft_core::rng::DeterministicRng;
use civdraft_draft::domain::roster::PlayerLimits;
use civdraft_test_support::{MockRng, fixed_clock, fixture_catalog};
use http_body_util::BodyExt;
use tower::ServiceExt;

use civdraft_api::routes;
use civdraft_api::state::AppState;

/// State over the built-in catalog with default limits and a `MockRng`.
pub fn builtin_state() -> AppState {
    state_with(Catalog::builtin().unwrap(), PlayerLimits::default(), MockRng)
}

/// State over the six-name fixture catalog, allowing one or two players.
pub fn fixture_state() -> AppState {
    state_with(fixture_catalog(), PlayerLimits::new(1, 2).unwrap(), MockRng)
}

/// State with a fixed clock and the given catalog, limits, and RNG.
pub fn state_with<R>(catalog: Catalog, limits: PlayerLimits, rng: R) -> AppState
where
    R: DeterministicRng + Send + 'static,
{
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(fixed_clock());
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    AppState::new(Arc::new(catalog), limits, rng, clock)
}

/// Build the full app router over `state`. Uses the same route structure as
/// `main.rs`. Clone the state first to inspect it after requests.
pub fn build_test_app(state: AppState) -> Router {
    routes::router().with_state(state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
