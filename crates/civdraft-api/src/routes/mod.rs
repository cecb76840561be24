//! Route modules organized by bounded context.

pub mod catalog;
pub mod draft;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// The full API surface, without middleware layers or state.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/draft", draft::router())
        .nest("/api/v1/catalog", catalog::router())
}
