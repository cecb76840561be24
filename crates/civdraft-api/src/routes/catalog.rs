//! Routes for the Catalog bounded context: listing, resolution, autocomplete.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use civdraft_catalog::{CivilizationEntry, Suggestion, suggest};
use civdraft_core::error::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /civilizations.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Entries in catalog order.
    pub civilizations: Vec<CivilizationEntry>,
}

/// Query string for GET /autocomplete.
#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    /// The partially typed, comma-separated list.
    #[serde(default)]
    pub input: String,
}

/// Response body for GET /autocomplete.
#[derive(Debug, Serialize)]
pub struct AutocompleteResponse {
    /// At most 25 suggestions.
    pub choices: Vec<Suggestion>,
}

/// Response body for GET /resolve/{token}.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// The token as given.
    pub token: String,
    /// The civilization it names.
    pub canonical_name: String,
}

/// GET /civilizations
async fn list_civilizations(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        civilizations: state.catalog.entries().to_vec(),
    })
}

/// GET /autocomplete
#[instrument(skip(state))]
async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Json<AutocompleteResponse> {
    Json(AutocompleteResponse {
        choices: suggest(&state.catalog, &params.input),
    })
}

/// GET /resolve/{token}
#[instrument(skip(state))]
async fn resolve(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let canonical_name = state
        .catalog
        .resolve(&token)
        .map(str::to_owned)
        .ok_or_else(|| DomainError::UnrecognizedCivilizations(vec![token.clone()]))?;

    Ok(Json(ResolveResponse {
        token,
        canonical_name,
    }))
}

/// Returns the router for the catalog context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/civilizations", get(list_civilizations))
        .route("/autocomplete", get(autocomplete))
        .route("/resolve/{token}", get(resolve))
}
