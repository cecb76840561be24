//! Routes for the Draft bounded context: rolling and banning.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use civdraft_draft::application::{command_handlers, query_handlers, replies};
use civdraft_draft::domain::commands;
use civdraft_draft::domain::engine::DraftResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /roll.
#[derive(Debug, Deserialize)]
pub struct RollRequest {
    /// Number of players. Signed so that negative counts reach the player
    /// limit check instead of failing deserialization.
    pub players: i64,
    /// Optional comma-separated player names.
    #[serde(default)]
    pub names: Option<String>,
}

/// One player's group in a roll response.
#[derive(Debug, Serialize)]
pub struct AssignmentBody {
    /// Player name.
    pub player: String,
    /// The player's three civilizations.
    pub civilizations: Vec<String>,
}

/// Response body for POST /roll.
#[derive(Debug, Serialize)]
pub struct RollResponse {
    /// Groups in player order.
    pub assignments: Vec<AssignmentBody>,
    /// Bans consumed by this roll.
    pub exclusions_applied: Vec<String>,
    /// Name-count warning, if the supplied names were discarded.
    pub warning: Option<String>,
    /// When the roll happened.
    pub rolled_at: DateTime<Utc>,
    /// Ready-to-post text reply.
    pub reply: String,
}

impl From<DraftResult> for RollResponse {
    fn from(result: DraftResult) -> Self {
        let reply = replies::roll_reply(&result);
        Self {
            assignments: result
                .assignments
                .into_iter()
                .map(|a| AssignmentBody {
                    player: a.player,
                    civilizations: a.civilizations,
                })
                .collect(),
            exclusions_applied: result.exclusions_applied,
            warning: result.warning.map(|w| w.to_string()),
            rolled_at: result.rolled_at,
            reply,
        }
    }
}

/// Request body for POST /bans.
#[derive(Debug, Deserialize)]
pub struct BanRequest {
    /// Comma-separated civilization names or aliases.
    pub civilizations: String,
}

/// Response body for POST /bans.
#[derive(Debug, Serialize)]
pub struct BanResponse {
    /// Every ban pending for the next roll.
    pub banned: Vec<String>,
    /// Ready-to-post text reply.
    pub reply: String,
}

/// Response body for GET /bans.
#[derive(Debug, Serialize)]
pub struct PendingBansResponse {
    /// Every ban pending for the next roll.
    pub banned: Vec<String>,
}

/// POST /roll
#[instrument(skip(state, request), fields(players = request.players))]
async fn roll(
    State(state): State<AppState>,
    Json(request): Json<RollRequest>,
) -> Result<Json<RollResponse>, ApiError> {
    let command = commands::RollCivilizations {
        correlation_id: Uuid::new_v4(),
        player_count: request.players,
        names: request.names,
    };

    let result = command_handlers::handle_roll_civilizations(
        &command,
        &state.catalog,
        state.limits,
        &state.exclusions,
        &*state.rng,
        state.clock.as_ref(),
    )?;

    Ok(Json(result.into()))
}

/// POST /bans
#[instrument(skip(state, request))]
async fn ban(
    State(state): State<AppState>,
    Json(request): Json<BanRequest>,
) -> Result<Json<BanResponse>, ApiError> {
    let command = commands::BanCivilizations {
        correlation_id: Uuid::new_v4(),
        civilizations: request.civilizations,
    };

    let banned =
        command_handlers::handle_ban_civilizations(&command, &state.catalog, &state.exclusions)?;
    let reply = replies::ban_reply(&banned);

    Ok(Json(BanResponse { banned, reply }))
}

/// GET /bans
#[instrument(skip(state))]
async fn pending_bans(
    State(state): State<AppState>,
) -> Result<Json<PendingBansResponse>, ApiError> {
    let banned = query_handlers::pending_bans(&state.exclusions)?;
    Ok(Json(PendingBansResponse { banned }))
}

/// Returns the router for the draft context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roll", post(roll))
        .route("/bans", post(ban).get(pending_bans))
}
