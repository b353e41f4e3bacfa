//! Player API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{PlayerRepository, UpdatePlayer};
use crate::routes::MessageResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use serde::Deserialize;

/// Create player routes
pub fn player_routes() -> Router<AppState> {
    Router::new().route("/players/:id", put(update_player))
}

/// Update player request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: String,
    pub num: i32,
    pub position: String,
    pub team_id: i32,
}

/// PUT /players/:id - Update player information (requires authentication)
async fn update_player(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(player_id): Path<i32>,
    Json(req): Json<UpdatePlayerRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let updated = PlayerRepository::update(
        state.db(),
        player_id,
        UpdatePlayer {
            name: req.name,
            num: req.num,
            position: req.position,
            team_id: req.team_id,
        },
    )
    .await
    .map_err(ApiError::Internal)?;

    if !updated {
        return Err(ApiError::NotFound("Player not found".to_string()));
    }

    Ok(Json(MessageResponse::new(
        "Player information updated successfully",
    )))
}
