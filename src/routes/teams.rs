//! Team API routes
//!
//! Deleting a team is a destructive, role-gated operation: the handler
//! checks the role from the verified identity context. The gate itself
//! only decides authenticated-or-not.

use crate::auth::{AuthUser, UserRole};
use crate::error::{ApiError, ApiResult};
use crate::repositories::TeamRepository;
use crate::routes::MessageResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, put},
    Json, Router,
};
use serde::Deserialize;

/// Create team routes
pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams/:id", delete(delete_team))
        .route("/teams/:id/motto", put(update_motto))
}

/// DELETE /teams/:id - Delete a team (requires ADMIN role)
async fn delete_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(team_id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    if auth.role != UserRole::Admin {
        return Err(ApiError::Forbidden("Admin role required".to_string()));
    }

    let deleted = TeamRepository::delete(state.db(), team_id)
        .await
        .map_err(ApiError::Internal)?;

    if !deleted {
        return Err(ApiError::NotFound("Team not found".to_string()));
    }

    Ok(Json(MessageResponse::new("Team deleted successfully")))
}

/// Update motto request body
#[derive(Debug, Deserialize)]
pub struct UpdateMottoRequest {
    #[serde(rename = "Motto")]
    pub motto: String,
}

/// PUT /teams/:id/motto - Update a team's motto (requires authentication)
async fn update_motto(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(team_id): Path<i32>,
    Json(req): Json<UpdateMottoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let exists = TeamRepository::exists(state.db(), team_id)
        .await
        .map_err(ApiError::Internal)?;

    if !exists {
        return Err(ApiError::NotFound("Team not found".to_string()));
    }

    TeamRepository::update_motto(state.db(), team_id, &req.motto)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(MessageResponse::new("Team motto updated successfully")))
}
