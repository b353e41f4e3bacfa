//! Match API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::{MatchRecord, MatchRepository, NewMatch};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Create match routes
pub fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/matches", get(list_matches))
        .route("/new-matches", post(create_match))
}

/// GET /matches - List all matches (requires authentication)
async fn list_matches(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<MatchRecord>>> {
    let matches = MatchRepository::list(state.db())
        .await
        .map_err(ApiError::Internal)?;
    Ok(Json(matches))
}

/// Create match request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub past_match: Option<String>,
    pub curr_match: Option<String>,
    pub next_match: Option<String>,
}

/// Create match response body
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchResponse {
    pub message: String,
    #[serde(rename = "match")]
    pub created: MatchRecord,
}

/// POST /new-matches - Add a new match (requires authentication)
async fn create_match(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateMatchRequest>,
) -> ApiResult<(StatusCode, Json<CreateMatchResponse>)> {
    let (past_match, curr_match, next_match) = match (req.past_match, req.curr_match, req.next_match)
    {
        (Some(p), Some(c), Some(n)) if !p.is_empty() && !c.is_empty() && !n.is_empty() => (p, c, n),
        _ => {
            return Err(ApiError::BadRequest("All fields are required".to_string()));
        }
    };

    let created = MatchRepository::create(
        state.db(),
        NewMatch {
            past_match,
            curr_match,
            next_match,
        },
    )
    .await
    .map_err(ApiError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMatchResponse {
            message: "New match added successfully".to_string(),
            created,
        }),
    ))
}
