use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::accounts::session::CurrentUser;
use crate::catalog::College;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExploreQuery {
    pub search: Option<String>,
}

/// GET /api/v1/colleges
/// The Explore screen: the full college table, optionally narrowed by a
/// case-insensitive substring search over every cell.
pub async fn handle_explore(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<ExploreQuery>,
) -> Result<Json<Vec<College>>, AppError> {
    let mut colleges = state.colleges.list()?;
    if let Some(search) = params.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        colleges.retain(|c| c.matches_search(search));
    }
    Ok(Json(colleges))
}
