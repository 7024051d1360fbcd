use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::accounts::session::CurrentUser;
use crate::roadmap::data;
use crate::roadmap::matcher::{build_roadmap, Roadmap, DEFAULT_LIMIT};
use crate::state::AppState;

/// GET /api/v1/careers
/// Careers the roadmap can expand, for the career picker.
pub async fn handle_list_careers(_user: CurrentUser) -> Json<Vec<&'static str>> {
    Json(data::careers().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct RoadmapQuery {
    pub career: String,
    pub location: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/v1/roadmap
/// Expands a career into degrees, entrance exams, ranked colleges, MOOCs and
/// the step plan. Degrades to empty collections on any data gap; never
/// errors.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<RoadmapQuery>,
) -> Json<Roadmap> {
    let colleges = state.colleges.list().unwrap_or_else(|e| {
        warn!("College table unreadable ({e}); substituting an empty table");
        Vec::new()
    });
    Json(build_roadmap(
        &params.career,
        params.location.as_deref().map(str::trim).filter(|s| !s.is_empty()),
        params.limit.unwrap_or(DEFAULT_LIMIT),
        &colleges,
    ))
}
