use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::accounts::session::CurrentUser;
use crate::errors::AppError;
use crate::news::{fetch_relevant_news, keywords_for, NewsItem};
use crate::state::AppState;

// Notifications narrows the generic fetch defaults: a fresher window and a
// shorter list than the raw search contract.
const NOTIFICATION_DAYS: i64 = 14;
const NOTIFICATION_PAGE_SIZE: u32 = 30;
const NOTIFICATION_MAX_ITEMS: usize = 10;

/// Upper bound on the caller-supplied window. `chrono::Duration::days`
/// aborts on out-of-range input, so the bound is enforced before any date
/// arithmetic.
const MAX_NOTIFICATION_DAYS: i64 = 365;

const QUIZ_FIRST_PROMPT: &str = "Take the quiz to get news tailored to your career interests!";

#[derive(Debug, Default, Deserialize)]
pub struct NotificationsQuery {
    pub days: Option<i64>,
    pub max: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub major: String,
    pub items: Vec<NewsItem>,
}

/// GET /api/v1/notifications
/// News for the user's persisted major. A missing quiz result is an explicit
/// prompt, while API failures surface as user-visible errors with no retry.
pub async fn handle_notifications(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<NotificationsQuery>,
) -> Result<Json<NotificationsResponse>, AppError> {
    let days = params.days.unwrap_or(NOTIFICATION_DAYS);
    if !(1..=MAX_NOTIFICATION_DAYS).contains(&days) {
        return Err(AppError::Validation(format!(
            "days must be between 1 and {MAX_NOTIFICATION_DAYS}"
        )));
    }

    let record = state
        .users
        .find_by_email(&user.email)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.email)))?;
    let major = record
        .your_paths
        .and_then(|p| p.major)
        .ok_or_else(|| AppError::Validation(QUIZ_FIRST_PROMPT.to_string()))?;

    let keywords = keywords_for(&major);
    info!(email = %user.email, %major, "Fetching news for major");

    let items = fetch_relevant_news(
        state.news.as_ref(),
        &major,
        &keywords,
        days,
        NOTIFICATION_PAGE_SIZE,
        params.max.unwrap_or(NOTIFICATION_MAX_ITEMS),
    )
    .await?;

    Ok(Json(NotificationsResponse { major, items }))
}
