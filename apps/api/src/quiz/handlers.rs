use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::accounts::session::CurrentUser;
use crate::accounts::{CareerPaths, Specialization};
use crate::errors::AppError;
use crate::quiz::models::{pool_view, QuestionView};
use crate::quiz::scoring::{recommend, score, Recommendation};
use crate::state::AppState;

const RETAKE_PROMPT: &str = "No major stream identified. Please retake the quiz.";

#[derive(Debug, Deserialize)]
pub struct AnswerSheet {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MainQuizView {
    pub questions: Vec<QuestionView>,
}

/// GET /api/v1/quiz/main
pub async fn handle_get_main_quiz(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<MainQuizView> {
    Json(MainQuizView {
        questions: pool_view(&state.quiz.main),
    })
}

/// POST /api/v1/quiz/main
/// Scores the main phase and parks the triple in the session; nothing is
/// persisted until the specialization phase completes.
pub async fn handle_submit_main_quiz(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(sheet): Json<AnswerSheet>,
) -> Json<Recommendation> {
    let board = score(&state.quiz.main, &sheet.answers);
    let result = recommend(&board);
    info!(email = %user.email, major = ?result.major, "Main quiz scored");
    state.sessions.set_main_result(user.token, result.clone());
    Json(result)
}

#[derive(Debug, Serialize)]
pub struct SubQuizView {
    pub major: String,
    /// False when no specialization pool exists for the major; submitting
    /// then completes the flow with a null specialization.
    pub available: bool,
    pub questions: Vec<QuestionView>,
}

/// GET /api/v1/quiz/sub
pub async fn handle_get_sub_quiz(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<SubQuizView>, AppError> {
    let major = resolved_major(&user)?;
    let pool = state.quiz.sub.get(&major);
    Ok(Json(SubQuizView {
        available: pool.is_some(),
        questions: pool.map(pool_view).unwrap_or_default(),
        major,
    }))
}

/// POST /api/v1/quiz/sub
/// Completes the flow: scores the specialization pool when one exists for
/// the winning major (skipping it otherwise) and persists the structured
/// result to the user row, overwriting any previous attempt.
pub async fn handle_submit_sub_quiz(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(sheet): Json<AnswerSheet>,
) -> Result<Json<CareerPaths>, AppError> {
    let main = user
        .session
        .quiz
        .main_result
        .clone()
        .ok_or_else(|| AppError::QuizState(RETAKE_PROMPT.to_string()))?;
    let major = main
        .major
        .clone()
        .ok_or_else(|| AppError::QuizState(RETAKE_PROMPT.to_string()))?;

    let specialization = state.quiz.sub.get(&major).map(|pool| {
        let result = recommend(&score(pool, &sheet.answers));
        Specialization {
            major: result.major,
            minor: result.minor,
            backup: result.backup,
        }
    });
    if specialization.is_none() {
        info!(%major, "No specialization pool; completing flow without one");
    }

    let paths = CareerPaths {
        major: main.major,
        minor: main.minor,
        backup: main.backup,
        specialization,
    };

    let updated = state.users.update_with(&user.email, |u| {
        u.your_paths = Some(paths.clone());
    })?;
    let updated =
        updated.ok_or_else(|| AppError::NotFound(format!("User {} not found", user.email)))?;
    state.sessions.mark_sub_done(user.token);
    info!(email = %user.email, "Career paths saved");

    Ok(Json(updated.your_paths.unwrap_or(paths)))
}

/// POST /api/v1/quiz/retake
/// Clears the session's quiz state; the persisted result survives until the
/// retaken quiz completes.
pub async fn handle_retake_quiz(
    State(state): State<AppState>,
    user: CurrentUser,
) -> StatusCode {
    state.sessions.reset_quiz(user.token);
    StatusCode::NO_CONTENT
}

#[derive(Debug, Serialize)]
pub struct PathsView {
    pub paths: Option<CareerPaths>,
}

/// GET /api/v1/paths
/// The persisted quiz outcome, null until the quiz has been completed once.
pub async fn handle_get_paths(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<PathsView>, AppError> {
    let record = state
        .users
        .find_by_email(&user.email)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.email)))?;
    Ok(Json(PathsView {
        paths: record.your_paths,
    }))
}

fn resolved_major(user: &CurrentUser) -> Result<String, AppError> {
    user.session
        .quiz
        .main_result
        .as_ref()
        .and_then(|r| r.major.clone())
        .ok_or_else(|| AppError::QuizState(RETAKE_PROMPT.to_string()))
}
