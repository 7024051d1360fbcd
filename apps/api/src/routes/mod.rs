pub mod content;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::catalog::handlers as catalog;
use crate::news::handlers as news;
use crate::quiz::handlers as quiz;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signup", post(accounts::handle_signup))
        .route("/api/v1/auth/login", post(accounts::handle_login))
        .route("/api/v1/auth/logout", post(accounts::handle_logout))
        // Profile
        .route("/api/v1/profile", get(accounts::handle_get_profile))
        .route("/api/v1/profile", put(accounts::handle_update_profile))
        .route("/api/v1/profile/avatar", post(accounts::handle_upload_avatar))
        // Quiz (two phases) and persisted paths
        .route("/api/v1/quiz/main", get(quiz::handle_get_main_quiz))
        .route("/api/v1/quiz/main", post(quiz::handle_submit_main_quiz))
        .route("/api/v1/quiz/sub", get(quiz::handle_get_sub_quiz))
        .route("/api/v1/quiz/sub", post(quiz::handle_submit_sub_quiz))
        .route("/api/v1/quiz/retake", post(quiz::handle_retake_quiz))
        .route("/api/v1/paths", get(quiz::handle_get_paths))
        // Roadmap
        .route("/api/v1/careers", get(roadmap::handle_list_careers))
        .route("/api/v1/roadmap", get(roadmap::handle_roadmap))
        // Explore
        .route("/api/v1/colleges", get(catalog::handle_explore))
        // Notifications
        .route("/api/v1/notifications", get(news::handle_notifications))
        // Static content
        .route("/api/v1/home", get(content::handle_home))
        .route("/api/v1/about", get(content::handle_about))
        .with_state(state)
}
