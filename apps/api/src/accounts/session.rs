use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::quiz::scoring::Recommendation;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "x-session-token";

/// Per-session context: who is logged in and where their quiz stands.
/// Discarded wholesale on logout; quiz state alone is reset on retake.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub email: String,
    pub quiz: QuizProgress,
}

/// Quiz-in-progress state, private to one session. The main phase is done
/// exactly when `main_result` is set; the specialization phase may complete
/// without producing labels when no pool exists for the winning major.
#[derive(Debug, Clone, Default)]
pub struct QuizProgress {
    pub main_result: Option<Recommendation>,
    pub sub_done: bool,
}

/// In-process session table keyed by opaque UUID tokens.
/// The lock is for memory safety only; a session is driven by one user.
/// Sessions have no expiry: a login that is never logged out stays in the
/// map for the life of the process. Acceptable at this scale; revisit with
/// a TTL sweep if the process ever becomes long-lived and multi-tenant.
#[derive(Clone, Default)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, email: &str) -> Uuid {
        let token = Uuid::new_v4();
        let session = Session {
            email: email.to_string(),
            quiz: QuizProgress::default(),
        };
        self.inner.write().expect("session lock").insert(token, session);
        token
    }

    pub fn get(&self, token: Uuid) -> Option<Session> {
        self.inner.read().expect("session lock").get(&token).cloned()
    }

    pub fn end(&self, token: Uuid) {
        self.inner.write().expect("session lock").remove(&token);
    }

    pub fn set_main_result(&self, token: Uuid, result: Recommendation) {
        if let Some(session) = self.inner.write().expect("session lock").get_mut(&token) {
            session.quiz.main_result = Some(result);
            session.quiz.sub_done = false;
        }
    }

    pub fn mark_sub_done(&self, token: Uuid) {
        if let Some(session) = self.inner.write().expect("session lock").get_mut(&token) {
            session.quiz.sub_done = true;
        }
    }

    pub fn reset_quiz(&self, token: Uuid) {
        if let Some(session) = self.inner.write().expect("session lock").get_mut(&token) {
            session.quiz = QuizProgress::default();
        }
    }
}

/// Extractor resolving the `x-session-token` header to a live session.
/// Handlers take `CurrentUser` to require login.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub token: Uuid,
    pub email: String,
    pub session: Session,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(AppError::Unauthorized)?;
        let session = state.sessions.get(token).ok_or(AppError::Unauthorized)?;
        Ok(CurrentUser {
            token,
            email: session.email.clone(),
            session,
        })
    }
}
