use std::sync::Arc;

use crate::accounts::session::SessionManager;
use crate::accounts::store::UserStore;
use crate::catalog::store::CollegeStore;
use crate::config::Config;
use crate::news::NewsSource;
use crate::quiz::models::QuizBook;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub colleges: CollegeStore,
    /// Quiz definitions, loaded once at startup.
    pub quiz: Arc<QuizBook>,
    /// Pluggable news backend. Live: `NewsClient`; tests stub it.
    pub news: Arc<dyn NewsSource>,
    pub sessions: SessionManager,
    pub config: Config,
}
