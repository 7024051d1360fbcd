use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub news_base_url: String,
    pub users_csv: PathBuf,
    pub colleges_csv: PathBuf,
    pub quiz_file: PathBuf,
    pub avatar_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir =
            PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        Ok(Config {
            news_api_key: require_env("NEWS_API_KEY")?,
            news_base_url: std::env::var("NEWS_BASE_URL")
                .unwrap_or_else(|_| "https://newsapi.org/v2/everything".to_string()),
            users_csv: env_path("USERS_CSV", &data_dir, "users.csv"),
            colleges_csv: env_path("COLLEGES_CSV", &data_dir, "colleges.csv"),
            quiz_file: env_path("QUIZ_FILE", &data_dir, "career_questions.json"),
            avatar_dir: env_path("AVATAR_DIR", &data_dir, "images"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_path(key: &str, data_dir: &Path, default_name: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir.join(default_name))
}
