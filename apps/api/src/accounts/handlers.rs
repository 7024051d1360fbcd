use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::accounts::session::CurrentUser;
use crate::accounts::{default_avatar, Profile, ProfileUpdate, UserRecord};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub education: String,
}

/// POST /api/v1/auth/signup
/// Validation failures and duplicate emails leave the user table untouched.
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".to_string()));
    }
    if req.gender.is_empty() || req.gender == "Select" {
        return Err(AppError::Validation(
            "Please select a gender first!".to_string(),
        ));
    }

    let user = UserRecord {
        email: req.email.trim().to_string(),
        password: req.password,
        name: req.name,
        age: req.age,
        avatar: default_avatar(&req.gender, &state.config.avatar_dir),
        gender: req.gender,
        city: req.city,
        state: req.state,
        education: req.education,
        your_paths: None,
    };

    if !state.users.create(user.clone())? {
        return Err(AppError::Conflict("Email already exists.".to_string()));
    }
    info!(email = %user.email, "User signed up");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub user: Profile,
}

/// POST /api/v1/auth/login
/// Plain equality check against the stored password; wrong email and wrong
/// password are indistinguishable to the caller.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .users
        .find_by_email(req.email.trim())?
        .filter(|u| u.password == req.password)
        .ok_or(AppError::Unauthorized)?;

    let token = state.sessions.start(&user.email);
    info!(email = %user.email, "User logged in");
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/v1/auth/logout
/// Drops the session and with it any quiz-in-progress state.
pub async fn handle_logout(State(state): State<AppState>, user: CurrentUser) -> StatusCode {
    state.sessions.end(user.token);
    info!(email = %user.email, "User logged out");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Profile>, AppError> {
    let record = state
        .users
        .find_by_email(&user.email)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.email)))?;
    Ok(Json(record.into()))
}

/// PUT /api/v1/profile
/// Partial update; absent fields keep their stored values. The avatar is not
/// re-derived when the gender changes.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>, AppError> {
    let updated = state
        .users
        .update_with(&user.email, |u| {
            if let Some(name) = update.name {
                u.name = name;
            }
            if let Some(age) = update.age {
                u.age = age;
            }
            if let Some(gender) = update.gender {
                u.gender = gender;
            }
            if let Some(city) = update.city {
                u.city = city;
            }
            if let Some(state) = update.state {
                u.state = state;
            }
            if let Some(education) = update.education {
                u.education = education;
            }
        })?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.email)))?;
    info!(email = %user.email, "Profile updated");
    Ok(Json(updated.into()))
}

const ALLOWED_AVATAR_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// POST /api/v1/profile/avatar
/// Multipart upload of a replacement avatar image; the file lands in the
/// avatar directory and the user row points at it.
pub async fn handle_upload_avatar(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<Profile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("avatar") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(sanitize_file_name)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("Avatar file name is missing".to_string()))?;
        let extension = file_name.rsplit('.').next().unwrap_or_default().to_lowercase();
        if !ALLOWED_AVATAR_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::Validation(
                "Avatar must be a png, jpg or jpeg file".to_string(),
            ));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;

        tokio::fs::create_dir_all(&state.config.avatar_dir)
            .await
            .map_err(anyhow::Error::from)?;
        let path = state.config.avatar_dir.join(&file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(anyhow::Error::from)?;

        let avatar = path.to_string_lossy().into_owned();
        let updated = state
            .users
            .update_with(&user.email, |u| u.avatar = avatar.clone())?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.email)))?;
        info!(email = %user.email, file = %file_name, "Avatar updated");
        return Ok(Json(updated.into()));
    }
    Err(AppError::Validation(
        "Multipart field 'avatar' is required".to_string(),
    ))
}

/// Keeps only the final path component so an upload cannot escape the avatar
/// directory.
fn sanitize_file_name(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("c:\\temp\\pic.png"), "pic.png");
        assert_eq!(sanitize_file_name("pic.png"), "pic.png");
    }
}
