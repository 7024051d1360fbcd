//! User accounts: the flat user table, session handling, and the
//! signup/login/profile endpoints.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod handlers;
pub mod session;
pub mod store;

/// One row of the user table. `your_paths` is the sole persisted record of
/// quiz outcomes; retaking the quiz overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub education: String,
    pub avatar: String,
    pub your_paths: Option<CareerPaths>,
}

/// Structured quiz result persisted in the `your_paths` column as JSON.
/// Explicit fields instead of a composite display string, so nothing ever
/// re-parses a free-text result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPaths {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub backup: Option<String>,
    /// Null when the winning major has no specialization pool; callers must
    /// tolerate the absence.
    pub specialization: Option<Specialization>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub backup: Option<String>,
}

/// Public view of a user row. Password is never serialized out.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub email: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub city: String,
    pub state: String,
    pub education: String,
    pub avatar: String,
    pub your_paths: Option<CareerPaths>,
}

impl From<UserRecord> for Profile {
    fn from(u: UserRecord) -> Self {
        Profile {
            email: u.email,
            name: u.name,
            age: u.age,
            gender: u.gender,
            city: u.city,
            state: u.state,
            education: u.education,
            avatar: u.avatar,
            your_paths: u.your_paths,
        }
    }
}

/// Fields a profile edit may change. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub education: Option<String>,
}

/// Default avatar file for a gender bucket, matching the shipped avatar set.
pub fn default_avatar(gender: &str, avatar_dir: &Path) -> String {
    let file = match gender {
        "Male" => "avatar2.png",
        "Female" => "avatar1.png",
        _ => "avatar3.png",
    };
    avatar_dir.join(file).to_string_lossy().into_owned()
}
