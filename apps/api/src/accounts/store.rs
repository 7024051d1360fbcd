use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::warn;

use super::{CareerPaths, UserRecord};

/// Column order of the user table. Written in full on every mutation;
/// columns missing on load default to the empty string.
const COLUMNS: [&str; 10] = [
    "email",
    "password",
    "name",
    "age",
    "gender",
    "city",
    "state",
    "education",
    "avatar",
    "your_paths",
];

/// Flat CSV-backed user table. Every operation reads the whole table,
/// mutates in memory, and writes the whole table back. Not atomic across
/// concurrent sessions; last write wins.
#[derive(Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load_all(&self) -> Result<Vec<UserRecord>, csv::Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let col = |name: &str| headers.iter().position(|h| h == name);
        let indices: Vec<Option<usize>> = COLUMNS.iter().map(|c| col(c)).collect();

        let mut users = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |i: usize| -> &str {
                indices[i]
                    .and_then(|idx| record.get(idx))
                    .unwrap_or_default()
                    .trim()
            };
            users.push(UserRecord {
                email: field(0).to_string(),
                password: field(1).to_string(),
                name: field(2).to_string(),
                age: field(3).parse().unwrap_or_default(),
                gender: field(4).to_string(),
                city: field(5).to_string(),
                state: field(6).to_string(),
                education: field(7).to_string(),
                avatar: field(8).to_string(),
                your_paths: parse_paths(field(9)),
            });
        }
        Ok(users)
    }

    pub fn save_all(&self, users: &[UserRecord]) -> Result<(), csv::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for u in users {
            let paths = u
                .your_paths
                .as_ref()
                .and_then(|p| serde_json::to_string(p).ok())
                .unwrap_or_default();
            writer.write_record([
                u.email.as_str(),
                u.password.as_str(),
                u.name.as_str(),
                u.age.to_string().as_str(),
                u.gender.as_str(),
                u.city.as_str(),
                u.state.as_str(),
                u.education.as_str(),
                u.avatar.as_str(),
                paths.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, csv::Error> {
        Ok(self.load_all()?.into_iter().find(|u| u.email == email))
    }

    /// Appends a new user. Returns `false` without writing when the email is
    /// already present — email is the uniqueness constraint.
    pub fn create(&self, user: UserRecord) -> Result<bool, csv::Error> {
        let mut users = self.load_all()?;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user);
        self.save_all(&users)?;
        Ok(true)
    }

    /// Applies `mutate` to the row with the given email and writes the table
    /// back. Returns the updated row, or `None` when the email is absent (in
    /// which case nothing is written).
    pub fn update_with<F>(&self, email: &str, mutate: F) -> Result<Option<UserRecord>, csv::Error>
    where
        F: FnOnce(&mut UserRecord),
    {
        let mut users = self.load_all()?;
        let Some(user) = users.iter_mut().find(|u| u.email == email) else {
            return Ok(None);
        };
        mutate(user);
        let updated = user.clone();
        self.save_all(&users)?;
        Ok(Some(updated))
    }
}

fn parse_paths(cell: &str) -> Option<CareerPaths> {
    if cell.is_empty() {
        return None;
    }
    match serde_json::from_str(cell) {
        Ok(paths) => Some(paths),
        Err(e) => {
            warn!("Discarding unparseable your_paths cell: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{default_avatar, Specialization};
    use std::path::Path;

    fn scratch_store(dir: &tempfile::TempDir) -> UserStore {
        UserStore::new(dir.path().join("users.csv"))
    }

    fn sample_user(email: &str) -> UserRecord {
        UserRecord {
            email: email.to_string(),
            password: "pw".to_string(),
            name: "Sample".to_string(),
            age: 17,
            gender: "Female".to_string(),
            city: "Srinagar".to_string(),
            state: "J&K".to_string(),
            education: "10+2".to_string(),
            avatar: default_avatar("Female", Path::new("images")),
            your_paths: None,
        }
    }

    #[test]
    fn test_create_then_find_round_trips_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        let user = sample_user("a@example.com");
        assert!(store.create(user.clone()).unwrap());

        let found = store.find_by_email("a@example.com").unwrap().unwrap();
        assert_eq!(found, user);
        assert!(found.avatar.ends_with("avatar1.png"));
    }

    #[test]
    fn test_duplicate_email_rejected_without_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        assert!(store.create(sample_user("a@example.com")).unwrap());

        let mut clash = sample_user("a@example.com");
        clash.name = "Impostor".to_string();
        assert!(!store.create(clash).unwrap());

        let users = store.load_all().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Sample");
    }

    #[test]
    fn test_update_absent_email_is_none_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        store.create(sample_user("a@example.com")).unwrap();

        let result = store
            .update_with("missing@example.com", |u| u.city = "Jammu".to_string())
            .unwrap();
        assert!(result.is_none());
        let users = store.load_all().unwrap();
        assert_eq!(users[0].city, "Srinagar");
    }

    #[test]
    fn test_update_mutates_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        store.create(sample_user("a@example.com")).unwrap();

        let updated = store
            .update_with("a@example.com", |u| {
                u.your_paths = Some(CareerPaths {
                    major: Some("Engineering".to_string()),
                    minor: Some("Science".to_string()),
                    backup: None,
                    specialization: Some(Specialization {
                        major: Some("Software Developer".to_string()),
                        minor: None,
                        backup: None,
                    }),
                })
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.your_paths.as_ref().unwrap().major.as_deref(), Some("Engineering"));

        let found = store.find_by_email("a@example.com").unwrap().unwrap();
        let paths = found.your_paths.unwrap();
        assert_eq!(paths.major.as_deref(), Some("Engineering"));
        let spec = paths.specialization.unwrap();
        assert_eq!(spec.major.as_deref(), Some("Software Developer"));
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        std::fs::write(&path, "email,password,name\na@example.com,pw,Old Row\n").unwrap();

        let store = UserStore::new(path);
        let user = store.find_by_email("a@example.com").unwrap().unwrap();
        assert_eq!(user.name, "Old Row");
        assert_eq!(user.age, 0);
        assert_eq!(user.city, "");
        assert!(user.your_paths.is_none());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = scratch_store(&dir);
        assert!(store.load_all().unwrap().is_empty());
        assert!(store.find_by_email("a@example.com").unwrap().is_none());
    }
}
