use std::path::PathBuf;

use csv::ReaderBuilder;

use super::College;

/// Expected header of the college table. `Skills` is optional and defaults
/// to empty.
const COLUMNS: [&str; 5] = ["College", "Location", "Website", "Courses", "Skills"];

/// Read-only CSV-backed college table. A missing file substitutes an empty
/// table with the expected columns; loading never fails the caller's flow.
#[derive(Clone)]
pub struct CollegeStore {
    path: PathBuf,
}

impl CollegeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn list(&self) -> Result<Vec<College>, csv::Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let indices: Vec<Option<usize>> = COLUMNS
            .iter()
            .map(|c| headers.iter().position(|h| h == *c))
            .collect();

        let mut colleges = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |i: usize| -> String {
                indices[i]
                    .and_then(|idx| record.get(idx))
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            };
            colleges.push(College {
                college: field(0),
                location: field(1),
                website: field(2),
                courses: field(3),
                skills: field(4),
            });
        }
        Ok(colleges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = CollegeStore::new(dir.path().join("colleges.csv"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_loads_rows_and_defaults_missing_skills_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colleges.csv");
        std::fs::write(
            &path,
            "College,Location,Website,Courses\n\
             SKUAST-Kashmir,Srinagar,https://www.skuastkashmir.ac.in,\"Engineering,Science\"\n",
        )
        .unwrap();

        let rows = CollegeStore::new(path).list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].college, "SKUAST-Kashmir");
        assert_eq!(rows[0].course_tokens(), ["Engineering", "Science"]);
        assert_eq!(rows[0].skills, "");
    }
}
