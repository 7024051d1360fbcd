//! The college reference table: static rows loaded from CSV, searched by the
//! Explore screen and filtered by the roadmap matcher.

use serde::Serialize;

pub mod handlers;
pub mod store;

/// One row of the college table. `courses` and `skills` are comma-separated
/// token lists in the source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct College {
    pub college: String,
    pub location: String,
    pub website: String,
    pub courses: String,
    pub skills: String,
}

impl College {
    pub fn course_tokens(&self) -> Vec<String> {
        split_tokens(&self.courses)
    }

    pub fn skill_tokens(&self) -> Vec<String> {
        split_tokens(&self.skills)
    }

    /// Case-insensitive substring search across every cell, for Explore.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            &self.college,
            &self.location,
            &self.website,
            &self.courses,
            &self.skills,
        ]
        .iter()
        .any(|cell| cell.to_lowercase().contains(&needle))
    }
}

/// Splits a comma-separated cell into trimmed, non-empty tokens.
pub fn split_tokens(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college() -> College {
        College {
            college: "GCET Jammu".to_string(),
            location: "Jammu".to_string(),
            website: "https://gcetjammu.ac.in".to_string(),
            courses: "Commerce, Arts ,Engineering".to_string(),
            skills: "".to_string(),
        }
    }

    #[test]
    fn test_split_tokens_trims_and_drops_empties() {
        assert_eq!(
            split_tokens(" B.Tech , Science,,  "),
            vec!["B.Tech".to_string(), "Science".to_string()]
        );
        assert!(split_tokens("").is_empty());
    }

    #[test]
    fn test_course_tokens() {
        assert_eq!(college().course_tokens(), ["Commerce", "Arts", "Engineering"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let c = college();
        assert!(c.matches_search("jammu"));
        assert!(c.matches_search("ENGINEER"));
        assert!(c.matches_search("gcetjammu.ac"));
        assert!(!c.matches_search("medicine"));
    }
}
