//! Filter-and-rank over the college table for a chosen career.
//!
//! All matching is case-insensitive substring containment over
//! comma-separated tokens. Every failure mode (unknown career, empty table)
//! degrades to an explicit empty result; this module never errors.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::College;
use crate::roadmap::data;

pub const DEFAULT_LIMIT: usize = 20;
const NO_MAPPING: &str = "No mapping found";

#[derive(Debug, Clone, Serialize)]
pub struct EntranceExam {
    pub exam: String,
    pub reference: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mooc {
    pub title: String,
    pub platform: String,
    pub reference: String,
}

/// The derived, non-persisted plan for one career.
#[derive(Debug, Clone, Serialize)]
pub struct Roadmap {
    pub career: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub degrees: Vec<String>,
    pub entrance: Vec<EntranceExam>,
    pub colleges: Vec<College>,
    pub moocs: Vec<Mooc>,
    pub steps: Vec<String>,
}

pub fn build_roadmap(
    career: &str,
    location_pref: Option<&str>,
    limit: usize,
    colleges: &[College],
) -> Roadmap {
    let degrees = data::degrees_for(career);
    if degrees.is_empty() {
        return Roadmap {
            career: career.to_string(),
            message: Some(NO_MAPPING.to_string()),
            degrees: vec![],
            entrance: vec![],
            colleges: vec![],
            moocs: vec![],
            steps: vec![],
        };
    }

    let keywords: Vec<String> = data::keywords_for(career)
        .iter()
        .map(|k| k.to_lowercase())
        .collect();

    let mut ranked: Vec<(u8, f64, &College)> = colleges
        .iter()
        .filter_map(|college| {
            let base = matching_course_tokens(college, degrees);
            if base == 0 {
                return None;
            }
            let hits = skill_keyword_hits(college, &keywords);
            let score = base as f64 + 0.5 * hits as f64;
            let loc_boost = location_pref
                .map(|pref| location_matches(college, pref) as u8)
                .unwrap_or(0);
            Some((loc_boost, score, college))
        })
        .collect();

    // Three-key stable sort: boost desc, score desc, name asc.
    ranked.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then(b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
            .then_with(|| a.2.college.cmp(&b.2.college))
    });

    let mut picked: Vec<College> = Vec::new();
    for (_, _, college) in ranked {
        if picked.len() == limit {
            break;
        }
        if !picked.contains(college) {
            picked.push(college.clone());
        }
    }

    Roadmap {
        career: career.to_string(),
        message: None,
        degrees: degrees.iter().map(|d| d.to_string()).collect(),
        entrance: entrance_exams(degrees),
        colleges: picked,
        moocs: data::moocs_for(career)
            .iter()
            .map(|(title, platform, reference)| Mooc {
                title: title.to_string(),
                platform: platform.to_string(),
                reference: reference.to_string(),
            })
            .collect(),
        steps: plan_steps(career, degrees),
    }
}

/// Count of course tokens containing any target degree as a substring.
fn matching_course_tokens(college: &College, degrees: &[&str]) -> usize {
    college
        .course_tokens()
        .iter()
        .filter(|token| {
            let token = token.to_lowercase();
            degrees.iter().any(|d| token.contains(&d.to_lowercase()))
        })
        .count()
}

/// Count of career keywords found as substrings in any skill token.
fn skill_keyword_hits(college: &College, keywords: &[String]) -> usize {
    let skills: Vec<String> = college
        .skill_tokens()
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    keywords
        .iter()
        .filter(|kw| skills.iter().any(|s| s.contains(kw.as_str())))
        .count()
}

fn location_matches(college: &College, pref: &str) -> bool {
    college.location.to_lowercase().contains(&pref.to_lowercase())
}

/// Entrance exams for the career's degrees, deduplicated by the
/// (exam, reference) pair, first-seen order preserved.
fn entrance_exams(degrees: &[&str]) -> Vec<EntranceExam> {
    let mut seen: Vec<(&str, &str)> = Vec::new();
    let mut exams = Vec::new();
    for degree in degrees {
        if let Some(pair) = data::entrance_for(degree) {
            if !seen.contains(&pair) {
                seen.push(pair);
                exams.push(EntranceExam {
                    exam: pair.0.to_string(),
                    reference: pair.1.to_string(),
                });
            }
        }
    }
    exams
}

/// The fixed six-step plan, identical for every career apart from the career
/// name and degree list spliced into the text.
fn plan_steps(career: &str, degrees: &[&str]) -> Vec<String> {
    let degree_list = degrees.join(", ");
    vec![
        format!(
            "Match your 10+2 subjects to degree options for {career} and shortlist colleges offering {degree_list}"
        ),
        "Pick the admission route that applies to your shortlist (CUET-UG/JEE Main/NEET-UG or university process) and calendar deadlines".to_string(),
        "Apply to 5-8 colleges across difficulty tiers; prepare required documents and subject prerequisites".to_string(),
        "Enroll in 1 public MOOC per term aligned to core skills; build a small project or portfolio artifact each semester".to_string(),
        "Do a short internship or supervised project each summer; expand your portfolio or clinical/community experience".to_string(),
        "In final year, add a capstone aligned to the target role and prepare for placements or PG entrance".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(name: &str, location: &str, courses: &str, skills: &str) -> College {
        College {
            college: name.to_string(),
            location: location.to_string(),
            website: format!("https://{}.example", name.to_lowercase().replace(' ', "-")),
            courses: courses.to_string(),
            skills: skills.to_string(),
        }
    }

    #[test]
    fn test_unknown_career_is_explicit_no_mapping() {
        let roadmap = build_roadmap("NoSuchCareer", None, DEFAULT_LIMIT, &[]);
        assert_eq!(roadmap.message.as_deref(), Some("No mapping found"));
        assert!(roadmap.colleges.is_empty());
        assert!(roadmap.steps.is_empty());
        assert!(roadmap.degrees.is_empty());
    }

    #[test]
    fn test_degree_substring_gates_candidacy() {
        // "Science" alone contains no Software Developer degree string;
        // "B.Tech" does.
        let table = vec![
            college("Tech College", "Srinagar", "B.Tech,Science", ""),
            college("Science Only", "Srinagar", "Science", ""),
        ];
        let roadmap = build_roadmap("Software Developer", None, DEFAULT_LIMIT, &table);
        let names: Vec<&str> = roadmap.colleges.iter().map(|c| c.college.as_str()).collect();
        assert_eq!(names, ["Tech College"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = vec![college("Lowercase U", "Jammu", "b.tech", "")];
        let roadmap = build_roadmap("Software Developer", None, DEFAULT_LIMIT, &table);
        assert_eq!(roadmap.colleges.len(), 1);
    }

    #[test]
    fn test_location_boost_orders_preferred_first() {
        // Identical match scores; only the location differs.
        let table = vec![
            college("Away College", "Jammu", "B.Tech", ""),
            college("Home College", "Srinagar", "B.Tech", ""),
        ];
        let roadmap = build_roadmap("Software Developer", Some("srinagar"), DEFAULT_LIMIT, &table);
        let names: Vec<&str> = roadmap.colleges.iter().map(|c| c.college.as_str()).collect();
        assert_eq!(names, ["Home College", "Away College"]);
    }

    #[test]
    fn test_skill_keywords_break_score_ties() {
        let table = vec![
            college("Plain", "Jammu", "B.Tech", ""),
            college("Skilled", "Jammu", "B.Tech", "programming, software labs"),
        ];
        let roadmap = build_roadmap("Software Developer", None, DEFAULT_LIMIT, &table);
        let names: Vec<&str> = roadmap.colleges.iter().map(|c| c.college.as_str()).collect();
        assert_eq!(names, ["Skilled", "Plain"]);
    }

    #[test]
    fn test_equal_scores_sort_by_name() {
        let table = vec![
            college("Zed College", "Jammu", "B.Tech", ""),
            college("Alpha College", "Jammu", "B.Tech", ""),
        ];
        let roadmap = build_roadmap("Software Developer", None, DEFAULT_LIMIT, &table);
        let names: Vec<&str> = roadmap.colleges.iter().map(|c| c.college.as_str()).collect();
        assert_eq!(names, ["Alpha College", "Zed College"]);
    }

    #[test]
    fn test_identical_rows_are_deduplicated_and_limited() {
        let duplicate = college("Twin", "Jammu", "B.Tech", "");
        let table = vec![duplicate.clone(), duplicate.clone()];
        let roadmap = build_roadmap("Software Developer", None, DEFAULT_LIMIT, &table);
        assert_eq!(roadmap.colleges.len(), 1);

        let many: Vec<College> = (0..30)
            .map(|i| college(&format!("College {i:02}"), "Jammu", "B.Tech", ""))
            .collect();
        let roadmap = build_roadmap("Software Developer", None, 5, &many);
        assert_eq!(roadmap.colleges.len(), 5);
    }

    #[test]
    fn test_entrance_exams_dedup_by_exam_and_reference() {
        // Software Developer degrees: BCA, B.Sc, B.Tech, BE. B.Tech and BE
        // share the JEE Main pair, which must appear once.
        let roadmap = build_roadmap("Software Developer", None, DEFAULT_LIMIT, &[]);
        let jee: Vec<&EntranceExam> = roadmap
            .entrance
            .iter()
            .filter(|e| e.exam == "JEE Main")
            .collect();
        assert_eq!(jee.len(), 1);
        assert_eq!(roadmap.entrance.len(), 3);
    }

    #[test]
    fn test_empty_table_still_yields_full_plan() {
        let roadmap = build_roadmap("Nurse", None, DEFAULT_LIMIT, &[]);
        assert!(roadmap.message.is_none());
        assert!(roadmap.colleges.is_empty());
        assert_eq!(roadmap.steps.len(), 6);
        assert_eq!(roadmap.degrees, ["B.Sc. Nursing"]);
        assert!(roadmap.steps[0].contains("Nurse"));
        assert!(roadmap.steps[0].contains("B.Sc. Nursing"));
    }
}
