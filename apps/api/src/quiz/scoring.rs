//! Weighted tallying and ranking of quiz answers.
//!
//! Determinism rules: questions are tallied in id-sorted order, labels enter
//! the board in first-seen order, and the ranking sort is stable, so a tie
//! between two labels always resolves to the one defined earlier in the pool.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::models::QuestionPool;

/// Running totals keyed by outcome label, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBoard {
    entries: Vec<(String, i64)>,
}

impl ScoreBoard {
    pub fn add(&mut self, label: &str, weight: i64) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, total)) => *total += weight,
            None => self.entries.push((label.to_string(), weight)),
        }
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, total)| *total)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }
}

/// The top three ranked outcome labels. Slots are null when fewer than three
/// distinct labels scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub backup: Option<String>,
}

/// Tallies the chosen option's weight table entrywise per question. The nth
/// answer pairs with the nth question in id order; unknown answer keys and
/// surplus answers contribute nothing.
pub fn score(pool: &QuestionPool, answers: &[String]) -> ScoreBoard {
    let mut board = ScoreBoard::default();
    for (question, answer) in pool.values().zip(answers) {
        if let Some(option) = question.options.get(answer) {
            for (label, weight) in &option.weights.0 {
                board.add(label, *weight);
            }
        }
    }
    board
}

/// Ranks labels by descending score, stable for ties, and returns the top
/// three.
pub fn recommend(board: &ScoreBoard) -> Recommendation {
    let mut ranked: Vec<&(String, i64)> = board.entries().iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let label = |i: usize| ranked.get(i).map(|(l, _)| l.clone());
    Recommendation {
        major: label(0),
        minor: label(1),
        backup: label(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::models::QuizBook;

    fn two_question_pool() -> QuestionPool {
        let book: QuizBook = serde_json::from_str(
            r#"{
                "main": {
                    "q1": {"question": "First", "options": {
                        "a": {"text": "Option A", "weights": {"A": 2, "B": 1}},
                        "b": {"text": "Option B", "weights": {"B": 3}}
                    }},
                    "q2": {"question": "Second", "options": {
                        "a": {"text": "Option A", "weights": {"A": 1, "C": 3}}
                    }}
                },
                "sub": {}
            }"#,
        )
        .unwrap();
        book.main
    }

    #[test]
    fn test_scores_accumulate_entrywise() {
        let pool = two_question_pool();
        let board = score(&pool, &["a".to_string(), "a".to_string()]);
        assert_eq!(board.get("A"), Some(3));
        assert_eq!(board.get("B"), Some(1));
        assert_eq!(board.get("C"), Some(3));
    }

    #[test]
    fn test_tie_resolves_to_earlier_defined_label() {
        // A and C tie at 3; A appears first in the pool, so A ranks first.
        let pool = two_question_pool();
        let board = score(&pool, &["a".to_string(), "a".to_string()]);
        let rec = recommend(&board);
        assert_eq!(rec.major.as_deref(), Some("A"));
        assert_eq!(rec.minor.as_deref(), Some("C"));
        assert_eq!(rec.backup.as_deref(), Some("B"));
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let pool = two_question_pool();
        let board = score(&pool, &["a".to_string(), "a".to_string()]);
        let mut ranked: Vec<&(String, i64)> = board.entries().iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_empty_pool_and_answers() {
        let board = score(&QuestionPool::new(), &[]);
        assert!(board.is_empty());
        let rec = recommend(&board);
        assert_eq!(rec, Recommendation::default());
    }

    #[test]
    fn test_unknown_answer_key_is_a_no_op() {
        let pool = two_question_pool();
        let board = score(&pool, &["zzz".to_string(), "a".to_string()]);
        assert_eq!(board.get("A"), Some(1));
        assert_eq!(board.get("B"), None);
        assert_eq!(board.get("C"), Some(3));
    }

    #[test]
    fn test_fewer_than_three_labels_leaves_nulls() {
        let mut board = ScoreBoard::default();
        board.add("Engineering", 4);
        let rec = recommend(&board);
        assert_eq!(rec.major.as_deref(), Some("Engineering"));
        assert!(rec.minor.is_none());
        assert!(rec.backup.is_none());
    }

    #[test]
    fn test_surplus_answers_are_ignored() {
        let pool = two_question_pool();
        let board = score(&pool, &["b".to_string(), "a".to_string(), "a".to_string()]);
        assert_eq!(board.get("B"), Some(3));
        assert_eq!(board.get("A"), Some(1));
    }
}
