use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// The full quiz definition: a "main" pool producing the major/minor/backup
/// triple, and per-major "sub" pools producing a specialization triple.
/// Pools are keyed by question id; `BTreeMap` gives the fixed id-sorted
/// iteration order the scorer depends on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizBook {
    #[serde(default)]
    pub main: QuestionPool,
    #[serde(default)]
    pub sub: BTreeMap<String, QuestionPool>,
}

pub type QuestionPool = BTreeMap<String, Question>;

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: BTreeMap<String, QuizOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub weights: Weights,
}

/// Outcome-label weights for one option, kept in document order. The order
/// labels first appear in the pool is the tie-break order between equal
/// scores, so a plain map type would lose information here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weights(pub Vec<(String, i64)>);

impl<'de> Deserialize<'de> for Weights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WeightsVisitor;

        impl<'de> Visitor<'de> for WeightsVisitor {
            type Value = Weights;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of outcome label to integer weight")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Weights, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((label, weight)) = map.next_entry::<String, i64>()? {
                    entries.push((label, weight));
                }
                Ok(Weights(entries))
            }
        }

        deserializer.deserialize_map(WeightsVisitor)
    }
}

impl QuizBook {
    /// Loads the quiz definition. A missing or unparseable file degrades to
    /// an empty book rather than failing startup.
    pub fn load(path: &Path) -> Self {
        let Ok(raw) = std::fs::read_to_string(path) else {
            warn!("Quiz file {} not found; serving an empty quiz", path.display());
            return QuizBook::default();
        };
        match serde_json::from_str(&raw) {
            Ok(book) => book,
            Err(e) => {
                warn!("Quiz file {} is unparseable ({e}); serving an empty quiz", path.display());
                QuizBook::default()
            }
        }
    }
}

/// One question as shown to the client: prompt and option texts, weights
/// withheld.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub key: String,
    pub text: String,
}

pub fn pool_view(pool: &QuestionPool) -> Vec<QuestionView> {
    pool.iter()
        .map(|(id, q)| QuestionView {
            id: id.clone(),
            question: q.question.clone(),
            options: q
                .options
                .iter()
                .map(|(key, opt)| OptionView {
                    key: key.clone(),
                    text: opt.text.clone(),
                })
                .collect(),
        })
        .collect()
}
