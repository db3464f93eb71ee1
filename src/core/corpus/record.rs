//! FAQ records and load-time alias resolution.
//!
//! Source files in the wild use several shapes for the same record:
//! `question`/`q`, `answer`/`a`/`response`, tags as an array or a
//! single value, keywords as a string or an array. All of that is
//! resolved here so nothing downstream ever looks at raw JSON.

use crate::core::error::{MediBotError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const QUESTION_KEYS: &[&str] = &["question", "q"];
const ANSWER_KEYS: &[&str] = &["answer", "a", "response"];

/// A single FAQ record with all aliases resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Canonical phrasing of the question
    #[serde(default)]
    pub question: String,

    /// Response returned to the user
    #[serde(default)]
    pub answer: String,

    /// Scoring boosts and downstream routing (e.g. a specialist)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Extra indexing text, never shown to the user
    #[serde(default)]
    pub keywords: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Resolve a raw JSON value into a record.
    ///
    /// Returns `None` for values that are not objects. Missing or
    /// null fields become empty; non-string scalars are stringified.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let question = first_present(obj, QUESTION_KEYS)
            .map(text_of)
            .unwrap_or_default();
        let answer = first_present(obj, ANSWER_KEYS)
            .map(text_of)
            .unwrap_or_default();

        let tags = match obj.get("tags") {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|v| !v.is_null())
                .map(text_of)
                .filter(|t| !t.is_empty())
                .collect(),
            Some(v) if is_truthy(v) => vec![text_of(v)],
            _ => Vec::new(),
        };

        let keywords = match obj.get("keywords") {
            Some(Value::Array(items)) => items
                .iter()
                .map(text_of)
                .collect::<Vec<_>>()
                .join(" "),
            Some(v) if is_truthy(v) => text_of(v),
            _ => String::new(),
        };

        Some(Self {
            question,
            answer,
            tags,
            keywords,
        })
    }
}

/// Parse a JSON document into records.
///
/// A top-level value that is not an array yields no records. Array
/// elements that are not objects are skipped.
pub fn parse_records(json: &str) -> Result<Vec<FaqRecord>> {
    let parsed: Value = serde_json::from_str(json)
        .map_err(|e| MediBotError::CorpusLoad(format!("Invalid FAQ JSON: {e}")))?;

    let Value::Array(items) = parsed else {
        tracing::warn!("FAQ source is not a JSON array, treating as empty");
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        match FaqRecord::from_value(item) {
            Some(record) => records.push(record),
            None => tracing::warn!(position, "Skipping FAQ record that is not an object"),
        }
    }
    Ok(records)
}

/// First alias whose value is present and non-empty
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::Null | Value::Object(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(","),
    }
}
