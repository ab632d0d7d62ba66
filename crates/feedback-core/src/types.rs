//! Shared types used across the feedback service.
//!
//! This module defines the answer model handed from the form to the
//! populator, and the identifier newtype that names output documents.

use crate::error::FeedbackError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Identifier used when the ID service cannot produce one.
pub const FALLBACK_ID: &str = "fallback_id";

/// A single submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Free text, inserted verbatim
    Text(String),
    /// One label from the question's enumerated option list
    Choice(String),
}

impl Answer {
    /// The raw answer string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Choice(s) => s,
        }
    }
}

/// Insertion-ordered mapping from question key to answer.
///
/// Built once per submission and never mutated after it is handed to the
/// populator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    entries: Vec<(String, Answer)>,
}

impl AnswerSet {
    /// Create an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-text answer.
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Answer::Text(value.into()));
        self
    }

    /// Add a single-select answer.
    #[must_use]
    pub fn with_choice(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(key, Answer::Choice(label.into()));
        self
    }

    /// Insert an answer. Re-inserting a key replaces the value in place.
    pub fn insert(&mut self, key: impl Into<String>, answer: Answer) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = answer;
        } else {
            self.entries.push((key, answer));
        }
    }

    /// Look up the answer for a question key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, a)| a)
    }

    /// Whether a question key has an answer.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys from `required` that have no answer, in the order given.
    #[must_use]
    pub fn missing_keys<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        required
            .into_iter()
            .filter(|key| !self.contains_key(key))
            .map(ToString::to_string)
            .collect()
    }

    /// Iterate answers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no question has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifier naming one filled document.
///
/// Identifiers end up in file names, so they must be plain alphanumerics
/// with `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId {
    value: String,
    fallback: bool,
}

impl SubmissionId {
    /// Create a `SubmissionId` from a generated string.
    ///
    /// # Errors
    /// Returns error if the ID is empty, too long, or not file-name safe.
    pub fn new(id: impl Into<String>) -> Result<Self, FeedbackError> {
        let value = id.into();
        Self::validate(&value)?;
        Ok(Self {
            value,
            fallback: false,
        })
    }

    /// The fixed identifier used when generation failed.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            value: FALLBACK_ID.to_string(),
            fallback: true,
        }
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether this is the fallback literal rather than a generated ID.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    fn validate(id: &str) -> Result<(), FeedbackError> {
        static ID_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = ID_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,127}$").expect("valid regex"));

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(FeedbackError::Validation(format!(
                "invalid submission ID: must be 1-128 alphanumerics, '-' or '_', got '{id}'"
            )))
        }
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// UTC timestamp wrapper, serialized as RFC3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
