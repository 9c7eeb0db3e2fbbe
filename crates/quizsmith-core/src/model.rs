//! Core data model types for quizsmith.
//!
//! A [`Quiz`] is an ordered list of canonical [`Question`]s. Its JSON form is
//! a bare array of `{question, type, options, answers}` objects, which is the
//! durable representation storage reads and writes verbatim.

use serde::{Deserialize, Serialize};

/// Question type tag for multi-select questions.
pub const CHOICE: &str = "choice";

/// Question type tag for free-text questions.
pub const TEXT: &str = "text";

/// A single canonical quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text shown to the student.
    #[serde(default)]
    pub question: String,
    /// Type tag. `"choice"` and `"text"` are known; anything else is kept
    /// verbatim and graded like free text.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Display options, used only by choice questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Accepted correct answers.
    #[serde(default)]
    pub answers: Vec<String>,
}

fn default_kind() -> String {
    CHOICE.to_string()
}

impl Question {
    /// Whether this question is graded as a multi-select choice question.
    pub fn is_choice(&self) -> bool {
        self.kind == CHOICE
    }
}

/// An ordered sequence of questions. Index is the only identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A value that arrives either as a single item or as a list.
///
/// Converted to a plain `Vec` at the boundary with [`OneOrMany::into_vec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}
