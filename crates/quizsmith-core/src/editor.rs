//! In-place authoring operations on a quiz.
//!
//! Questions are addressed by index only. Each operation validates its index
//! against the quiz as it is when the operation runs.

use crate::error::QuizError;
use crate::model::{Question, Quiz, CHOICE};

/// Instructor-entered question content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub answers: Vec<String>,
    pub kind: String,
}

impl QuestionDraft {
    /// Build a draft from form-style input where options and answers are
    /// one per line. Lines are trimmed and blank lines dropped; the type
    /// defaults to `"choice"`.
    pub fn from_lines(question: &str, options: &str, answers: &str, kind: Option<&str>) -> Self {
        Self {
            question: question.trim().to_string(),
            options: split_lines(options),
            answers: split_lines(answers),
            kind: kind
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .unwrap_or(CHOICE)
                .to_string(),
        }
    }

    fn into_question(self) -> Question {
        Question {
            question: self.question,
            kind: self.kind,
            options: self.options,
            answers: self.answers,
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

impl Quiz {
    /// Append a question. Blank question text is rejected.
    pub fn add_question(&mut self, draft: QuestionDraft) -> Result<usize, QuizError> {
        if draft.question.trim().is_empty() {
            return Err(QuizError::EmptyQuestion);
        }
        self.questions.push(draft.into_question());
        Ok(self.questions.len() - 1)
    }

    /// Replace every field of the question at `index`.
    pub fn update_question(&mut self, index: usize, draft: QuestionDraft) -> Result<(), QuizError> {
        let len = self.questions.len();
        let slot = self
            .questions
            .get_mut(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })?;
        *slot = draft.into_question();
        Ok(())
    }

    /// Remove and return the question at `index`. Later questions shift down.
    pub fn delete_question(&mut self, index: usize) -> Result<Question, QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        Ok(self.questions.remove(index))
    }
}
