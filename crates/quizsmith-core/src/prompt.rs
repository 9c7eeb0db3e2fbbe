//! Prompt construction for quiz generation.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::CHOICE;
use crate::params::GenerationParams;

pub const DEFAULT_DIFFICULTY: &str = "easy";

/// Everything the generator needs to ask for one quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Lecture text the quiz is based on.
    pub text: String,
    pub params: GenerationParams,
    /// Requested question type, e.g. "choice" or "text".
    #[serde(default = "default_test_type")]
    pub test_type: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_test_type() -> String {
    CHOICE.to_string()
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

impl QuizRequest {
    pub fn new(text: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            text: text.into(),
            params,
            test_type: default_test_type(),
            difficulty: default_difficulty(),
        }
    }

    pub fn with_test_type(mut self, test_type: impl Into<String>) -> Self {
        self.test_type = test_type.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }
}

/// Join typed text with text extracted from uploaded files.
///
/// Blank file texts are skipped. Fails with [`QuizError::EmptySource`] when
/// nothing but whitespace remains.
pub fn combine_sources<S: AsRef<str>>(typed: &str, file_texts: &[S]) -> Result<String, QuizError> {
    let mut text = typed.trim().to_string();
    for file_text in file_texts {
        let file_text = file_text.as_ref().trim();
        if file_text.is_empty() {
            continue;
        }
        text = format!("{text}\n{file_text}").trim().to_string();
    }
    if text.is_empty() {
        return Err(QuizError::EmptySource);
    }
    Ok(text)
}

/// Render the generation prompt for a request.
///
/// The requested type is stated in the instructions; the example object
/// always shows the `"choice"` shape.
pub fn build_prompt(request: &QuizRequest) -> String {
    let p = &request.params;
    format!(
        r#"Here are the lecture notes:
{text}

Write a quiz based on these notes:
- Number of questions: {questions}
- Number of answer options: {options}
- Number of correct answers per question: {correct}
- Number of incorrect answers per question: {incorrect}
- Question type: {test_type}
- Difficulty: {difficulty}

Return the result strictly as JSON:
[
  {{
    "question": "Question text",
    "options": ["option1", "option2", "option3", ...],
    "answers": ["correct1", ...],
    "type": "{CHOICE}"
  }}
]
"#,
        text = request.text,
        questions = p.num_questions,
        options = p.num_options,
        correct = p.num_correct,
        incorrect = p.num_incorrect,
        test_type = request.test_type,
        difficulty = request.difficulty,
    )
}
