//! The `quizsmith validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizsmith_core::model::Quiz;
use quizsmith_core::storage::QuizStore;
use quizsmith_core::text::normalize_text;

use super::open_store;

/// A problem found in a quiz.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Question index.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

pub fn execute(quiz_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let quiz = match &quiz_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read quiz: {}", path.display()))?;
            serde_json::from_str::<Quiz>(&content)
                .with_context(|| format!("failed to parse quiz: {}", path.display()))?
        }
        None => open_store(config_path.as_deref())?.1.load_quiz()?,
    };

    println!("Quiz: {} questions", quiz.len());

    let warnings = validate_quiz(&quiz);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.index, w.message);
    }

    if warnings.is_empty() {
        println!("Quiz is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

/// Check a quiz for questions a student could not answer correctly.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, q) in quiz.questions.iter().enumerate() {
        let mut warn = |message: String| warnings.push(ValidationWarning { index, message });

        if q.question.trim().is_empty() {
            warn("question text is empty".into());
        }
        if q.answers.is_empty() {
            warn("no accepted answers".into());
        }
        if !q.is_choice() {
            continue;
        }
        if q.options.is_empty() {
            warn("choice question has no options".into());
            continue;
        }

        let options: Vec<String> = q.options.iter().map(|o| normalize_text(o)).collect();
        for answer in &q.answers {
            if !options.contains(&normalize_text(answer)) {
                warn(format!("answer '{answer}' is not among the options"));
            }
        }
    }

    warnings
}
