//! The `quizsmith edit` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use quizsmith_core::editor::QuestionDraft;
use quizsmith_core::storage::QuizStore;

use super::open_store;

#[derive(Subcommand)]
pub enum EditAction {
    /// Append a question
    Add(QuestionArgs),

    /// Replace the question at an index
    Update {
        /// Zero-based question index
        #[arg(long)]
        index: usize,

        #[command(flatten)]
        draft: QuestionArgs,
    },

    /// Delete the question at an index
    Delete {
        /// Zero-based question index
        #[arg(long)]
        index: usize,
    },
}

#[derive(Args)]
pub struct QuestionArgs {
    /// Question text
    #[arg(long, default_value = "")]
    question: String,

    /// Answer option (repeatable)
    #[arg(long = "option")]
    options: Vec<String>,

    /// Accepted answer (repeatable)
    #[arg(long = "answer")]
    answers: Vec<String>,

    /// Question type: choice or text
    #[arg(long = "type")]
    kind: Option<String>,
}

impl QuestionArgs {
    fn into_draft(self) -> QuestionDraft {
        QuestionDraft::from_lines(
            &self.question,
            &self.options.join("\n"),
            &self.answers.join("\n"),
            self.kind.as_deref(),
        )
    }
}

pub fn execute(action: EditAction, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = open_store(config_path.as_deref())?;
    let mut quiz = store.load_quiz()?;

    let message = match action {
        EditAction::Add(question) => {
            let index = quiz.add_question(question.into_draft())?;
            format!("Question added at index {index}")
        }
        EditAction::Update { index, draft } => {
            quiz.update_question(index, draft.into_draft())?;
            format!("Question {index} updated")
        }
        EditAction::Delete { index } => {
            let removed = quiz.delete_question(index)?;
            format!("Question {index} deleted: {}", removed.question)
        }
    };

    store.save_quiz(&quiz)?;
    println!("{message}");

    Ok(())
}
