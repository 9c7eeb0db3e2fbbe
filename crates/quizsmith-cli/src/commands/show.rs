//! The `quizsmith show` command.

use std::path::PathBuf;

use anyhow::Result;

use quizsmith_core::model::Quiz;
use quizsmith_core::storage::QuizStore;

use super::open_store;

pub fn execute(format: String, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = open_store(config_path.as_deref())?;
    let quiz = store.load_quiz()?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&quiz)?),
        _ => print_quiz(&quiz),
    }

    Ok(())
}

fn print_quiz(quiz: &Quiz) {
    if quiz.is_empty() {
        println!("No quiz has been generated yet.");
        return;
    }

    for (i, q) in quiz.questions.iter().enumerate() {
        println!("[{i}] ({}) {}", q.kind, q.question);
        for option in &q.options {
            let marker = if q.answers.contains(option) { "*" } else { " " };
            println!("    {marker} {option}");
        }
        if q.options.is_empty() {
            println!("    answers: {}", q.answers.join(" | "));
        }
    }
}
