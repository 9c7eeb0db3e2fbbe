//! The `quizsmith take` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizsmith_core::grading::{grade, GradedAttempt, Submissions, SubmittedValue};
use quizsmith_core::results::ResultRecord;
use quizsmith_core::storage::QuizStore;

use super::open_store;

pub fn execute(
    answers_path: PathBuf,
    username: String,
    student_name: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, store) = open_store(config_path.as_deref())?;
    let quiz = store.load_quiz()?;
    anyhow::ensure!(
        !quiz.is_empty(),
        "no quiz has been generated yet; run `quizsmith generate` first"
    );

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers: {}", answers_path.display()))?;
    let submissions: Submissions = serde_json::from_str(&content).with_context(|| {
        format!(
            "failed to parse answers: {} (expected an object of index -> answer)",
            answers_path.display()
        )
    })?;

    let attempt = grade(&quiz, &submissions);
    if format != "json" {
        print_attempt(&attempt);
    }

    let record = ResultRecord::new(
        &username,
        student_name.as_deref(),
        attempt,
        &quiz,
        chrono::Local::now().naive_local(),
    );
    let record = store.append_result(record)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Result #{} saved for {}", record.id, record.student_name);
    }

    Ok(())
}

fn print_attempt(attempt: &GradedAttempt) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Points"]);

    for (i, r) in attempt.results.iter().enumerate() {
        let your_answer = match &r.your_answer {
            SubmittedValue::Selected(values) => values.join(", "),
            SubmittedValue::Text(text) => text.clone(),
        };
        let points = if r.is_fully_correct {
            format!("{} (full)", r.points)
        } else {
            r.points.to_string()
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&r.question),
            Cell::new(your_answer),
            Cell::new(r.correct_answer.join(", ")),
            Cell::new(points),
        ]);
    }

    println!("{table}");
    println!(
        "Score: {} / {} ({:.2}%)",
        attempt.summary.score, attempt.summary.total_questions, attempt.summary.percentage
    );
}
