//! The `quizsmith stats` command.

use std::path::PathBuf;

use anyhow::Result;

use quizsmith_core::statistics::{compute_stats, QuizStats};
use quizsmith_core::storage::QuizStore;

use super::open_store;

pub fn execute(format: String, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = open_store(config_path.as_deref())?;
    let stats = compute_stats(&store.load_results()?);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => print_stats(&stats),
    }

    Ok(())
}

fn print_stats(stats: &QuizStats) {
    use comfy_table::{Cell, Table};

    println!("Attempts: {}", stats.total_attempts);
    println!("Average score: {:.2}", stats.average_score);
    println!("Average percentage: {:.2}%", stats.average_percentage);
    match &stats.hardest_question {
        Some(hardest) => println!(
            "Hardest question: {} ({:.2}% fully correct)",
            hardest.question, hardest.correct_rate
        ),
        None => println!("Hardest question: no data"),
    }

    if stats.recent.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Student", "Time", "Score", "Percent"]);
    for r in &stats.recent {
        table.add_row(vec![
            Cell::new(r.id),
            Cell::new(&r.student_name),
            Cell::new(r.timestamp.format("%Y-%m-%d %H:%M")),
            Cell::new(format!("{}/{}", r.score, r.total_questions)),
            Cell::new(format!("{:.2}%", r.percentage)),
        ]);
    }
    println!("\n{table}");
}
