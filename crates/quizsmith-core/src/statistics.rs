//! Aggregate statistics over stored attempts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grading::round2;
use crate::results::ResultRecord;

/// Questions are grouped by this many leading characters of their text.
pub const QUESTION_KEY_CHARS: usize = 50;

/// How many of the latest attempts [`QuizStats::recent`] keeps.
pub const RECENT_LIMIT: usize = 10;

/// Summary of all attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizStats {
    pub total_attempts: usize,
    /// Mean score, two decimals.
    pub average_score: f64,
    /// Mean percentage, two decimals.
    pub average_percentage: f64,
    /// Question with the lowest fully-correct rate, if any is below 100%.
    pub hardest_question: Option<HardestQuestion>,
    /// Latest attempts, newest first.
    pub recent: Vec<ResultRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardestQuestion {
    /// Leading characters of the question, with "..." when truncated.
    pub question: String,
    /// Share of attempts that got it fully right, in percent.
    pub correct_rate: f64,
}

#[derive(Default)]
struct Tally {
    correct: usize,
    total: usize,
}

/// Compute statistics over `records` in storage order.
pub fn compute_stats(records: &[ResultRecord]) -> QuizStats {
    let total_attempts = records.len();
    let mean = |sum: f64| {
        if total_attempts == 0 {
            0.0
        } else {
            round2(sum / total_attempts as f64)
        }
    };

    QuizStats {
        total_attempts,
        average_score: mean(records.iter().map(|r| f64::from(r.score)).sum()),
        average_percentage: mean(records.iter().map(|r| r.percentage).sum()),
        hardest_question: hardest_question(records),
        recent: records.iter().rev().take(RECENT_LIMIT).cloned().collect(),
    }
}

fn hardest_question(records: &[ResultRecord]) -> Option<HardestQuestion> {
    // Keys in first-seen order so ties resolve to the earliest question.
    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    for result in records.iter().flat_map(|r| &r.results) {
        let key: String = result.question.chars().take(QUESTION_KEY_CHARS).collect();
        let tally = tallies.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Tally::default()
        });
        tally.total += 1;
        if result.is_fully_correct {
            tally.correct += 1;
        }
    }

    let mut hardest: Option<(&str, f64)> = None;
    for key in &order {
        let tally = &tallies[key];
        let rate = tally.correct as f64 / tally.total as f64;
        if rate < hardest.map_or(1.0, |(_, r)| r) {
            hardest = Some((key.as_str(), rate));
        }
    }

    hardest.map(|(key, rate)| HardestQuestion {
        question: if key.chars().count() >= QUESTION_KEY_CHARS {
            format!("{key}...")
        } else {
            key.to_string()
        },
        correct_rate: round2(rate * 100.0),
    })
}
