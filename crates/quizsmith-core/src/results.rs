//! Persisted records of graded attempts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::grading::{GradedAttempt, GradingResult};
use crate::model::Quiz;

/// One graded attempt as stored in the results document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// 1-based position in the results document, assigned when stored.
    pub id: u64,
    /// Account that submitted the attempt.
    pub username: String,
    /// Name the student entered, or the username when none was given.
    pub student_name: String,
    /// Local submission time, ISO-8601 without offset.
    pub timestamp: NaiveDateTime,
    pub score: u32,
    pub total_questions: usize,
    pub percentage: f64,
    pub results: Vec<GradingResult>,
    /// The quiz exactly as it was graded.
    pub test_metadata: Quiz,
}

impl ResultRecord {
    /// Build the record for an attempt. The id stays 0 until a store
    /// appends it.
    pub fn new(
        username: &str,
        student_name: Option<&str>,
        attempt: GradedAttempt,
        quiz: &Quiz,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            username: username.to_string(),
            student_name: display_name(username, student_name),
            timestamp,
            score: attempt.summary.score,
            total_questions: attempt.summary.total_questions,
            percentage: attempt.summary.percentage,
            results: attempt.results,
            test_metadata: quiz.clone(),
        }
    }
}

fn display_name(username: &str, student_name: Option<&str>) -> String {
    match student_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => username.to_string(),
    }
}
