//! Grading submitted answers against a canonical quiz.
//!
//! Choice questions award one point per distinct correctly selected option
//! (extra wrong selections cost nothing). Every other question type is free
//! text and awards a single point when the submission contains an accepted
//! answer.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::matcher::contains_accepted;
use crate::model::{OneOrMany, Question, Quiz};
use crate::text::normalize_text;

/// Recorded in place of an answer when nothing was submitted.
pub const NO_ANSWER: &str = "—";

/// Submitted answers keyed by question index. Missing indices mean no answer.
pub type Submissions = HashMap<usize, OneOrMany<String>>;

/// What the student submitted for one question, as recorded in results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedValue {
    /// Selected options of a choice question.
    Selected(Vec<String>),
    /// Free-text answer, or [`NO_ANSWER`].
    Text(String),
}

impl SubmittedValue {
    pub fn no_answer() -> Self {
        SubmittedValue::Text(NO_ANSWER.to_string())
    }

    pub fn is_no_answer(&self) -> bool {
        matches!(self, SubmittedValue::Text(t) if t == NO_ANSWER)
    }
}

/// Per-question grading outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub question: String,
    pub your_answer: SubmittedValue,
    pub correct_answer: Vec<String>,
    /// Whether the answer was entirely right; consumed by statistics.
    pub is_fully_correct: bool,
    /// Points this question contributed to the score. Not persisted; the
    /// stored record keeps only the total.
    #[serde(skip_serializing, default)]
    pub points: u32,
}

/// Score totals for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub score: u32,
    pub total_questions: usize,
    pub percentage: f64,
}

impl AggregateResult {
    pub fn new(score: u32, total_questions: usize) -> Self {
        Self {
            score,
            total_questions,
            percentage: percentage(score, total_questions),
        }
    }
}

/// `score / total * 100` rounded to two decimals; 0 for an empty quiz.
///
/// Partial credit on multi-answer choice questions can push this above 100.
pub fn percentage(score: u32, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    round2(score as f64 / total_questions as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full grading output for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedAttempt {
    pub summary: AggregateResult,
    pub results: Vec<GradingResult>,
}

/// Grade every question of `quiz` against `submissions`.
pub fn grade(quiz: &Quiz, submissions: &Submissions) -> GradedAttempt {
    let results: Vec<GradingResult> = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let submitted = submissions.get(&i).cloned();
            if q.is_choice() {
                grade_choice(q, submitted)
            } else {
                grade_text(q, submitted)
            }
        })
        .collect();

    let score = results.iter().map(|r| r.points).sum();
    GradedAttempt {
        summary: AggregateResult::new(score, quiz.len()),
        results,
    }
}

fn grade_choice(q: &Question, submitted: Option<OneOrMany<String>>) -> GradingResult {
    let selected: Vec<String> = submitted
        .map(OneOrMany::into_vec)
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();

    let accepted: HashSet<String> = q.answers.iter().map(|a| normalize_text(a)).collect();
    let chosen: HashSet<String> = selected.iter().map(|s| normalize_text(s)).collect();
    let points = chosen.intersection(&accepted).count() as u32;

    GradingResult {
        question: q.question.clone(),
        your_answer: if selected.is_empty() {
            SubmittedValue::no_answer()
        } else {
            SubmittedValue::Selected(selected)
        },
        correct_answer: q.answers.clone(),
        is_fully_correct: chosen == accepted,
        points,
    }
}

fn grade_text(q: &Question, submitted: Option<OneOrMany<String>>) -> GradingResult {
    // A multi-valued submission for a text question keeps its first value.
    let text = submitted
        .and_then(|s| s.into_vec().into_iter().next())
        .map(|s| s.trim().to_string());

    let correct = contains_accepted(text.as_deref(), &q.answers);

    GradingResult {
        question: q.question.clone(),
        your_answer: match text {
            Some(text) if !text.is_empty() => SubmittedValue::Text(text),
            _ => SubmittedValue::no_answer(),
        },
        correct_answer: q.answers.clone(),
        is_fully_correct: correct,
        points: u32::from(correct),
    }
}
