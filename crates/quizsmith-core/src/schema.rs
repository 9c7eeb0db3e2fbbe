//! Tolerant conversion of generator output into a canonical [`Quiz`].
//!
//! The generator is asked for a JSON array of question objects, but nothing
//! guarantees the field names or value types it uses. Each canonical field is
//! decoded by trying a fixed list of source fields in order and falling back
//! to a default; decoding never fails.

use serde_json::{Map, Value};

use crate::error::QuizError;
use crate::model::{OneOrMany, Question, Quiz, CHOICE};

/// Source fields for the question text, in priority order.
const QUESTION_FIELDS: &[&str] = &["question", "question_text"];

/// Source fields for the accepted answers, in priority order.
const ANSWER_FIELDS: &[&str] = &["answers", "answer"];

const TYPE_FIELD: &str = "type";
const OPTIONS_FIELD: &str = "options";

/// Pull the JSON array out of raw generator output.
///
/// Takes the span from the first `[` to the last `]`, so surrounding prose
/// and markdown fences are ignored.
pub fn extract_json_array(raw: &str) -> Result<Vec<Value>, QuizError> {
    let start = raw.find('[').ok_or(QuizError::NoJsonArray)?;
    let end = raw.rfind(']').ok_or(QuizError::NoJsonArray)?;
    if end < start {
        return Err(QuizError::NoJsonArray);
    }
    Ok(serde_json::from_str(&raw[start..=end])?)
}

/// Extract and normalize a quiz from raw generator output in one step.
pub fn parse_generator_output(raw: &str) -> Result<Quiz, QuizError> {
    let items = extract_json_array(raw)?;
    Ok(normalize_quiz(&items))
}

/// Normalize a list of loosely-structured question objects.
///
/// Produces exactly one question per input element, in order.
pub fn normalize_quiz(raw: &[Value]) -> Quiz {
    Quiz::new(raw.iter().map(normalize_question).collect())
}

/// Normalize one raw question. Non-object values become an empty question.
pub fn normalize_question(raw: &Value) -> Question {
    let empty = Map::new();
    let obj = match raw.as_object() {
        Some(obj) => obj,
        None => {
            tracing::debug!("question entry is not an object, using defaults: {raw}");
            &empty
        }
    };

    let question = first_text(obj, QUESTION_FIELDS).unwrap_or_default();
    let kind = obj
        .get(TYPE_FIELD)
        .and_then(scalar_text)
        .unwrap_or_else(|| CHOICE.to_string());
    let answers = clean_items(decode_answers(obj).into_vec());
    let options = match obj.get(OPTIONS_FIELD) {
        Some(Value::Array(items)) => clean_items(items.clone()),
        Some(other) => {
            tracing::debug!("ignoring non-list options: {other}");
            Vec::new()
        }
        None => Vec::new(),
    };

    Question {
        question,
        kind,
        options,
        answers,
    }
}

/// The first listed field holding non-empty text.
fn first_text(obj: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|f| obj.get(*f))
        .filter_map(scalar_text)
        .find(|s| !s.is_empty())
}

/// Raw answers: the first answer field that is present, even if it is null.
fn decode_answers(obj: &Map<String, Value>) -> OneOrMany<Value> {
    let Some(value) = ANSWER_FIELDS.iter().find_map(|f| obj.get(*f)) else {
        tracing::debug!("question has no answers field");
        return OneOrMany::Many(Vec::new());
    };
    match value {
        Value::Array(items) => OneOrMany::Many(items.clone()),
        Value::Null => OneOrMany::Many(Vec::new()),
        Value::Object(_) => {
            tracing::debug!("ignoring object-valued answers: {value}");
            OneOrMany::Many(Vec::new())
        }
        scalar => OneOrMany::One(scalar.clone()),
    }
}

/// Stringify, trim, and drop null or blank elements.
fn clean_items(items: Vec<Value>) -> Vec<String> {
    items
        .iter()
        .filter_map(item_text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Text form of a scalar field value. Null, lists, and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text form of a list element. Nested structures keep their JSON text.
fn item_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        scalar => scalar_text(scalar),
    }
}
