//! Validation of user-supplied generation parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw parameter values keyed by name, as submitted by the instructor.
pub type RawParams = HashMap<String, Value>;

/// Bounds and default for one numeric parameter.
struct ParamSpec {
    name: &'static str,
    default: u32,
    min: u32,
    max: u32,
}

const NUM_QUESTIONS: ParamSpec = ParamSpec {
    name: "num_questions",
    default: 5,
    min: 1,
    max: 20,
};
const NUM_OPTIONS: ParamSpec = ParamSpec {
    name: "num_options",
    default: 4,
    min: 2,
    max: 10,
};
const NUM_CORRECT: ParamSpec = ParamSpec {
    name: "num_correct",
    default: 1,
    min: 1,
    max: 5,
};
const NUM_INCORRECT: ParamSpec = ParamSpec {
    name: "num_incorrect",
    default: 3,
    min: 1,
    max: 10,
};

/// Clamped quiz generation parameters.
///
/// Fields are clamped independently; `num_correct + num_incorrect` may
/// exceed `num_options`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub num_questions: u32,
    pub num_options: u32,
    pub num_correct: u32,
    pub num_incorrect: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_questions: NUM_QUESTIONS.default,
            num_options: NUM_OPTIONS.default,
            num_correct: NUM_CORRECT.default,
            num_incorrect: NUM_INCORRECT.default,
        }
    }
}

impl GenerationParams {
    /// Parse and clamp raw parameters.
    ///
    /// Absent parameters take their individual default. If any present
    /// parameter is not an integer, the whole default set is returned.
    pub fn validate(raw: &RawParams) -> Self {
        Self::parse_all(raw).unwrap_or_else(|| {
            tracing::debug!("invalid generation parameters, using defaults: {raw:?}");
            Self::default()
        })
    }

    fn parse_all(raw: &RawParams) -> Option<Self> {
        Some(Self {
            num_questions: parse_field(raw, &NUM_QUESTIONS)?,
            num_options: parse_field(raw, &NUM_OPTIONS)?,
            num_correct: parse_field(raw, &NUM_CORRECT)?,
            num_incorrect: parse_field(raw, &NUM_INCORRECT)?,
        })
    }

    /// `(questions, options, correct, incorrect)`.
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (
            self.num_questions,
            self.num_options,
            self.num_correct,
            self.num_incorrect,
        )
    }
}

/// Clamped value of one parameter, its default when absent, `None` when
/// present but not an integer.
fn parse_field(raw: &RawParams, spec: &ParamSpec) -> Option<u32> {
    let value = match raw.get(spec.name) {
        Some(v) => parse_int(v)?,
        None => i64::from(spec.default),
    };
    Some(value.clamp(i64::from(spec.min), i64::from(spec.max)) as u32)
}

/// Integer value of a raw parameter. Floats truncate toward zero.
fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_str(s.trim()),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integer value of a decimal string. Out-of-range integers saturate, so
/// they still clamp to the parameter bounds.
fn parse_int_str(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse() {
        return Some(n);
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(pairs: &[(&str, Value)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn one_bad_field_resets_everything() {
        let params = GenerationParams::validate(&raw(&[
            ("num_questions", json!("abc")),
            ("num_options", json!(8)),
        ]));
        assert_eq!(params.as_tuple(), (5, 4, 1, 3));
    }

    #[test]
    fn bad_later_field_resets_earlier_ones() {
        let params = GenerationParams::validate(&raw(&[
            ("num_questions", json!(12)),
            ("num_incorrect", json!(null)),
        ]));
        assert_eq!(params.as_tuple(), (5, 4, 1, 3));
    }

    #[test]
    fn clamps_each_field_independently() {
        assert_eq!(
            GenerationParams::validate(&raw(&[("num_questions", json!(100))])).num_questions,
            20
        );
        let params = GenerationParams::validate(&raw(&[
            ("num_questions", json!(0)),
            ("num_options", json!(1)),
            ("num_correct", json!(9)),
            ("num_incorrect", json!(-4)),
        ]));
        assert_eq!(params.as_tuple(), (1, 2, 5, 1));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let params = GenerationParams::validate(&raw(&[
            ("num_questions", json!(" 7 ")),
            ("num_options", json!("+6")),
        ]));
        assert_eq!(params.as_tuple(), (7, 6, 1, 3));
    }

    #[test]
    fn oversized_integer_strings_clamp() {
        let params = GenerationParams::validate(&raw(&[
            ("num_questions", json!("99999999999999999999")),
            ("num_options", json!("-99999999999999999999")),
        ]));
        assert_eq!(params.as_tuple(), (20, 2, 1, 3));
    }

    #[test]
    fn decimal_strings_are_rejected() {
        let params = GenerationParams::validate(&raw(&[
            ("num_questions", json!("7.5")),
            ("num_options", json!(6)),
        ]));
        assert_eq!(params.as_tuple(), (5, 4, 1, 3));
    }

    #[test]
    fn float_values_truncate() {
        let params = GenerationParams::validate(&raw(&[("num_questions", json!(7.9))]));
        assert_eq!(params.num_questions, 7);
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(
            GenerationParams::validate(&RawParams::new()),
            GenerationParams::default()
        );
    }

    #[test]
    fn no_cross_field_validation() {
        let params = GenerationParams::validate(&raw(&[
            ("num_options", json!(2)),
            ("num_correct", json!(5)),
            ("num_incorrect", json!(10)),
        ]));
        assert_eq!(params.as_tuple(), (5, 2, 5, 10));
    }
}
