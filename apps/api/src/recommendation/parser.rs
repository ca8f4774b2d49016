//! Response parser: turns untrusted model output into validated recommendations.
//!
//! Lenient on the outside: commentary around the JSON array is ignored.
//! Strict on the inside: every element must satisfy the field schema, or the whole
//! response is rejected. Nothing partially populated ever leaves this module.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::recommendation::models::CareerRecommendation;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no array found")]
    NoArray,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON array of recommendations")]
    NotAnArray,

    #[error("array contains no recommendations")]
    Empty,

    #[error("element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("element {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("element {index} field `{field}` must be {expected}")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// Extracts and validates the recommendation array embedded in `raw_text`.
pub fn parse_recommendations(raw_text: &str) -> Result<Vec<CareerRecommendation>, ParseError> {
    let start = raw_text.find('[').ok_or(ParseError::NoArray)?;
    let end = raw_text.rfind(']').ok_or(ParseError::NoArray)?;
    if end < start {
        return Err(ParseError::NoArray);
    }

    let decoded: Value = serde_json::from_str(&raw_text[start..=end])?;
    let elements = decoded.as_array().ok_or(ParseError::NotAnArray)?;
    if elements.is_empty() {
        return Err(ParseError::Empty);
    }

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| validate_element(index, element))
        .collect()
}

fn validate_element(index: usize, element: &Value) -> Result<CareerRecommendation, ParseError> {
    let fields = Fields {
        index,
        map: element
            .as_object()
            .ok_or(ParseError::NotAnObject { index })?,
    };

    Ok(CareerRecommendation {
        title: fields.string("title")?,
        match_score: fields.integer("match_score")?,
        reason: fields.string("reason")?,
        required_skills: fields.string_list("required_skills")?,
        average_salary: fields.string("average_salary")?,
        growth_outlook: fields.string("growth_outlook")?,
        learning_roadmap: fields.string_list("learning_roadmap")?,
    })
}

/// Field accessors for one array element. Unknown keys are ignored.
struct Fields<'a> {
    index: usize,
    map: &'a Map<String, Value>,
}

impl Fields<'_> {
    fn get(&self, field: &'static str) -> Result<&Value, ParseError> {
        match self.map.get(field) {
            Some(Value::Null) | None => Err(ParseError::MissingField {
                index: self.index,
                field,
            }),
            Some(value) => Ok(value),
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> ParseError {
        ParseError::InvalidField {
            index: self.index,
            field,
            expected,
        }
    }

    fn string(&self, field: &'static str) -> Result<String, ParseError> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    /// Accepts JSON integers, whole-valued floats and integer strings (`"85"`).
    fn integer(&self, field: &'static str) -> Result<i32, ParseError> {
        let value = self.get(field)?;
        let coerced = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        coerced
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| self.invalid(field, "an integer"))
    }

    fn string_list(&self, field: &'static str) -> Result<Vec<String>, ParseError> {
        let items = self
            .get(field)?
            .as_array()
            .ok_or_else(|| self.invalid(field, "an array of strings"))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.invalid(field, "an array of strings"))
            })
            .collect()
    }
}
