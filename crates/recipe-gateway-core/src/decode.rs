//! Conversion of raw upstream JSON into gateway entities.
//!
//! Two strategies exist and the caller picks one by call site, never by
//! inspecting the payload:
//!
//! - object decode for recipes (fields read by key, missing keys are absent)
//! - tuple decode for reviews (fields read by fixed index, coerced to strings)
//!
//! Every function here is pure.

use serde_json::{Map, Value};

use crate::error::{json_kind, DecodeError};
use crate::types::{Recipe, Review, REVIEW_TUPLE_LEN};

/// Decode a recipe upstream object.
///
/// `requested_id` is used as the recipe's identifier when the payload does not
/// carry a `recipe_id` key of its own.
pub fn decode_recipe(requested_id: &str, payload: &Value) -> Result<Recipe, DecodeError> {
    let object = as_object(payload)?;

    Ok(Recipe {
        recipe_id: scalar_text(object.get("recipe_id"))
            .unwrap_or_else(|| requested_id.to_string()),
        title: scalar_text(object.get("title")),
        author_id: scalar_text(object.get("author_id")),
        ingredients: text_list(object.get("ingredients")),
        steps: text_list(object.get("steps")),
        images: text_list(object.get("images")),
    })
}

/// Extract only the `title` of a recipe upstream object.
pub fn decode_recipe_title(payload: &Value) -> Result<Option<String>, DecodeError> {
    let object = as_object(payload)?;
    Ok(scalar_text(object.get("title")))
}

/// Decode a single review tuple.
///
/// Elements past index 7 are ignored.
pub fn decode_review(payload: &Value) -> Result<Review, DecodeError> {
    let tuple = payload.as_array().ok_or(DecodeError::NotAnArray {
        actual: json_kind(payload),
    })?;

    if tuple.len() < REVIEW_TUPLE_LEN {
        return Err(DecodeError::TupleTooShort {
            expected: REVIEW_TUPLE_LEN,
            actual: tuple.len(),
        });
    }

    let field = |index: usize| element_text(index, &tuple[index]);

    Ok(Review {
        review_id: field(0)?,
        recipe_id: field(1)?,
        user_id: field(2)?,
        date: field(3)?,
        rating: field(4)?,
        text: field(5)?,
        upvotes: field(6)?,
        downvotes: field(7)?,
    })
}

/// Decode a list of review tuples.
///
/// The outer payload must be an array. Each element is decoded on its own and
/// the per-element outcomes are returned in upstream order, so the caller
/// decides whether a malformed element aborts the list or is skipped.
pub fn decode_review_list(
    payload: &Value,
) -> Result<Vec<Result<Review, DecodeError>>, DecodeError> {
    let elements = payload.as_array().ok_or(DecodeError::NotAnArray {
        actual: json_kind(payload),
    })?;

    tracing::trace!(count = elements.len(), "decoding review tuples");
    Ok(elements.iter().map(decode_review).collect())
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, DecodeError> {
    payload.as_object().ok_or(DecodeError::NotAnObject {
        actual: json_kind(payload),
    })
}

/// String form of a tuple element. Scalars only.
fn element_text(index: usize, value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(DecodeError::UnsupportedElement {
            index,
            actual: json_kind(value),
        }),
    }
}

/// String form of an object field. Missing and null are both absent.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A list-valued object field. A bare scalar becomes a one-element list and
/// null elements inside an array are dropped.
fn text_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value? {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| scalar_text(Some(item)))
                .collect(),
        ),
        other => scalar_text(Some(other)).map(|s| vec![s]),
    }
}
