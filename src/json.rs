//! JSON rendering for values that are expected to always serialize.

use serde::Serialize;

use crate::fault::Escalate;

/// Renders `value` as compact JSON.
///
/// # Panics
/// Raises the [`serde_json::Error`] as a [`Fault`](crate::fault::Fault) if `value` can't be
/// represented as JSON, such as a map with non-string keys.
pub fn jsonify<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).escalate()
}
