//! Tolerant extraction of JSON out of free-form model completions.
//!
//! Completions routinely wrap their JSON in markdown code fences, prepend
//! prose, or come back malformed. [`json_candidate`] locates the most
//! plausible JSON substring; [`parse_or_else`] parses it and resolves any
//! failure through a caller-supplied fallback, so the parsing core itself
//! carries no business defaults and never errors.

use serde::de::DeserializeOwned;

/// Locate the JSON candidate inside a raw completion: the body of a
/// ```json fence if present, else the body of the first generic fence,
/// else the whole trimmed input. An unclosed fence takes the rest of the
/// string.
pub fn json_candidate(raw: &str) -> &str {
    if let Some(start) = raw.find("```json") {
        fenced_body(&raw[start + 7..])
    } else if let Some(start) = raw.find("```") {
        fenced_body(&raw[start + 3..])
    } else {
        raw.trim()
    }
}

fn fenced_body(rest: &str) -> &str {
    let end = rest.find("```").unwrap_or(rest.len());
    rest[..end].trim()
}

/// Parse the candidate as `T`, or resolve via `fallback`.
///
/// Parse failures are a normal, expected outcome here and are only logged;
/// they must never surface to callers as errors.
pub fn parse_or_else<T, F>(raw: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match serde_json::from_str(json_candidate(raw)) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("model output was not parseable as structured JSON: {err}");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn extracts_from_json_fence() {
        let value: Value = parse_or_else("```json\n{\"a\":1}\n```", || Value::Null);
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn extracts_from_generic_fence() {
        let value: Value = parse_or_else("Here you go:\n```\n{\"b\": [2]}\n```\nDone.", || {
            Value::Null
        });
        assert_eq!(value, json!({"b": [2]}));
    }

    #[test]
    fn bare_json_parses_directly() {
        let value: Value = parse_or_else("  {\"c\": true}  ", || Value::Null);
        assert_eq!(value, json!({"c": true}));
    }

    #[test]
    fn json_fence_wins_over_generic_fence() {
        let raw = "```\nnot it\n```\n```json\n{\"d\": 4}\n```";
        assert_eq!(json_candidate(raw), "{\"d\": 4}");
    }

    #[test]
    fn unclosed_fence_takes_rest_of_input() {
        assert_eq!(json_candidate("```json\n{\"e\": 5}"), "{\"e\": 5}");
    }

    #[test]
    fn unparseable_input_resolves_through_fallback() {
        let value: Value = parse_or_else("not json at all", || json!("fallback"));
        assert_eq!(value, json!("fallback"));
    }

    #[test]
    fn shape_mismatch_counts_as_parse_failure() {
        // Valid JSON, wrong shape for the requested type.
        let value: Vec<u32> = parse_or_else("{\"a\": 1}", || vec![9]);
        assert_eq!(value, vec![9]);
    }
}
