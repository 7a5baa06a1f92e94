//! Tool-call argument extraction.
//!
//! The voice-assistant platform wraps function arguments in a tool-call
//! message:
//!
//! ```json
//! {
//!   "message": {
//!     "toolCalls": [
//!       { "function": { "name": "get_exchange_rate", "arguments": { "country": "India" } } }
//!     ]
//!   }
//! }
//! ```
//!
//! Direct callers (and manual testing) send the arguments as a flat body
//! instead: `{ "country": "India" }`. Both shapes are accepted identically.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Number, Value};

/// JSON pointer to the first tool call's arguments.
const TOOL_CALL_ARGUMENTS: &str = "/message/toolCalls/0/function/arguments";

/// Pull the arguments object out of a request body.
///
/// Returns the nested tool-call arguments when present and non-empty,
/// otherwise the body itself. A null body yields an empty object.
pub fn extract_arguments(mut body: Value) -> Value {
    if let Some(arguments) = body.pointer_mut(TOOL_CALL_ARGUMENTS) {
        if is_truthy(arguments) {
            return arguments.take();
        }
    }

    if is_truthy(&body) {
        body
    } else {
        Value::Object(Map::new())
    }
}

/// Deserialize extracted arguments into a typed request.
///
/// Arguments that are not an object (a bare string, an array) carry no usable
/// fields, so they produce the request's default with every field absent.
pub fn parse_arguments<T>(arguments: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(arguments).unwrap_or_default()
}

/// Loose truthiness, matching how webhook callers expect optional fields to be
/// treated: `null`, `false`, `0`, and `""` all count as "not provided".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Lenient optional string field.
///
/// - strings are kept as-is, except the empty string which counts as absent
/// - numbers become their decimal form (phone numbers often arrive unquoted);
///   zero counts as absent
/// - anything else counts as absent
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => number_to_string(&n),
        _ => None,
    })
}

/// Decimal form of a number, with whole floats written without a fraction
/// (`96550480304.0` becomes `"96550480304"`).
fn number_to_string(n: &Number) -> Option<String> {
    let f = n.as_f64()?;
    if f == 0.0 {
        return None;
    }

    if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
        Some(format!("{f:.0}"))
    } else {
        Some(n.to_string())
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default, rename_all = "camelCase")]
    struct Args {
        #[serde(deserialize_with = "lenient_string")]
        phone_number: Option<String>,
    }

    #[test]
    fn nested_tool_call_arguments_win() {
        let body = json!({
            "message": {
                "toolCalls": [
                    { "function": { "name": "verify_phone_number", "arguments": { "phoneNumber": "123" } } }
                ]
            }
        });

        assert_eq!(extract_arguments(body), json!({ "phoneNumber": "123" }));
    }

    #[test]
    fn flat_body_is_used_without_tool_call() {
        let body = json!({ "country": "India" });
        assert_eq!(extract_arguments(body.clone()), body);
    }

    #[test]
    fn empty_nested_arguments_fall_back_to_body() {
        let body = json!({
            "message": { "toolCalls": [ { "function": { "arguments": "" } } ] },
            "country": "India"
        });

        let args = extract_arguments(body.clone());
        assert_eq!(args, body);
    }

    #[test]
    fn null_body_becomes_empty_object() {
        assert_eq!(extract_arguments(Value::Null), json!({}));
    }

    #[test]
    fn numbers_are_accepted_as_strings() {
        let args: Args = parse_arguments(json!({ "phoneNumber": 96597215518u64 }));
        assert_eq!(args.phone_number.as_deref(), Some("96597215518"));
    }

    #[test]
    fn whole_floats_lose_their_fraction() {
        let args: Args = parse_arguments(json!({ "phoneNumber": 96550480304.0 }));
        assert_eq!(args.phone_number.as_deref(), Some("96550480304"));

        let args: Args = parse_arguments(json!({ "phoneNumber": 1.5 }));
        assert_eq!(args.phone_number.as_deref(), Some("1.5"));
    }

    #[test]
    fn zero_is_absent() {
        let args: Args = parse_arguments(json!({ "phoneNumber": 0 }));
        assert_eq!(args, Args::default());

        let args: Args = parse_arguments(json!({ "phoneNumber": 0.0 }));
        assert_eq!(args, Args::default());
    }

    #[test]
    fn empty_and_null_fields_are_absent() {
        let args: Args = parse_arguments(json!({ "phoneNumber": "" }));
        assert_eq!(args, Args::default());

        let args: Args = parse_arguments(json!({ "phoneNumber": null }));
        assert_eq!(args, Args::default());
    }

    #[test]
    fn non_object_arguments_yield_defaults() {
        let args: Args = parse_arguments(json!("phoneNumber=123"));
        assert_eq!(args, Args::default());
    }
}
