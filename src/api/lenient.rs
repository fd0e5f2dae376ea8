//! Tolerant field decoders.
//!
//! A single wrongly-typed scalar must not reject a whole payload section.
//! Numbers decode as-is, numeric strings are parsed, and anything else
//! becomes NaN so availability tracking reports it as not present.
//! Infinities (`"inf"`, `"1e999"`) are not readings and become NaN too.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    Ok(Some(parsed.filter(|v| v.is_finite()).unwrap_or(f64::NAN)))
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

pub(crate) fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => Some(n.as_f64().is_some_and(|v| v != 0.0)),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_f64")]
        v: Option<f64>,
        #[serde(default, deserialize_with = "super::opt_bool")]
        b: Option<bool>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_strings_and_garbage() {
        assert_eq!(probe(r#"{"v": 12.5}"#).v, Some(12.5));
        assert_eq!(probe(r#"{"v": "1013"}"#).v, Some(1013.0));
        assert_eq!(probe(r#"{"v": null}"#).v, None);
        assert_eq!(probe(r#"{}"#).v, None);
        assert!(probe(r#"{"v": "n/a"}"#).v.unwrap().is_nan());
        assert!(probe(r#"{"v": [1]}"#).v.unwrap().is_nan());
    }

    #[test]
    fn infinities_are_garbage() {
        for raw in [r#""inf""#, r#""-infinity""#, r#""1e999""#, r#""NaN""#] {
            let v = probe(&format!(r#"{{"v": {}}}"#, raw)).v;
            assert!(v.unwrap().is_nan(), "{}", raw);
        }
    }

    #[test]
    fn zero_is_kept() {
        assert_eq!(probe(r#"{"v": 0}"#).v, Some(0.0));
    }

    #[test]
    fn bool_flags() {
        assert_eq!(probe(r#"{"b": true}"#).b, Some(true));
        assert_eq!(probe(r#"{"b": "false"}"#).b, Some(false));
        assert_eq!(probe(r#"{"b": 1}"#).b, Some(true));
        assert_eq!(probe(r#"{"b": "maybe"}"#).b, None);
    }
}
