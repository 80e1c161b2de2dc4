//! Field values produced by placeholder resolution

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A polymorphic scalar value that a placeholder path can resolve to
///
/// The `Display` implementation is the exact text inserted into a rendered
/// document: `Null` displays as nothing, dates as `YYYY-MM-DD`, timestamps
/// as RFC 3339 and floats with Rust's shortest round-trip formatting
/// (`500.0` displays as `500`). Floats never use exponent notation:
/// `1e21` displays as `1000000000000000000000` and `1e-7` as `0.0000001`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Convert a JSON value, collapsing objects and arrays to `Null`
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => FieldValue::String(s.clone()),
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Unsigned(u)
                } else {
                    n.as_f64().map_or(FieldValue::Null, FieldValue::Float)
                }
            }
            Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Unsigned(u) => write!(f, "{}", u),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Uuid(u) => write!(f, "{}", u),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            FieldValue::Null => Ok(()),
        }
    }
}

macro_rules! impl_from_scalar {
    ( $( $source:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$source> for FieldValue {
                fn from(value: $source) -> Self {
                    FieldValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_scalar!(
    String => String,
    &str => String,
    i32 => Integer,
    i64 => Integer,
    u32 => Unsigned,
    u64 => Unsigned,
    f64 => Float,
    bool => Boolean,
    Uuid => Uuid,
    NaiveDate => Date,
    DateTime<Utc> => DateTime,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.to_string(), "test");
    }

    #[test]
    fn test_whole_float_displays_without_fraction() {
        assert_eq!(FieldValue::Float(500.0).to_string(), "500");
        assert_eq!(FieldValue::Float(1250.75).to_string(), "1250.75");
    }

    #[test]
    fn test_extreme_floats_display_without_exponent() {
        assert_eq!(FieldValue::Float(1e21).to_string(), "1000000000000000000000");
        assert_eq!(FieldValue::Float(1e-7).to_string(), "0.0000001");
    }

    #[test]
    fn test_null_displays_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(FieldValue::from(date).to_string(), "2024-05-01");

        let ts = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(FieldValue::from(ts).to_string(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(FieldValue::from_json(&json!(500)), FieldValue::Integer(500));
        assert_eq!(FieldValue::from_json(&json!(u64::MAX)), FieldValue::Unsigned(u64::MAX));
        assert_eq!(FieldValue::from_json(&json!(2.5)), FieldValue::Float(2.5));
        assert_eq!(FieldValue::from_json(&json!(true)), FieldValue::Boolean(true));
        assert_eq!(
            FieldValue::from_json(&json!("Acme")),
            FieldValue::String("Acme".to_string())
        );
    }

    #[test]
    fn test_from_json_collections_are_null() {
        assert_eq!(FieldValue::from_json(&json!({"a": 1})), FieldValue::Null);
        assert_eq!(FieldValue::from_json(&json!([1, 2])), FieldValue::Null);
        assert_eq!(FieldValue::from_json(&json!(null)), FieldValue::Null);
    }
}
