use std::fmt;

use serde_json::{
    Number,
    Value,
};

use crate::error::{
    Error,
    Result,
};

/// The kinds a decoded JSON value can have.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        Kind::of(value) == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Converts `value` to this kind.
    ///
    /// Values already of this kind come back unchanged. Otherwise only scalar conversions exist:
    /// - string to number: trimmed of ASCII whitespace, then parsed as i64, u64 or finite f64
    /// - boolean to number: `1` or `0`
    /// - number or boolean to string: the JSON text
    /// - string to boolean: exactly `"true"` or `"false"`
    /// - number to boolean: zero is `false`, anything else is `true`
    pub fn cast(self, value: &Value) -> Result<Value> {
        if self.matches(value) {
            return Ok(value.clone());
        }

        let cast = match (self, value) {
            (Kind::Number, Value::String(s)) => Kind::parse_number(s).map(Value::Number),
            (Kind::Number, Value::Bool(b)) => Ok(Value::from(*b as u8)),

            (Kind::String, Value::Number(n)) => Ok(Value::String(n.to_string())),
            (Kind::String, Value::Bool(b)) => Ok(Value::String(b.to_string())),

            (Kind::Boolean, Value::String(s)) => match s.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(format!("{:?} is neither \"true\" nor \"false\"", s)),
            },
            (Kind::Boolean, Value::Number(n)) => Ok(Value::Bool(n.as_f64() != Some(0.0))),

            _ => Err(String::from("no conversion exists")),
        };

        cast.map_err(|reason| Error::Cast {
            target: self,
            found: Kind::of(value),
            reason,
        })
    }

    fn parse_number(s: &str) -> std::result::Result<Number, String> {
        let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::from(i));
        }
        if let Ok(u) = trimmed.parse::<u64>() {
            return Ok(Number::from(u));
        }

        trimmed.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .ok_or_else(|| format!("{:?} is not a finite number", s))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod json_kind_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of() {
        assert_eq!(Kind::of(&json!(null)), Kind::Null);
        assert_eq!(Kind::of(&json!(false)), Kind::Boolean);
        assert_eq!(Kind::of(&json!(1.5)), Kind::Number);
        assert_eq!(Kind::of(&json!(-3)), Kind::Number);
        assert_eq!(Kind::of(&json!("19")), Kind::String);
        assert_eq!(Kind::of(&json!([1, 2])), Kind::Array);
        assert_eq!(Kind::of(&json!({"a": 1})), Kind::Object);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(format!("expected {}", Kind::Boolean), "expected boolean");
    }

    #[test]
    fn test_same_kind_is_unchanged() -> Result<()> {
        let value = json!({"a": [1, 2]});
        assert_eq!(Kind::Object.cast(&value)?, value);
        assert_eq!(Kind::Number.cast(&json!(2.5))?, json!(2.5));
        Ok(())
    }

    #[test]
    fn test_string_to_number() -> Result<()> {
        assert_eq!(Kind::Number.cast(&json!("19"))?, json!(19));
        assert_eq!(Kind::Number.cast(&json!(" -7\n"))?, json!(-7));
        assert_eq!(Kind::Number.cast(&json!("18446744073709551615"))?, json!(u64::MAX));
        assert_eq!(Kind::Number.cast(&json!("19.5"))?, json!(19.5));
        assert_eq!(Kind::Number.cast(&json!("1e3"))?, json!(1000.0));
        Ok(())
    }

    #[test]
    fn test_string_to_number_rejected() {
        for s in ["", "abc", "12abc", "NaN", "inf"] {
            let err = Kind::Number.cast(&json!(s)).unwrap_err();
            assert!(
                matches!(err, Error::Cast { target: Kind::Number, found: Kind::String, .. }),
                "{:?} should not cast",
                s
            );
        }
    }

    #[test]
    fn test_boolean_conversions() -> Result<()> {
        assert_eq!(Kind::Number.cast(&json!(true))?, json!(1));
        assert_eq!(Kind::Number.cast(&json!(false))?, json!(0));
        assert_eq!(Kind::Boolean.cast(&json!("true"))?, json!(true));
        assert_eq!(Kind::Boolean.cast(&json!("false"))?, json!(false));
        assert_eq!(Kind::Boolean.cast(&json!(0))?, json!(false));
        assert_eq!(Kind::Boolean.cast(&json!(0.0))?, json!(false));
        assert_eq!(Kind::Boolean.cast(&json!(-2))?, json!(true));
        assert!(Kind::Boolean.cast(&json!("yes")).is_err());
        Ok(())
    }

    #[test]
    fn test_to_string() -> Result<()> {
        assert_eq!(Kind::String.cast(&json!(20))?, json!("20"));
        assert_eq!(Kind::String.cast(&json!(0.25))?, json!("0.25"));
        assert_eq!(Kind::String.cast(&json!(true))?, json!("true"));
        Ok(())
    }

    #[test]
    fn test_no_conversion() {
        let cases = [
            (Kind::Number, json!(null)),
            (Kind::String, json!(null)),
            (Kind::Null, json!(0)),
            (Kind::Array, json!({"a": 1})),
            (Kind::Object, json!([1])),
            (Kind::String, json!(["a"])),
        ];
        for (target, value) in cases {
            match target.cast(&value) {
                Err(Error::Cast { target: t, found, .. }) => {
                    assert_eq!(t, target);
                    assert_eq!(found, Kind::of(&value));
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }
}
