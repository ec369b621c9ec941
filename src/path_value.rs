use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{
    Error,
    Result,
};
use crate::json_kind::Kind;
use crate::json_path::JsonPath;
use crate::json_source::read_json_text;

/// A decoded JSON value whose nested properties can be reached with a single backslash
/// separated path.
///
/// ```
/// use pathjson::{Kind, PathValue};
///
/// let v: PathValue = r#"{"test": {"goes": {"deep": "19"}, "or": 20}}"#.parse()?;
/// assert_eq!(v.lookup(r"test\goes\deep")?, "19");
/// assert_eq!(v.at_path(r"test\goes\deep")?.cast(Some(Kind::Number))?, 19);
/// # Ok::<(), pathjson::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PathValue {
    value: Value,
}

/// Result of [`PathValue::get_or_default`]: the value found at the path, or the caller's
/// default passed back untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum OrDefault<D> {
    Found(PathValue),
    Default(D),
}

impl PathValue {
    pub fn new(value: Value) -> Self {
        PathValue {
            value
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        log::trace!("decoding {} byte(s) of JSON text", text.len());
        let value = serde_json::from_str(text)?;
        Ok(PathValue::new(value))
    }

    /// Reads the whole stream, then decodes it like [`PathValue::from_json`].
    pub fn from_reader<R>(reader: R) -> Result<Self>
        where R: Read
    {
        let text = read_json_text(reader)?;
        PathValue::from_json(&text)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn kind(&self) -> Kind {
        Kind::of(&self.value)
    }

    /// Resolves `path` key by key and returns the raw value it points to.
    ///
    /// Only objects are navigable: if the wrapped value is not an object the path is ignored
    /// and the wrapped value itself is returned. Once traversal started, meeting a missing key
    /// or a non-object fails with [`Error::KeyNotFound`].
    pub fn lookup(&self, path: &str) -> Result<&Value> {
        if !self.value.is_object() {
            return Ok(&self.value);
        }

        let mut current = &self.value;
        for part in JsonPath::parse(path).into_parts() {
            current = match current.as_object().and_then(|props| props.get(&part)) {
                Some(next) => next,
                None => {
                    log::trace!("key {:?} of path {:?} not found", part, path);
                    return Err(Error::KeyNotFound {
                        path: path.to_string(),
                        segment: part,
                    });
                }
            };
        }

        Ok(current)
    }

    /// Like [`PathValue::lookup`], with the result wrapped in a new `PathValue`.
    pub fn at_path(&self, path: &str) -> Result<PathValue> {
        self.lookup(path).map(|value| PathValue::new(value.clone()))
    }

    pub fn get(&self, path: &str) -> Option<PathValue> {
        self.at_path(path).ok()
    }

    pub fn get_or_default<D>(&self, path: &str, default: D) -> OrDefault<D> {
        match self.get(path) {
            Some(found) => OrDefault::Found(found),
            None => OrDefault::Default(default),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Fails with [`Error::TypeMismatch`] unless the wrapped value is of kind `expected`.
    ///
    /// Returns `self` so assertions chain, e.g. `v.at_path(p)?.satisfy(Kind::Number)?`.
    pub fn satisfy(&self, expected: Kind) -> Result<&Self> {
        self.satisfy_any(&[expected])
    }

    /// Passes if the wrapped value is of any of the `expected` kinds.
    pub fn satisfy_any(&self, expected: &[Kind]) -> Result<&Self> {
        let found = self.kind();
        if expected.contains(&found) {
            return Ok(self);
        }

        Err(Error::TypeMismatch {
            expected: expected.first().copied().unwrap_or(Kind::Null),
            found,
        })
    }

    /// Converts the wrapped value to `target`, see [`Kind::cast`] for the rules.
    ///
    /// With no target the wrapped value is returned unchanged.
    pub fn cast(&self, target: Option<Kind>) -> Result<Value> {
        match target {
            None => Ok(self.value.clone()),
            Some(kind) => kind.cast(&self.value),
        }
    }

    /// Deserializes the wrapped value into any `T`.
    pub fn cast_into<T>(&self) -> Result<T>
        where T: DeserializeOwned
    {
        serde_json::from_value(self.value.clone()).map_err(Error::Convert)
    }
}

impl<D> OrDefault<D> {
    pub fn is_found(&self) -> bool {
        matches!(self, OrDefault::Found(_))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, OrDefault::Default(_))
    }

    pub fn found(self) -> Option<PathValue> {
        match self {
            OrDefault::Found(found) => Some(found),
            OrDefault::Default(_) => None,
        }
    }

    /// Collapses both branches into a plain JSON value.
    pub fn into_value(self) -> Value
        where D: Into<Value>
    {
        match self {
            OrDefault::Found(found) => found.into_value(),
            OrDefault::Default(default) => default.into(),
        }
    }
}

impl From<Value> for PathValue {
    fn from(value: Value) -> Self {
        PathValue::new(value)
    }
}

impl FromStr for PathValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PathValue::from_json(s)
    }
}

impl PartialEq<Value> for PathValue {
    fn eq(&self, other: &Value) -> bool {
        &self.value == other
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
