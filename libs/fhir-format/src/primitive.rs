//! FHIR primitive values and their `_field` sidecars.
//!
//! A primitive field `birthDate` may be accompanied by `_birthDate`, an object
//! holding the element `id` and `extension`s of the primitive. For repeating
//! primitives both properties are arrays aligned by index, with `null`
//! filling slots that have no value or no metadata.

use serde_json::Value;
use std::fmt;

/// Reason a JSON value could not be read as a primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    Malformed(String),
    UnknownCode { code: String, system: &'static str },
}

impl PrimitiveError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        PrimitiveError::Malformed(reason.into())
    }

    pub(crate) fn unexpected(expected: &str, found: &Value) -> Self {
        PrimitiveError::Malformed(format!("expected {expected}, found {}", json_kind(found)))
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A value type that can sit in the value slot of a FHIR primitive.
pub trait PrimitiveValue: Sized {
    /// FHIR type name used in error messages.
    const TYPE_NAME: &'static str;

    fn from_json(value: &Value) -> Result<Self, PrimitiveError>;

    fn to_json(&self) -> Value;
}

/// A primitive element: optional value plus the element id and extensions
/// carried by the `_field` sidecar.
///
/// `E` is the `Extension` type of the FHIR version the primitive lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive<T, E> {
    pub value: Option<T>,
    pub id: Option<String>,
    pub extension: Vec<E>,
}

impl<T, E> Primitive<T, E> {
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            id: None,
            extension: Vec::new(),
        }
    }

    /// A primitive that carries extensions but no value.
    pub fn extension_only(extension: Vec<E>) -> Self {
        Self {
            value: None,
            id: None,
            extension,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether the element needs a `_field` sidecar on the wire.
    pub fn has_sidecar(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && !self.has_sidecar()
    }
}

impl<T, E> Default for Primitive<T, E> {
    fn default() -> Self {
        Self {
            value: None,
            id: None,
            extension: Vec::new(),
        }
    }
}

impl<T, E> From<T> for Primitive<T, E> {
    fn from(value: T) -> Self {
        Primitive::new(value)
    }
}

impl<E> Primitive<String, E> {
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

// -----------------------------------------------------------------------------
// Built-in primitive value types
// -----------------------------------------------------------------------------

/// Used for `string`, `code`, `id`, `uri`, `url`, `canonical`, `oid`, `uuid`,
/// `markdown`, `base64Binary` and `xhtml`.
impl PrimitiveValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
        match value {
            Value::String(s) if s.is_empty() => {
                Err(PrimitiveError::malformed("strings must not be empty"))
            }
            Value::String(s) => Ok(s.clone()),
            other => Err(PrimitiveError::unexpected("a string", other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl PrimitiveValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
        value
            .as_bool()
            .ok_or_else(|| PrimitiveError::unexpected("true or false", value))
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }
}

/// FHIR `integer`: signed 32-bit.
impl PrimitiveValue for i32 {
    const TYPE_NAME: &'static str = "integer";

    fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
        let n = integer(value)?;
        i32::try_from(n).map_err(|_| PrimitiveError::malformed(format!("{n} is out of range")))
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// FHIR `unsignedInt`: 0 to 2^31-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnsignedInt(pub u32);

impl PrimitiveValue for UnsignedInt {
    const TYPE_NAME: &'static str = "unsignedInt";

    fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
        bounded(value, 0).map(UnsignedInt)
    }

    fn to_json(&self) -> Value {
        Value::from(self.0)
    }
}

/// FHIR `positiveInt`: 1 to 2^31-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveInt(pub u32);

impl PrimitiveValue for PositiveInt {
    const TYPE_NAME: &'static str = "positiveInt";

    fn from_json(value: &Value) -> Result<Self, PrimitiveError> {
        bounded(value, 1).map(PositiveInt)
    }

    fn to_json(&self) -> Value {
        Value::from(self.0)
    }
}

impl fmt::Display for UnsignedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn integer(value: &Value) -> Result<i64, PrimitiveError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| PrimitiveError::malformed(format!("{n} is not an integer"))),
        other => Err(PrimitiveError::unexpected("an integer", other)),
    }
}

fn bounded(value: &Value, min: i64) -> Result<u32, PrimitiveError> {
    let n = integer(value)?;
    if n < min || n > i64::from(i32::MAX) {
        return Err(PrimitiveError::malformed(format!(
            "{n} is outside {min}..={}",
            i32::MAX
        )));
    }
    u32::try_from(n).map_err(|_| PrimitiveError::malformed(format!("{n} is out of range")))
}
