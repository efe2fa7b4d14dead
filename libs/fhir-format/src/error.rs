//! Error types for decoding and encoding FHIR JSON.

use std::fmt;
use thiserror::Error;

/// Location of a value inside a resource, rooted at the resource type.
///
/// Renders as `ClaimResponse.item[0].adjudication[2].value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root(resource_type: &str) -> Self {
        Self(resource_type.to_owned())
    }

    /// Path of a property below this one.
    pub fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            return Self(key.to_owned());
        }
        Self(format!("{}.{}", self.0, key))
    }

    /// Path of an array slot below this one.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// The resource type the path is rooted at.
    pub fn resource_type(&self) -> &str {
        let end = self.0.find(['.', '[']).unwrap_or(self.0.len());
        &self.0[..end]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: expected a JSON object")]
    ExpectedObject { path: FieldPath },

    #[error("{path}: expected a JSON array")]
    ExpectedArray { path: FieldPath },

    #[error("missing resourceType property")]
    MissingResourceType,

    #[error("resourceType mismatch: expected '{expected}', found '{found}'")]
    ResourceTypeMismatch { expected: String, found: String },

    #[error("{path}: unknown resourceType '{found}'")]
    UnknownResourceType { path: FieldPath, found: String },

    #[error("{path}: missing required field")]
    MissingRequiredField { path: FieldPath },

    #[error("{path}: malformed choice value in '{key}': {reason}")]
    MalformedChoiceValue {
        path: FieldPath,
        key: String,
        reason: String,
    },

    #[error("{path}: unknown code '{code}' for {system}")]
    UnknownEnumCode {
        path: FieldPath,
        code: String,
        system: &'static str,
    },

    #[error("{path}: malformed {type_name}: {reason}")]
    MalformedPrimitive {
        path: FieldPath,
        type_name: &'static str,
        reason: String,
    },

    #[error("{path}: unknown field")]
    UnknownField { path: FieldPath },
}

impl Error {
    /// Field path of the failing value, when the error comes from decoding one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Error::ExpectedObject { path }
            | Error::ExpectedArray { path }
            | Error::UnknownResourceType { path, .. }
            | Error::MissingRequiredField { path }
            | Error::MalformedChoiceValue { path, .. }
            | Error::UnknownEnumCode { path, .. }
            | Error::MalformedPrimitive { path, .. }
            | Error::UnknownField { path } => Some(path),
            Error::Json(_) | Error::MissingResourceType | Error::ResourceTypeMismatch { .. } => {
                None
            }
        }
    }

    /// Resource type the error was raised for, if known.
    pub fn resource_type(&self) -> Option<&str> {
        match self {
            Error::ResourceTypeMismatch { expected, .. } => Some(expected),
            other => other.path().map(FieldPath::resource_type),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_render_fhir_style() {
        let path = FieldPath::root("ClaimResponse")
            .child("item")
            .index(0)
            .child("adjudication")
            .index(2)
            .child("value");
        assert_eq!(path.to_string(), "ClaimResponse.item[0].adjudication[2].value");
        assert_eq!(path.resource_type(), "ClaimResponse");
    }

    #[test]
    fn error_exposes_path_and_resource_type() {
        let err = Error::MissingRequiredField {
            path: FieldPath::root("Encounter").child("status"),
        };
        assert_eq!(err.path().map(FieldPath::as_str), Some("Encounter.status"));
        assert_eq!(err.resource_type(), Some("Encounter"));
        assert_eq!(err.to_string(), "Encounter.status: missing required field");

        let err = Error::ResourceTypeMismatch {
            expected: "Patient".into(),
            found: "Observation".into(),
        };
        assert!(err.path().is_none());
        assert_eq!(err.resource_type(), Some("Patient"));
    }
}
