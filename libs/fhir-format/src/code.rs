//! Closed code systems bound to coded primitives.

use crate::primitive::{json_kind, PrimitiveError};
use serde_json::Value;

/// A closed FHIR code system mapped onto a Rust enum.
pub trait FhirCode: Sized + Copy + 'static {
    /// Canonical URL of the code system.
    const SYSTEM: &'static str;

    fn code(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;

    /// Every member, in code system order.
    fn all() -> &'static [Self];
}

/// Decodes a JSON string into a member of `C`.
pub fn decode_code<C: FhirCode>(value: &Value) -> Result<C, PrimitiveError> {
    match value {
        Value::String(code) => C::from_code(code).ok_or_else(|| PrimitiveError::UnknownCode {
            code: code.clone(),
            system: C::SYSTEM,
        }),
        other => Err(PrimitiveError::malformed(format!(
            "expected a code, found {}",
            json_kind(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Gender {
        Male,
        Female,
    }

    impl FhirCode for Gender {
        const SYSTEM: &'static str = "http://hl7.org/fhir/administrative-gender";

        fn code(&self) -> &'static str {
            match self {
                Gender::Male => "male",
                Gender::Female => "female",
            }
        }

        fn from_code(code: &str) -> Option<Self> {
            Self::all().iter().copied().find(|g| g.code() == code)
        }

        fn all() -> &'static [Self] {
            &[Gender::Male, Gender::Female]
        }
    }

    #[test]
    fn decodes_known_codes() {
        assert_eq!(decode_code::<Gender>(&json!("female")).unwrap(), Gender::Female);
    }

    #[test]
    fn unknown_codes_name_the_system() {
        let err = decode_code::<Gender>(&json!("unknown-ish")).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::UnknownCode {
                code: "unknown-ish".into(),
                system: "http://hl7.org/fhir/administrative-gender",
            }
        );
        assert!(decode_code::<Gender>(&json!(1)).is_err());
    }
}
