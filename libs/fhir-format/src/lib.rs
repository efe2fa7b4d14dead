//! FHIR JSON codec.
//!
//! The building blocks the typed FHIR models are decoded and encoded with.
//! The implementation follows the official JSON representation rules of HL7
//! FHIR:
//! - Primitive values sit under the field name, their element `id` and
//!   `extension`s under `_field` ([`primitive`]).
//! - Repeating primitives use two arrays aligned by index, padded with `null`.
//! - Choice fields (`value[x]`) use one key per type, `valueQuantity`,
//!   `valueString`, ... of which at most one may be present ([`choice`]).
//! - Resources carry a `resourceType` discriminator ([`parser`]).
//!
//! Decimals keep their lexical precision, which requires `serde_json`'s
//! `arbitrary_precision` feature.

pub mod choice;
pub mod code;
pub mod codec;
pub mod config;
pub mod decimal;
pub mod error;
pub mod parser;
pub mod primitive;
pub mod temporal;

pub use choice::ChoiceType;
pub use code::FhirCode;
pub use codec::{decode_object, encode_value, FhirJson, ObjectReader, ObjectWriter};
pub use config::{ChoiceConflictPolicy, ParserConfig, UnknownFieldPolicy};
pub use decimal::FhirDecimal;
pub use error::{Error, FieldPath, Result};
pub use parser::{AnyResource, FhirParser, FhirResource, FhirVersion};
pub use primitive::{PositiveInt, Primitive, PrimitiveError, PrimitiveValue, UnsignedInt};
pub use temporal::{
    DatePrecision, FhirDate, FhirDateTime, FhirInstant, FhirTime, FhirTimeZone, TemporalError,
};

/// Re-exported for code generated by model macros.
pub use serde_json;
