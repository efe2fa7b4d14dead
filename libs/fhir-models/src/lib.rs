//! FHIR data models
//!
//! Strongly-typed Rust structures for FHIR STU3 and R4 resources, decoded
//! from and encoded to the official JSON representation without losing
//! primitive extensions, element ids or decimal precision.
//!
//! # Module Organization
//!
//! - `common`: base members and code systems shared by both releases
//! - `r4`: FHIR R4 (4.0.1) datatypes and resources
//! - `stu3`: FHIR STU3 (3.0.2) datatypes and resources
//!
//! Each release module has its own `Extension`, so a primitive in R4 carries
//! R4 extensions and one in STU3 carries STU3 extensions.
//!
//! # Example
//!
//! ```rust
//! use fhir_sdk_models::r4::{AdministrativeGender, FhirR4Parser, Patient};
//!
//! let json = r#"{
//!     "resourceType": "Patient",
//!     "id": "example",
//!     "gender": "female",
//!     "_birthDate": {"extension": [{
//!         "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
//!         "valueDateTime": "1974-12-25T14:35:45-05:00"
//!     }]},
//!     "birthDate": "1974-12-25"
//! }"#;
//!
//! let parser = FhirR4Parser::new();
//! let patient: Patient = parser.to_fhir(json).unwrap();
//! assert_eq!(patient.base.id(), Some("example"));
//! assert_eq!(
//!     patient.gender.as_ref().and_then(|gender| gender.value()),
//!     Some(&AdministrativeGender::Female)
//! );
//! let birth_date = patient.birth_date.as_ref().unwrap();
//! assert_eq!(birth_date.extension.len(), 1);
//!
//! let back = parser.from_fhir(&patient).unwrap();
//! assert!(back.contains("_birthDate"));
//! ```

#[macro_use]
mod macros;

/// The JSON codec the models are built on.
pub use fhir_sdk_format as format;

pub mod common;
#[cfg(feature = "r4")]
pub mod r4;
#[cfg(feature = "stu3")]
pub mod stu3;
