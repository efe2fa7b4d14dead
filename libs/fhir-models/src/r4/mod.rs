//! FHIR R4 (4.0.1) models.

use crate::common;
use crate::format::{FhirParser, FhirVersion};

pub mod claim_response;
pub mod code_system;
pub mod codesystem;
pub mod datatypes;
pub mod encounter;
pub mod observation;
pub mod patient;
pub mod resource;
pub mod value_set;

pub use crate::common::codesystem::*;
pub use crate::format::{
    FhirDate, FhirDateTime, FhirDecimal, FhirInstant, FhirTime, PositiveInt, UnsignedInt,
};
pub use claim_response::*;
pub use code_system::*;
pub use codesystem::*;
pub use datatypes::*;
pub use encounter::*;
pub use observation::*;
pub use patient::*;
pub use resource::Resource;
pub use value_set::*;

/// A primitive value carrying R4 extensions.
pub type Primitive<T> = crate::format::Primitive<T, Extension>;
pub type ElementBase = common::ElementBase<Extension>;
pub type BackboneBase = common::BackboneBase<Extension>;
pub type DomainResourceBase = common::DomainResourceBase<Extension, Meta, Narrative, Resource>;

/// FHIR R4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct R4;

impl FhirVersion for R4 {
    const NAME: &'static str = "R4";
    const RELEASE: &'static str = "4.0.1";

    type Resource = Resource;
}

/// Parser for R4 resources.
pub type FhirR4Parser = FhirParser<R4>;
