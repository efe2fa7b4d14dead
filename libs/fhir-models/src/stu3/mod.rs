//! FHIR STU3 (3.0.2) models.

use crate::common;
use crate::format::{FhirParser, FhirVersion};

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
pub use code_system::*;
pub use codesystem::*;
pub use datatypes::*;
pub use encounter::*;
pub use observation::*;
pub use patient::*;
pub use resource::Resource;
pub use value_set::*;

/// A primitive value carrying STU3 extensions.
pub type Primitive<T> = crate::format::Primitive<T, Extension>;
pub type ElementBase = common::ElementBase<Extension>;
pub type BackboneBase = common::BackboneBase<Extension>;
pub type DomainResourceBase = common::DomainResourceBase<Extension, Meta, Narrative, Resource>;

/// FHIR STU3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stu3;

impl FhirVersion for Stu3 {
    const NAME: &'static str = "STU3";
    const RELEASE: &'static str = "3.0.2";

    type Resource = Resource;
}

/// Parser for STU3 resources.
pub type FhirStu3Parser = FhirParser<Stu3>;
