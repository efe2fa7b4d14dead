//! Release-independent parts of the models
//!
//! Base members shared by every element and resource, and the code systems
//! whose members are identical in STU3 and R4.

pub mod base;
pub mod codesystem;

pub use base::{BackboneBase, DomainResourceBase, ElementBase};
pub use codesystem::*;
