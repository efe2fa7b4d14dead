//! Members every element, backbone element and resource shares.
//!
//! FHIR models these through inheritance (`Element` → `BackboneElement`,
//! `Resource` → `DomainResource`). Here each model embeds one of the structs
//! below as its `base` field. They are generic over the release-specific
//! types and aliased with concrete parameters in the `r4` and `stu3` modules.

use crate::format::{FhirJson, ObjectReader, ObjectWriter, Primitive, Result};

/// `Element`: `id` and `extension`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBase<E> {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Vec<E>,
}

impl<E> Default for ElementBase<E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
        }
    }
}

impl<E: FhirJson> FhirJson for ElementBase<E> {
    fn decode(reader: &mut ObjectReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.value("id")?,
            extension: reader.element_list("extension")?,
        })
    }

    fn encode(&self, writer: &mut ObjectWriter) {
        writer.value("id", self.id.as_ref());
        writer.element_list("extension", &self.extension);
    }
}

/// `BackboneElement`: `Element` plus `modifierExtension`.
#[derive(Debug, Clone, PartialEq)]
pub struct BackboneBase<E> {
    /// Unique id for inter-element referencing
    pub id: Option<String>,
    /// Additional content defined by implementations
    pub extension: Vec<E>,
    /// Extensions that cannot be ignored even if unrecognized
    pub modifier_extension: Vec<E>,
}

impl<E> Default for BackboneBase<E> {
    fn default() -> Self {
        Self {
            id: None,
            extension: Vec::new(),
            modifier_extension: Vec::new(),
        }
    }
}

impl<E: FhirJson> FhirJson for BackboneBase<E> {
    fn decode(reader: &mut ObjectReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.value("id")?,
            extension: reader.element_list("extension")?,
            modifier_extension: reader.element_list("modifierExtension")?,
        })
    }

    fn encode(&self, writer: &mut ObjectWriter) {
        writer.value("id", self.id.as_ref());
        writer.element_list("extension", &self.extension);
        writer.element_list("modifierExtension", &self.modifier_extension);
    }
}

/// `Resource` and `DomainResource` members.
///
/// `E`, `M`, `N` and `R` are the release's `Extension`, `Meta`, `Narrative`
/// and `Resource` types.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainResourceBase<E, M, N, R> {
    /// Logical id of this artifact
    pub id: Option<Primitive<String, E>>,
    /// Metadata about the resource
    pub meta: Option<M>,
    /// A set of rules under which this content was created
    pub implicit_rules: Option<Primitive<String, E>>,
    /// Language of the resource content
    pub language: Option<Primitive<String, E>>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<N>,
    /// Contained, inline Resources
    pub contained: Vec<R>,
    /// Additional content defined by implementations
    pub extension: Vec<E>,
    /// Extensions that cannot be ignored
    pub modifier_extension: Vec<E>,
}

impl<E, M, N, R> DomainResourceBase<E, M, N, R> {
    pub fn id(&self) -> Option<&str> {
        self.id.as_ref().and_then(Primitive::as_str)
    }
}

impl<E, M, N, R> Default for DomainResourceBase<E, M, N, R> {
    fn default() -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: Vec::new(),
            extension: Vec::new(),
            modifier_extension: Vec::new(),
        }
    }
}

impl<E, M, N, R> FhirJson for DomainResourceBase<E, M, N, R>
where
    E: FhirJson,
    M: FhirJson,
    N: FhirJson,
    R: FhirJson,
{
    fn decode(reader: &mut ObjectReader<'_>) -> Result<Self> {
        Ok(Self {
            id: reader.primitive("id")?,
            meta: reader.element("meta")?,
            implicit_rules: reader.primitive("implicitRules")?,
            language: reader.primitive("language")?,
            text: reader.element("text")?,
            contained: reader.element_list("contained")?,
            extension: reader.element_list("extension")?,
            modifier_extension: reader.element_list("modifierExtension")?,
        })
    }

    fn encode(&self, writer: &mut ObjectWriter) {
        writer.primitive("id", self.id.as_ref());
        writer.element("meta", self.meta.as_ref());
        writer.primitive("implicitRules", self.implicit_rules.as_ref());
        writer.primitive("language", self.language.as_ref());
        writer.element("text", self.text.as_ref());
        writer.element_list("contained", &self.contained);
        writer.element_list("extension", &self.extension);
        writer.element_list("modifierExtension", &self.modifier_extension);
    }
}
