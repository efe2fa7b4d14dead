//! Declares the existence of and describes a code system or code system
//! supplement.

use super::*;

fhir_resource! {
    /// Declares the existence of and describes a code system or code system
    /// supplement and its key properties, and optionally defines a part or
    /// all of its content.
    pub struct CodeSystem in R4 {
        /// Canonical identifier for this code system, represented as a URI
        /// (globally unique) (Coding.system)
        url: primitive<String> = "url",
        identifier: elements<Identifier> = "identifier",
        /// Business version of the code system (Coding.version)
        version: primitive<String> = "version",
        /// Name for this code system (computer friendly)
        name: primitive<String> = "name",
        /// Name for this code system (human friendly)
        title: primitive<String> = "title",
        status: required_primitive<PublicationStatus> = "status",
        /// For testing purposes, not real usage
        experimental: primitive<bool> = "experimental",
        /// Date last changed
        date: primitive<FhirDateTime> = "date",
        publisher: primitive<String> = "publisher",
        contact: elements<ContactDetail> = "contact",
        /// Natural language description of the code system
        description: primitive<String> = "description",
        use_context: elements<UsageContext> = "useContext",
        jurisdiction: elements<CodeableConcept> = "jurisdiction",
        /// Why this code system is defined
        purpose: primitive<String> = "purpose",
        copyright: primitive<String> = "copyright",
        /// If code comparison is case sensitive
        case_sensitive: primitive<bool> = "caseSensitive",
        /// Canonical reference to the value set with entire code system
        value_set: primitive<String> = "valueSet",
        hierarchy_meaning: primitive<CodeSystemHierarchyMeaning> = "hierarchyMeaning",
        /// If code system defines a compositional grammar
        compositional: primitive<bool> = "compositional",
        /// If definitions are not stable
        version_needed: primitive<bool> = "versionNeeded",
        content: required_primitive<CodeSystemContentMode> = "content",
        /// Canonical URL of Code System this adds designations and properties
        /// to
        supplements: primitive<String> = "supplements",
        /// Total concepts in the code system
        count: primitive<UnsignedInt> = "count",
        /// Filter that can be used in a value set
        filter: elements<CodeSystemFilter> = "filter",
        /// Additional information supplied about each concept
        property: elements<CodeSystemProperty> = "property",
        /// Concepts in the code system
        concept: elements<CodeSystemConcept> = "concept",
    }
}

fhir_element! {
    /// A filter that can be used in a value set compose statement when
    /// selecting concepts using a filter.
    pub struct CodeSystemFilter: BackboneBase {
        /// Code that identifies the filter
        code: required_primitive<String> = "code",
        description: primitive<String> = "description",
        operator: required_primitives<FilterOperator> = "operator",
        /// What to use for the value
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// A property defines an additional slot through which additional
    /// information can be provided about a concept.
    pub struct CodeSystemProperty: BackboneBase {
        /// Identifies the property on the concepts, and when referred to in
        /// operations
        code: required_primitive<String> = "code",
        /// Formal identifier for the property
        uri: primitive<String> = "uri",
        description: primitive<String> = "description",
        type_: required_primitive<PropertyType> = "type",
    }
}

fhir_element! {
    /// Concepts that are in the code system. The concept definitions are
    /// inherently hierarchical, but the definitions must be consulted to
    /// determine what the meanings of the hierarchical relationships are.
    pub struct CodeSystemConcept: BackboneBase {
        /// Code that identifies concept
        code: required_primitive<String> = "code",
        /// Text to display to the user
        display: primitive<String> = "display",
        /// Formal definition
        definition: primitive<String> = "definition",
        /// Additional representations for the concept
        designation: elements<CodeSystemConceptDesignation> = "designation",
        /// Property value for the concept
        property: elements<CodeSystemConceptProperty> = "property",
        /// Child Concepts (is-a/contains/categorizes)
        concept: elements<CodeSystemConcept> = "concept",
    }
}

fhir_element! {
    /// Additional representations for the concept - other languages,
    /// aliases, specialized purposes, used for particular purposes, etc.
    pub struct CodeSystemConceptDesignation: BackboneBase {
        /// Human language of the designation
        language: primitive<String> = "language",
        /// Details how this designation would be used
        use_: element<Coding> = "use",
        /// The text value for this designation
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// A property value for this concept.
    pub struct CodeSystemConceptProperty: BackboneBase {
        /// Reference to CodeSystem.property.code
        code: required_primitive<String> = "code",
        /// Value of the property for this concept
        value: required_choice<CodeSystemConceptPropertyValue> = "value",
    }
}

fhir_choice! {
    /// `CodeSystem.concept.property.value[x]`
    pub enum CodeSystemConceptPropertyValue {
        Code(primitive<String>) = "Code",
        Coding(element<Coding>) = "Coding",
        String(primitive<String>) = "String",
        Integer(primitive<i32>) = "Integer",
        Boolean(primitive<bool>) = "Boolean",
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Decimal(primitive<FhirDecimal>) = "Decimal",
    }
}
