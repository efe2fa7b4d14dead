use super::*;

fhir_resource! {
    /// A code system resource specifies a set of codes drawn from one or more
    /// code systems.
    pub struct CodeSystem in Stu3 {
        url: primitive<String> = "url",
        /// Additional identifier for the code system (business identifier)
        identifier: element<Identifier> = "identifier",
        version: primitive<String> = "version",
        name: primitive<String> = "name",
        title: primitive<String> = "title",
        status: required_primitive<PublicationStatus> = "status",
        experimental: primitive<bool> = "experimental",
        date: primitive<FhirDateTime> = "date",
        publisher: primitive<String> = "publisher",
        contact: elements<ContactDetail> = "contact",
        description: primitive<String> = "description",
        use_context: elements<UsageContext> = "useContext",
        jurisdiction: elements<CodeableConcept> = "jurisdiction",
        purpose: primitive<String> = "purpose",
        copyright: primitive<String> = "copyright",
        case_sensitive: primitive<bool> = "caseSensitive",
        value_set: primitive<String> = "valueSet",
        hierarchy_meaning: primitive<CodeSystemHierarchyMeaning> = "hierarchyMeaning",
        compositional: primitive<bool> = "compositional",
        version_needed: primitive<bool> = "versionNeeded",
        content: required_primitive<CodeSystemContentMode> = "content",
        count: primitive<UnsignedInt> = "count",
        filter: elements<CodeSystemFilter> = "filter",
        property: elements<CodeSystemProperty> = "property",
        concept: elements<CodeSystemConcept> = "concept",
    }
}

fhir_element! {
    /// Filter that can be used in a value set.
    pub struct CodeSystemFilter: BackboneBase {
        code: required_primitive<String> = "code",
        description: primitive<String> = "description",
        operator: required_primitives<FilterOperator> = "operator",
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// Additional information supplied about each concept.
    pub struct CodeSystemProperty: BackboneBase {
        code: required_primitive<String> = "code",
        uri: primitive<String> = "uri",
        description: primitive<String> = "description",
        type_: required_primitive<PropertyType> = "type",
    }
}

fhir_element! {
    /// Concepts in the code system.
    pub struct CodeSystemConcept: BackboneBase {
        code: required_primitive<String> = "code",
        display: primitive<String> = "display",
        definition: primitive<String> = "definition",
        designation: elements<CodeSystemConceptDesignation> = "designation",
        property: elements<CodeSystemConceptProperty> = "property",
        concept: elements<CodeSystemConcept> = "concept",
    }
}

fhir_element! {
    /// Additional representations for the concept.
    pub struct CodeSystemConceptDesignation: BackboneBase {
        language: primitive<String> = "language",
        use_: element<Coding> = "use",
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// Property value for the concept.
    pub struct CodeSystemConceptProperty: BackboneBase {
        code: required_primitive<String> = "code",
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
    }
}
