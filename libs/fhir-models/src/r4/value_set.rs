//! A set of codes drawn from one or more code systems.

use super::*;

fhir_resource! {
    /// A ValueSet resource instance specifies a set of codes drawn from one
    /// or more code systems, intended for use in a particular context.
    pub struct ValueSet in R4 {
        /// Canonical identifier for this value set, represented as a URI
        /// (globally unique)
        url: primitive<String> = "url",
        identifier: elements<Identifier> = "identifier",
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
        /// Indicates whether or not any change to the content logical
        /// definition may occur
        immutable: primitive<bool> = "immutable",
        purpose: primitive<String> = "purpose",
        copyright: primitive<String> = "copyright",
        /// Content logical definition of the value set (CLD)
        compose: element<ValueSetCompose> = "compose",
        /// Used when the value set is "expanded"
        expansion: element<ValueSetExpansion> = "expansion",
    }
}

fhir_element! {
    /// A set of criteria that define the contents of the value set by
    /// including or excluding codes selected from the specified code
    /// system(s) that the value set draws from.
    pub struct ValueSetCompose: BackboneBase {
        /// Fixed date for references with no specified version (transitive)
        locked_date: primitive<FhirDate> = "lockedDate",
        /// Whether inactive codes are in the value set
        inactive: primitive<bool> = "inactive",
        /// Include one or more codes from a code system or other value
        /// set(s)
        include: required_elements<ValueSetComposeInclude> = "include",
        /// Explicitly exclude codes from a code system or other value sets
        exclude: elements<ValueSetComposeInclude> = "exclude",
    }
}

fhir_element! {
    /// Include one or more codes from a code system or other value set(s).
    pub struct ValueSetComposeInclude: BackboneBase {
        /// The system the codes come from
        system: primitive<String> = "system",
        /// Specific version of the code system referred to
        version: primitive<String> = "version",
        /// A concept defined in the system
        concept: elements<ValueSetComposeIncludeConcept> = "concept",
        /// Select codes/concepts by their properties (including
        /// relationships)
        filter: elements<ValueSetComposeIncludeFilter> = "filter",
        /// Select the contents included in this value set
        value_set: primitives<String> = "valueSet",
    }
}

fhir_element! {
    /// Specifies a concept to be included or excluded.
    pub struct ValueSetComposeIncludeConcept: BackboneBase {
        /// Code or expression from system
        code: required_primitive<String> = "code",
        /// Text to display for this code for this value set in this valueset
        display: primitive<String> = "display",
        /// Additional representations for this concept
        designation: elements<ValueSetComposeIncludeConceptDesignation> = "designation",
    }
}

fhir_element! {
    /// Additional representations for this concept when used in this value
    /// set - other languages, aliases, specialized purposes, used for
    /// particular purposes, etc.
    pub struct ValueSetComposeIncludeConceptDesignation: BackboneBase {
        language: primitive<String> = "language",
        /// Types of uses of designations
        use_: element<Coding> = "use",
        /// The text value for this designation
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// Select concepts by specify a matching criterion based on the
    /// properties (including relationships) defined by the system, or on
    /// filters defined by the system.
    pub struct ValueSetComposeIncludeFilter: BackboneBase {
        /// A property/filter defined by the code system
        property: required_primitive<String> = "property",
        op: required_primitive<FilterOperator> = "op",
        /// Code from the system, or regex criteria, or boolean value for
        /// exists
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// A value set can also be "expanded", where the value set is turned into
    /// a simple collection of enumerated codes.
    pub struct ValueSetExpansion: BackboneBase {
        /// Identifies the value set expansion (business identifier)
        identifier: primitive<String> = "identifier",
        /// Time ValueSet expansion happened
        timestamp: required_primitive<FhirDateTime> = "timestamp",
        /// Total number of codes in the expansion
        total: primitive<i32> = "total",
        /// Offset at which this resource starts
        offset: primitive<i32> = "offset",
        /// Parameter that controlled the expansion process
        parameter: elements<ValueSetExpansionParameter> = "parameter",
        /// Codes in the value set
        contains: elements<ValueSetExpansionContains> = "contains",
    }
}

fhir_element! {
    /// A parameter that controlled the expansion process.
    pub struct ValueSetExpansionParameter: BackboneBase {
        /// Name as assigned by the client or server
        name: required_primitive<String> = "name",
        /// Value of the named parameter
        value: choice<ValueSetExpansionParameterValue> = "value",
    }
}

fhir_choice! {
    /// `ValueSet.expansion.parameter.value[x]`
    pub enum ValueSetExpansionParameterValue {
        String(primitive<String>) = "String",
        Boolean(primitive<bool>) = "Boolean",
        Integer(primitive<i32>) = "Integer",
        Decimal(primitive<FhirDecimal>) = "Decimal",
        Uri(primitive<String>) = "Uri",
        Code(primitive<String>) = "Code",
        DateTime(primitive<FhirDateTime>) = "DateTime",
    }
}

fhir_element! {
    /// The codes that are contained in the value set expansion.
    pub struct ValueSetExpansionContains: BackboneBase {
        /// System value for the code
        system: primitive<String> = "system",
        /// If user cannot select this entry
        abstract_: primitive<bool> = "abstract",
        /// If concept is inactive in the code system
        inactive: primitive<bool> = "inactive",
        version: primitive<String> = "version",
        code: primitive<String> = "code",
        /// User display for the concept
        display: primitive<String> = "display",
        /// Additional representations for this item
        designation: elements<ValueSetComposeIncludeConceptDesignation> = "designation",
        /// Codes contained under this entry
        contains: elements<ValueSetExpansionContains> = "contains",
    }
}
