use super::*;

fhir_resource! {
    /// A value set specifies a set of codes drawn from one or more code
    /// systems.
    pub struct ValueSet in Stu3 {
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
        /// Whether this is intended to be used with an extensible binding
        extensible: primitive<bool> = "extensible",
        compose: element<ValueSetCompose> = "compose",
        expansion: element<ValueSetExpansion> = "expansion",
    }
}

fhir_element! {
    /// Definition of the content of the value set (CLD).
    pub struct ValueSetCompose: BackboneBase {
        locked_date: primitive<FhirDate> = "lockedDate",
        inactive: primitive<bool> = "inactive",
        include: required_elements<ValueSetComposeInclude> = "include",
        exclude: elements<ValueSetComposeInclude> = "exclude",
    }
}

fhir_element! {
    /// Include one or more codes from a code system or other value set(s).
    pub struct ValueSetComposeInclude: BackboneBase {
        system: primitive<String> = "system",
        version: primitive<String> = "version",
        concept: elements<ValueSetComposeIncludeConcept> = "concept",
        filter: elements<ValueSetComposeIncludeFilter> = "filter",
        value_set: primitives<String> = "valueSet",
    }
}

fhir_element! {
    /// A concept defined in the system.
    pub struct ValueSetComposeIncludeConcept: BackboneBase {
        code: required_primitive<String> = "code",
        display: primitive<String> = "display",
        designation: elements<ValueSetComposeIncludeConceptDesignation> = "designation",
    }
}

fhir_element! {
    /// Additional representations for this concept.
    pub struct ValueSetComposeIncludeConceptDesignation: BackboneBase {
        language: primitive<String> = "language",
        use_: element<Coding> = "use",
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// Select codes/concepts by their properties (including relationships).
    pub struct ValueSetComposeIncludeFilter: BackboneBase {
        property: required_primitive<String> = "property",
        op: required_primitive<FilterOperator> = "op",
        value: required_primitive<String> = "value",
    }
}

fhir_element! {
    /// Used when the value set is "expanded".
    pub struct ValueSetExpansion: BackboneBase {
        /// Uniquely identifies this expansion
        identifier: required_primitive<String> = "identifier",
        timestamp: required_primitive<FhirDateTime> = "timestamp",
        total: primitive<i32> = "total",
        offset: primitive<i32> = "offset",
        parameter: elements<ValueSetExpansionParameter> = "parameter",
        contains: elements<ValueSetExpansionContains> = "contains",
    }
}

fhir_element! {
    /// Parameter that controlled the expansion process.
    pub struct ValueSetExpansionParameter: BackboneBase {
        name: required_primitive<String> = "name",
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
    }
}

fhir_element! {
    /// Codes in the value set.
    pub struct ValueSetExpansionContains: BackboneBase {
        system: primitive<String> = "system",
        abstract_: primitive<bool> = "abstract",
        inactive: primitive<bool> = "inactive",
        version: primitive<String> = "version",
        code: primitive<String> = "code",
        display: primitive<String> = "display",
        designation: elements<ValueSetComposeIncludeConceptDesignation> = "designation",
        contains: elements<ValueSetExpansionContains> = "contains",
    }
}
