use super::*;

fhir_resource! {
    /// Measurements and simple assertions made about a patient, device or
    /// other subject.
    pub struct Observation in Stu3 {
        identifier: elements<Identifier> = "identifier",
        based_on: elements<Reference> = "basedOn",
        status: required_primitive<ObservationStatus> = "status",
        category: elements<CodeableConcept> = "category",
        code: required<CodeableConcept> = "code",
        subject: element<Reference> = "subject",
        /// Healthcare event during which this observation is made
        context: element<Reference> = "context",
        effective: choice<ObservationEffective> = "effective",
        issued: primitive<FhirInstant> = "issued",
        performer: elements<Reference> = "performer",
        value: choice<ObservationValue> = "value",
        data_absent_reason: element<CodeableConcept> = "dataAbsentReason",
        interpretation: element<CodeableConcept> = "interpretation",
        /// Comments about result
        comment: primitive<String> = "comment",
        body_site: element<CodeableConcept> = "bodySite",
        method: element<CodeableConcept> = "method",
        specimen: element<Reference> = "specimen",
        device: element<Reference> = "device",
        reference_range: elements<ObservationReferenceRange> = "referenceRange",
        /// Resource related to this observation
        related: elements<ObservationRelated> = "related",
        component: elements<ObservationComponent> = "component",
    }
}

fhir_choice! {
    /// `Observation.effective[x]`
    pub enum ObservationEffective {
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Period(element<Period>) = "Period",
    }
}

fhir_choice! {
    /// `Observation.value[x]`
    pub enum ObservationValue {
        Quantity(element<Quantity>) = "Quantity",
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        String(primitive<String>) = "String",
        Boolean(primitive<bool>) = "Boolean",
        Range(element<Range>) = "Range",
        Ratio(element<Ratio>) = "Ratio",
        SampledData(element<SampledData>) = "SampledData",
        Attachment(element<Attachment>) = "Attachment",
        Time(primitive<FhirTime>) = "Time",
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Period(element<Period>) = "Period",
    }
}

fhir_element! {
    /// Provides guide for interpretation.
    pub struct ObservationReferenceRange: BackboneBase {
        low: element<SimpleQuantity> = "low",
        high: element<SimpleQuantity> = "high",
        type_: element<CodeableConcept> = "type",
        applies_to: elements<CodeableConcept> = "appliesTo",
        age: element<Range> = "age",
        text: primitive<String> = "text",
    }
}

fhir_element! {
    /// A reference to another resource (usually another Observation) whose
    /// relationship is defined by the relationship type code.
    pub struct ObservationRelated: BackboneBase {
        type_: primitive<ObservationRelationshipType> = "type",
        /// Resource that is related to this one
        target: required<Reference> = "target",
    }
}

fhir_element! {
    /// Component results.
    pub struct ObservationComponent: BackboneBase {
        code: required<CodeableConcept> = "code",
        value: choice<ObservationComponentValue> = "value",
        data_absent_reason: element<CodeableConcept> = "dataAbsentReason",
        interpretation: element<CodeableConcept> = "interpretation",
        reference_range: elements<ObservationReferenceRange> = "referenceRange",
    }
}

fhir_choice! {
    /// `Observation.component.value[x]`
    pub enum ObservationComponentValue {
        Quantity(element<Quantity>) = "Quantity",
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        String(primitive<String>) = "String",
        Range(element<Range>) = "Range",
        Ratio(element<Ratio>) = "Ratio",
        SampledData(element<SampledData>) = "SampledData",
        Attachment(element<Attachment>) = "Attachment",
        Time(primitive<FhirTime>) = "Time",
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Period(element<Period>) = "Period",
    }
}
