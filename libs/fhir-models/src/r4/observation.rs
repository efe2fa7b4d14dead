//! Measurements and simple assertions.

use super::*;

fhir_resource! {
    /// Measurements and simple assertions made about a patient, device or
    /// other subject.
    pub struct Observation in R4 {
        /// Business Identifier for observation
        identifier: elements<Identifier> = "identifier",
        /// Fulfills plan, proposal or order
        based_on: elements<Reference> = "basedOn",
        /// Part of referenced event
        part_of: elements<Reference> = "partOf",
        status: required_primitive<ObservationStatus> = "status",
        /// Classification of  type of observation
        category: elements<CodeableConcept> = "category",
        /// Type of observation (code / type)
        code: required<CodeableConcept> = "code",
        /// Who and/or what the observation is about
        subject: element<Reference> = "subject",
        focus: elements<Reference> = "focus",
        /// Healthcare event during which this observation is made
        encounter: element<Reference> = "encounter",
        /// Clinically relevant time/time-period for observation
        effective: choice<ObservationEffective> = "effective",
        /// Date/Time this version was made available
        issued: primitive<FhirInstant> = "issued",
        /// Who is responsible for the observation
        performer: elements<Reference> = "performer",
        /// Actual result
        value: choice<ObservationValue> = "value",
        /// Why the result is missing
        data_absent_reason: element<CodeableConcept> = "dataAbsentReason",
        /// High, low, normal, etc.
        interpretation: elements<CodeableConcept> = "interpretation",
        /// Comments about the observation
        note: elements<Annotation> = "note",
        /// Observed body part
        body_site: element<CodeableConcept> = "bodySite",
        /// How it was done
        method: element<CodeableConcept> = "method",
        /// Specimen used for this observation
        specimen: element<Reference> = "specimen",
        /// (Measurement) Device
        device: element<Reference> = "device",
        /// Provides guide for interpretation
        reference_range: elements<ObservationReferenceRange> = "referenceRange",
        /// Related resource that belongs to the Observation group
        has_member: elements<Reference> = "hasMember",
        /// Related measurements the observation is made from
        derived_from: elements<Reference> = "derivedFrom",
        /// Component results
        component: elements<ObservationComponent> = "component",
    }
}

fhir_choice! {
    /// `Observation.effective[x]`
    pub enum ObservationEffective {
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Period(element<Period>) = "Period",
        Timing(element<Timing>) = "Timing",
        Instant(primitive<FhirInstant>) = "Instant",
    }
}

fhir_choice! {
    /// `Observation.value[x]` and `Observation.component.value[x]`
    pub enum ObservationValue {
        Quantity(element<Quantity>) = "Quantity",
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        String(primitive<String>) = "String",
        Boolean(primitive<bool>) = "Boolean",
        Integer(primitive<i32>) = "Integer",
        Range(element<Range>) = "Range",
        Ratio(element<Ratio>) = "Ratio",
        SampledData(element<SampledData>) = "SampledData",
        Time(primitive<FhirTime>) = "Time",
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Period(element<Period>) = "Period",
    }
}

fhir_element! {
    /// Guidance on how to interpret the value by comparison to a normal or
    /// recommended range.
    pub struct ObservationReferenceRange: BackboneBase {
        /// Low Range, if relevant
        low: element<SimpleQuantity> = "low",
        /// High Range, if relevant
        high: element<SimpleQuantity> = "high",
        /// Reference range qualifier
        type_: element<CodeableConcept> = "type",
        /// Reference range population
        applies_to: elements<CodeableConcept> = "appliesTo",
        /// Applicable age range, if relevant
        age: element<Range> = "age",
        /// Text based reference range in an observation
        text: primitive<String> = "text",
    }
}

fhir_element! {
    /// Some observations have multiple component observations.
    pub struct ObservationComponent: BackboneBase {
        /// Type of component observation (code / type)
        code: required<CodeableConcept> = "code",
        value: choice<ObservationValue> = "value",
        data_absent_reason: element<CodeableConcept> = "dataAbsentReason",
        interpretation: elements<CodeableConcept> = "interpretation",
        reference_range: elements<ObservationReferenceRange> = "referenceRange",
    }
}
