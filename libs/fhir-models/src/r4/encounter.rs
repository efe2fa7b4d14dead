//! An interaction during which services are provided to the patient.

use super::*;

fhir_resource! {
    /// An interaction between a patient and healthcare provider(s) for the
    /// purpose of providing healthcare service(s) or assessing the health
    /// status of a patient.
    pub struct Encounter in R4 {
        /// Identifier(s) by which this encounter is known
        identifier: elements<Identifier> = "identifier",
        status: required_primitive<EncounterStatus> = "status",
        /// List of past encounter statuses
        status_history: elements<EncounterStatusHistory> = "statusHistory",
        /// Classification of patient encounter
        class_: required<Coding> = "class",
        /// List of past encounter classes
        class_history: elements<EncounterClassHistory> = "classHistory",
        /// Specific type of encounter
        type_: elements<CodeableConcept> = "type",
        service_type: element<CodeableConcept> = "serviceType",
        /// Indicates the urgency of the encounter
        priority: element<CodeableConcept> = "priority",
        /// The patient or group present at the encounter
        subject: element<Reference> = "subject",
        episode_of_care: elements<Reference> = "episodeOfCare",
        /// The ServiceRequest that initiated this encounter
        based_on: elements<Reference> = "basedOn",
        /// List of participants involved in the encounter
        participant: elements<EncounterParticipant> = "participant",
        appointment: elements<Reference> = "appointment",
        /// The start and end time of the encounter
        period: element<Period> = "period",
        /// Quantity of time the encounter lasted (less time absent)
        length: element<Duration> = "length",
        reason_code: elements<CodeableConcept> = "reasonCode",
        reason_reference: elements<Reference> = "reasonReference",
        /// The list of diagnosis relevant to this encounter
        diagnosis: elements<EncounterDiagnosis> = "diagnosis",
        /// The set of accounts that may be used for billing for this
        /// Encounter
        account: elements<Reference> = "account",
        /// Details about the admission to a healthcare service
        hospitalization: element<EncounterHospitalization> = "hospitalization",
        /// List of locations where the patient has been
        location: elements<EncounterLocation> = "location",
        /// The organization (facility) responsible for this encounter
        service_provider: element<Reference> = "serviceProvider",
        /// Another Encounter this encounter is part of
        part_of: element<Reference> = "partOf",
    }
}

fhir_element! {
    /// The status history permits the encounter resource to contain the
    /// status history without needing to read through the historical
    /// versions of the resource, or even have the server store them.
    pub struct EncounterStatusHistory: BackboneBase {
        status: required_primitive<EncounterStatus> = "status",
        /// The time that the episode was in the specified status
        period: required<Period> = "period",
    }
}

fhir_element! {
    /// The class history permits the tracking of the encounters transitions
    /// without needing to go through the resource history.
    pub struct EncounterClassHistory: BackboneBase {
        class_: required<Coding> = "class",
        period: required<Period> = "period",
    }
}

fhir_element! {
    /// The list of people responsible for providing the service.
    pub struct EncounterParticipant: BackboneBase {
        /// Role of participant in encounter
        type_: elements<CodeableConcept> = "type",
        period: element<Period> = "period",
        /// Persons involved in the encounter other than the patient
        individual: element<Reference> = "individual",
    }
}

fhir_element! {
    /// The list of diagnosis relevant to this encounter.
    pub struct EncounterDiagnosis: BackboneBase {
        /// The diagnosis or procedure relevant to the encounter
        condition: required<Reference> = "condition",
        /// Role that this diagnosis has within the encounter (e.g. admission,
        /// billing, discharge …)
        use_: element<CodeableConcept> = "use",
        /// Ranking of the diagnosis (for each role type)
        rank: primitive<PositiveInt> = "rank",
    }
}

fhir_element! {
    /// Details about the admission to a healthcare service.
    pub struct EncounterHospitalization: BackboneBase {
        pre_admission_identifier: element<Identifier> = "preAdmissionIdentifier",
        /// The location/organization from which the patient came before
        /// admission
        origin: element<Reference> = "origin",
        admit_source: element<CodeableConcept> = "admitSource",
        re_admission: element<CodeableConcept> = "reAdmission",
        diet_preference: elements<CodeableConcept> = "dietPreference",
        special_courtesy: elements<CodeableConcept> = "specialCourtesy",
        special_arrangement: elements<CodeableConcept> = "specialArrangement",
        destination: element<Reference> = "destination",
        discharge_disposition: element<CodeableConcept> = "dischargeDisposition",
    }
}

fhir_element! {
    /// List of locations where the patient has been during this encounter.
    pub struct EncounterLocation: BackboneBase {
        location: required<Reference> = "location",
        status: primitive<EncounterLocationStatus> = "status",
        /// The physical type of the location (usually the level in the
        /// location hierachy - bed room ward etc.)
        physical_type: element<CodeableConcept> = "physicalType",
        period: element<Period> = "period",
    }
}
