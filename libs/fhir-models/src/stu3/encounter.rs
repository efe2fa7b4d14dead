use super::*;

fhir_resource! {
    /// An interaction between a patient and healthcare provider(s) for the
    /// purpose of providing healthcare service(s) or assessing the health
    /// status of a patient.
    pub struct Encounter in Stu3 {
        identifier: elements<Identifier> = "identifier",
        status: required_primitive<EncounterStatus> = "status",
        /// List of past encounter statuses
        status_history: elements<EncounterStatusHistory> = "statusHistory",
        /// inpatient | outpatient | ambulatory | emergency +
        class_: element<Coding> = "class",
        class_history: elements<EncounterClassHistory> = "classHistory",
        type_: elements<CodeableConcept> = "type",
        priority: element<CodeableConcept> = "priority",
        /// The patient ro group present at the encounter
        subject: element<Reference> = "subject",
        episode_of_care: elements<Reference> = "episodeOfCare",
        /// The ReferralRequest that initiated this encounter
        incoming_referral: elements<Reference> = "incomingReferral",
        participant: elements<EncounterParticipant> = "participant",
        /// The appointment that scheduled this encounter
        appointment: element<Reference> = "appointment",
        period: element<Period> = "period",
        length: element<Duration> = "length",
        /// Reason the encounter takes place (code)
        reason: elements<CodeableConcept> = "reason",
        diagnosis: elements<EncounterDiagnosis> = "diagnosis",
        account: elements<Reference> = "account",
        hospitalization: element<EncounterHospitalization> = "hospitalization",
        location: elements<EncounterLocation> = "location",
        service_provider: element<Reference> = "serviceProvider",
        part_of: element<Reference> = "partOf",
    }
}

fhir_element! {
    /// List of past encounter statuses.
    pub struct EncounterStatusHistory: BackboneBase {
        status: required_primitive<EncounterStatus> = "status",
        period: required<Period> = "period",
    }
}

fhir_element! {
    /// List of past encounter classes.
    pub struct EncounterClassHistory: BackboneBase {
        class_: required<Coding> = "class",
        period: required<Period> = "period",
    }
}

fhir_element! {
    /// List of participants involved in the encounter.
    pub struct EncounterParticipant: BackboneBase {
        type_: elements<CodeableConcept> = "type",
        period: element<Period> = "period",
        individual: element<Reference> = "individual",
    }
}

fhir_element! {
    /// The list of diagnosis relevant to this encounter.
    pub struct EncounterDiagnosis: BackboneBase {
        condition: required<Reference> = "condition",
        /// Role that this diagnosis has within the encounter (e.g. admission,
        /// billing, discharge …)
        role: element<CodeableConcept> = "role",
        rank: primitive<PositiveInt> = "rank",
    }
}

fhir_element! {
    /// Details about the admission to a healthcare service.
    pub struct EncounterHospitalization: BackboneBase {
        pre_admission_identifier: element<Identifier> = "preAdmissionIdentifier",
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
    /// List of locations where the patient has been.
    pub struct EncounterLocation: BackboneBase {
        location: required<Reference> = "location",
        status: primitive<EncounterLocationStatus> = "status",
        period: element<Period> = "period",
    }
}
