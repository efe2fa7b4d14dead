use super::*;

fhir_resource! {
    /// Information about an individual or animal receiving care or other
    /// health-related services.
    pub struct Patient in R4 {
        /// An identifier for this patient
        identifier: elements<Identifier> = "identifier",
        /// Whether this patient's record is in active use
        active: primitive<bool> = "active",
        /// A name associated with the patient
        name: elements<HumanName> = "name",
        /// A contact detail for the individual
        telecom: elements<ContactPoint> = "telecom",
        gender: primitive<AdministrativeGender> = "gender",
        /// The date of birth for the individual
        birth_date: primitive<FhirDate> = "birthDate",
        /// Indicates if the individual is deceased or not
        deceased: choice<PatientDeceased> = "deceased",
        /// An address for the individual
        address: elements<Address> = "address",
        /// Marital (civil) status of a patient
        marital_status: element<CodeableConcept> = "maritalStatus",
        /// Whether patient is part of a multiple birth
        multiple_birth: choice<PatientMultipleBirth> = "multipleBirth",
        /// Image of the patient
        photo: elements<Attachment> = "photo",
        /// A contact party (e.g. guardian, partner, friend) for the patient
        contact: elements<PatientContact> = "contact",
        /// A language which may be used to communicate with the patient about
        /// his or her health
        communication: elements<PatientCommunication> = "communication",
        /// Patient's nominated primary care provider
        general_practitioner: elements<Reference> = "generalPractitioner",
        /// Organization that is the custodian of the patient record
        managing_organization: element<Reference> = "managingOrganization",
        /// Link to another patient resource that concerns the same actual
        /// person
        link: elements<PatientLink> = "link",
    }
}

fhir_choice! {
    /// `Patient.deceased[x]`
    pub enum PatientDeceased {
        Boolean(primitive<bool>) = "Boolean",
        DateTime(primitive<FhirDateTime>) = "DateTime",
    }
}

fhir_choice! {
    /// `Patient.multipleBirth[x]`
    pub enum PatientMultipleBirth {
        Boolean(primitive<bool>) = "Boolean",
        Integer(primitive<i32>) = "Integer",
    }
}

fhir_element! {
    /// A contact party (e.g. guardian, partner, friend) for the patient.
    pub struct PatientContact: BackboneBase {
        /// The kind of relationship
        relationship: elements<CodeableConcept> = "relationship",
        name: element<HumanName> = "name",
        telecom: elements<ContactPoint> = "telecom",
        address: element<Address> = "address",
        gender: primitive<AdministrativeGender> = "gender",
        /// Organization that is associated with the contact
        organization: element<Reference> = "organization",
        /// The period during which this contact person or organization is
        /// valid to be contacted relating to this patient
        period: element<Period> = "period",
    }
}

fhir_element! {
    /// A language which may be used to communicate with the patient about his
    /// or her health.
    pub struct PatientCommunication: BackboneBase {
        language: required<CodeableConcept> = "language",
        /// Language preference indicator
        preferred: primitive<bool> = "preferred",
    }
}

fhir_element! {
    /// Link to another patient resource that concerns the same actual person.
    pub struct PatientLink: BackboneBase {
        /// The other patient or related person resource that the link refers
        /// to
        other: required<Reference> = "other",
        type_: required_primitive<LinkType> = "type",
    }
}
