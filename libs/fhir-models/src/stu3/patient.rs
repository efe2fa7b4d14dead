use super::*;

fhir_resource! {
    /// Demographics and other administrative information about an individual
    /// or animal receiving care or other health-related services.
    pub struct Patient in Stu3 {
        identifier: elements<Identifier> = "identifier",
        active: primitive<bool> = "active",
        name: elements<HumanName> = "name",
        telecom: elements<ContactPoint> = "telecom",
        gender: primitive<AdministrativeGender> = "gender",
        birth_date: primitive<FhirDate> = "birthDate",
        deceased: choice<PatientDeceased> = "deceased",
        address: elements<Address> = "address",
        marital_status: element<CodeableConcept> = "maritalStatus",
        multiple_birth: choice<PatientMultipleBirth> = "multipleBirth",
        photo: elements<Attachment> = "photo",
        contact: elements<PatientContact> = "contact",
        /// This patient is known to be an animal (non-human)
        animal: element<PatientAnimal> = "animal",
        communication: elements<PatientCommunication> = "communication",
        general_practitioner: elements<Reference> = "generalPractitioner",
        managing_organization: element<Reference> = "managingOrganization",
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
        relationship: elements<CodeableConcept> = "relationship",
        name: element<HumanName> = "name",
        telecom: elements<ContactPoint> = "telecom",
        address: element<Address> = "address",
        gender: primitive<AdministrativeGender> = "gender",
        organization: element<Reference> = "organization",
        period: element<Period> = "period",
    }
}

fhir_element! {
    /// This patient is known to be an animal.
    pub struct PatientAnimal: BackboneBase {
        /// E.g. Dog, Cow
        species: required<CodeableConcept> = "species",
        /// E.g. Poodle, Angus
        breed: element<CodeableConcept> = "breed",
        /// E.g. Neutered, Intact
        gender_status: element<CodeableConcept> = "genderStatus",
    }
}

fhir_element! {
    /// A list of Languages which may be used to communicate with the patient
    /// about his or her health.
    pub struct PatientCommunication: BackboneBase {
        language: required<CodeableConcept> = "language",
        preferred: primitive<bool> = "preferred",
    }
}

fhir_element! {
    /// Link to another patient resource that concerns the same actual
    /// patient.
    pub struct PatientLink: BackboneBase {
        other: required<Reference> = "other",
        type_: required_primitive<LinkType> = "type",
    }
}
