use super::*;

fhir_resources!(R4 {
    ClaimResponse,
    CodeSystem,
    Encounter,
    Observation,
    Patient,
    ValueSet,
});
