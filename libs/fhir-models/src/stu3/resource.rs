use super::*;

fhir_resources!(Stu3 {
    CodeSystem,
    Encounter,
    Observation,
    Patient,
    ValueSet,
});
