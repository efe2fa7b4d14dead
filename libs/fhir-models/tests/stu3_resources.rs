mod support;

use fhir_sdk_models::format::{Error, FhirResource, FhirVersion};
use fhir_sdk_models::stu3::{
    AdministrativeGender, CodeSystem, CodeSystemContentMode, Encounter, EncounterStatus,
    FhirStu3Parser, Observation, ObservationRelationshipType, ObservationValue, Patient,
    PatientMultipleBirth, Resource, Stu3, ValueSet,
};
use support::{all_fixtures, assert_json_eq, load_fixture};

#[test]
fn release_markers() {
    assert_eq!(Stu3::NAME, "STU3");
    assert_eq!(Stu3::RELEASE, "3.0.2");
    assert_eq!(<Encounter as FhirResource>::RESOURCE_TYPE, "Encounter");
}

#[test]
fn encounter_emergency_example() {
    let source = load_fixture("stu3/encounter-example-emerg.json");
    let parser = FhirStu3Parser::new();
    let encounter: Encounter = parser.to_fhir(&source).expect("decode Encounter");

    assert_eq!(encounter.status.value(), Some(&EncounterStatus::InProgress));
    assert_eq!(encounter.status_history.len(), 5);
    for pair in encounter.status_history.windows(2) {
        let end = pair[0].period.end.as_ref().and_then(|end| end.value());
        let start = pair[1].period.start.as_ref().and_then(|start| start.value());
        assert!(end.is_some());
        assert_eq!(end, start);
    }
    assert_eq!(
        encounter
            .status_history
            .last()
            .and_then(|entry| entry.status.value()),
        Some(&EncounterStatus::InProgress)
    );

    let class = encounter.class_.as_ref().expect("class");
    assert_eq!(
        class.system.as_ref().and_then(|s| s.as_str()),
        Some("http://hl7.org/fhir/v3/ActCode")
    );

    let json = parser.from_fhir(&encounter).expect("encode Encounter");
    assert_json_eq(&source, &json);
}

#[test]
fn animal_patient() {
    let source = load_fixture("stu3/patient-example-animal.json");
    let parser = FhirStu3Parser::new();
    let patient: Patient = parser.to_fhir(&source).expect("decode Patient");

    let gender = patient.gender.as_ref().expect("gender");
    assert_eq!(gender.value(), Some(&AdministrativeGender::Female));
    assert_eq!(gender.extension.len(), 1);

    assert!(matches!(
        patient.multiple_birth,
        Some(PatientMultipleBirth::Integer(ref count)) if count.value() == Some(&2)
    ));

    let animal = patient.animal.as_ref().expect("animal");
    assert_eq!(
        animal.species.coding[0].code.as_ref().and_then(|c| c.as_str()),
        Some("canislf")
    );

    let given = &patient.name[0].given[0];
    assert_eq!(given.as_str(), Some("Kenzi"));
    assert_eq!(given.id.as_deref(), Some("given-0"));

    let json = parser.from_fhir(&patient).expect("encode Patient");
    assert_json_eq(&source, &json);
}

#[test]
fn observation_with_related_resources() {
    let source = load_fixture("stu3/observation-example-glucose.json");
    let parser = FhirStu3Parser::new();
    let observation: Observation = parser.to_fhir(&source).expect("decode Observation");

    match &observation.value {
        Some(ObservationValue::Quantity(quantity)) => {
            let value = quantity.value.as_ref().and_then(|v| v.value()).expect("value");
            assert_eq!(value.to_string(), "6.30");
        }
        other => panic!("expected valueQuantity, got {:?}", other),
    }
    assert_eq!(
        observation.related[0].type_.as_ref().and_then(|t| t.value()),
        Some(&ObservationRelationshipType::DerivedFrom)
    );
    assert!(observation.interpretation.is_some());
    assert!(observation.context.is_some());

    let json = parser.from_fhir(&observation).expect("encode Observation");
    assert!(json.contains("6.30"));
    assert_json_eq(&source, &json);
}

#[test]
fn terminology_resources() {
    let parser = FhirStu3Parser::new();

    let cs: CodeSystem = parser
        .to_fhir(&load_fixture("stu3/codesystem-example.json"))
        .expect("decode CodeSystem");
    assert_eq!(cs.content.value(), Some(&CodeSystemContentMode::Complete));
    assert_eq!(cs.concept.len(), 3);
    let identifier = cs.identifier.as_ref().expect("single identifier");
    assert_eq!(
        identifier.value.as_ref().and_then(|v| v.as_str()),
        Some("internal-cholesterol-inl")
    );

    let vs: ValueSet = parser
        .to_fhir(&load_fixture("stu3/valueset-example.json"))
        .expect("decode ValueSet");
    assert_eq!(vs.extensible.as_ref().and_then(|e| e.value()), Some(&false));
    let compose = vs.compose.as_ref().expect("compose");
    assert_eq!(compose.include[0].concept.len(), 4);
}

#[test]
fn r4_only_elements_are_rejected() {
    // `Reference.type` and `supplement` content mode do not exist in STU3.
    let parser = FhirStu3Parser::new();

    let err = parser
        .to_fhir::<Observation>(
            r#"{
                "resourceType": "Observation",
                "status": "final",
                "code": {"text": "glucose"},
                "subject": {"reference": "Patient/1", "type": "Patient"}
            }"#,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownField { ref path } if path.as_str() == "Observation.subject.type"
    ));

    let err = parser
        .to_fhir::<CodeSystem>(
            r#"{"resourceType": "CodeSystem", "status": "draft", "content": "supplement"}"#,
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnknownEnumCode { ref code, .. } if code == "supplement"));
}

#[test]
fn every_fixture_round_trips() {
    let parser = FhirStu3Parser::new();
    for (name, source) in all_fixtures("stu3") {
        let resource: Resource = parser
            .parse_resource(&source)
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        let json = parser
            .encode_resource(&resource)
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        assert_json_eq(&source, &json);
    }
}
