mod support;

use fhir_sdk_models::format::{
    ChoiceConflictPolicy, Error, FhirDecimal, ParserConfig, UnknownFieldPolicy,
};
use fhir_sdk_models::r4::{
    AdministrativeGender, ClaimProcessingCodes, ClaimResponse, CodeSystem, CodeSystemContentMode,
    Encounter, EncounterLocationStatus, EncounterStatus, ExtensionValue, FhirR4Parser,
    FilterOperator, FinancialResourceStatusCodes, NarrativeStatus, Observation, ObservationValue,
    Patient, PatientDeceased, QuantityComparator, Resource, Use, UsageContextValue, ValueSet,
};
use support::{all_fixtures, assert_json_eq, load_fixture};

fn decimal(value: &Option<fhir_sdk_models::r4::Primitive<FhirDecimal>>) -> String {
    value
        .as_ref()
        .and_then(|value| value.value())
        .expect("decimal should be present")
        .to_string()
}

#[test]
fn claim_response_example() {
    let source = load_fixture("r4/claimresponse-example.json");
    let parser = FhirR4Parser::new();
    let claim: ClaimResponse = parser.to_fhir(&source).expect("decode ClaimResponse");

    assert_eq!(claim.base.id(), Some("R3500"));
    assert_eq!(claim.status.value(), Some(&FinancialResourceStatusCodes::Active));
    assert_eq!(claim.use_.value(), Some(&Use::Claim));
    assert_eq!(claim.outcome.value(), Some(&ClaimProcessingCodes::Complete));
    assert_eq!(
        claim.disposition.as_ref().and_then(|d| d.as_str()),
        Some("Claim settled as per contract.")
    );

    let text = claim.base.text.as_ref().expect("narrative");
    assert_eq!(text.status.value(), Some(&NarrativeStatus::Generated));

    assert_eq!(claim.total.len(), 2);
    assert_eq!(decimal(&claim.total[0].amount.value), "135.57");
    assert_eq!(decimal(&claim.total[1].amount.value), "90.47");

    let adjudication = &claim.item[0].adjudication;
    assert_eq!(adjudication.len(), 4);
    assert_eq!(decimal(&adjudication[1].amount.as_ref().expect("copay").value), "10.00");
    assert_eq!(decimal(&adjudication[2].value), "80.00");
    let reason = adjudication[3].reason.as_ref().expect("reason");
    assert_eq!(
        reason.coding[0].code.as_ref().and_then(|c| c.as_str()),
        Some("ar002")
    );

    let insurer = claim.insurer.identifier.as_ref().expect("insurer identifier");
    assert_eq!(insurer.value.as_ref().and_then(|v| v.as_str()), Some("555123"));

    let payment = claim.payment.as_ref().expect("payment");
    assert_eq!(decimal(&payment.amount.value), "100.47");
    assert_eq!(
        payment.date.as_ref().and_then(|d| d.value()).map(ToString::to_string),
        Some("2014-08-31".to_owned())
    );

    let json = parser.from_fhir(&claim).expect("encode ClaimResponse");
    assert_json_eq(&source, &json);
}

#[test]
fn encounter_status_history_is_contiguous() {
    let source = load_fixture("r4/encounter-example-emerg.json");
    let parser = FhirR4Parser::new();
    let encounter: Encounter = parser.to_fhir(&source).expect("decode Encounter");

    assert_eq!(encounter.status.value(), Some(&EncounterStatus::InProgress));
    assert_eq!(encounter.status_history.len(), 5);

    for pair in encounter.status_history.windows(2) {
        let end = pair[0].period.end.as_ref().and_then(|end| end.value());
        let start = pair[1].period.start.as_ref().and_then(|start| start.value());
        assert!(end.is_some(), "only the last period may be open");
        assert_eq!(end, start);

        let end = end.and_then(|end| end.to_chrono()).expect("end instant");
        let begin = pair[0]
            .period
            .start
            .as_ref()
            .and_then(|start| start.value())
            .and_then(|start| start.to_chrono())
            .expect("start instant");
        assert!(begin < end);
    }

    let last = encounter.status_history.last().expect("history");
    assert_eq!(last.status.value(), Some(&EncounterStatus::InProgress));
    assert!(last.period.end.is_none());

    assert_eq!(encounter.location.len(), 5);
    assert_eq!(
        encounter.location[3].status.as_ref().and_then(|s| s.value()),
        Some(&EncounterLocationStatus::Reserved)
    );
    assert_eq!(
        encounter.class_.code.as_ref().and_then(|c| c.as_str()),
        Some("IMP")
    );

    let json = parser.from_fhir(&encounter).expect("encode Encounter");
    assert_json_eq(&source, &json);
}

#[test]
fn patient_sidecars_survive_round_trip() {
    let source = load_fixture("r4/patient-example.json");
    let parser = FhirR4Parser::new();
    let patient: Patient = parser.to_fhir(&source).expect("decode Patient");

    assert_eq!(
        patient.gender.as_ref().and_then(|g| g.value()),
        Some(&AdministrativeGender::Male)
    );
    assert!(matches!(
        patient.deceased,
        Some(PatientDeceased::Boolean(ref value)) if value.value() == Some(&false)
    ));

    let birth_date = patient.birth_date.as_ref().expect("birthDate");
    assert_eq!(birth_date.value().map(ToString::to_string), Some("1974-12-25".to_owned()));
    assert_eq!(birth_date.extension.len(), 1);
    assert!(matches!(
        birth_date.extension[0].value,
        Some(ExtensionValue::DateTime(_))
    ));

    let maiden = &patient.name[2];
    let family = maiden.family.as_ref().expect("family");
    assert_eq!(family.as_str(), Some("Windsor"));
    assert_eq!(
        family.extension[0].url,
        "http://hl7.org/fhir/StructureDefinition/humanname-own-prefix"
    );

    // given: ["Peter", null, "James"] with an extension on the middle slot
    assert_eq!(maiden.given.len(), 3);
    assert_eq!(maiden.given[0].as_str(), Some("Peter"));
    assert!(maiden.given[1].value().is_none());
    assert_eq!(maiden.given[1].extension.len(), 1);
    assert_eq!(maiden.given[2].as_str(), Some("James"));
    assert!(!maiden.given[2].has_sidecar());

    let identifier = &patient.identifier[0];
    let assigner = identifier.assigner.as_ref().expect("assigner");
    assert_eq!(assigner.display.as_ref().and_then(|d| d.as_str()), Some("Acme Healthcare"));

    let json = parser.from_fhir(&patient).expect("encode Patient");
    assert_json_eq(&source, &json);
}

#[test]
fn observation_choice_values() {
    let parser = FhirR4Parser::new();

    let glucose: Observation = parser
        .to_fhir(&load_fixture("r4/observation-example-glucose.json"))
        .expect("decode glucose");
    match &glucose.value {
        Some(ObservationValue::Quantity(quantity)) => {
            assert_eq!(decimal(&quantity.value), "6.3");
            assert_eq!(quantity.unit.as_ref().and_then(|u| u.as_str()), Some("mmol/l"));
        }
        other => panic!("expected valueQuantity, got {:?}", other),
    }
    let issued = glucose.issued.as_ref().and_then(|i| i.value()).expect("issued");
    assert_eq!(issued.to_string(), "2013-04-03T15:30:10.000+01:00");

    let pressure: Observation = parser
        .to_fhir(&load_fixture("r4/observation-example-bloodpressure.json"))
        .expect("decode blood pressure");
    assert!(pressure.value.is_none());
    assert_eq!(pressure.component.len(), 2);
    for component in &pressure.component {
        assert!(matches!(component.value, Some(ObservationValue::Quantity(_))));
    }
}

#[test]
fn code_system_example() {
    let cs: CodeSystem = FhirR4Parser::new()
        .to_fhir(&load_fixture("r4/codesystem-example.json"))
        .expect("decode CodeSystem");

    assert_eq!(
        cs.url.as_ref().and_then(|u| u.as_str()),
        Some("http://hl7.org/fhir/CodeSystem/example")
    );
    assert_eq!(cs.content.value(), Some(&CodeSystemContentMode::Complete));
    assert_eq!(cs.concept.len(), 3);
    assert_eq!(cs.filter[0].operator[0].value(), Some(&FilterOperator::Equal));
}

#[test]
fn value_set_example() {
    let vs: ValueSet = FhirR4Parser::new()
        .to_fhir(&load_fixture("r4/valueset-example.json"))
        .expect("decode ValueSet");

    assert_eq!(
        vs.url.as_ref().and_then(|u| u.as_str()),
        Some("http://hl7.org/fhir/ValueSet/example-extensional")
    );

    let compose = vs.compose.as_ref().expect("compose should be present");
    assert_eq!(compose.include.len(), 1);
    assert_eq!(compose.include[0].concept.len(), 4);

    match &vs.use_context[0].value {
        UsageContextValue::Quantity(quantity) => {
            assert_eq!(
                quantity.comparator.as_ref().and_then(|c| c.value()),
                Some(&QuantityComparator::GreaterThan)
            );
        }
        other => panic!("expected valueQuantity, got {:?}", other),
    }
}

#[test]
fn every_fixture_round_trips() {
    let parser = FhirR4Parser::new();
    for (name, source) in all_fixtures("r4") {
        let resource = parser
            .parse_resource(&source)
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        let json = parser
            .encode_resource(&resource)
            .unwrap_or_else(|err| panic!("{name}: {err}"));
        assert_json_eq(&source, &json);

        // A second pass must reproduce the first encoding exactly.
        let again = parser.parse_resource(&json).expect("re-decode");
        assert_eq!(resource, again, "{name}");
    }
}

#[test]
fn parse_resource_dispatches_on_resource_type() {
    let parser = FhirR4Parser::new();
    let resource = parser
        .parse_resource(&load_fixture("r4/encounter-example-emerg.json"))
        .expect("decode");
    assert_eq!(resource.resource_type(), "Encounter");
    assert_eq!(resource.id(), Some("emerg"));
    assert!(matches!(resource, Resource::Encounter(_)));

    let err = parser
        .parse_resource(r#"{"resourceType": "Medication", "id": "x"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownResourceType { ref found, .. } if found == "Medication"));
}

#[test]
fn mismatched_resource_type_is_rejected() {
    let source = load_fixture("r4/patient-example.json");
    let err = FhirR4Parser::new().to_fhir::<Encounter>(&source).unwrap_err();
    assert!(matches!(
        err,
        Error::ResourceTypeMismatch { ref expected, ref found }
            if expected == "Encounter" && found == "Patient"
    ));
    assert_eq!(err.resource_type(), Some("Encounter"));
}

#[test]
fn conflicting_choice_keys_follow_policy() {
    let source = r#"{
        "resourceType": "Patient",
        "deceasedBoolean": true,
        "deceasedDateTime": "2015-02-14T13:42:00+10:00"
    }"#;

    let err = FhirR4Parser::new().to_fhir::<Patient>(source).unwrap_err();
    match err {
        Error::MalformedChoiceValue { path, key, .. } => {
            assert_eq!(path.as_str(), "Patient.deceasedBoolean");
            assert_eq!(key, "deceasedBoolean");
        }
        other => panic!("unexpected error {other:?}"),
    }

    let lenient = FhirR4Parser::with_config(
        ParserConfig::default().with_choice_conflicts(ChoiceConflictPolicy::FirstDeclared),
    );
    let patient: Patient = lenient.to_fhir(source).expect("first declared wins");
    assert!(matches!(patient.deceased, Some(PatientDeceased::Boolean(_))));

    let json = lenient.from_fhir(&patient).expect("encode");
    assert!(json.contains("deceasedBoolean"));
    assert!(!json.contains("deceasedDateTime"));
}

#[test]
fn malformed_values_report_their_path() {
    let parser = FhirR4Parser::new();

    let err = parser
        .to_fhir::<ClaimResponse>(
            r#"{
                "resourceType": "ClaimResponse",
                "status": "active",
                "type": {"text": "oral"},
                "use": "claim",
                "patient": {"reference": "Patient/1"},
                "created": "2014-08-16",
                "insurer": {"reference": "Organization/2"},
                "outcome": "complete",
                "item": [{"itemSequence": 1, "adjudication": [
                    {"category": {"text": "eligible"}, "amount": {"value": "135.57"}}
                ]}]
            }"#,
        )
        .unwrap_err();
    assert_eq!(
        err.path().map(|path| path.as_str()),
        Some("ClaimResponse.item[0].adjudication[0].amount.value")
    );
    assert_eq!(err.resource_type(), Some("ClaimResponse"));

    let err = parser
        .to_fhir::<Encounter>(r#"{"resourceType": "Encounter", "class": {"code": "IMP"}}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredField { ref path } if path.as_str() == "Encounter.status"
    ));

    let err = parser
        .to_fhir::<Encounter>(
            r#"{"resourceType": "Encounter", "status": "paused", "class": {"code": "IMP"}}"#,
        )
        .unwrap_err();
    assert!(matches!(err, Error::UnknownEnumCode { ref code, .. } if code == "paused"));
}

#[test]
fn unknown_fields_follow_policy() {
    let source = r#"{"resourceType": "Patient", "id": "p", "favouriteColour": "blue"}"#;

    let err = FhirR4Parser::new().to_fhir::<Patient>(source).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownField { ref path } if path.as_str() == "Patient.favouriteColour"
    ));

    let lenient = FhirR4Parser::with_config(
        ParserConfig::default().with_unknown_fields(UnknownFieldPolicy::Ignore),
    );
    let patient: Patient = lenient.to_fhir(source).expect("ignored");
    assert_eq!(patient.base.id(), Some("p"));
}

#[test]
fn decode_from_value_matches_decode_from_text() {
    let source = load_fixture("r4/claimresponse-example.json");
    let value: serde_json::Value = serde_json::from_str(&source).expect("valid JSON");
    let parser = FhirR4Parser::new();

    let from_text: ClaimResponse = parser.to_fhir(&source).expect("text");
    let from_value: ClaimResponse = parser.to_fhir_value(&value).expect("value");
    assert_eq!(from_text, from_value);
    assert_eq!(parser.from_fhir_value(&from_value), value);

    let encoded = fhir_sdk_models::format::encode_value(&from_value);
    assert_eq!(encoded, value);
}
