//! Property-based tests using QuickCheck

use fhir_sdk_models::r4::{FhirR4Parser, Patient};
use quickcheck::{QuickCheck, TestResult};
use serde_json::{json, Map, Value};

/// Builds a Patient whose single name carries one `given` slot per entry.
/// Each slot has a value, an element id, or both.
fn patient_with_given(slots: &[(Option<String>, bool)]) -> Value {
    let given: Vec<Value> = slots
        .iter()
        .map(|(value, _)| value.clone().map_or(Value::Null, Value::String))
        .collect();
    let sidecars: Vec<Value> = slots
        .iter()
        .enumerate()
        .map(|(i, (_, has_id))| {
            if *has_id {
                json!({ "id": format!("g{i}") })
            } else {
                Value::Null
            }
        })
        .collect();

    let mut name = Map::new();
    if slots.iter().any(|(value, _)| value.is_some()) {
        name.insert("given".into(), Value::Array(given));
    }
    if slots.iter().any(|(_, has_id)| *has_id) {
        name.insert("_given".into(), Value::Array(sidecars));
    }
    json!({ "resourceType": "Patient", "name": [name] })
}

/// Property: repeating primitives keep value and sidecar slots aligned
/// through decode and encode.
#[test]
fn prop_given_sidecars_stay_aligned() {
    fn prop(raw: Vec<(Option<String>, bool)>) -> TestResult {
        if raw.is_empty() {
            return TestResult::discard();
        }
        // Every slot needs a non-empty value or an id to be a slot at all.
        let slots: Vec<(Option<String>, bool)> = raw
            .into_iter()
            .map(|(value, has_id)| {
                let value = value.filter(|v| !v.is_empty());
                if value.is_none() && !has_id {
                    (Some("x".to_owned()), false)
                } else {
                    (value, has_id)
                }
            })
            .collect();

        let input = patient_with_given(&slots);
        let parser = FhirR4Parser::new();
        let patient: Patient = match parser.to_fhir_value(&input) {
            Ok(patient) => patient,
            Err(_) => return TestResult::failed(),
        };

        let given = &patient.name[0].given;
        if given.len() != slots.len() {
            return TestResult::failed();
        }
        let aligned = given.iter().zip(&slots).enumerate().all(|(i, (g, (value, has_id)))| {
            g.value.as_ref() == value.as_ref()
                && g.id.as_deref() == has_id.then(|| format!("g{i}")).as_deref()
        });

        TestResult::from_bool(aligned && parser.from_fhir_value(&patient) == input)
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<(Option<String>, bool)>) -> TestResult);
}

#[test]
fn sidecar_only_given_round_trips() {
    let input = json!({
        "resourceType": "Patient",
        "name": [{ "_given": [{ "id": "g0" }] }]
    });
    let parser = FhirR4Parser::new();
    let patient: Patient = parser.to_fhir_value(&input).unwrap();

    let given = &patient.name[0].given;
    assert_eq!(given.len(), 1);
    assert!(given[0].value.is_none());
    assert_eq!(given[0].id.as_deref(), Some("g0"));
    assert_eq!(parser.from_fhir_value(&patient), input);
}

/// Property: string primitives survive a round trip unchanged
#[test]
fn prop_string_primitive_round_trip() {
    fn prop(family: String) -> TestResult {
        if family.is_empty() {
            return TestResult::discard();
        }
        let input = json!({ "resourceType": "Patient", "name": [{ "family": family }] });
        let parser = FhirR4Parser::new();
        match parser.to_fhir_value::<Patient>(&input) {
            Ok(patient) => TestResult::from_bool(
                patient.name[0].family.as_ref().and_then(|f| f.as_str()) == Some(family.as_str())
                    && parser.from_fhir_value(&patient) == input,
            ),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String) -> TestResult);
}
