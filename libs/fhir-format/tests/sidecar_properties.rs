//! Property-based tests for primitive sidecar alignment using QuickCheck

use fhir_sdk_format::{
    decode_object, encode_value, FhirJson, FieldPath, ObjectReader, ObjectWriter, ParserConfig,
    Primitive, Result,
};
use quickcheck::{QuickCheck, TestResult};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
struct NoExtension;

impl FhirJson for NoExtension {
    fn decode(_: &mut ObjectReader<'_>) -> Result<Self> {
        Ok(NoExtension)
    }

    fn encode(&self, _: &mut ObjectWriter) {}
}

#[derive(Debug, Clone, PartialEq)]
struct Name {
    given: Vec<Primitive<String, NoExtension>>,
}

impl FhirJson for Name {
    fn decode(reader: &mut ObjectReader<'_>) -> Result<Self> {
        Ok(Self {
            given: reader.primitive_list("given")?,
        })
    }

    fn encode(&self, writer: &mut ObjectWriter) {
        writer.primitive_list("given", &self.given);
    }
}

fn decode(value: &Value) -> Result<Name> {
    let object = value.as_object().cloned().unwrap_or_default();
    decode_object(&object, FieldPath::root("HumanName"), ParserConfig::default())
}

/// Builds `{"given": [...], "_given": [...]}` from independent value and id
/// columns, leaving out either array when it is empty.
fn build(values: &[Option<String>], ids: &[Option<u8>]) -> Value {
    let mut object = Map::new();
    if !values.is_empty() {
        let values = values
            .iter()
            .map(|v| v.as_ref().map_or(Value::Null, |v| json!(v)))
            .collect();
        object.insert("given".into(), Value::Array(values));
    }
    if !ids.is_empty() {
        let sidecars = ids
            .iter()
            .map(|id| id.map_or(Value::Null, |id| json!({ "id": format!("id{id}") })))
            .collect();
        object.insert("_given".into(), Value::Array(sidecars));
    }
    Value::Object(object)
}

fn non_empty(values: Vec<Option<String>>) -> Vec<Option<String>> {
    values
        .into_iter()
        .map(|v| v.filter(|s| !s.is_empty()))
        .collect()
}

/// Property: every slot of either array lands at the same index
#[test]
fn prop_sidecar_alignment_is_positional() {
    fn prop(values: Vec<Option<String>>, ids: Vec<Option<u8>>) -> TestResult {
        let values = non_empty(values);
        let name = match decode(&build(&values, &ids)) {
            Ok(name) => name,
            Err(err) => return TestResult::error(err.to_string()),
        };

        if name.given.len() != values.len().max(ids.len()) {
            return TestResult::failed();
        }
        for (i, slot) in name.given.iter().enumerate() {
            let expected_value = values.get(i).cloned().flatten();
            let expected_id = ids.get(i).copied().flatten().map(|id| format!("id{id}"));
            if slot.value != expected_value || slot.id != expected_id {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<Option<String>>, Vec<Option<u8>>) -> TestResult);
}

/// Property: re-encoding a decoded list and decoding again is stable
#[test]
fn prop_reencoding_is_stable() {
    fn prop(values: Vec<Option<String>>, ids: Vec<Option<u8>>) -> TestResult {
        let values = non_empty(values);
        let Ok(first) = decode(&build(&values, &ids)) else {
            return TestResult::discard();
        };
        let encoded = encode_value(&first);
        match decode(&encoded) {
            Ok(second) => TestResult::from_bool(first == second),
            Err(err) => TestResult::error(err.to_string()),
        }
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(Vec<Option<String>>, Vec<Option<u8>>) -> TestResult);
}

#[test]
fn sidecar_array_shorter_than_values() {
    let name = decode(&json!({
        "given": ["Peter", "James"],
        "_given": [{ "id": "a" }]
    }))
    .unwrap();
    assert_eq!(name.given[0].id.as_deref(), Some("a"));
    assert_eq!(name.given[1].as_str(), Some("James"));
    assert!(name.given[1].id.is_none());
}

#[test]
fn sidecar_only_list() {
    let name = decode(&json!({ "_given": [null, { "id": "b" }] })).unwrap();
    assert_eq!(name.given.len(), 2);
    assert!(name.given.iter().all(|slot| slot.value.is_none()));
    assert_eq!(encode_value(&name), json!({ "_given": [null, { "id": "b" }] }));
}
