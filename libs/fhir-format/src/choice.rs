//! Choice-type (`value[x]`) fields.
//!
//! A choice field is stored under exactly one of several keys, the base name
//! followed by the type suffix: `valueQuantity`, `valueString`, ... Primitive
//! variants may also appear only through their sidecar (`_valueString`).

use crate::codec::{ObjectReader, ObjectWriter};
use crate::config::ChoiceConflictPolicy;
use crate::error::{Error, Result};
use tracing::{trace, warn};

/// An enum over the allowed types of one choice field.
pub trait ChoiceType: Sized {
    /// Type suffixes in the order FHIR declares them.
    const SUFFIXES: &'static [&'static str];

    /// Decodes the variant for `suffix`, stored under `key`.
    fn decode_variant(reader: &mut ObjectReader<'_>, key: &str, suffix: &str)
        -> Result<Option<Self>>;

    /// Writes the variant under `key`.
    fn encode_variant(&self, writer: &mut ObjectWriter, key: &str);

    fn type_suffix(&self) -> &'static str;
}

impl ObjectReader<'_> {
    /// Reads the choice field `base` (without the `[x]`).
    pub fn choice<C: ChoiceType>(&mut self, base: &str) -> Result<Option<C>> {
        let present: Vec<(&'static str, String)> = C::SUFFIXES
            .iter()
            .map(|suffix| (*suffix, format!("{base}{suffix}")))
            .filter(|(_, key)| self.contains(key) || self.contains(&format!("_{key}")))
            .collect();

        let Some((suffix, key)) = present.first().cloned() else {
            return Ok(None);
        };
        let path = self.path().child(&key);

        if present.len() > 1 {
            let keys: Vec<&str> = present.iter().map(|(_, key)| key.as_str()).collect();
            match self.config().choice_conflicts {
                ChoiceConflictPolicy::Reject => {
                    return Err(Error::MalformedChoiceValue {
                        path,
                        key,
                        reason: format!("conflicting choice keys: {}", keys.join(", ")),
                    });
                }
                ChoiceConflictPolicy::FirstDeclared => {
                    warn!(
                        field = %path,
                        dropped = ?&keys[1..],
                        "keeping first declared choice variant"
                    );
                    for (_, dropped) in &present[1..] {
                        self.take(dropped);
                        self.take(&format!("_{dropped}"));
                    }
                }
            }
        }

        trace!(field = %path, "decoding choice variant");
        match C::decode_variant(self, &key, suffix) {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => Err(Error::MalformedChoiceValue {
                path,
                key,
                reason: "no value present".into(),
            }),
            Err(err) => Err(Error::MalformedChoiceValue {
                path,
                key,
                reason: err.to_string(),
            }),
        }
    }

    pub fn required_choice<C: ChoiceType>(&mut self, base: &str) -> Result<C> {
        self.choice(base)?.ok_or_else(|| Error::MissingRequiredField {
            path: self.path().child(&format!("{base}[x]")),
        })
    }
}

impl ObjectWriter {
    pub fn choice<C: ChoiceType>(&mut self, base: &str, value: Option<&C>) {
        if let Some(value) = value {
            let key = format!("{base}{}", value.type_suffix());
            value.encode_variant(self, &key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_object, encode_value, FhirJson};
    use crate::config::ParserConfig;
    use crate::decimal::FhirDecimal;
    use crate::error::FieldPath;
    use crate::primitive::Primitive;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct NoExt;

    impl FhirJson for NoExt {
        fn decode(_: &mut ObjectReader<'_>) -> Result<Self> {
            Ok(NoExt)
        }

        fn encode(&self, _: &mut ObjectWriter) {}
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Quantity {
        value: Option<Primitive<FhirDecimal, NoExt>>,
        unit: Option<Primitive<String, NoExt>>,
    }

    impl FhirJson for Quantity {
        fn decode(reader: &mut ObjectReader<'_>) -> Result<Self> {
            Ok(Self {
                value: reader.primitive("value")?,
                unit: reader.primitive("unit")?,
            })
        }

        fn encode(&self, writer: &mut ObjectWriter) {
            writer.primitive("value", self.value.as_ref());
            writer.primitive("unit", self.unit.as_ref());
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum ObservationValue {
        Quantity(Quantity),
        String(Primitive<String, NoExt>),
        Boolean(Primitive<bool, NoExt>),
    }

    impl ChoiceType for ObservationValue {
        const SUFFIXES: &'static [&'static str] = &["Quantity", "String", "Boolean"];

        fn decode_variant(
            reader: &mut ObjectReader<'_>,
            key: &str,
            suffix: &str,
        ) -> Result<Option<Self>> {
            Ok(match suffix {
                "Quantity" => reader.element(key)?.map(ObservationValue::Quantity),
                "String" => reader.primitive(key)?.map(ObservationValue::String),
                "Boolean" => reader.primitive(key)?.map(ObservationValue::Boolean),
                _ => None,
            })
        }

        fn encode_variant(&self, writer: &mut ObjectWriter, key: &str) {
            match self {
                ObservationValue::Quantity(v) => writer.element(key, Some(v)),
                ObservationValue::String(v) => writer.primitive(key, Some(v)),
                ObservationValue::Boolean(v) => writer.primitive(key, Some(v)),
            }
        }

        fn type_suffix(&self) -> &'static str {
            match self {
                ObservationValue::Quantity(_) => "Quantity",
                ObservationValue::String(_) => "String",
                ObservationValue::Boolean(_) => "Boolean",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Observation {
        value: Option<ObservationValue>,
    }

    impl FhirJson for Observation {
        fn decode(reader: &mut ObjectReader<'_>) -> Result<Self> {
            Ok(Self {
                value: reader.choice("value")?,
            })
        }

        fn encode(&self, writer: &mut ObjectWriter) {
            writer.choice("value", self.value.as_ref());
        }
    }

    fn decode_with(input: &Value, config: ParserConfig) -> Result<Observation> {
        decode_object(input.as_object().unwrap(), FieldPath::root("Observation"), config)
    }

    fn decode(input: &Value) -> Result<Observation> {
        decode_with(input, ParserConfig::default())
    }

    #[test]
    fn decodes_the_present_variant() {
        let input = json!({ "valueQuantity": { "value": 185, "unit": "lbs" } });
        let observation = decode(&input).unwrap();
        let Some(ObservationValue::Quantity(quantity)) = &observation.value else {
            panic!("expected a quantity, got {:?}", observation.value);
        };
        assert_eq!(quantity.unit.as_ref().unwrap().as_str(), Some("lbs"));
        assert_eq!(encode_value(&observation), input);
    }

    #[test]
    fn absent_choice_is_none() {
        assert_eq!(decode(&json!({})).unwrap().value, None);
    }

    #[test]
    fn sidecar_alone_selects_a_primitive_variant() {
        let input = json!({ "_valueString": { "id": "v1" } });
        let observation = decode(&input).unwrap();
        let Some(ObservationValue::String(value)) = &observation.value else {
            panic!("expected a string variant");
        };
        assert!(value.value.is_none());
        assert_eq!(encode_value(&observation), input);
    }

    #[test]
    fn conflicting_variants_are_rejected() {
        let input = json!({ "valueString": "a", "valueBoolean": true });
        let err = decode(&input).unwrap_err();
        match err {
            Error::MalformedChoiceValue { key, reason, .. } => {
                assert_eq!(key, "valueString");
                assert!(reason.contains("valueBoolean"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn first_declared_policy_keeps_the_first_variant() {
        let input = json!({
            "valueBoolean": true,
            "valueString": "a",
            "_valueBoolean": { "id": "b" }
        });
        let config =
            ParserConfig::default().with_choice_conflicts(ChoiceConflictPolicy::FirstDeclared);
        let observation = decode_with(&input, config).unwrap();
        assert!(matches!(observation.value, Some(ObservationValue::String(_))));
    }

    #[test]
    fn malformed_variant_names_the_key() {
        let input = json!({ "valueQuantity": { "value": "185" } });
        match decode(&input).unwrap_err() {
            Error::MalformedChoiceValue { path, key, reason } => {
                assert_eq!(path.as_str(), "Observation.valueQuantity");
                assert_eq!(key, "valueQuantity");
                assert!(reason.contains("Observation.valueQuantity.value"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = decode(&json!({ "valueString": null })).unwrap_err();
        assert!(matches!(err, Error::MalformedChoiceValue { .. }));
    }

    #[test]
    fn encoding_emits_a_single_key() {
        let observation = Observation {
            value: Some(ObservationValue::Boolean(Primitive::new(false))),
        };
        assert_eq!(encode_value(&observation), json!({ "valueBoolean": false }));
    }
}
