//! Field-level reading and writing of FHIR JSON objects.
//!
//! Model types implement [`FhirJson`] by pulling their properties out of an
//! [`ObjectReader`] and pushing them into an [`ObjectWriter`]. The reader
//! remembers which keys were consumed so that [`ObjectReader::finish`] can
//! report properties no field claimed.

use crate::config::{ParserConfig, UnknownFieldPolicy};
use crate::error::{Error, FieldPath, Result};
use crate::primitive::{Primitive, PrimitiveError, PrimitiveValue};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

/// A type with a FHIR JSON object representation.
pub trait FhirJson: Sized {
    fn decode(reader: &mut ObjectReader<'_>) -> Result<Self>;

    fn encode(&self, writer: &mut ObjectWriter);
}

/// Decodes `object` as a `T` and rejects properties `T` does not declare.
pub fn decode_object<T: FhirJson>(
    object: &Map<String, Value>,
    path: FieldPath,
    config: ParserConfig,
) -> Result<T> {
    let mut reader = ObjectReader::new(object, path, config);
    let decoded = T::decode(&mut reader)?;
    reader.finish()?;
    Ok(decoded)
}

/// Encodes `value` as a JSON object.
pub fn encode_value<T: FhirJson>(value: &T) -> Value {
    let mut writer = ObjectWriter::new();
    value.encode(&mut writer);
    writer.into_value()
}

pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    path: FieldPath,
    config: ParserConfig,
    consumed: HashSet<String>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(object: &'a Map<String, Value>, path: FieldPath, config: ParserConfig) -> Self {
        Self {
            object,
            path,
            config,
            consumed: HashSet::new(),
        }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    pub(crate) fn take(&mut self, key: &str) -> Option<&'a Value> {
        let value = self.object.get(key)?;
        self.consumed.insert(key.to_owned());
        Some(value)
    }

    fn missing(&self, key: &str) -> Error {
        Error::MissingRequiredField {
            path: self.path.child(key),
        }
    }

    /// The `resourceType` of the object, without consuming it.
    pub fn peek_resource_type(&self) -> Result<&'a str> {
        self.object
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or(Error::MissingResourceType)
    }

    pub fn expect_resource_type(&mut self, expected: &str) -> Result<()> {
        let found = self.peek_resource_type()?;
        if found != expected {
            return Err(Error::ResourceTypeMismatch {
                expected: expected.to_owned(),
                found: found.to_owned(),
            });
        }
        self.take("resourceType");
        Ok(())
    }

    /// A bare primitive value without sidecar, such as `Element.id` or
    /// `Extension.url`.
    pub fn value<T: PrimitiveValue>(&mut self, key: &str) -> Result<Option<T>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => primitive_value(value, &self.path.child(key)).map(Some),
        }
    }

    pub fn required_value<T: PrimitiveValue>(&mut self, key: &str) -> Result<T> {
        self.value(key)?.ok_or_else(|| self.missing(key))
    }

    /// A single primitive together with its `_key` sidecar.
    pub fn primitive<T: PrimitiveValue, E: FhirJson>(
        &mut self,
        key: &str,
    ) -> Result<Option<Primitive<T, E>>> {
        let sidecar_key = format!("_{key}");
        let path = self.path.child(key);
        let value = self.take(key);
        let sidecar = self.take(&sidecar_key);
        if let Some(Value::Array(_)) = value {
            return Err(Error::MalformedPrimitive {
                path,
                type_name: T::TYPE_NAME,
                reason: "expected a single value, found an array".into(),
            });
        }
        self.decode_primitive(value, sidecar, &path, &self.path.child(&sidecar_key))
    }

    pub fn required_primitive<T: PrimitiveValue, E: FhirJson>(
        &mut self,
        key: &str,
    ) -> Result<Primitive<T, E>> {
        self.primitive(key)?.ok_or_else(|| self.missing(key))
    }

    /// A repeating primitive. `key` and `_key` are aligned by index; the
    /// result is as long as the longer of the two and keeps value-less or
    /// sidecar-less slots in place.
    pub fn primitive_list<T: PrimitiveValue, E: FhirJson>(
        &mut self,
        key: &str,
    ) -> Result<Vec<Primitive<T, E>>> {
        let sidecar_key = format!("_{key}");
        let path = self.path.child(key);
        let sidecar_path = self.path.child(&sidecar_key);
        let values = array(self.take(key), &path)?;
        let sidecars = array(self.take(&sidecar_key), &sidecar_path)?;

        let len = values.len().max(sidecars.len());
        (0..len)
            .map(|i| {
                let slot = self.decode_primitive(
                    values.get(i),
                    sidecars.get(i),
                    &path.index(i),
                    &sidecar_path.index(i),
                )?;
                Ok(slot.unwrap_or_default())
            })
            .collect()
    }

    pub fn required_primitive_list<T: PrimitiveValue, E: FhirJson>(
        &mut self,
        key: &str,
    ) -> Result<Vec<Primitive<T, E>>> {
        let list = self.primitive_list(key)?;
        if list.is_empty() {
            return Err(self.missing(key));
        }
        Ok(list)
    }

    fn decode_primitive<T: PrimitiveValue, E: FhirJson>(
        &self,
        value: Option<&'a Value>,
        sidecar: Option<&'a Value>,
        path: &FieldPath,
        sidecar_path: &FieldPath,
    ) -> Result<Option<Primitive<T, E>>> {
        let value = match value {
            None | Some(Value::Null) => None,
            Some(value) => Some(primitive_value(value, path)?),
        };
        let (id, extension) = match sidecar {
            None | Some(Value::Null) => (None, Vec::new()),
            Some(sidecar) => {
                let object = sidecar.as_object().ok_or_else(|| Error::ExpectedObject {
                    path: sidecar_path.clone(),
                })?;
                let mut reader = ObjectReader::new(object, sidecar_path.clone(), self.config);
                let id = reader.value::<String>("id")?;
                let extension = reader.element_list::<E>("extension")?;
                reader.finish()?;
                (id, extension)
            }
        };
        let primitive = Primitive {
            value,
            id,
            extension,
        };
        Ok((!primitive.is_empty()).then_some(primitive))
    }

    pub fn element<T: FhirJson>(&mut self, key: &str) -> Result<Option<T>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.decode_child(value, self.path.child(key)).map(Some),
        }
    }

    pub fn required_element<T: FhirJson>(&mut self, key: &str) -> Result<T> {
        self.element(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn element_list<T: FhirJson>(&mut self, key: &str) -> Result<Vec<T>> {
        let path = self.path.child(key);
        array(self.take(key), &path)?
            .iter()
            .enumerate()
            .map(|(i, item)| self.decode_child(item, path.index(i)))
            .collect()
    }

    pub fn required_element_list<T: FhirJson>(&mut self, key: &str) -> Result<Vec<T>> {
        let list = self.element_list(key)?;
        if list.is_empty() {
            return Err(self.missing(key));
        }
        Ok(list)
    }

    fn decode_child<T: FhirJson>(&self, value: &Value, path: FieldPath) -> Result<T> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::ExpectedObject { path: path.clone() })?;
        decode_object(object, path, self.config)
    }

    /// Checks that every property of the object was claimed by a field.
    pub fn finish(self) -> Result<()> {
        for key in self.object.keys() {
            if self.consumed.contains(key.as_str()) {
                continue;
            }
            let path = self.path.child(key);
            match self.config.unknown_fields {
                UnknownFieldPolicy::Reject => return Err(Error::UnknownField { path }),
                UnknownFieldPolicy::Ignore => warn!(field = %path, "ignoring unknown field"),
            }
        }
        Ok(())
    }
}

fn array<'v>(value: Option<&'v Value>, path: &FieldPath) -> Result<&'v [Value]> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::ExpectedArray { path: path.clone() }),
    }
}

fn primitive_value<T: PrimitiveValue>(value: &Value, path: &FieldPath) -> Result<T> {
    T::from_json(value).map_err(|err| match err {
        PrimitiveError::Malformed(reason) => Error::MalformedPrimitive {
            path: path.clone(),
            type_name: T::TYPE_NAME,
            reason,
        },
        PrimitiveError::UnknownCode { code, system } => Error::UnknownEnumCode {
            path: path.clone(),
            code,
            system,
        },
    })
}

/// Builds a JSON object field by field.
#[derive(Debug, Clone, Default)]
pub struct ObjectWriter {
    object: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource_type(&mut self, resource_type: &str) {
        self.object.insert(
            "resourceType".to_owned(),
            Value::String(resource_type.to_owned()),
        );
    }

    pub fn value<T: PrimitiveValue>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.object.insert(key.to_owned(), value.to_json());
        }
    }

    /// Writes `key` when a value is present and `_key` when the element
    /// carries an id or extensions.
    pub fn primitive<T: PrimitiveValue, E: FhirJson>(
        &mut self,
        key: &str,
        primitive: Option<&Primitive<T, E>>,
    ) {
        let Some(primitive) = primitive else {
            return;
        };
        if let Some(value) = &primitive.value {
            self.object.insert(key.to_owned(), value.to_json());
        }
        if primitive.has_sidecar() {
            self.object.insert(format!("_{key}"), sidecar(primitive));
        }
    }

    /// Writes aligned `key` / `_key` arrays. `key` is left out when no slot
    /// has a value, `_key` when no slot has an id or extensions.
    pub fn primitive_list<T: PrimitiveValue, E: FhirJson>(
        &mut self,
        key: &str,
        items: &[Primitive<T, E>],
    ) {
        if items.is_empty() {
            return;
        }
        let any_value = items.iter().any(|item| item.value.is_some());
        let any_sidecar = items.iter().any(Primitive::has_sidecar);

        // Without values, `_key` alone carries the slots.
        if any_value || !any_sidecar {
            let values = items
                .iter()
                .map(|item| item.value.as_ref().map_or(Value::Null, T::to_json))
                .collect();
            self.object.insert(key.to_owned(), Value::Array(values));
        }

        if any_sidecar {
            let sidecars = items
                .iter()
                .map(|item| {
                    if item.has_sidecar() {
                        sidecar(item)
                    } else {
                        Value::Null
                    }
                })
                .collect();
            self.object.insert(format!("_{key}"), Value::Array(sidecars));
        }
    }

    pub fn element<T: FhirJson>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.object.insert(key.to_owned(), encode_value(value));
        }
    }

    pub fn element_list<T: FhirJson>(&mut self, key: &str, items: &[T]) {
        if items.is_empty() {
            return;
        }
        let items = items.iter().map(encode_value).collect();
        self.object.insert(key.to_owned(), Value::Array(items));
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.object
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

fn sidecar<T, E: FhirJson>(primitive: &Primitive<T, E>) -> Value {
    let mut writer = ObjectWriter::new();
    writer.value("id", primitive.id.as_ref());
    writer.element_list("extension", &primitive.extension);
    writer.into_value()
}
