//! The generic resource parser.

use crate::codec::{decode_object, encode_value, FhirJson};
use crate::config::ParserConfig;
use crate::error::{Error, FieldPath, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Marker for a FHIR release with its own set of model types.
pub trait FhirVersion: 'static {
    /// Short name, such as `R4`.
    const NAME: &'static str;
    /// Full release number, such as `4.0.1`.
    const RELEASE: &'static str;

    /// Enum over every resource type of the release.
    type Resource: AnyResource;
}

/// A concrete resource type of one FHIR release.
pub trait FhirResource: FhirJson {
    const RESOURCE_TYPE: &'static str;

    type Version: FhirVersion;
}

/// A resource whose type is only known at runtime.
pub trait AnyResource: FhirJson {
    fn resource_type(&self) -> &'static str;

    /// Logical id of the resource, if it has one.
    fn id(&self) -> Option<&str>;
}

/// Converts between FHIR JSON text and the models of release `V`.
///
/// The parser holds configuration only; it is cheap to copy and can be
/// shared between threads.
pub struct FhirParser<V> {
    config: ParserConfig,
    version: PhantomData<fn() -> V>,
}

impl<V: FhirVersion> FhirParser<V> {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            version: PhantomData,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `json` as a `T`.
    pub fn to_fhir<T: FhirResource<Version = V>>(&self, json: &str) -> Result<T> {
        let value: Value = serde_json::from_str(json)?;
        self.to_fhir_value(&value)
    }

    pub fn to_fhir_value<T: FhirResource<Version = V>>(&self, value: &Value) -> Result<T> {
        let object = root_object(value, T::RESOURCE_TYPE)?;
        let found = object
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or(Error::MissingResourceType)?;
        if found != T::RESOURCE_TYPE {
            return Err(Error::ResourceTypeMismatch {
                expected: T::RESOURCE_TYPE.to_owned(),
                found: found.to_owned(),
            });
        }

        debug!(resource_type = T::RESOURCE_TYPE, fhir_version = V::NAME, "decoding resource");
        decode_object(object, FieldPath::root(T::RESOURCE_TYPE), self.config)
    }

    /// Serializes `resource` back to FHIR JSON.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_fhir<T: FhirResource<Version = V>>(&self, resource: &T) -> Result<String> {
        self.render(&self.from_fhir_value(resource))
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_fhir_value<T: FhirResource<Version = V>>(&self, resource: &T) -> Value {
        debug!(resource_type = T::RESOURCE_TYPE, fhir_version = V::NAME, "encoding resource");
        encode_value(resource)
    }

    /// Parses `json` as whichever resource type its `resourceType` names.
    pub fn parse_resource(&self, json: &str) -> Result<V::Resource> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_resource_value(&value)
    }

    pub fn parse_resource_value(&self, value: &Value) -> Result<V::Resource> {
        let object = root_object(value, "Resource")?;
        let resource_type = object
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or(Error::MissingResourceType)?;

        debug!(resource_type, fhir_version = V::NAME, "decoding resource");
        decode_object(object, FieldPath::root(resource_type), self.config)
    }

    pub fn encode_resource(&self, resource: &V::Resource) -> Result<String> {
        debug!(
            resource_type = resource.resource_type(),
            fhir_version = V::NAME,
            "encoding resource"
        );
        self.render(&encode_value(resource))
    }

    fn render(&self, value: &Value) -> Result<String> {
        let text = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

fn root_object<'v>(value: &'v Value, root: &str) -> Result<&'v Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::ExpectedObject {
        path: FieldPath::root(root),
    })
}

impl<V: FhirVersion> Default for FhirParser<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for FhirParser<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for FhirParser<V> {}

impl<V: FhirVersion> fmt::Debug for FhirParser<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FhirParser")
            .field("version", &V::RELEASE)
            .field("config", &self.config)
            .finish()
    }
}
