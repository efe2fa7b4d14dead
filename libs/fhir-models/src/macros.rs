//! Declarative macros the model types are written with.
//!
//! Field tables use one of these kinds:
//!
//! | kind                  | stored as                 | JSON                         |
//! |-----------------------|---------------------------|------------------------------|
//! | `value`               | `Option<T>`               | bare value, no `_key`        |
//! | `required_value`      | `T`                       | bare value, no `_key`        |
//! | `primitive`           | `Option<Primitive<T>>`    | `key` + `_key`               |
//! | `required_primitive`  | `Primitive<T>`            | `key` + `_key`               |
//! | `primitives`          | `Vec<Primitive<T>>`       | aligned `key` / `_key` arrays|
//! | `required_primitives` | `Vec<Primitive<T>>`       | same, at least one           |
//! | `element`             | `Option<T>`               | object                       |
//! | `boxed`               | `Option<Box<T>>`          | object                       |
//! | `required`            | `T`                       | object                       |
//! | `elements`            | `Vec<T>`                  | array of objects             |
//! | `required_elements`   | `Vec<T>`                  | same, at least one           |
//! | `choice`              | `Option<T>`               | one of `key<Type>`           |
//! | `required_choice`     | `T`                       | one of `key<Type>`           |
//!
//! `Primitive`, `Extension` and the base types are resolved where the macro
//! is invoked, so every FHIR release module supplies its own.

macro_rules! field_type {
    (value, $ty:ty) => { Option<$ty> };
    (required_value, $ty:ty) => { $ty };
    (primitive, $ty:ty) => { Option<Primitive<$ty>> };
    (required_primitive, $ty:ty) => { Primitive<$ty> };
    (primitives, $ty:ty) => { Vec<Primitive<$ty>> };
    (required_primitives, $ty:ty) => { Vec<Primitive<$ty>> };
    (element, $ty:ty) => { Option<$ty> };
    (boxed, $ty:ty) => { Option<Box<$ty>> };
    (required, $ty:ty) => { $ty };
    (elements, $ty:ty) => { Vec<$ty> };
    (required_elements, $ty:ty) => { Vec<$ty> };
    (choice, $ty:ty) => { Option<$ty> };
    (required_choice, $ty:ty) => { $ty };
}

macro_rules! field_decode {
    ($reader:ident, value, $json:literal) => { $reader.value($json)? };
    ($reader:ident, required_value, $json:literal) => { $reader.required_value($json)? };
    ($reader:ident, primitive, $json:literal) => { $reader.primitive($json)? };
    ($reader:ident, required_primitive, $json:literal) => { $reader.required_primitive($json)? };
    ($reader:ident, primitives, $json:literal) => { $reader.primitive_list($json)? };
    ($reader:ident, required_primitives, $json:literal) => {
        $reader.required_primitive_list($json)?
    };
    ($reader:ident, element, $json:literal) => { $reader.element($json)? };
    ($reader:ident, boxed, $json:literal) => { $reader.element($json)?.map(Box::new) };
    ($reader:ident, required, $json:literal) => { $reader.required_element($json)? };
    ($reader:ident, elements, $json:literal) => { $reader.element_list($json)? };
    ($reader:ident, required_elements, $json:literal) => { $reader.required_element_list($json)? };
    ($reader:ident, choice, $json:literal) => { $reader.choice($json)? };
    ($reader:ident, required_choice, $json:literal) => { $reader.required_choice($json)? };
}

macro_rules! field_encode {
    ($writer:ident, $value:expr, value, $json:literal) => {
        $writer.value($json, $value.as_ref())
    };
    ($writer:ident, $value:expr, required_value, $json:literal) => {
        $writer.value($json, Some(&$value))
    };
    ($writer:ident, $value:expr, primitive, $json:literal) => {
        $writer.primitive($json, $value.as_ref())
    };
    ($writer:ident, $value:expr, required_primitive, $json:literal) => {
        $writer.primitive($json, Some(&$value))
    };
    ($writer:ident, $value:expr, primitives, $json:literal) => {
        $writer.primitive_list($json, &$value)
    };
    ($writer:ident, $value:expr, required_primitives, $json:literal) => {
        $writer.primitive_list($json, &$value)
    };
    ($writer:ident, $value:expr, element, $json:literal) => {
        $writer.element($json, $value.as_ref())
    };
    ($writer:ident, $value:expr, boxed, $json:literal) => {
        $writer.element($json, $value.as_deref())
    };
    ($writer:ident, $value:expr, required, $json:literal) => {
        $writer.element($json, Some(&$value))
    };
    ($writer:ident, $value:expr, elements, $json:literal) => {
        $writer.element_list($json, &$value)
    };
    ($writer:ident, $value:expr, required_elements, $json:literal) => {
        $writer.element_list($json, &$value)
    };
    ($writer:ident, $value:expr, choice, $json:literal) => {
        $writer.choice($json, $value.as_ref())
    };
    ($writer:ident, $value:expr, required_choice, $json:literal) => {
        $writer.choice($json, Some(&$value))
    };
}

/// Declares a datatype or backbone element.
///
/// ```ignore
/// fhir_element! {
///     /// Time range defined by start and end date/time
///     pub struct Period: ElementBase {
///         start: primitive<FhirDateTime> = "start",
///         end: primitive<FhirDateTime> = "end",
///     }
/// }
/// ```
macro_rules! fhir_element {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $base:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $kind:ident<$ty:ty> = $json:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub base: $base,
            $(
                $(#[$field_meta])*
                pub $field: field_type!($kind, $ty),
            )*
        }

        impl $crate::format::FhirJson for $name {
            fn decode(
                reader: &mut $crate::format::ObjectReader<'_>,
            ) -> $crate::format::Result<Self> {
                Ok(Self {
                    base: $crate::format::FhirJson::decode(reader)?,
                    $( $field: field_decode!(reader, $kind, $json), )*
                })
            }

            fn encode(&self, writer: &mut $crate::format::ObjectWriter) {
                $crate::format::FhirJson::encode(&self.base, writer);
                $( field_encode!(writer, self.$field, $kind, $json); )*
            }
        }
    };
}

/// Declares a resource of the FHIR release `$version`. The common resource
/// metadata lives in `base: DomainResourceBase`.
macro_rules! fhir_resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in $version:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $kind:ident<$ty:ty> = $json:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub base: DomainResourceBase,
            $(
                $(#[$field_meta])*
                pub $field: field_type!($kind, $ty),
            )*
        }

        impl $crate::format::FhirResource for $name {
            const RESOURCE_TYPE: &'static str = stringify!($name);

            type Version = $version;
        }

        impl $crate::format::FhirJson for $name {
            fn decode(
                reader: &mut $crate::format::ObjectReader<'_>,
            ) -> $crate::format::Result<Self> {
                reader.expect_resource_type(
                    <Self as $crate::format::FhirResource>::RESOURCE_TYPE,
                )?;
                Ok(Self {
                    base: $crate::format::FhirJson::decode(reader)?,
                    $( $field: field_decode!(reader, $kind, $json), )*
                })
            }

            fn encode(&self, writer: &mut $crate::format::ObjectWriter) {
                writer.resource_type(<Self as $crate::format::FhirResource>::RESOURCE_TYPE);
                $crate::format::FhirJson::encode(&self.base, writer);
                $( field_encode!(writer, self.$field, $kind, $json); )*
            }
        }
    };
}

macro_rules! variant_type {
    (primitive, $ty:ty) => { Primitive<$ty> };
    (element, $ty:ty) => { $ty };
}

macro_rules! variant_decode {
    ($reader:ident, $key:ident, primitive) => { $reader.primitive($key)? };
    ($reader:ident, $key:ident, element) => { $reader.element($key)? };
}

macro_rules! variant_encode {
    ($writer:ident, $key:ident, $value:ident, primitive) => {
        $writer.primitive($key, Some($value))
    };
    ($writer:ident, $key:ident, $value:ident, element) => {
        $writer.element($key, Some($value))
    };
}

/// Declares the enum behind a choice field. Variants are listed in the order
/// FHIR declares the types; the literal is the key suffix.
macro_rules! fhir_choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($kind:ident<$ty:ty>) = $suffix:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant(variant_type!($kind, $ty)),
            )+
        }

        impl $crate::format::ChoiceType for $name {
            const SUFFIXES: &'static [&'static str] = &[$($suffix),+];

            fn decode_variant(
                reader: &mut $crate::format::ObjectReader<'_>,
                key: &str,
                suffix: &str,
            ) -> $crate::format::Result<Option<Self>> {
                Ok(match suffix {
                    $( $suffix => variant_decode!(reader, key, $kind).map($name::$variant), )+
                    _ => None,
                })
            }

            fn encode_variant(&self, writer: &mut $crate::format::ObjectWriter, key: &str) {
                match self {
                    $( $name::$variant(value) => variant_encode!(writer, key, value, $kind), )+
                }
            }

            fn type_suffix(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $suffix, )+
                }
            }
        }
    };
}

/// Declares a closed code system as an enum usable as a primitive value.
macro_rules! fhir_code_system {
    (
        $(#[$meta:meta])*
        pub enum $name:ident = $system:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::format::FhirCode for $name {
            const SYSTEM: &'static str = $system;

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn all() -> &'static [Self] {
                &[$( $name::$variant ),+]
            }
        }

        impl $crate::format::PrimitiveValue for $name {
            const TYPE_NAME: &'static str = "code";

            fn from_json(
                value: &::serde_json::Value,
            ) -> ::std::result::Result<Self, $crate::format::PrimitiveError> {
                $crate::format::code::decode_code(value)
            }

            fn to_json(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(
                    $crate::format::FhirCode::code(self).to_owned(),
                )
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::format::FhirCode::code(self))
            }
        }
    };
}

/// Declares the `Resource` enum of a FHIR release over the listed resource
/// types.
macro_rules! fhir_resources {
    ($version:ident { $( $name:ident ),+ $(,)? }) => {
        /// Any resource of this FHIR release.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $( $name(Box<$name>), )+
        }

        impl Resource {
            pub fn resource_type(&self) -> &'static str {
                match self {
                    $(
                        Resource::$name(_) => {
                            <$name as $crate::format::FhirResource>::RESOURCE_TYPE
                        }
                    )+
                }
            }

            pub fn base(&self) -> &DomainResourceBase {
                match self {
                    $( Resource::$name(resource) => &resource.base, )+
                }
            }

            pub fn id(&self) -> Option<&str> {
                self.base().id()
            }
        }

        impl $crate::format::FhirJson for Resource {
            fn decode(
                reader: &mut $crate::format::ObjectReader<'_>,
            ) -> $crate::format::Result<Self> {
                let resource_type = reader.peek_resource_type()?;
                ::tracing::trace!(
                    resource_type,
                    fhir_version = stringify!($version),
                    "dispatching resource"
                );
                $(
                    if resource_type == <$name as $crate::format::FhirResource>::RESOURCE_TYPE {
                        return <$name as $crate::format::FhirJson>::decode(reader)
                            .map(|resource| Resource::$name(Box::new(resource)));
                    }
                )+
                Err($crate::format::Error::UnknownResourceType {
                    path: reader.path().clone(),
                    found: resource_type.to_owned(),
                })
            }

            fn encode(&self, writer: &mut $crate::format::ObjectWriter) {
                match self {
                    $(
                        Resource::$name(resource) => {
                            $crate::format::FhirJson::encode(resource.as_ref(), writer)
                        }
                    )+
                }
            }
        }

        impl $crate::format::AnyResource for Resource {
            fn resource_type(&self) -> &'static str {
                Resource::resource_type(self)
            }

            fn id(&self) -> Option<&str> {
                Resource::id(self)
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }
        )+
    };
}
