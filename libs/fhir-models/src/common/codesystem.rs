//! Code systems with the same members in STU3 and R4.

fhir_code_system! {
    /// The status of a resource narrative.
    pub enum NarrativeStatus = "http://hl7.org/fhir/narrative-status" {
        Generated = "generated",
        Extensions = "extensions",
        Additional = "additional",
        Empty = "empty",
    }
}

fhir_code_system! {
    /// The gender of a person used for administrative purposes.
    pub enum AdministrativeGender = "http://hl7.org/fhir/administrative-gender" {
        Male = "male",
        Female = "female",
        Other = "other",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// The use of a human name.
    pub enum NameUse = "http://hl7.org/fhir/name-use" {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Nickname = "nickname",
        Anonymous = "anonymous",
        Old = "old",
        Maiden = "maiden",
    }
}

fhir_code_system! {
    /// The type of an address (physical / postal).
    pub enum AddressType = "http://hl7.org/fhir/address-type" {
        Postal = "postal",
        Physical = "physical",
        Both = "both",
    }
}

fhir_code_system! {
    /// Telecommunications form for contact point.
    pub enum ContactPointSystem = "http://hl7.org/fhir/contact-point-system" {
        Phone = "phone",
        Fax = "fax",
        Email = "email",
        Pager = "pager",
        Url = "url",
        Sms = "sms",
        Other = "other",
    }
}

fhir_code_system! {
    /// Use of contact point.
    pub enum ContactPointUse = "http://hl7.org/fhir/contact-point-use" {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Mobile = "mobile",
    }
}

fhir_code_system! {
    /// How the Quantity should be understood and represented.
    pub enum QuantityComparator = "http://hl7.org/fhir/quantity-comparator" {
        LessThan = "<",
        LessOrEqual = "<=",
        GreaterOrEqual = ">=",
        GreaterThan = ">",
    }
}

fhir_code_system! {
    /// The type of link between this patient resource and another patient
    /// resource.
    pub enum LinkType = "http://hl7.org/fhir/link-type" {
        ReplacedBy = "replaced-by",
        Replaces = "replaces",
        Refer = "refer",
        Seealso = "seealso",
    }
}

fhir_code_system! {
    /// The lifecycle status of an artifact.
    pub enum PublicationStatus = "http://hl7.org/fhir/publication-status" {
        Draft = "draft",
        Active = "active",
        Retired = "retired",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// Current state of the encounter.
    pub enum EncounterStatus = "http://hl7.org/fhir/encounter-status" {
        Planned = "planned",
        Arrived = "arrived",
        Triaged = "triaged",
        InProgress = "in-progress",
        Onleave = "onleave",
        Finished = "finished",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// The status of the location.
    pub enum EncounterLocationStatus = "http://hl7.org/fhir/encounter-location-status" {
        Planned = "planned",
        Active = "active",
        Reserved = "reserved",
        Completed = "completed",
    }
}

fhir_code_system! {
    /// Codes providing the status of an observation.
    pub enum ObservationStatus = "http://hl7.org/fhir/observation-status" {
        Registered = "registered",
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        Corrected = "corrected",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// The meaning of the hierarchy of concepts in a code system.
    pub enum CodeSystemHierarchyMeaning = "http://hl7.org/fhir/codesystem-hierarchy-meaning" {
        GroupedBy = "grouped-by",
        IsA = "is-a",
        PartOf = "part-of",
        ClassifiedWith = "classified-with",
    }
}

fhir_code_system! {
    /// The kind of operation to perform as a part of a property based filter.
    pub enum FilterOperator = "http://hl7.org/fhir/filter-operator" {
        Equal = "=",
        IsA = "is-a",
        DescendentOf = "descendent-of",
        IsNotA = "is-not-a",
        Regex = "regex",
        In = "in",
        NotIn = "not-in",
        Generalizes = "generalizes",
        Exists = "exists",
    }
}

fhir_code_system! {
    /// A unit of time (units from UCUM).
    pub enum UnitsOfTime = "http://unitsofmeasure.org" {
        Second = "s",
        Minute = "min",
        Hour = "h",
        Day = "d",
        Week = "wk",
        Month = "mo",
        Year = "a",
    }
}

fhir_code_system! {
    /// The days of the week.
    pub enum DaysOfWeek = "http://hl7.org/fhir/days-of-week" {
        Mon = "mon",
        Tue = "tue",
        Wed = "wed",
        Thu = "thu",
        Fri = "fri",
        Sat = "sat",
        Sun = "sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FhirCode, PrimitiveError, PrimitiveValue};
    use serde_json::json;

    #[test]
    fn codes_map_both_ways() {
        for status in EncounterStatus::all() {
            assert_eq!(EncounterStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(EncounterStatus::InProgress.to_string(), "in-progress");
        assert_eq!(QuantityComparator::from_code("<="), Some(QuantityComparator::LessOrEqual));
        assert_eq!(FilterOperator::Equal.code(), "=");
    }

    #[test]
    fn decodes_as_primitive() {
        assert_eq!(
            AdministrativeGender::from_json(&json!("female")).unwrap(),
            AdministrativeGender::Female
        );
        assert_eq!(AdministrativeGender::Other.to_json(), json!("other"));

        let err = AdministrativeGender::from_json(&json!("f")).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::UnknownCode {
                code: "f".into(),
                system: AdministrativeGender::SYSTEM,
            }
        );
    }
}
