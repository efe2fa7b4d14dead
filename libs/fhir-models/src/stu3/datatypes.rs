//! STU3 general-purpose datatypes

use super::*;

fhir_element! {
    /// Optional Extensions Element
    pub struct Extension: ElementBase {
        /// Identifies the meaning of the extension
        url: required_value<String> = "url",
        value: choice<ExtensionValue> = "value",
    }
}

fhir_choice! {
    /// `Extension.value[x]`
    pub enum ExtensionValue {
        Base64Binary(primitive<String>) = "Base64Binary",
        Boolean(primitive<bool>) = "Boolean",
        Code(primitive<String>) = "Code",
        Date(primitive<FhirDate>) = "Date",
        DateTime(primitive<FhirDateTime>) = "DateTime",
        Decimal(primitive<FhirDecimal>) = "Decimal",
        Id(primitive<String>) = "Id",
        Instant(primitive<FhirInstant>) = "Instant",
        Integer(primitive<i32>) = "Integer",
        Markdown(primitive<String>) = "Markdown",
        Oid(primitive<String>) = "Oid",
        PositiveInt(primitive<PositiveInt>) = "PositiveInt",
        String(primitive<String>) = "String",
        Time(primitive<FhirTime>) = "Time",
        UnsignedInt(primitive<UnsignedInt>) = "UnsignedInt",
        Uri(primitive<String>) = "Uri",
        Address(element<Address>) = "Address",
        Age(element<Age>) = "Age",
        Annotation(element<Annotation>) = "Annotation",
        Attachment(element<Attachment>) = "Attachment",
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        Coding(element<Coding>) = "Coding",
        ContactPoint(element<ContactPoint>) = "ContactPoint",
        Count(element<Count>) = "Count",
        Distance(element<Distance>) = "Distance",
        Duration(element<Duration>) = "Duration",
        HumanName(element<HumanName>) = "HumanName",
        Identifier(element<Identifier>) = "Identifier",
        Money(element<Money>) = "Money",
        Period(element<Period>) = "Period",
        Quantity(element<Quantity>) = "Quantity",
        Range(element<Range>) = "Range",
        Ratio(element<Ratio>) = "Ratio",
        Reference(element<Reference>) = "Reference",
        SampledData(element<SampledData>) = "SampledData",
        Timing(element<Timing>) = "Timing",
        Meta(element<Meta>) = "Meta",
    }
}

fhir_element! {
    /// Metadata about a resource
    pub struct Meta: ElementBase {
        version_id: primitive<String> = "versionId",
        last_updated: primitive<FhirInstant> = "lastUpdated",
        profile: primitives<String> = "profile",
        security: elements<Coding> = "security",
        tag: elements<Coding> = "tag",
    }
}

fhir_element! {
    /// A human-readable formatted text, including images
    pub struct Narrative: ElementBase {
        status: required_primitive<NarrativeStatus> = "status",
        div: required_value<String> = "div",
    }
}

fhir_element! {
    /// A reference to a code defined by a terminology system
    pub struct Coding: ElementBase {
        system: primitive<String> = "system",
        version: primitive<String> = "version",
        code: primitive<String> = "code",
        display: primitive<String> = "display",
        user_selected: primitive<bool> = "userSelected",
    }
}

fhir_element! {
    /// Concept - reference to a terminology or just text
    pub struct CodeableConcept: ElementBase {
        coding: elements<Coding> = "coding",
        text: primitive<String> = "text",
    }
}

fhir_element! {
    /// An identifier intended for computation
    pub struct Identifier: ElementBase {
        use_: primitive<IdentifierUse> = "use",
        type_: element<CodeableConcept> = "type",
        system: primitive<String> = "system",
        value: primitive<String> = "value",
        period: element<Period> = "period",
        assigner: boxed<Reference> = "assigner",
    }
}

fhir_element! {
    /// A reference from one resource to another
    pub struct Reference: ElementBase {
        reference: primitive<String> = "reference",
        identifier: element<Identifier> = "identifier",
        display: primitive<String> = "display",
    }
}

fhir_element! {
    /// Time range defined by start and end date/time
    pub struct Period: ElementBase {
        start: primitive<FhirDateTime> = "start",
        end: primitive<FhirDateTime> = "end",
    }
}

fhir_element! {
    /// A measured or measurable amount
    pub struct Quantity: ElementBase {
        value: primitive<FhirDecimal> = "value",
        comparator: primitive<QuantityComparator> = "comparator",
        unit: primitive<String> = "unit",
        system: primitive<String> = "system",
        code: primitive<String> = "code",
    }
}

pub type Age = Quantity;
pub type Count = Quantity;
pub type Distance = Quantity;
pub type Duration = Quantity;
pub type SimpleQuantity = Quantity;
/// STU3 expresses money as a Quantity with a currency code.
pub type Money = Quantity;

fhir_element! {
    /// Set of values bounded by low and high
    pub struct Range: ElementBase {
        low: element<SimpleQuantity> = "low",
        high: element<SimpleQuantity> = "high",
    }
}

fhir_element! {
    /// A ratio of two Quantity values - a numerator and a denominator
    pub struct Ratio: ElementBase {
        numerator: element<Quantity> = "numerator",
        denominator: element<Quantity> = "denominator",
    }
}

fhir_element! {
    /// Content in a format defined elsewhere
    pub struct Attachment: ElementBase {
        content_type: primitive<String> = "contentType",
        language: primitive<String> = "language",
        data: primitive<String> = "data",
        url: primitive<String> = "url",
        size: primitive<UnsignedInt> = "size",
        hash: primitive<String> = "hash",
        title: primitive<String> = "title",
        creation: primitive<FhirDateTime> = "creation",
    }
}

fhir_element! {
    /// Text node with attribution
    pub struct Annotation: ElementBase {
        author: choice<AnnotationAuthor> = "author",
        time: primitive<FhirDateTime> = "time",
        text: required_primitive<String> = "text",
    }
}

fhir_choice! {
    /// `Annotation.author[x]`
    pub enum AnnotationAuthor {
        Reference(element<Reference>) = "Reference",
        String(primitive<String>) = "String",
    }
}

fhir_element! {
    /// Details of a Technology mediated contact point (phone, fax, email, etc.)
    pub struct ContactPoint: ElementBase {
        system: primitive<ContactPointSystem> = "system",
        value: primitive<String> = "value",
        use_: primitive<ContactPointUse> = "use",
        rank: primitive<PositiveInt> = "rank",
        period: element<Period> = "period",
    }
}

fhir_element! {
    /// Name of a human - parts and usage
    pub struct HumanName: ElementBase {
        use_: primitive<NameUse> = "use",
        text: primitive<String> = "text",
        family: primitive<String> = "family",
        given: primitives<String> = "given",
        prefix: primitives<String> = "prefix",
        suffix: primitives<String> = "suffix",
        period: element<Period> = "period",
    }
}

fhir_element! {
    /// An address expressed using postal conventions (as opposed to GPS or
    /// other location definition formats)
    pub struct Address: ElementBase {
        use_: primitive<AddressUse> = "use",
        type_: primitive<AddressType> = "type",
        text: primitive<String> = "text",
        line: primitives<String> = "line",
        city: primitive<String> = "city",
        district: primitive<String> = "district",
        state: primitive<String> = "state",
        postal_code: primitive<String> = "postalCode",
        country: primitive<String> = "country",
        period: element<Period> = "period",
    }
}

fhir_element! {
    /// Contact information
    pub struct ContactDetail: ElementBase {
        name: primitive<String> = "name",
        telecom: elements<ContactPoint> = "telecom",
    }
}

fhir_element! {
    /// Describes the context of use for a conformance or knowledge resource
    pub struct UsageContext: ElementBase {
        code: required<Coding> = "code",
        value: required_choice<UsageContextValue> = "value",
    }
}

fhir_choice! {
    /// `UsageContext.value[x]`
    pub enum UsageContextValue {
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        Quantity(element<Quantity>) = "Quantity",
        Range(element<Range>) = "Range",
    }
}

fhir_element! {
    /// A series of measurements taken by a device
    pub struct SampledData: ElementBase {
        origin: required<SimpleQuantity> = "origin",
        period: required_primitive<FhirDecimal> = "period",
        factor: primitive<FhirDecimal> = "factor",
        lower_limit: primitive<FhirDecimal> = "lowerLimit",
        upper_limit: primitive<FhirDecimal> = "upperLimit",
        dimensions: required_primitive<PositiveInt> = "dimensions",
        /// Decimal values with spaces, or "E" | "U" | "L"
        data: required_primitive<String> = "data",
    }
}

fhir_element! {
    /// A timing schedule that specifies an event that may occur multiple times
    pub struct Timing: ElementBase {
        event: primitives<FhirDateTime> = "event",
        repeat: element<TimingRepeat> = "repeat",
        code: element<CodeableConcept> = "code",
    }
}

fhir_element! {
    /// When the event is to occur
    pub struct TimingRepeat: ElementBase {
        bounds: choice<TimingRepeatBounds> = "bounds",
        count: primitive<i32> = "count",
        count_max: primitive<i32> = "countMax",
        duration: primitive<FhirDecimal> = "duration",
        duration_max: primitive<FhirDecimal> = "durationMax",
        duration_unit: primitive<UnitsOfTime> = "durationUnit",
        frequency: primitive<i32> = "frequency",
        frequency_max: primitive<i32> = "frequencyMax",
        period: primitive<FhirDecimal> = "period",
        period_max: primitive<FhirDecimal> = "periodMax",
        period_unit: primitive<UnitsOfTime> = "periodUnit",
        day_of_week: primitives<DaysOfWeek> = "dayOfWeek",
        time_of_day: primitives<FhirTime> = "timeOfDay",
        when: primitives<EventTiming> = "when",
        offset: primitive<UnsignedInt> = "offset",
    }
}

fhir_choice! {
    /// `Timing.repeat.bounds[x]`
    pub enum TimingRepeatBounds {
        Duration(element<Duration>) = "Duration",
        Range(element<Range>) = "Range",
        Period(element<Period>) = "Period",
    }
}
