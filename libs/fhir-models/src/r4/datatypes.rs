//! R4 general-purpose datatypes

use super::*;

fhir_element! {
    /// Optional extension element
    pub struct Extension: ElementBase {
        /// Identifies the meaning of the extension
        url: required_value<String> = "url",
        /// Value of extension
        value: choice<ExtensionValue> = "value",
    }
}

fhir_choice! {
    /// `Extension.value[x]`
    pub enum ExtensionValue {
        Base64Binary(primitive<String>) = "Base64Binary",
        Boolean(primitive<bool>) = "Boolean",
        Canonical(primitive<String>) = "Canonical",
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
        Url(primitive<String>) = "Url",
        Uuid(primitive<String>) = "Uuid",
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
        ContactDetail(element<ContactDetail>) = "ContactDetail",
        UsageContext(element<UsageContext>) = "UsageContext",
        Meta(element<Meta>) = "Meta",
    }
}

fhir_element! {
    /// Metadata about a resource
    pub struct Meta: ElementBase {
        /// Version specific identifier
        version_id: primitive<String> = "versionId",
        /// When the resource version last changed
        last_updated: primitive<FhirInstant> = "lastUpdated",
        /// Identifies where the resource comes from
        source: primitive<String> = "source",
        /// Profiles this resource claims to conform to
        profile: primitives<String> = "profile",
        /// Security Labels applied to this resource
        security: elements<Coding> = "security",
        /// Tags applied to this resource
        tag: elements<Coding> = "tag",
    }
}

fhir_element! {
    /// Human-readable summary of the resource (essential clinical and business
    /// information)
    pub struct Narrative: ElementBase {
        status: required_primitive<NarrativeStatus> = "status",
        /// Limited xhtml content
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
        /// The namespace for the identifier value
        system: primitive<String> = "system",
        value: primitive<String> = "value",
        /// Time period when id is/was valid for use
        period: element<Period> = "period",
        /// Organization that issued id (may be just text)
        assigner: boxed<Reference> = "assigner",
    }
}

fhir_element! {
    /// A reference from one resource to another
    pub struct Reference: ElementBase {
        /// Literal reference, Relative, internal or absolute URL
        reference: primitive<String> = "reference",
        /// Type the reference refers to (e.g. "Patient")
        type_: primitive<String> = "type",
        /// Logical reference, when literal reference is not known
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

/// A duration of time during which an organism (or a process) has existed
pub type Age = Quantity;
/// A measured amount (or an amount that can potentially be measured)
pub type Count = Quantity;
/// A length - a value with a unit that is a physical distance
pub type Distance = Quantity;
/// A length of time
pub type Duration = Quantity;
/// A fixed quantity (no comparator)
pub type SimpleQuantity = Quantity;

fhir_element! {
    /// An amount of economic utility in some recognized currency
    pub struct Money: ElementBase {
        value: primitive<FhirDecimal> = "value",
        /// ISO 4217 Currency Code
        currency: primitive<String> = "currency",
    }
}

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
        /// Mime type of the content, with charset etc.
        content_type: primitive<String> = "contentType",
        language: primitive<String> = "language",
        /// Data inline, base64ed
        data: primitive<String> = "data",
        url: primitive<String> = "url",
        /// Number of bytes of content (if url provided)
        size: primitive<UnsignedInt> = "size",
        /// Hash of the data (sha-1, base64ed)
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
        /// The annotation - text content (as markdown)
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
        /// Specify preferred order of use (1 = highest)
        rank: primitive<PositiveInt> = "rank",
        period: element<Period> = "period",
    }
}

fhir_element! {
    /// Name of a human - parts and usage
    pub struct HumanName: ElementBase {
        use_: primitive<NameUse> = "use",
        /// Text representation of the full name
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
        /// Street name, number, direction & P.O. Box etc.
        line: primitives<String> = "line",
        city: primitive<String> = "city",
        district: primitive<String> = "district",
        /// Sub-unit of country (abbreviations ok)
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
        /// Type of context being specified
        code: required<Coding> = "code",
        /// Value that defines the context
        value: required_choice<UsageContextValue> = "value",
    }
}

fhir_choice! {
    /// `UsageContext.value[x]`
    pub enum UsageContextValue {
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        Quantity(element<Quantity>) = "Quantity",
        Range(element<Range>) = "Range",
        Reference(element<Reference>) = "Reference",
    }
}

fhir_element! {
    /// A series of measurements taken by a device
    pub struct SampledData: ElementBase {
        /// Zero value and units
        origin: required<SimpleQuantity> = "origin",
        /// Number of milliseconds between samples
        period: required_primitive<FhirDecimal> = "period",
        factor: primitive<FhirDecimal> = "factor",
        lower_limit: primitive<FhirDecimal> = "lowerLimit",
        upper_limit: primitive<FhirDecimal> = "upperLimit",
        /// Number of sample points at each time point
        dimensions: required_primitive<PositiveInt> = "dimensions",
        /// Decimal values with spaces, or "E" | "U" | "L"
        data: primitive<String> = "data",
    }
}

fhir_element! {
    /// A timing schedule that specifies an event that may occur multiple times
    pub struct Timing: BackboneBase {
        /// When the event occurs
        event: primitives<FhirDateTime> = "event",
        repeat: element<TimingRepeat> = "repeat",
        /// BID | TID | QID | AM | PM | QD | QOD | +
        code: element<CodeableConcept> = "code",
    }
}

fhir_element! {
    /// When the event is to occur
    pub struct TimingRepeat: ElementBase {
        bounds: choice<TimingRepeatBounds> = "bounds",
        count: primitive<PositiveInt> = "count",
        count_max: primitive<PositiveInt> = "countMax",
        duration: primitive<FhirDecimal> = "duration",
        duration_max: primitive<FhirDecimal> = "durationMax",
        duration_unit: primitive<UnitsOfTime> = "durationUnit",
        frequency: primitive<PositiveInt> = "frequency",
        frequency_max: primitive<PositiveInt> = "frequencyMax",
        period: primitive<FhirDecimal> = "period",
        period_max: primitive<FhirDecimal> = "periodMax",
        period_unit: primitive<UnitsOfTime> = "periodUnit",
        day_of_week: primitives<DaysOfWeek> = "dayOfWeek",
        time_of_day: primitives<FhirTime> = "timeOfDay",
        when: primitives<EventTiming> = "when",
        /// Minutes from event (before or after)
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
