//! Code systems whose STU3 members differ from R4 or that only exist in STU3.

fhir_code_system! {
    /// The use of an address.
    pub enum AddressUse = "http://hl7.org/fhir/address-use" {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
    }
}

fhir_code_system! {
    /// Identifies the purpose for this identifier, if known.
    pub enum IdentifierUse = "http://hl7.org/fhir/identifier-use" {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Secondary = "secondary",
    }
}

fhir_code_system! {
    /// How much of the content of the code system - the concepts and codes
    /// it defines - are represented in a code system resource.
    pub enum CodeSystemContentMode = "http://hl7.org/fhir/codesystem-content-mode" {
        NotPresent = "not-present",
        Example = "example",
        Fragment = "fragment",
        Complete = "complete",
    }
}

fhir_code_system! {
    /// The type of a property value.
    pub enum PropertyType = "http://hl7.org/fhir/concept-property-type" {
        Code = "code",
        Coding = "Coding",
        String = "string",
        Integer = "integer",
        Boolean = "boolean",
        DateTime = "dateTime",
    }
}

fhir_code_system! {
    /// Real world event relating to the schedule.
    pub enum EventTiming = "http://hl7.org/fhir/event-timing" {
        Morn = "MORN",
        Aft = "AFT",
        Eve = "EVE",
        Night = "NIGHT",
        Phs = "PHS",
        Hs = "HS",
        Wake = "WAKE",
        C = "C",
        Cm = "CM",
        Cd = "CD",
        Cv = "CV",
        Ac = "AC",
        Acm = "ACM",
        Acd = "ACD",
        Acv = "ACV",
        Pc = "PC",
        Pcm = "PCM",
        Pcd = "PCD",
        Pcv = "PCV",
    }
}

fhir_code_system! {
    /// Codes specifying how two observations are related.
    pub enum ObservationRelationshipType = "http://hl7.org/fhir/observation-relationshiptypes" {
        HasMember = "has-member",
        DerivedFrom = "derived-from",
        SequelTo = "sequel-to",
        Replaces = "replaces",
        QualifiedBy = "qualified-by",
        InterferedBy = "interfered-by",
    }
}
