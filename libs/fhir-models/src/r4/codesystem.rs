//! Code systems whose R4 members differ from STU3 or that only exist in R4.

fhir_code_system! {
    /// This value set includes Status codes.
    pub enum FinancialResourceStatusCodes = "http://hl7.org/fhir/fm-status" {
        Active = "active",
        Cancelled = "cancelled",
        Draft = "draft",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    /// The purpose of the Claim: predetermination, preauthorization, claim.
    pub enum Use = "http://hl7.org/fhir/claim-use" {
        Claim = "claim",
        Preauthorization = "preauthorization",
        Predetermination = "predetermination",
    }
}

fhir_code_system! {
    /// The result of the claim processing.
    pub enum ClaimProcessingCodes = "http://hl7.org/fhir/remittance-outcome" {
        Queued = "queued",
        Complete = "complete",
        Error = "error",
        Partial = "partial",
    }
}

fhir_code_system! {
    /// The presentation types of notes.
    pub enum NoteType = "http://hl7.org/fhir/note-type" {
        Display = "display",
        Print = "print",
        Printoper = "printoper",
    }
}

fhir_code_system! {
    /// The use of an address.
    pub enum AddressUse = "http://hl7.org/fhir/address-use" {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Billing = "billing",
    }
}

fhir_code_system! {
    /// Identifies the purpose for this identifier, if known.
    pub enum IdentifierUse = "http://hl7.org/fhir/identifier-use" {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Secondary = "secondary",
        Old = "old",
    }
}

fhir_code_system! {
    /// The extent of the content of the code system (the concepts and codes
    /// it defines) are represented in a code system resource.
    pub enum CodeSystemContentMode = "http://hl7.org/fhir/codesystem-content-mode" {
        NotPresent = "not-present",
        Example = "example",
        Fragment = "fragment",
        Complete = "complete",
        Supplement = "supplement",
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
        Decimal = "decimal",
    }
}

fhir_code_system! {
    /// Real world event relating to the schedule.
    pub enum EventTiming = "http://hl7.org/fhir/event-timing" {
        Morn = "MORN",
        MornEarly = "MORN.early",
        MornLate = "MORN.late",
        Noon = "NOON",
        Aft = "AFT",
        AftEarly = "AFT.early",
        AftLate = "AFT.late",
        Eve = "EVE",
        EveEarly = "EVE.early",
        EveLate = "EVE.late",
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
