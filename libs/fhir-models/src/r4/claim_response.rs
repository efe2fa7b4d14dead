//! Response to a claim predetermination or preauthorization.

use super::*;

fhir_resource! {
    /// Adjudication details from the processing of a Claim resource.
    pub struct ClaimResponse in R4 {
        /// Business Identifier for a claim response
        identifier: elements<Identifier> = "identifier",
        status: required_primitive<FinancialResourceStatusCodes> = "status",
        /// More granular claim type
        type_: required<CodeableConcept> = "type",
        sub_type: element<CodeableConcept> = "subType",
        use_: required_primitive<Use> = "use",
        /// The recipient of the products and services
        patient: required<Reference> = "patient",
        /// Response creation date
        created: required_primitive<FhirDateTime> = "created",
        /// Party responsible for reimbursement
        insurer: required<Reference> = "insurer",
        /// Party responsible for the claim
        requestor: element<Reference> = "requestor",
        /// Id of resource triggering adjudication
        request: element<Reference> = "request",
        outcome: required_primitive<ClaimProcessingCodes> = "outcome",
        /// Disposition Message
        disposition: primitive<String> = "disposition",
        /// Preauthorization reference
        pre_auth_ref: primitive<String> = "preAuthRef",
        /// Preauthorization reference effective period
        pre_auth_period: element<Period> = "preAuthPeriod",
        /// Party to be paid any benefits payable
        payee_type: element<CodeableConcept> = "payeeType",
        /// Adjudication for claim line items
        item: elements<ClaimResponseItem> = "item",
        /// Insurer added line items
        add_item: elements<ClaimResponseAddItem> = "addItem",
        /// Header-level adjudication
        adjudication: elements<ClaimResponseItemAdjudication> = "adjudication",
        /// Adjudication totals
        total: elements<ClaimResponseTotal> = "total",
        /// Payment Details
        payment: element<ClaimResponsePayment> = "payment",
        /// Funds reserved status
        funds_reserve: element<CodeableConcept> = "fundsReserve",
        /// Printed form identifier
        form_code: element<CodeableConcept> = "formCode",
        /// Printed reference or actual form
        form: element<Attachment> = "form",
        /// Note concerning adjudication
        process_note: elements<ClaimResponseProcessNote> = "processNote",
        /// Request for additional information
        communication_request: elements<Reference> = "communicationRequest",
        /// Patient insurance information
        insurance: elements<ClaimResponseInsurance> = "insurance",
        /// Processing errors
        error: elements<ClaimResponseError> = "error",
    }
}

fhir_element! {
    /// A claim line. Either a simple (a product or service) or a 'group' of
    /// details which can also be a simple items or groups of sub-details.
    pub struct ClaimResponseItem: BackboneBase {
        /// Claim item instance identifier
        item_sequence: required_primitive<PositiveInt> = "itemSequence",
        /// Applicable note numbers
        note_number: primitives<PositiveInt> = "noteNumber",
        /// Adjudication details
        adjudication: required_elements<ClaimResponseItemAdjudication> = "adjudication",
        /// Adjudication for claim details
        detail: elements<ClaimResponseItemDetail> = "detail",
    }
}

fhir_element! {
    /// Adjudication results: eligible, copay, benefit, etc.
    pub struct ClaimResponseItemAdjudication: BackboneBase {
        /// Type of adjudication information
        category: required<CodeableConcept> = "category",
        /// Explanation of adjudication outcome
        reason: element<CodeableConcept> = "reason",
        /// Monetary amount
        amount: element<Money> = "amount",
        /// Non-monetary value
        value: primitive<FhirDecimal> = "value",
    }
}

fhir_element! {
    /// A claim detail. Either a simple (a product or service) or a 'group'
    /// of sub-details which are simple items.
    pub struct ClaimResponseItemDetail: BackboneBase {
        detail_sequence: required_primitive<PositiveInt> = "detailSequence",
        note_number: primitives<PositiveInt> = "noteNumber",
        adjudication: required_elements<ClaimResponseItemAdjudication> = "adjudication",
        sub_detail: elements<ClaimResponseItemDetailSubDetail> = "subDetail",
    }
}

fhir_element! {
    /// A sub-detail adjudication of a simple product or service.
    pub struct ClaimResponseItemDetailSubDetail: BackboneBase {
        sub_detail_sequence: required_primitive<PositiveInt> = "subDetailSequence",
        note_number: primitives<PositiveInt> = "noteNumber",
        adjudication: elements<ClaimResponseItemAdjudication> = "adjudication",
    }
}

fhir_element! {
    /// The first-tier service adjudications for payor added product or
    /// service lines.
    pub struct ClaimResponseAddItem: BackboneBase {
        /// Item sequence number
        item_sequence: primitives<PositiveInt> = "itemSequence",
        /// Detail sequence number
        detail_sequence: primitives<PositiveInt> = "detailSequence",
        /// Subdetail sequence number
        subdetail_sequence: primitives<PositiveInt> = "subdetailSequence",
        /// Authorized providers
        provider: elements<Reference> = "provider",
        /// Billing, service, product, or drug code
        product_or_service: required<CodeableConcept> = "productOrService",
        /// Service/Product billing modifiers
        modifier: elements<CodeableConcept> = "modifier",
        /// Program the product or service is provided under
        program_code: elements<CodeableConcept> = "programCode",
        /// Date or dates of service or product delivery
        serviced: choice<ClaimResponseAddItemServiced> = "serviced",
        /// Place of service or where product was supplied
        location: choice<ClaimResponseAddItemLocation> = "location",
        quantity: element<SimpleQuantity> = "quantity",
        /// Fee, charge or cost per item
        unit_price: element<Money> = "unitPrice",
        /// Price scaling factor
        factor: primitive<FhirDecimal> = "factor",
        /// Total item cost
        net: element<Money> = "net",
        /// Anatomical location
        body_site: element<CodeableConcept> = "bodySite",
        /// Anatomical sub-location
        sub_site: elements<CodeableConcept> = "subSite",
        note_number: primitives<PositiveInt> = "noteNumber",
        adjudication: required_elements<ClaimResponseItemAdjudication> = "adjudication",
        /// Insurer added line details
        detail: elements<ClaimResponseAddItemDetail> = "detail",
    }
}

fhir_choice! {
    /// `ClaimResponse.addItem.serviced[x]`
    pub enum ClaimResponseAddItemServiced {
        Date(primitive<FhirDate>) = "Date",
        Period(element<Period>) = "Period",
    }
}

fhir_choice! {
    /// `ClaimResponse.addItem.location[x]`
    pub enum ClaimResponseAddItemLocation {
        CodeableConcept(element<CodeableConcept>) = "CodeableConcept",
        Address(element<Address>) = "Address",
        Reference(element<Reference>) = "Reference",
    }
}

fhir_element! {
    /// The second-tier service adjudications for payor added services.
    pub struct ClaimResponseAddItemDetail: BackboneBase {
        product_or_service: required<CodeableConcept> = "productOrService",
        modifier: elements<CodeableConcept> = "modifier",
        quantity: element<SimpleQuantity> = "quantity",
        unit_price: element<Money> = "unitPrice",
        factor: primitive<FhirDecimal> = "factor",
        net: element<Money> = "net",
        note_number: primitives<PositiveInt> = "noteNumber",
        adjudication: required_elements<ClaimResponseItemAdjudication> = "adjudication",
        /// Insurer added line items
        sub_detail: elements<ClaimResponseAddItemDetailSubDetail> = "subDetail",
    }
}

fhir_element! {
    /// The third-tier service adjudications for payor added services.
    pub struct ClaimResponseAddItemDetailSubDetail: BackboneBase {
        product_or_service: required<CodeableConcept> = "productOrService",
        modifier: elements<CodeableConcept> = "modifier",
        quantity: element<SimpleQuantity> = "quantity",
        unit_price: element<Money> = "unitPrice",
        factor: primitive<FhirDecimal> = "factor",
        net: element<Money> = "net",
        note_number: primitives<PositiveInt> = "noteNumber",
        adjudication: required_elements<ClaimResponseItemAdjudication> = "adjudication",
    }
}

fhir_element! {
    /// Categorized monetary totals for the adjudication.
    pub struct ClaimResponseTotal: BackboneBase {
        category: required<CodeableConcept> = "category",
        amount: required<Money> = "amount",
    }
}

fhir_element! {
    /// Payment details for the adjudication of the claim.
    pub struct ClaimResponsePayment: BackboneBase {
        /// Partial or complete payment
        type_: required<CodeableConcept> = "type",
        /// Payment adjustment for non-claim issues
        adjustment: element<Money> = "adjustment",
        adjustment_reason: element<CodeableConcept> = "adjustmentReason",
        /// Expected date of payment
        date: primitive<FhirDate> = "date",
        /// Payable amount after adjustment
        amount: required<Money> = "amount",
        /// Business identifier for the payment
        identifier: element<Identifier> = "identifier",
    }
}

fhir_element! {
    /// A note that describes or explains adjudication results in a human
    /// readable form.
    pub struct ClaimResponseProcessNote: BackboneBase {
        /// Note instance identifier
        number: primitive<PositiveInt> = "number",
        type_: primitive<NoteType> = "type",
        /// Note explanatory text
        text: required_primitive<String> = "text",
        language: element<CodeableConcept> = "language",
    }
}

fhir_element! {
    /// Financial instruments for reimbursement for the health care products
    /// and services specified on the claim.
    pub struct ClaimResponseInsurance: BackboneBase {
        /// Insurance instance identifier
        sequence: required_primitive<PositiveInt> = "sequence",
        /// Coverage to be used for adjudication
        focal: required_primitive<bool> = "focal",
        /// Insurance information
        coverage: required<Reference> = "coverage",
        /// Additional provider contract number
        business_arrangement: primitive<String> = "businessArrangement",
        /// Adjudication results
        claim_response: element<Reference> = "claimResponse",
    }
}

fhir_element! {
    /// Errors encountered during the processing of the adjudication.
    pub struct ClaimResponseError: BackboneBase {
        item_sequence: primitive<PositiveInt> = "itemSequence",
        detail_sequence: primitive<PositiveInt> = "detailSequence",
        sub_detail_sequence: primitive<PositiveInt> = "subDetailSequence",
        /// Error code detailing processing issues
        code: required<CodeableConcept> = "code",
    }
}
