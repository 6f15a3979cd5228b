//! athenahealth wire shapes
//!
//! Every leaf is a string (or absent) exactly as athena sends it. Field names
//! are the athena parameter names; outbound records are flattened into
//! parameters by `WireValues::from_record`, which skips absent and empty
//! values. Typed interpretation happens in `transformers`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaName {
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    #[serde(rename = "middlename")]
    pub middle_name: Option<String>,
    #[serde(rename = "preferredname")]
    pub preferred_name: Option<String>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaContactInfo {
    #[serde(rename = "homephone")]
    pub home_phone: Option<String>,
    #[serde(rename = "mobilephone")]
    pub mobile_phone: Option<String>,
    #[serde(rename = "workphone")]
    pub work_phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaAddress {
    #[serde(rename = "address1")]
    pub address_line_one: Option<String>,
    #[serde(rename = "address2")]
    pub address_line_two: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "zip")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaEmergencyContact {
    #[serde(rename = "contactname")]
    pub name: Option<String>,
    #[serde(rename = "contactrelationship")]
    pub relationship: Option<String>,
    #[serde(rename = "contactmobilephone")]
    pub mobile_phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaGuarantor {
    #[serde(rename = "guarantorfirstname")]
    pub first_name: Option<String>,
    #[serde(rename = "guarantormiddlename")]
    pub middle_name: Option<String>,
    #[serde(rename = "guarantorlastname")]
    pub last_name: Option<String>,
    #[serde(rename = "guarantorsuffix")]
    pub suffix: Option<String>,
    #[serde(rename = "guarantordob")]
    pub dob: Option<String>,
    #[serde(rename = "guarantorphone")]
    pub phone: Option<String>,
    #[serde(rename = "guarantoremail")]
    pub email: Option<String>,
    #[serde(rename = "guarantoraddress1")]
    pub address_line_one: Option<String>,
    #[serde(rename = "guarantoraddress2")]
    pub address_line_two: Option<String>,
    #[serde(rename = "guarantorcity")]
    pub city: Option<String>,
    #[serde(rename = "guarantorstate")]
    pub state: Option<String>,
    #[serde(rename = "guarantorzip")]
    pub zip_code: Option<String>,
    #[serde(rename = "guarantoraddresssameaspatient")]
    pub address_same_as_patient: Option<String>,
    #[serde(rename = "guarantorrelationshiptopatient")]
    pub relationship_to_patient: Option<String>,
}

/// Patient record as returned by `GET /patients/{id}` and accepted by
/// create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaPatient {
    #[serde(rename = "patientid")]
    pub patient_id: Option<String>,
    pub dob: Option<String>,
    pub sex: Option<String>,
    #[serde(flatten)]
    pub name: AthenaName,
    #[serde(flatten)]
    pub contact_info: AthenaContactInfo,
    #[serde(flatten)]
    pub address: AthenaAddress,
    #[serde(flatten)]
    pub emergency_contact: AthenaEmergencyContact,
    #[serde(flatten)]
    pub guarantor: AthenaGuarantor,
    #[serde(rename = "departmentid")]
    pub department_id: Option<String>,
    #[serde(rename = "primaryproviderid")]
    pub primary_provider_id: Option<String>,
    #[serde(rename = "portalaccessgiven")]
    pub portal_access_given: Option<String>,
    #[serde(rename = "genderidentity")]
    pub gender_identity: Option<String>,
    #[serde(rename = "genderidentityother")]
    pub gender_identity_other: Option<String>,
    #[serde(rename = "assignedsexatbirth")]
    pub birth_sex: Option<String>,
}

/// Element of the array returned by patient create/update.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPatientIdRecord {
    #[serde(rename = "patientid", default)]
    pub patient_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaCareTeam {
    #[serde(default)]
    pub members: Vec<AthenaCareTeamMember>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaCareTeamMember {
    #[serde(rename = "memberid")]
    pub member_id: Option<String>,
    #[serde(rename = "clinicalproviderid")]
    pub clinical_provider_id: Option<String>,
    #[serde(rename = "facilityid")]
    pub facility_id: Option<String>,
    #[serde(rename = "providerid")]
    pub provider_id: Option<String>,
    #[serde(rename = "ansispecialtyname")]
    pub ansi_specialty_name: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    #[serde(rename = "middlename")]
    pub middle_name: Option<String>,
    #[serde(rename = "preferredname")]
    pub preferred_name: Option<String>,
    pub suffix: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub fax: Option<String>,
    pub npi: Option<String>,
    #[serde(rename = "phonenumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "recipientclass")]
    pub recipient_class: Option<AthenaRecipientClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaRecipientClass {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaRecipientClassesResponse {
    #[serde(rename = "recipientclasses", default)]
    pub recipient_classes: Vec<AthenaRecipientClass>,
    /// Path of the previous page.
    pub previous: Option<String>,
    /// Path of the next page.
    pub next: Option<String>,
}

/// Query for `GET /patients/enhancedbestmatch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AthenaEnhancedBestMatchRequest {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub dob: String,
    pub zip: String,
    #[serde(rename = "homephone")]
    pub home_phone: Option<String>,
    #[serde(rename = "mobilephone")]
    pub mobile_phone: Option<String>,
    #[serde(rename = "guarantorphone")]
    pub guarantor_phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "guarantoremail")]
    pub guarantor_email: Option<String>,
    #[serde(rename = "departmentid")]
    pub department_id: Option<String>,
    #[serde(rename = "minscore")]
    pub minimum_score: Option<f32>,
    #[serde(rename = "usesoundexsearch")]
    pub use_soundex_search: bool,
    #[serde(rename = "returnbestmatches")]
    pub return_best_matches: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaEnhancedBestMatchResult {
    #[serde(flatten)]
    pub patient: AthenaPatient,
    /// Sent as either a JSON number or a string.
    pub score: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPharmacy {
    #[serde(rename = "pharmacytype")]
    pub pharmacy_type: Option<String>,
    #[serde(rename = "defaultpharmacy")]
    pub default_pharmacy: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "receivetype")]
    pub receiver_type: Option<String>,
    #[serde(rename = "acceptfax")]
    pub accept_fax: Option<String>,
    #[serde(rename = "clinicalproviderid")]
    pub clinical_provider_id: Option<String>,
    pub zip: Option<String>,
    #[serde(rename = "phonenumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "clinicalprovidername")]
    pub clinical_provider_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    #[serde(rename = "faxnumber")]
    pub fax_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPreferredPharmacies {
    #[serde(rename = "pharmacies", default)]
    pub pharmacies: Vec<AthenaPharmacy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaInsuranceHolderName {
    #[serde(rename = "insurancepolicyholderfirstname")]
    pub first_name: Option<String>,
    #[serde(rename = "insurancepolicyholdermiddlename")]
    pub middle_name: Option<String>,
    #[serde(rename = "insurancepolicyholderlastname")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaInsuranceHolder {
    #[serde(flatten)]
    pub name: AthenaInsuranceHolderName,
    #[serde(rename = "insurancepolicyholderdob")]
    pub dob: Option<String>,
    #[serde(rename = "insurancepolicyholdersex")]
    pub sex: Option<String>,
    #[serde(rename = "relationshiptoinsuredid")]
    pub relationship_to_insured_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaPatientInsurance {
    #[serde(rename = "departmentid")]
    pub department_id: Option<String>,
    /// Member id printed on the insurance card.
    #[serde(rename = "insuranceidnumber")]
    pub member_id: Option<String>,
    #[serde(rename = "insurancepackageid")]
    pub package_id: Option<String>,
    #[serde(rename = "policynumber")]
    pub policy_number: Option<String>,
    #[serde(rename = "updateappointments")]
    pub update_appointments: Option<String>,
    /// athena's own identifier for the insurance record.
    #[serde(rename = "insuranceid")]
    pub insurance_id: Option<String>,
    #[serde(flatten)]
    pub holder: AthenaInsuranceHolder,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPatientInsurancesResponse {
    #[serde(default)]
    pub insurances: Vec<AthenaPatientInsurance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaInsuranceBenefitDetails {
    #[serde(rename = "ansi271")]
    pub eligibility_data: Option<String>,
    #[serde(rename = "dateofservice")]
    pub date_of_service: Option<String>,
    #[serde(rename = "lastcheckdate")]
    pub last_check_date: Option<String>,
}

/// Clinical provider, used both as the search query and as a search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaClinicalProvider {
    #[serde(rename = "clinicalproviderid")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    #[serde(rename = "phone")]
    pub phone_number: Option<String>,
    #[serde(rename = "fax")]
    pub fax_number: Option<String>,
    #[serde(rename = "pharmacytype")]
    pub pharmacy_type: Option<String>,
    #[serde(rename = "clinicalprovidernpi")]
    pub npi: Option<String>,
    #[serde(rename = "ncpdpid")]
    pub ncpdp_id: Option<String>,
    pub distance: Option<String>,
    #[serde(rename = "ordertype")]
    pub order_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaClinicalProviderSearchResponse {
    #[serde(rename = "clinicalproviders", default)]
    pub clinical_providers: Vec<AthenaClinicalProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaDiscussionNotes {
    #[serde(rename = "discussionnotes", default)]
    pub discussion_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaAnalyte {
    #[serde(rename = "observationidentifier")]
    pub observation_identifier: Option<String>,
    #[serde(rename = "resultstatus")]
    pub result_status: Option<String>,
    #[serde(rename = "analytename")]
    pub name: Option<String>,
    #[serde(rename = "analytedatetime")]
    pub date_time: Option<String>,
    #[serde(rename = "analytedate")]
    pub date: Option<String>,
    pub value: Option<String>,
    pub units: Option<String>,
    pub description: Option<String>,
    pub loinc: Option<String>,
    pub note: Option<String>,
    #[serde(rename = "analyteid")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaLabResult {
    pub priority: Option<String>,
    #[serde(rename = "labresultdate")]
    pub date: Option<String>,
    #[serde(rename = "resultstatus")]
    pub result_status: Option<String>,
    #[serde(rename = "isreviewedbyprovider")]
    pub is_reviewed_by_provider: Option<String>,
    #[serde(rename = "performinglabaddress1")]
    pub performing_lab_address1: Option<String>,
    #[serde(rename = "labresultid")]
    pub id: Option<String>,
    #[serde(rename = "providerid")]
    pub provider_id: Option<String>,
    #[serde(rename = "performinglabname")]
    pub performing_lab_name: Option<String>,
    #[serde(rename = "labresultdatetime")]
    pub date_time: Option<String>,
    #[serde(default)]
    pub analytes: Vec<AthenaAnalyte>,
    #[serde(rename = "facilityid")]
    pub facility_id: Option<String>,
    #[serde(rename = "performinglabzip")]
    pub performing_lab_zip: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "attachmentexists")]
    pub attachment_exists: Option<String>,
    #[serde(rename = "performinglabcity")]
    pub performing_lab_city: Option<String>,
    #[serde(rename = "labresultloinc")]
    pub loinc: Option<String>,
    #[serde(rename = "performinglabstate")]
    pub performing_lab_state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaLabResults {
    #[serde(rename = "results", default)]
    pub lab_results: Vec<AthenaLabResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaLabResultDocument {
    #[serde(rename = "departmentid")]
    pub department_id: Option<String>,
    #[serde(rename = "documentroute")]
    pub document_route: Option<String>,
    #[serde(rename = "documentsource")]
    pub document_source: Option<String>,
    #[serde(rename = "documenttypeid")]
    pub document_type_id: Option<String>,
    #[serde(rename = "encounterdate")]
    pub encounter_date: Option<String>,
    #[serde(rename = "encounterid")]
    pub encounter_id: Option<String>,
    #[serde(rename = "facilityid")]
    pub facility_id: Option<String>,
    /// athena spells this field without the second "i".
    #[serde(rename = "isconfidental")]
    pub is_confidential: Option<String>,
    #[serde(rename = "labresultid")]
    pub id: Option<String>,
    #[serde(rename = "labresultloinc")]
    pub loinc: Option<String>,
    #[serde(rename = "observationdatetime")]
    pub observation_date_time: Option<String>,
    #[serde(default)]
    pub observations: Vec<AthenaAnalyte>,
    #[serde(rename = "performinglabname")]
    pub performing_lab_name: Option<String>,
    #[serde(rename = "providerid")]
    pub provider_id: Option<String>,
    #[serde(rename = "tietoorderid")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaSubscription {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaChangedLabResult {
    #[serde(rename = "labresultid")]
    pub lab_result_id: Option<String>,
    #[serde(rename = "departmentid")]
    pub department_id: Option<String>,
    #[serde(rename = "encounterid")]
    pub encounter_id: Option<String>,
    #[serde(rename = "patientid")]
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaChangedLabResults {
    #[serde(rename = "labresults", default)]
    pub lab_results: Vec<AthenaChangedLabResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaChangedPatient {
    #[serde(rename = "departmentid")]
    pub department_id: Option<String>,
    #[serde(rename = "patientid")]
    pub patient_id: Option<String>,
    #[serde(rename = "previouspatientids", default)]
    pub previous_patient_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaChangedPatients {
    #[serde(default)]
    pub patients: Vec<AthenaChangedPatient>,
}

/// Query for the two change feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AthenaChangedQuery {
    #[serde(rename = "leaveunprocessed")]
    pub leave_unprocessed: Option<bool>,
    #[serde(rename = "showprocessedstartdatetime")]
    pub show_processed_start_datetime: Option<String>,
    #[serde(rename = "showprocessedenddatetime")]
    pub show_processed_end_datetime: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Card fields shared by payments and stored-card uploads.
///
/// No `Debug`: these carry raw card data.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct AthenaCreditCardInformation {
    #[serde(rename = "accountnumber")]
    pub account_number: Option<String>,
    #[serde(rename = "billingaddress")]
    pub billing_address: Option<String>,
    #[serde(rename = "billingzip")]
    pub billing_zip: Option<String>,
    #[serde(rename = "cardsecuritycode")]
    pub card_security_code: Option<i64>,
    #[serde(rename = "expirationmonthmm")]
    pub expiration_month: Option<i64>,
    #[serde(rename = "expirationyearyyyy")]
    pub expiration_year: Option<i64>,
    #[serde(rename = "nameoncard")]
    pub name_on_card: Option<String>,
    #[serde(rename = "departmentid")]
    pub department_id: Option<i64>,
}

#[derive(Clone, Default, PartialEq, Serialize)]
pub struct AthenaPaymentInformation {
    #[serde(flatten)]
    pub card: AthenaCreditCardInformation,
    #[serde(rename = "otheramount")]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPaymentResponse {
    #[serde(rename = "epaymentid")]
    pub payment_id: Option<String>,
    #[serde(rename = "errortext")]
    pub error_text: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaStoredCardUploadResponse {
    #[serde(rename = "epaymentid")]
    pub payment_id: Option<String>,
    #[serde(rename = "errortext")]
    pub error_text: Option<String>,
    pub success: Option<String>,
    #[serde(rename = "storedcardid")]
    pub stored_card_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaStoredCard {
    pub status: Option<String>,
    #[serde(rename = "cardtype")]
    pub card_type: Option<String>,
    #[serde(rename = "billingzip")]
    pub billing_zip: Option<String>,
    #[serde(rename = "billingcity")]
    pub billing_city: Option<String>,
    #[serde(rename = "billingstate")]
    pub billing_state: Option<String>,
    #[serde(rename = "storedcardid")]
    pub stored_card_id: Option<String>,
    #[serde(rename = "preferredcard")]
    pub preferred_card: Option<String>,
    #[serde(rename = "billingaddress")]
    pub billing_address: Option<String>,
    #[serde(rename = "cardexpirationmmyyyy")]
    pub card_expiration_month_year: Option<String>,
    #[serde(rename = "cardnumberlast4digits")]
    pub card_number_last_four_digits: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaDeleteStoredCardResponse {
    pub success: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaSearchPatientResult {
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    #[serde(rename = "currentdepartmentid")]
    pub current_department_id: Option<String>,
    #[serde(rename = "middleinitial")]
    pub middle_initial: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "countryid")]
    pub country_id: Option<String>,
    #[serde(rename = "homephone")]
    pub home_phone: Option<String>,
    #[serde(rename = "patientid")]
    pub patient_id: Option<String>,
    pub sex: Option<String>,
    pub dob: Option<String>,
    pub zip: Option<String>,
    #[serde(rename = "currentdepartment")]
    pub current_department: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    #[serde(rename = "namesuffix")]
    pub name_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaSearchPatientsResponse {
    #[serde(default)]
    pub patients: Vec<AthenaSearchPatientResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPatientOrder {
    #[serde(rename = "orderid")]
    pub order_id: Option<String>,
    #[serde(rename = "encounterid")]
    pub encounter_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthenaPing {
    #[serde(default)]
    pub pong: String,
}
