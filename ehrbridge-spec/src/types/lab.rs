//! Lab results, documents and change feeds.

use serde::{Deserialize, Serialize};

use super::common::{Address, Date, DateTime};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Analyte {
    pub observation_identifier: Option<String>,
    pub result_status: Option<String>,
    pub name: Option<String>,
    pub date_time: Option<DateTime>,
    pub date: Option<Date>,
    pub value: Option<String>,
    pub units: Option<String>,
    pub description: Option<String>,
    pub loinc: Option<String>,
    pub note: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabResult {
    pub id: Option<String>,
    pub priority: Option<String>,
    pub date: Option<Date>,
    pub date_time: Option<DateTime>,
    pub result_status: Option<String>,
    pub is_reviewed_by_provider: Option<bool>,
    pub performing_lab_name: Option<String>,
    pub performing_lab_address: Option<Address>,
    pub provider_id: Option<String>,
    pub facility_id: Option<String>,
    pub description: Option<String>,
    pub attachment_exists: Option<bool>,
    pub loinc: Option<String>,
    pub analytes: Vec<Analyte>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabResultDocument {
    pub id: Option<String>,
    pub department_id: Option<String>,
    pub document_route: Option<String>,
    pub document_source: Option<String>,
    pub document_type_id: Option<String>,
    pub encounter_date: Option<Date>,
    pub encounter_id: Option<String>,
    pub facility_id: Option<String>,
    pub is_confidential: bool,
    pub loinc: Option<String>,
    pub observation_date_time: Option<DateTime>,
    pub observations: Vec<Analyte>,
    pub performing_lab_name: Option<String>,
    pub provider_id: Option<String>,
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangedLabResult {
    pub lab_result_id: Option<String>,
    pub department_id: Option<String>,
    pub encounter_id: Option<String>,
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangedPatient {
    pub department_id: Option<String>,
    pub patient_id: Option<String>,
    pub previous_patient_ids: Vec<String>,
}

/// Filters for the change-feed endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangedParams {
    /// Keep returned records in the feed instead of marking them processed.
    pub leave_unprocessed: Option<bool>,
    pub show_processed_start_datetime: Option<String>,
    pub show_processed_end_datetime: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// State of a change-event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    #[default]
    Unspecified,
    Active,
    Inactive,
    Partial,
}
