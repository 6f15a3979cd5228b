//! Patient records and patient lookups.

use serde::{Deserialize, Serialize};

use super::common::{Address, BirthSex, Date, GenderIdentity, Name, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: Option<String>,
    pub name: Option<Name>,
    pub date_of_birth: Option<Date>,
    /// Remote sex code, passed through untouched.
    pub sex: Option<String>,
    pub contact_info: Option<ContactInfo>,
    pub emergency_contact: Option<EmergencyContact>,
    pub guarantor: Option<Guarantor>,
    pub department_id: Option<String>,
    pub primary_provider_id: Option<String>,
    pub portal_access_given: Option<bool>,
    pub birth_sex: Option<BirthSex>,
    pub gender_identity: Option<GenderIdentity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub home_number: Option<PhoneNumber>,
    pub mobile_number: Option<PhoneNumber>,
    pub work_number: Option<PhoneNumber>,
    pub email: Option<String>,
    pub address: Option<Address>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub contact_name: Option<String>,
    pub contact_relationship: Option<String>,
    pub contact_mobile_phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guarantor {
    pub name: Option<Name>,
    pub date_of_birth: Option<Date>,
    pub contact_info: Option<ContactInfo>,
    pub relationship_to_patient: Option<String>,
    pub same_address_as_patient: Option<bool>,
}

/// Fuzzy patient lookup parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnhancedBestMatchRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub zip_code: String,
    pub home_phone_number: Option<PhoneNumber>,
    pub mobile_phone_number: Option<PhoneNumber>,
    pub guarantor_phone_number: Option<PhoneNumber>,
    pub email: Option<String>,
    pub guarantor_email: Option<String>,
    pub department_id: Option<String>,
    pub minimum_score: Option<f32>,
    pub use_soundex_search: bool,
    pub return_best_matches: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedBestMatchResult {
    pub patient: Patient,
    /// Match score rendered as a decimal string.
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPatientsResult {
    pub patient: Patient,
}
