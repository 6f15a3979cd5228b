//! Care team, pharmacies, clinical providers and orders.

use serde::{Deserialize, Serialize};

use super::common::{Address, Name, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipientClass {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// One page of recipient classes with the remote cursor links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipientClassesPage {
    pub recipient_classes: Vec<RecipientClass>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareTeamMember {
    pub member_id: Option<String>,
    pub clinical_provider_id: Option<String>,
    pub facility_id: Option<String>,
    pub provider_id: Option<String>,
    pub ansi_specialty_name: Option<String>,
    /// Display name as rendered by the remote EHR.
    pub display_name: Option<String>,
    pub name: Option<Name>,
    pub address: Option<Address>,
    pub country: Option<String>,
    pub fax: Option<String>,
    pub npi: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub recipient_class: Option<RecipientClass>,
}

/// Care team members plus the free-text note attached to the team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CareTeam {
    pub members: Vec<CareTeamMember>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClinicalProvider {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pharmacy {
    pub pharmacy_type: Option<String>,
    pub default_pharmacy: Option<String>,
    pub address: Option<Address>,
    pub receiver_type: Option<String>,
    pub accept_fax: Option<String>,
    pub clinical_provider: Option<ClinicalProvider>,
    pub phone_number: Option<PhoneNumber>,
    pub fax_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    Unspecified,
    Dme,
    Imaging,
    Lab,
    Other,
    Prescription,
    Procedure,
    Surgery,
    Vaccine,
    Consultant,
    Glasses,
    ContactLenses,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchClinicalProvidersRequest {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub address: Option<Address>,
    /// Search radius in miles.
    pub distance: Option<i32>,
    pub phone_number: Option<PhoneNumber>,
    pub fax_number: Option<PhoneNumber>,
    pub npi: Option<String>,
    pub order_type: OrderType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClinicalProviderSearchResult {
    pub clinical_provider_id: Option<String>,
    pub provider_name: Option<Name>,
    pub organization_name: Option<String>,
    pub address: Option<Address>,
    pub distance: Option<f64>,
    pub phone_number: Option<PhoneNumber>,
    pub fax_number: Option<PhoneNumber>,
    pub ncpdp_id: Option<String>,
    pub npi: Option<String>,
    pub pharmacy_type: Option<String>,
    pub order_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientOrder {
    pub order_id: Option<String>,
    pub encounter_id: Option<String>,
}
