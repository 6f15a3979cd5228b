//! Insurance records and eligibility data.

use serde::{Deserialize, Serialize};

use super::common::{Date, Name, Sex};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insurance {
    pub patient_id: Option<String>,
    pub department_id: Option<String>,
    /// Member id printed on the card.
    pub member_id: Option<String>,
    pub package_id: Option<i64>,
    pub group_id: Option<i64>,
    pub update_appointments: Option<bool>,
    pub primary_insurance_holder: Option<PrimaryInsuranceHolder>,
    /// Identifier assigned by the remote EHR.
    pub insurance_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimaryInsuranceHolder {
    pub name: Option<Name>,
    pub date_of_birth: Option<Date>,
    pub sex: Option<Sex>,
    pub relation: Option<RelationToPatient>,
}

/// Relationship of the insured to the patient.
///
/// Discriminants are the remote EHR's relationship ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum RelationToPatient {
    SelfRelation = 1,
    Spouse = 2,
    Child = 3,
    Other = 4,
    Grandparent = 5,
    Grandchild = 6,
    NephewOrNiece = 7,
    FosterChild = 9,
    Ward = 10,
    Stepchild = 11,
    Employee = 12,
    Unknown = 13,
    HandicappedDependent = 14,
    SponsoredDependent = 15,
    DependentOfMinorDependent = 16,
    SignificantOther = 17,
    Mother = 18,
    Father = 19,
    EmancipatedMinor = 21,
    OrganDonor = 22,
    CadaverDonor = 23,
    InjuredPlaintiff = 24,
    ChildNotFinanciallyResponsible = 25,
    LifePartner = 26,
}

impl RelationToPatient {
    pub const ALL: [Self; 24] = [
        Self::SelfRelation,
        Self::Spouse,
        Self::Child,
        Self::Other,
        Self::Grandparent,
        Self::Grandchild,
        Self::NephewOrNiece,
        Self::FosterChild,
        Self::Ward,
        Self::Stepchild,
        Self::Employee,
        Self::Unknown,
        Self::HandicappedDependent,
        Self::SponsoredDependent,
        Self::DependentOfMinorDependent,
        Self::SignificantOther,
        Self::Mother,
        Self::Father,
        Self::EmancipatedMinor,
        Self::OrganDonor,
        Self::CadaverDonor,
        Self::InjuredPlaintiff,
        Self::ChildNotFinanciallyResponsible,
        Self::LifePartner,
    ];

    pub const fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBenefitDetails {
    /// Raw ANSI X12 271 eligibility response.
    pub eligibility_data: String,
    pub date_of_service: Option<Date>,
    pub last_check_date: Option<Date>,
}
