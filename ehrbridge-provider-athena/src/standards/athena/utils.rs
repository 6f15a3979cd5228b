//! athena enumeration tables
//!
//! athena spells enumerations as free-text labels or numeric ids. Each table
//! here is the single source for one direction of that mapping.

use crate::encoding::scalars::parse_i32;
use crate::error::EhrError;
use ehrbridge_spec::types::{
    BirthSex, GenderIdentityCategory, OrderType, RelationToPatient, Sex, SubscriptionStatus,
};

const GENDER_IDENTITY_LABELS: [(GenderIdentityCategory, &str); 7] = [
    (GenderIdentityCategory::Male, "Identifies as Male"),
    (GenderIdentityCategory::Female, "Identifies as Female"),
    (
        GenderIdentityCategory::MaleToFemale,
        "Transgender Female/Male-to-Female (MTF)",
    ),
    (
        GenderIdentityCategory::FemaleToMale,
        "Transgender Male/Female-to-Male (FTM)",
    ),
    (
        GenderIdentityCategory::NonBinary,
        "Gender non-conforming (neither exclusively male nor female)",
    ),
    (GenderIdentityCategory::Undisclosed, "Choose not to disclose"),
    (
        GenderIdentityCategory::Other,
        "Additional gender category / other, please specify",
    ),
];

/// athena label for a gender identity; `Unspecified` has none.
pub fn gender_identity_label(category: GenderIdentityCategory) -> Option<&'static str> {
    GENDER_IDENTITY_LABELS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, label)| *label)
}

/// Unknown labels map to `Unspecified`.
pub fn gender_identity_from_label(label: &str) -> GenderIdentityCategory {
    GENDER_IDENTITY_LABELS
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(c, _)| *c)
        .unwrap_or_default()
}

pub fn sex_code(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "M",
        Sex::Female => "F",
    }
}

pub fn sex_from_code(code: &str) -> Option<Sex> {
    match code {
        "M" => Some(Sex::Male),
        "F" => Some(Sex::Female),
        _ => None,
    }
}

pub fn birth_sex_code(sex: BirthSex) -> &'static str {
    match sex {
        BirthSex::Male => "M",
        BirthSex::Female => "F",
        BirthSex::Undisclosed => "N",
        BirthSex::Unknown => "U",
    }
}

pub fn birth_sex_from_code(code: &str) -> Option<BirthSex> {
    match code {
        "M" => Some(BirthSex::Male),
        "F" => Some(BirthSex::Female),
        "N" => Some(BirthSex::Undisclosed),
        "U" => Some(BirthSex::Unknown),
        _ => None,
    }
}

pub fn order_type_label(order_type: OrderType) -> Option<&'static str> {
    let label = match order_type {
        OrderType::Unspecified => return None,
        OrderType::Dme => "DME",
        OrderType::Imaging => "IMAGING",
        OrderType::Lab => "LAB",
        OrderType::Other => "OTHER",
        OrderType::Prescription => "PRESCRIPTION",
        OrderType::Procedure => "PROCEDURE",
        OrderType::Surgery => "SURGERY",
        OrderType::Vaccine => "VACCINE",
        OrderType::Consultant => "CONSULTANT",
        OrderType::Glasses => "GLASSES",
        OrderType::ContactLenses => "CONTACTLENSES",
    };
    Some(label)
}

/// Case-insensitive; anything unrecognised (or absent) is `Unspecified`.
pub fn subscription_status_from_label(label: Option<&str>) -> SubscriptionStatus {
    match label.map(str::to_ascii_uppercase).as_deref() {
        Some("ACTIVE") => SubscriptionStatus::Active,
        Some("INACTIVE") => SubscriptionStatus::Inactive,
        Some("PARTIAL") => SubscriptionStatus::Partial,
        _ => SubscriptionStatus::Unspecified,
    }
}

/// Parse athena's `relationshiptoinsuredid`.
pub fn relation_from_id(value: Option<&str>) -> Result<Option<RelationToPatient>, EhrError> {
    let Some(id) = parse_i32("relationshiptoinsuredid", value)? else {
        return Ok(None);
    };
    RelationToPatient::from_id(id).map(Some).ok_or_else(|| {
        EhrError::internal(format!(
            "relationship with id {id} not found in relation-to-patient table"
        ))
    })
}

pub fn relation_id(relation: Option<RelationToPatient>) -> Option<String> {
    relation.map(|r| r.id().to_string())
}
