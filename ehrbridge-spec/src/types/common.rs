//! Building blocks reused across the domain model.

use serde::{Deserialize, Serialize};

/// Calendar date with explicit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// Wall-clock date and time.
///
/// `utc_offset_seconds` is only populated when the source carried an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub utc_offset_seconds: Option<i32>,
}

impl DateTime {
    pub const fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub middle_name_or_initial: Option<String>,
    pub preferred_name: Option<String>,
    pub suffix: Option<String>,
}

impl Name {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PhoneNumberKind {
    #[default]
    Unspecified,
    Home,
    Mobile,
    Work,
}

/// Phone number in canonical national format, e.g. `(555) 067-6888`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub kind: PhoneNumberKind,
    pub country_code: Option<i32>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirthSex {
    Male,
    Female,
    Undisclosed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenderIdentityCategory {
    #[default]
    Unspecified,
    Male,
    Female,
    MaleToFemale,
    FemaleToMale,
    NonBinary,
    Undisclosed,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenderIdentity {
    pub category: GenderIdentityCategory,
    /// Free text; only meaningful for [`GenderIdentityCategory::Other`].
    pub other_details: Option<String>,
}
