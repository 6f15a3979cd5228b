//! athena structural converters
//!
//! `*_from_athena` functions turn decoded wire records into domain values and
//! `*_to_athena` functions build the wire records sent as query strings or
//! form bodies. Every parse failure is an `Internal` error naming the field;
//! nothing silently falls back to a default.

pub mod clinical;
pub mod insurance;
pub mod lab;
pub mod patient;
pub mod payment;

pub use clinical::*;
pub use insurance::*;
pub use lab::*;
pub use patient::*;
pub use payment::*;

use ehrbridge_spec::types::{Address, Name};

use super::types::{AthenaAddress, AthenaName};

/// `None` for a value equal to its default, so empty sub-records vanish.
pub(crate) fn non_empty<T: Default + PartialEq>(value: T) -> Option<T> {
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

pub(crate) fn name_from_athena(name: &AthenaName) -> Option<Name> {
    non_empty(Name {
        given_name: name.first_name.clone(),
        family_name: name.last_name.clone(),
        middle_name_or_initial: name.middle_name.clone(),
        preferred_name: name.preferred_name.clone(),
        suffix: name.suffix.clone(),
    })
}

pub(crate) fn name_to_athena(name: Option<&Name>) -> AthenaName {
    let Some(name) = name else {
        return AthenaName::default();
    };
    AthenaName {
        first_name: name.given_name.clone(),
        last_name: name.family_name.clone(),
        middle_name: name.middle_name_or_initial.clone(),
        preferred_name: name.preferred_name.clone(),
        suffix: name.suffix.clone(),
    }
}

pub(crate) fn address_from_athena(address: &AthenaAddress) -> Option<Address> {
    non_empty(Address {
        address_line_one: address.address_line_one.clone(),
        address_line_two: address.address_line_two.clone(),
        city: address.city.clone(),
        state: address.state.clone(),
        zip_code: address.zip_code.clone(),
    })
}

pub(crate) fn address_to_athena(address: Option<&Address>) -> AthenaAddress {
    let Some(address) = address else {
        return AthenaAddress::default();
    };
    AthenaAddress {
        address_line_one: address.address_line_one.clone(),
        address_line_two: address.address_line_two.clone(),
        city: address.city.clone(),
        state: address.state.clone(),
        zip_code: address.zip_code.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_records_collapse() {
        assert_eq!(name_from_athena(&AthenaName::default()), None);
        assert_eq!(address_from_athena(&AthenaAddress::default()), None);
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty(1u8), Some(1));
    }

    #[test]
    fn address_round_trips() {
        let wire = AthenaAddress {
            address_line_one: Some("1 Main St".into()),
            city: Some("Denver".into()),
            zip_code: Some("80202".into()),
            ..Default::default()
        };
        let domain = address_from_athena(&wire).unwrap();
        assert_eq!(address_to_athena(Some(&domain)), wire);
    }
}
