//! US phone-number normalisation.
//!
//! The remote system stores phone numbers as free text. Inbound values are
//! reduced to ten NANP digits and rendered as `(AAA) EEE-NNNN`; outbound
//! values are rendered the same way.

use ehrbridge_spec::types::{PhoneNumber, PhoneNumberKind};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::EhrError;

/// Country code stored alongside every normalised number.
pub const US_COUNTRY_CODE: i32 = 1;

static NANP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\+?1[\s.-]?)?\(?([2-9]\d{2})\)?[\s.-]?(\d{3})[\s.-]?(\d{4})\s*$")
        .expect("phone pattern compiles")
});

/// Canonical national rendering of a raw number.
pub fn normalize_phone(raw: &str) -> Result<String, EhrError> {
    let caps = NANP
        .captures(raw)
        .ok_or_else(|| EhrError::internal(format!("invalid phone number {raw:?}")))?;
    Ok(format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]))
}

/// Parse an optional wire phone value; absent or empty yields `None`.
pub fn parse_phone(
    kind: PhoneNumberKind,
    raw: Option<&str>,
) -> Result<Option<PhoneNumber>, EhrError> {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => Ok(Some(PhoneNumber {
            kind,
            country_code: Some(US_COUNTRY_CODE),
            number: Some(normalize_phone(raw)?),
        })),
    }
}

/// Wire rendering of a domain phone number.
pub fn format_phone(phone: Option<&PhoneNumber>) -> Result<Option<String>, EhrError> {
    match phone.and_then(|p| p.number.as_deref()) {
        None | Some("") => Ok(None),
        Some(number) => normalize_phone(number).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_common_spellings() {
        for raw in [
            "5556666888",
            "555-666-6888",
            "(555) 666-6888",
            "+1 555 666 6888",
            "1.555.666.6888",
        ] {
            assert_eq!(normalize_phone(raw).unwrap(), "(555) 666-6888", "{raw}");
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        for raw in ["555666688", "155566668881", "0556666888", "phone"] {
            assert!(normalize_phone(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn parse_sets_country_code_and_kind() {
        let phone = parse_phone(PhoneNumberKind::Mobile, Some("5556666888"))
            .unwrap()
            .unwrap();
        assert_eq!(phone.kind, PhoneNumberKind::Mobile);
        assert_eq!(phone.country_code, Some(1));
        assert_eq!(phone.number.as_deref(), Some("(555) 666-6888"));
        assert_eq!(parse_phone(PhoneNumberKind::Home, Some("")).unwrap(), None);
    }

    #[test]
    fn format_renders_national() {
        let phone = PhoneNumber {
            kind: PhoneNumberKind::Home,
            country_code: Some(1),
            number: Some("555.666.6888".into()),
        };
        assert_eq!(
            format_phone(Some(&phone)).unwrap().as_deref(),
            Some("(555) 666-6888")
        );
        assert_eq!(format_phone(None).unwrap(), None);
    }
}
