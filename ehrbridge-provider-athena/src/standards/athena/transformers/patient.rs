//! Patient converters.

use ehrbridge_spec::types::{
    Address, ChangedPatient, ContactInfo, EmergencyContact, EnhancedBestMatchRequest,
    EnhancedBestMatchResult, GenderIdentity, GenderIdentityCategory, Guarantor, Name, Patient,
    PhoneNumber, PhoneNumberKind, SearchPatientsResult,
};
use serde_json::Value;

use super::{address_from_athena, address_to_athena, name_from_athena, name_to_athena, non_empty};
use crate::encoding::phone::{format_phone, parse_phone};
use crate::encoding::scalars::{
    format_bool, format_date, format_date_opt, format_f64, parse_bool_strict, parse_date,
    parse_i32,
};
use crate::error::EhrError;
use crate::standards::athena::types::{
    AthenaChangedPatient, AthenaContactInfo, AthenaEmergencyContact, AthenaEnhancedBestMatchRequest,
    AthenaEnhancedBestMatchResult, AthenaGuarantor, AthenaPatient, AthenaSearchPatientResult,
};
use crate::standards::athena::utils::{
    birth_sex_code, birth_sex_from_code, gender_identity_from_label, gender_identity_label,
};

pub fn patient_from_athena(patient: &AthenaPatient) -> Result<Patient, EhrError> {
    let date_of_birth = parse_date("dob", patient.dob.as_deref())?;
    let contact_info = contact_info_from_athena(patient)?;
    let guarantor = guarantor_from_athena(&patient.guarantor)?;
    let portal_access_given =
        parse_bool_strict("portalaccessgiven", patient.portal_access_given.as_deref())?;

    Ok(Patient {
        patient_id: patient.patient_id.clone(),
        name: name_from_athena(&patient.name),
        date_of_birth,
        sex: patient.sex.clone(),
        contact_info,
        emergency_contact: emergency_contact_from_athena(&patient.emergency_contact),
        guarantor,
        department_id: patient.department_id.clone(),
        primary_provider_id: patient.primary_provider_id.clone(),
        portal_access_given,
        birth_sex: patient.birth_sex.as_deref().and_then(birth_sex_from_code),
        gender_identity: gender_identity_from_athena(patient),
    })
}

fn contact_info_from_athena(patient: &AthenaPatient) -> Result<Option<ContactInfo>, EhrError> {
    let contact = &patient.contact_info;
    Ok(non_empty(ContactInfo {
        home_number: parse_phone(PhoneNumberKind::Home, contact.home_phone.as_deref())?,
        mobile_number: parse_phone(PhoneNumberKind::Mobile, contact.mobile_phone.as_deref())?,
        work_number: parse_phone(PhoneNumberKind::Work, contact.work_phone.as_deref())?,
        email: contact.email.clone(),
        address: address_from_athena(&patient.address),
    }))
}

fn emergency_contact_from_athena(contact: &AthenaEmergencyContact) -> Option<EmergencyContact> {
    non_empty(EmergencyContact {
        contact_name: contact.name.clone(),
        contact_relationship: contact.relationship.clone(),
        contact_mobile_phone: contact.mobile_phone.clone(),
    })
}

fn guarantor_from_athena(guarantor: &AthenaGuarantor) -> Result<Option<Guarantor>, EhrError> {
    if guarantor == &AthenaGuarantor::default() {
        return Ok(None);
    }

    let name = non_empty(Name {
        given_name: guarantor.first_name.clone(),
        family_name: guarantor.last_name.clone(),
        middle_name_or_initial: guarantor.middle_name.clone(),
        preferred_name: None,
        suffix: guarantor.suffix.clone(),
    });
    let address = non_empty(Address {
        address_line_one: guarantor.address_line_one.clone(),
        address_line_two: guarantor.address_line_two.clone(),
        city: guarantor.city.clone(),
        state: guarantor.state.clone(),
        zip_code: guarantor.zip_code.clone(),
    });
    let contact_info = non_empty(ContactInfo {
        home_number: parse_phone(PhoneNumberKind::Home, guarantor.phone.as_deref())?,
        email: guarantor.email.clone(),
        address,
        ..Default::default()
    });

    Ok(Some(Guarantor {
        name,
        date_of_birth: parse_date("guarantordob", guarantor.dob.as_deref())?,
        contact_info,
        relationship_to_patient: guarantor.relationship_to_patient.clone(),
        same_address_as_patient: parse_bool_strict(
            "guarantoraddresssameaspatient",
            guarantor.address_same_as_patient.as_deref(),
        )?,
    }))
}

fn gender_identity_from_athena(patient: &AthenaPatient) -> Option<GenderIdentity> {
    let label = patient.gender_identity.as_deref().filter(|l| !l.is_empty())?;
    let category = gender_identity_from_label(label);
    let other_details = match category {
        GenderIdentityCategory::Other => patient.gender_identity_other.clone(),
        _ => None,
    };
    Some(GenderIdentity {
        category,
        other_details,
    })
}

/// Wire record for create/update. The patient id travels in the path, never
/// in the body.
pub fn patient_to_athena(patient: &Patient) -> Result<AthenaPatient, EhrError> {
    let contact = patient.contact_info.as_ref();

    let contact_info = match contact {
        Some(contact) => AthenaContactInfo {
            home_phone: format_phone(contact.home_number.as_ref())?,
            mobile_phone: format_phone(contact.mobile_number.as_ref())?,
            work_phone: format_phone(contact.work_number.as_ref())?,
            email: contact.email.clone(),
        },
        None => AthenaContactInfo::default(),
    };

    let emergency_contact = patient
        .emergency_contact
        .as_ref()
        .map(|c| AthenaEmergencyContact {
            name: c.contact_name.clone(),
            relationship: c.contact_relationship.clone(),
            mobile_phone: c.contact_mobile_phone.clone(),
        })
        .unwrap_or_default();

    let guarantor = match &patient.guarantor {
        Some(guarantor) => guarantor_to_athena(guarantor)?,
        None => AthenaGuarantor::default(),
    };

    let (gender_identity, gender_identity_other) = match &patient.gender_identity {
        Some(identity) => (
            gender_identity_label(identity.category).map(str::to_string),
            identity.other_details.clone(),
        ),
        None => (None, None),
    };

    Ok(AthenaPatient {
        patient_id: None,
        dob: format_date_opt(patient.date_of_birth.as_ref()),
        sex: patient.sex.clone(),
        name: name_to_athena(patient.name.as_ref()),
        contact_info,
        address: address_to_athena(contact.and_then(|c| c.address.as_ref())),
        emergency_contact,
        guarantor,
        department_id: patient.department_id.clone(),
        primary_provider_id: patient.primary_provider_id.clone(),
        portal_access_given: format_bool(patient.portal_access_given),
        gender_identity,
        gender_identity_other,
        birth_sex: patient.birth_sex.map(|s| birth_sex_code(s).to_string()),
    })
}

fn guarantor_to_athena(guarantor: &Guarantor) -> Result<AthenaGuarantor, EhrError> {
    let name = guarantor.name.as_ref();
    let contact = guarantor.contact_info.as_ref();
    let address = contact.and_then(|c| c.address.as_ref());
    Ok(AthenaGuarantor {
        first_name: name.and_then(|n| n.given_name.clone()),
        middle_name: name.and_then(|n| n.middle_name_or_initial.clone()),
        last_name: name.and_then(|n| n.family_name.clone()),
        suffix: name.and_then(|n| n.suffix.clone()),
        dob: format_date_opt(guarantor.date_of_birth.as_ref()),
        phone: format_phone(contact.and_then(|c| c.home_number.as_ref()))?,
        email: contact.and_then(|c| c.email.clone()),
        address_line_one: address.and_then(|a| a.address_line_one.clone()),
        address_line_two: address.and_then(|a| a.address_line_two.clone()),
        city: address.and_then(|a| a.city.clone()),
        state: address.and_then(|a| a.state.clone()),
        zip_code: address.and_then(|a| a.zip_code.clone()),
        address_same_as_patient: format_bool(guarantor.same_address_as_patient),
        relationship_to_patient: guarantor.relationship_to_patient.clone(),
    })
}

/// Validates phone kinds and requires a date of birth.
pub fn enhanced_best_match_request_to_athena(
    request: &EnhancedBestMatchRequest,
) -> Result<AthenaEnhancedBestMatchRequest, EhrError> {
    let dob = request
        .date_of_birth
        .as_ref()
        .map(format_date)
        .ok_or_else(|| EhrError::invalid_argument("date of birth cannot be empty"))?;
    check_phone_kind(
        request.home_phone_number.as_ref(),
        PhoneNumberKind::Home,
        "home phone number field must have home phone number type",
    )?;
    check_phone_kind(
        request.mobile_phone_number.as_ref(),
        PhoneNumberKind::Mobile,
        "mobile phone number field must have mobile phone number type",
    )?;

    Ok(AthenaEnhancedBestMatchRequest {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        dob,
        zip: request.zip_code.clone(),
        home_phone: format_phone(request.home_phone_number.as_ref())?,
        mobile_phone: format_phone(request.mobile_phone_number.as_ref())?,
        guarantor_phone: format_phone(request.guarantor_phone_number.as_ref())?,
        email: request.email.clone(),
        guarantor_email: request.guarantor_email.clone(),
        department_id: request.department_id.clone(),
        minimum_score: request.minimum_score,
        use_soundex_search: request.use_soundex_search,
        return_best_matches: request.return_best_matches,
    })
}

fn check_phone_kind(
    phone: Option<&PhoneNumber>,
    expected: PhoneNumberKind,
    message: &str,
) -> Result<(), EhrError> {
    match phone {
        Some(phone) if phone.kind != expected => Err(EhrError::invalid_argument(message)),
        _ => Ok(()),
    }
}

pub fn enhanced_best_match_result_from_athena(
    result: &AthenaEnhancedBestMatchResult,
) -> Result<EnhancedBestMatchResult, EhrError> {
    let patient = patient_from_athena(&result.patient)?;
    let score = match &result.score {
        Some(Value::Number(n)) => n.as_f64().map(format_f64).ok_or_else(|| {
            EhrError::internal(format!("unrecognizable athena score format: {n}"))
        })?,
        Some(Value::String(s)) => s.clone(),
        other => {
            return Err(EhrError::internal(format!(
                "unrecognizable athena score format: {}",
                other.as_ref().map(Value::to_string).unwrap_or_else(|| "absent".into())
            )));
        }
    };
    Ok(EnhancedBestMatchResult { patient, score })
}

pub fn search_patient_result_from_athena(
    result: &AthenaSearchPatientResult,
) -> Result<SearchPatientsResult, EhrError> {
    let address = if result.address1.is_none()
        && result.city.is_none()
        && result.state.is_none()
        && result.zip.is_none()
    {
        None
    } else {
        Some(Address {
            address_line_one: result.address1.clone(),
            address_line_two: result.address2.clone(),
            city: result.city.clone(),
            state: result.state.clone(),
            zip_code: result.zip.clone(),
        })
    };

    let home_number = if result.home_phone.is_none() && result.country_id.is_none() {
        None
    } else {
        Some(PhoneNumber {
            kind: PhoneNumberKind::Home,
            country_code: parse_i32("countryid", result.country_id.as_deref())?,
            number: result.home_phone.clone(),
        })
    };

    let patient = Patient {
        patient_id: result.patient_id.clone(),
        name: Some(Name {
            given_name: result.first_name.clone(),
            family_name: result.last_name.clone(),
            middle_name_or_initial: result.middle_initial.clone(),
            preferred_name: None,
            suffix: result.name_suffix.clone(),
        }),
        date_of_birth: parse_date("dob", result.dob.as_deref())?,
        sex: result.sex.clone(),
        contact_info: Some(ContactInfo {
            home_number,
            address,
            ..Default::default()
        }),
        department_id: result.current_department_id.clone(),
        ..Default::default()
    };
    Ok(SearchPatientsResult { patient })
}

pub fn changed_patient_from_athena(patient: &AthenaChangedPatient) -> ChangedPatient {
    ChangedPatient {
        department_id: patient.department_id.clone(),
        patient_id: patient.patient_id.clone(),
        previous_patient_ids: patient.previous_patient_ids.clone(),
    }
}
