//! Care team, pharmacy, clinical provider and order converters.

use ehrbridge_spec::types::{
    Address, CareTeam, CareTeamMember, ClinicalProvider, ClinicalProviderSearchResult, Name,
    PatientOrder, Pharmacy, PhoneNumberKind, RecipientClass, RecipientClassesPage,
    SearchClinicalProvidersRequest,
};

use super::non_empty;
use crate::encoding::phone::{format_phone, parse_phone};
use crate::encoding::scalars::parse_f64;
use crate::error::EhrError;
use crate::standards::athena::types::{
    AthenaCareTeam, AthenaCareTeamMember, AthenaClinicalProvider, AthenaPatientOrder,
    AthenaPharmacy, AthenaRecipientClass, AthenaRecipientClassesResponse,
};
use crate::standards::athena::utils::order_type_label;

pub fn care_team_from_athena(team: &AthenaCareTeam) -> Result<CareTeam, EhrError> {
    let members = team
        .members
        .iter()
        .map(care_team_member_from_athena)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CareTeam {
        members,
        note: team.note.clone(),
    })
}

pub fn care_team_member_from_athena(
    member: &AthenaCareTeamMember,
) -> Result<CareTeamMember, EhrError> {
    let phone = parse_phone(PhoneNumberKind::Home, member.phone_number.as_deref())
        .map_err(|e| e.with_context("unable to parse care team member phone number"))?;

    let address = if member.address1.is_none()
        && member.address2.is_none()
        && member.city.is_none()
        && member.state.is_none()
        && member.zip.is_none()
    {
        None
    } else {
        Some(Address {
            address_line_one: member.address1.clone(),
            address_line_two: member.address2.clone(),
            city: member.city.clone(),
            state: member.state.clone(),
            zip_code: member.zip.clone(),
        })
    };

    Ok(CareTeamMember {
        member_id: member.member_id.clone(),
        clinical_provider_id: member.clinical_provider_id.clone(),
        facility_id: member.facility_id.clone(),
        provider_id: member.provider_id.clone(),
        ansi_specialty_name: member.ansi_specialty_name.clone(),
        display_name: member.name.clone(),
        name: non_empty(Name {
            given_name: member.first_name.clone(),
            family_name: member.last_name.clone(),
            middle_name_or_initial: member.middle_name.clone(),
            preferred_name: member.preferred_name.clone(),
            suffix: member.suffix.clone(),
        }),
        address,
        country: member.country.clone(),
        fax: member.fax.clone(),
        npi: member.npi.clone(),
        phone,
        recipient_class: member.recipient_class.as_ref().map(recipient_class_from_athena),
    })
}

pub fn recipient_class_from_athena(class: &AthenaRecipientClass) -> RecipientClass {
    RecipientClass {
        code: class.code.clone(),
        description: class.description.clone(),
    }
}

pub fn recipient_classes_page_from_athena(
    response: &AthenaRecipientClassesResponse,
) -> RecipientClassesPage {
    RecipientClassesPage {
        recipient_classes: response
            .recipient_classes
            .iter()
            .map(recipient_class_from_athena)
            .collect(),
        previous: response.previous.clone(),
        next: response.next.clone(),
    }
}

pub fn pharmacy_from_athena(pharmacy: &AthenaPharmacy) -> Result<Pharmacy, EhrError> {
    let phone_number = parse_phone(PhoneNumberKind::Work, pharmacy.phone_number.as_deref())
        .map_err(|e| e.with_context("unable to parse pharmacy phone number"))?;
    Ok(Pharmacy {
        pharmacy_type: pharmacy.pharmacy_type.clone(),
        default_pharmacy: pharmacy.default_pharmacy.clone(),
        address: Some(Address {
            address_line_one: pharmacy.address1.clone(),
            address_line_two: pharmacy.address2.clone(),
            city: pharmacy.city.clone(),
            state: pharmacy.state.clone(),
            zip_code: pharmacy.zip.clone(),
        }),
        receiver_type: pharmacy.receiver_type.clone(),
        accept_fax: pharmacy.accept_fax.clone(),
        clinical_provider: Some(ClinicalProvider {
            id: pharmacy.clinical_provider_id.clone(),
            name: pharmacy.clinical_provider_name.clone(),
        }),
        phone_number,
        fax_number: pharmacy.fax_number.clone(),
    })
}

pub fn pharmacies_from_athena(pharmacies: &[AthenaPharmacy]) -> Result<Vec<Pharmacy>, EhrError> {
    pharmacies.iter().map(pharmacy_from_athena).collect()
}

/// Search query. Phone and fax numbers are sent in national format.
pub fn clinical_provider_search_to_athena(
    request: &SearchClinicalProvidersRequest,
) -> Result<AthenaClinicalProvider, EhrError> {
    Ok(AthenaClinicalProvider {
        name: request.name.clone(),
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        city: request.city.clone(),
        state: request.state.clone(),
        address: request
            .address
            .as_ref()
            .and_then(|a| a.address_line_one.clone()),
        zip: request.zip.clone(),
        phone_number: format_phone(request.phone_number.as_ref())?,
        fax_number: format_phone(request.fax_number.as_ref())?,
        npi: request.npi.clone(),
        distance: request.distance.map(|d| d.to_string()),
        order_type: order_type_label(request.order_type).map(str::to_string),
        ..Default::default()
    })
}

pub fn clinical_provider_from_athena(
    provider: &AthenaClinicalProvider,
) -> Result<ClinicalProviderSearchResult, EhrError> {
    let fax_number = parse_phone(PhoneNumberKind::Home, provider.fax_number.as_deref())
        .map_err(|e| e.with_context("unable to parse clinical provider fax number"))?;
    let phone_number = parse_phone(PhoneNumberKind::Home, provider.phone_number.as_deref())
        .map_err(|e| e.with_context("unable to parse clinical provider phone number"))?;
    let distance = parse_f64("distance", provider.distance.as_deref())?;

    Ok(ClinicalProviderSearchResult {
        clinical_provider_id: provider.id.clone(),
        provider_name: non_empty(Name {
            given_name: provider.first_name.clone(),
            family_name: provider.last_name.clone(),
            ..Default::default()
        }),
        organization_name: provider.name.clone(),
        address: non_empty(Address {
            address_line_one: provider.address.clone(),
            city: provider.city.clone(),
            state: provider.state.clone(),
            zip_code: provider.zip.clone(),
            ..Default::default()
        }),
        distance,
        phone_number,
        fax_number,
        ncpdp_id: provider.ncpdp_id.clone(),
        npi: provider.npi.clone(),
        pharmacy_type: provider.pharmacy_type.clone(),
        order_type: provider.order_type.clone(),
    })
}

pub fn patient_order_from_athena(order: &AthenaPatientOrder) -> PatientOrder {
    PatientOrder {
        order_id: order.order_id.clone(),
        encounter_id: order.encounter_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::WireValues;
    use ehrbridge_spec::types::{OrderType, PhoneNumber};

    #[test]
    fn care_team_member_from_wire() {
        let member: AthenaCareTeamMember = serde_json::from_value(serde_json::json!({
            "memberid": "4",
            "clinicalproviderid": "12",
            "name": "Dr. Who",
            "firstname": "John",
            "lastname": "Smith",
            "phonenumber": "5556666888",
            "npi": "1234567890",
            "recipientclass": {"code": "PCP", "description": "Primary care"}
        }))
        .unwrap();
        let member = care_team_member_from_athena(&member).unwrap();
        assert_eq!(member.display_name.as_deref(), Some("Dr. Who"));
        assert_eq!(member.address, None);
        let phone = member.phone.unwrap();
        assert_eq!(phone.kind, PhoneNumberKind::Home);
        assert_eq!(phone.number.as_deref(), Some("(555) 666-6888"));
        assert_eq!(
            member.recipient_class.and_then(|c| c.code).as_deref(),
            Some("PCP")
        );
    }

    #[test]
    fn bad_care_team_phone_names_the_field() {
        let member = AthenaCareTeamMember {
            phone_number: Some("123".into()),
            ..Default::default()
        };
        let err = care_team_member_from_athena(&member).unwrap_err();
        assert!(err.message().starts_with("unable to parse care team member phone number"));
    }

    #[test]
    fn pharmacy_from_wire() {
        let pharmacy: AthenaPharmacy = serde_json::from_value(serde_json::json!({
            "pharmacytype": "RETAIL",
            "defaultpharmacy": "true",
            "clinicalproviderid": "10809198",
            "clinicalprovidername": "Walgreens",
            "phonenumber": "3035550123",
            "city": "Denver"
        }))
        .unwrap();
        let pharmacy = pharmacy_from_athena(&pharmacy).unwrap();
        assert_eq!(pharmacy.phone_number.unwrap().kind, PhoneNumberKind::Work);
        let provider = pharmacy.clinical_provider.unwrap();
        assert_eq!(provider.id.as_deref(), Some("10809198"));
        assert_eq!(provider.name.as_deref(), Some("Walgreens"));
    }

    #[test]
    fn search_request_to_wire() {
        let request = SearchClinicalProvidersRequest {
            name: Some("Walgreens".into()),
            zip: Some("80202".into()),
            distance: Some(25),
            phone_number: Some(PhoneNumber {
                kind: PhoneNumberKind::Work,
                country_code: Some(1),
                number: Some("3035550123".into()),
            }),
            address: Some(Address {
                address_line_one: Some("1 Main St".into()),
                ..Default::default()
            }),
            order_type: OrderType::Prescription,
            ..Default::default()
        };
        let values = WireValues::from_record(&clinical_provider_search_to_athena(&request).unwrap())
            .unwrap();
        assert_eq!(values.get("name"), Some("Walgreens"));
        assert_eq!(values.get("distance"), Some("25"));
        assert_eq!(values.get("phone"), Some("(303) 555-0123"));
        assert_eq!(values.get("address"), Some("1 Main St"));
        assert_eq!(values.get("ordertype"), Some("PRESCRIPTION"));
        assert_eq!(values.get("fax"), None);
    }

    #[test]
    fn search_result_from_wire() {
        let provider: AthenaClinicalProvider = serde_json::from_value(serde_json::json!({
            "clinicalproviderid": "77",
            "name": "Walgreens #123",
            "distance": "1.25",
            "phone": "3035550123",
            "ncpdpid": "0612345",
            "city": "Denver"
        }))
        .unwrap();
        let result = clinical_provider_from_athena(&provider).unwrap();
        assert_eq!(result.organization_name.as_deref(), Some("Walgreens #123"));
        assert_eq!(result.distance, Some(1.25));
        assert_eq!(result.provider_name, None);
        assert_eq!(result.address.and_then(|a| a.city).as_deref(), Some("Denver"));
    }

    #[test]
    fn bad_distance_fails() {
        let provider = AthenaClinicalProvider {
            distance: Some("far".into()),
            ..Default::default()
        };
        let err = clinical_provider_from_athena(&provider).unwrap_err();
        assert!(err.message().contains("distance"));
    }
}
