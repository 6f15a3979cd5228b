//! Insurance converters.

use ehrbridge_spec::types::{Insurance, InsuranceBenefitDetails, Name, PrimaryInsuranceHolder};

use super::non_empty;
use crate::encoding::scalars::{
    format_bool, format_date_opt, format_i64, parse_bool_strict, parse_date, parse_i64,
};
use crate::error::EhrError;
use crate::standards::athena::types::{
    AthenaInsuranceBenefitDetails, AthenaInsuranceHolder, AthenaInsuranceHolderName,
    AthenaPatientInsurance,
};
use crate::standards::athena::utils::{relation_from_id, relation_id, sex_code, sex_from_code};

pub fn insurance_from_athena(record: &AthenaPatientInsurance) -> Result<Insurance, EhrError> {
    Ok(Insurance {
        patient_id: None,
        department_id: record.department_id.clone(),
        member_id: record.member_id.clone(),
        package_id: parse_i64("insurancepackageid", record.package_id.as_deref())?,
        group_id: parse_i64("policynumber", record.policy_number.as_deref())?,
        update_appointments: parse_bool_strict(
            "updateappointments",
            record.update_appointments.as_deref(),
        )?,
        primary_insurance_holder: holder_from_athena(&record.holder)?,
        insurance_id: record.insurance_id.clone(),
    })
}

fn holder_from_athena(
    holder: &AthenaInsuranceHolder,
) -> Result<Option<PrimaryInsuranceHolder>, EhrError> {
    if holder == &AthenaInsuranceHolder::default() {
        return Ok(None);
    }
    Ok(Some(PrimaryInsuranceHolder {
        name: non_empty(Name {
            given_name: holder.name.first_name.clone(),
            middle_name_or_initial: holder.name.middle_name.clone(),
            family_name: holder.name.last_name.clone(),
            ..Default::default()
        }),
        date_of_birth: parse_date("insurancepolicyholderdob", holder.dob.as_deref())?,
        sex: holder.sex.as_deref().and_then(sex_from_code),
        relation: relation_from_id(holder.relationship_to_insured_id.as_deref())?,
    }))
}

/// Wire record for create/update. athena's own insurance id travels in the
/// path, never in the body.
pub fn insurance_to_athena(insurance: &Insurance) -> AthenaPatientInsurance {
    AthenaPatientInsurance {
        department_id: insurance.department_id.clone(),
        member_id: insurance.member_id.clone(),
        package_id: format_i64(insurance.package_id),
        policy_number: format_i64(insurance.group_id),
        update_appointments: format_bool(insurance.update_appointments),
        insurance_id: None,
        holder: insurance
            .primary_insurance_holder
            .as_ref()
            .map(holder_to_athena)
            .unwrap_or_default(),
    }
}

fn holder_to_athena(holder: &PrimaryInsuranceHolder) -> AthenaInsuranceHolder {
    let name = holder.name.as_ref();
    AthenaInsuranceHolder {
        name: AthenaInsuranceHolderName {
            first_name: name.and_then(|n| n.given_name.clone()),
            middle_name: name.and_then(|n| n.middle_name_or_initial.clone()),
            last_name: name.and_then(|n| n.family_name.clone()),
        },
        dob: format_date_opt(holder.date_of_birth.as_ref()),
        sex: holder.sex.map(|s| sex_code(s).to_string()),
        relationship_to_insured_id: relation_id(holder.relation),
    }
}

pub fn insurance_benefit_details_from_athena(
    details: &AthenaInsuranceBenefitDetails,
) -> Result<InsuranceBenefitDetails, EhrError> {
    let eligibility_data = details
        .eligibility_data
        .clone()
        .ok_or_else(|| EhrError::internal("insurance benefit details are missing ansi271"))?;
    Ok(InsuranceBenefitDetails {
        eligibility_data,
        date_of_service: parse_date("dateofservice", details.date_of_service.as_deref())?,
        last_check_date: parse_date("lastcheckdate", details.last_check_date.as_deref())?,
    })
}
