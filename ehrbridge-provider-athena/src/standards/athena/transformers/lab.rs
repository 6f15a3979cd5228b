//! Lab result, lab document and change-feed converters.

use std::fmt::Write as _;

use ehrbridge_spec::types::{
    Address, Analyte, ChangedLabResult, ChangedParams, LabResult, LabResultDocument,
};

use super::non_empty;
use crate::encoding::scalars::{parse_bool_lenient, parse_date, parse_date_time, parse_rfc3339};
use crate::error::EhrError;
use crate::standards::athena::types::{
    AthenaAnalyte, AthenaChangedLabResult, AthenaChangedQuery, AthenaLabResult,
    AthenaLabResultDocument,
};

pub fn analyte_from_athena(analyte: &AthenaAnalyte) -> Result<Analyte, EhrError> {
    Ok(Analyte {
        observation_identifier: analyte.observation_identifier.clone(),
        result_status: analyte.result_status.clone(),
        name: analyte.name.clone(),
        date_time: parse_date_time("analytedatetime", analyte.date_time.as_deref())?,
        date: parse_date("analytedate", analyte.date.as_deref())?,
        value: analyte.value.clone(),
        units: analyte.units.clone(),
        description: analyte.description.clone(),
        loinc: analyte.loinc.clone(),
        note: analyte.note.clone(),
        id: analyte.id.clone(),
    })
}

fn analytes_from_athena(analytes: &[AthenaAnalyte]) -> Result<Vec<Analyte>, EhrError> {
    analytes.iter().map(analyte_from_athena).collect()
}

pub fn lab_result_from_athena(result: &AthenaLabResult) -> Result<LabResult, EhrError> {
    Ok(LabResult {
        id: result.id.clone(),
        priority: result.priority.clone(),
        date: parse_date("labresultdate", result.date.as_deref())?,
        date_time: parse_date_time("labresultdatetime", result.date_time.as_deref())?,
        result_status: result.result_status.clone(),
        is_reviewed_by_provider: parse_bool_lenient(
            "isreviewedbyprovider",
            result.is_reviewed_by_provider.as_deref(),
        )?,
        performing_lab_name: result.performing_lab_name.clone(),
        performing_lab_address: non_empty(Address {
            address_line_one: result.performing_lab_address1.clone(),
            city: result.performing_lab_city.clone(),
            state: result.performing_lab_state.clone(),
            zip_code: result.performing_lab_zip.clone(),
            ..Default::default()
        }),
        provider_id: result.provider_id.clone(),
        facility_id: result.facility_id.clone(),
        description: result.description.clone(),
        attachment_exists: parse_bool_lenient(
            "attachmentexists",
            result.attachment_exists.as_deref(),
        )?,
        loinc: result.loinc.clone(),
        analytes: analytes_from_athena(&result.analytes)?,
    })
}

pub fn lab_results_from_athena(results: &[AthenaLabResult]) -> Result<Vec<LabResult>, EhrError> {
    results.iter().map(lab_result_from_athena).collect()
}

/// `observationdatetime` is RFC 3339; an absent `isconfidental` means `false`.
pub fn lab_result_document_from_athena(
    document: &AthenaLabResultDocument,
) -> Result<LabResultDocument, EhrError> {
    Ok(LabResultDocument {
        id: document.id.clone(),
        department_id: document.department_id.clone(),
        document_route: document.document_route.clone(),
        document_source: document.document_source.clone(),
        document_type_id: document.document_type_id.clone(),
        encounter_date: parse_date("encounterdate", document.encounter_date.as_deref())?,
        encounter_id: document.encounter_id.clone(),
        facility_id: document.facility_id.clone(),
        is_confidential: parse_bool_lenient("isconfidental", document.is_confidential.as_deref())?
            .unwrap_or(false),
        loinc: document.loinc.clone(),
        observation_date_time: parse_rfc3339(
            "observationdatetime",
            document.observation_date_time.as_deref(),
        )?,
        observations: analytes_from_athena(&document.observations)?,
        performing_lab_name: document.performing_lab_name.clone(),
        provider_id: document.provider_id.clone(),
        order_id: document.order_id.clone(),
    })
}

pub fn changed_lab_result_from_athena(result: &AthenaChangedLabResult) -> ChangedLabResult {
    ChangedLabResult {
        lab_result_id: result.lab_result_id.clone(),
        department_id: result.department_id.clone(),
        encounter_id: result.encounter_id.clone(),
        patient_id: result.patient_id.clone(),
    }
}

pub fn changed_query_to_athena(params: &ChangedParams) -> AthenaChangedQuery {
    AthenaChangedQuery {
        leave_unprocessed: params.leave_unprocessed,
        show_processed_start_datetime: params.show_processed_start_datetime.clone(),
        show_processed_end_datetime: params.show_processed_end_datetime.clone(),
        limit: params.limit,
        offset: params.offset,
    }
}

/// HTML summary of analytes for an encounter note.
///
/// Analytes missing a name, value or units are skipped and logged.
pub fn generate_notes_from_analytes(lab_result_id: &str, analytes: &[Analyte]) -> String {
    let mut notes = format!(r#"<h3 id="lab-result-id-{lab_result_id}">Lab Results</h3><ul>"#);
    for analyte in analytes {
        match (&analyte.name, &analyte.value, &analyte.units) {
            (Some(name), Some(value), Some(units)) => {
                let _ = write!(notes, "<li>{name}: {value}{units}</li>");
            }
            _ => tracing::warn!(
                lab_result_id,
                name = ?analyte.name,
                value = ?analyte.value,
                units = ?analyte.units,
                "skipping analyte with missing required field"
            ),
        }
    }
    notes.push_str("</ul>");
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::WireValues;
    use ehrbridge_spec::types::Date;
    use tracing_test::traced_test;

    #[test]
    fn lab_result_from_wire() {
        let result: AthenaLabResult = serde_json::from_value(serde_json::json!({
            "labresultid": "1001",
            "labresultdate": "03/01/2023",
            "labresultdatetime": "03/01/2023 10:15:00",
            "isreviewedbyprovider": "1",
            "attachmentexists": "false",
            "performinglabname": "Quest",
            "performinglabcity": "Denver",
            "analytes": [
                {"analytename": "Glucose", "value": "99", "units": "mg/dL", "analytedate": "03/01/2023"}
            ]
        }))
        .unwrap();
        let result = lab_result_from_athena(&result).unwrap();
        assert_eq!(result.date, Some(Date::new(2023, 3, 1)));
        assert_eq!(result.date_time.map(|d| d.hours), Some(10));
        assert_eq!(result.is_reviewed_by_provider, Some(true));
        assert_eq!(result.attachment_exists, Some(false));
        assert_eq!(
            result.performing_lab_address.and_then(|a| a.city).as_deref(),
            Some("Denver")
        );
        assert_eq!(result.analytes[0].units.as_deref(), Some("mg/dL"));
    }

    #[test]
    fn absent_flags_stay_absent() {
        let result = lab_result_from_athena(&AthenaLabResult::default()).unwrap();
        assert_eq!(result.is_reviewed_by_provider, None);
        assert_eq!(result.attachment_exists, None);
        assert_eq!(result.performing_lab_address, None);
    }

    #[test]
    fn bad_flag_fails() {
        let result = AthenaLabResult {
            attachment_exists: Some("maybe".into()),
            ..Default::default()
        };
        let err = lab_result_from_athena(&result).unwrap_err();
        assert!(err.message().contains("attachmentexists"));
    }

    #[test]
    fn document_defaults_confidentiality_and_keeps_offset() {
        let document: AthenaLabResultDocument = serde_json::from_value(serde_json::json!({
            "labresultid": "1001",
            "observationdatetime": "2023-03-01T10:15:00-07:00",
            "encounterdate": "03/01/2023",
            "tietoorderid": "55",
            "observations": [{"analytename": "Glucose"}]
        }))
        .unwrap();
        let document = lab_result_document_from_athena(&document).unwrap();
        assert!(!document.is_confidential);
        assert_eq!(
            document.observation_date_time.and_then(|d| d.utc_offset_seconds),
            Some(-7 * 3600)
        );
        assert_eq!(document.order_id.as_deref(), Some("55"));
        assert_eq!(document.observations.len(), 1);
    }

    #[test]
    fn changed_query_to_wire() {
        let params = ChangedParams {
            leave_unprocessed: Some(true),
            limit: Some(50),
            offset: Some(0),
            ..Default::default()
        };
        let values = WireValues::from_record(&changed_query_to_athena(&params)).unwrap();
        assert_eq!(values.get("leaveunprocessed"), Some("true"));
        assert_eq!(values.get("limit"), Some("50"));
        assert_eq!(values.get("offset"), Some("0"));
        assert_eq!(values.get("showprocessedstartdatetime"), None);
    }

    #[test]
    #[traced_test]
    fn notes_skip_incomplete_analytes() {
        let analytes = vec![
            Analyte {
                name: Some("Glucose".into()),
                value: Some("99".into()),
                units: Some("mg/dL".into()),
                ..Default::default()
            },
            Analyte {
                name: Some("Sodium".into()),
                value: Some("140".into()),
                ..Default::default()
            },
        ];
        let notes = generate_notes_from_analytes("1001", &analytes);
        assert_eq!(
            notes,
            r#"<h3 id="lab-result-id-1001">Lab Results</h3><ul><li>Glucose: 99mg/dL</li></ul>"#
        );
        assert!(logs_contain("skipping analyte with missing required field"));
    }
}
