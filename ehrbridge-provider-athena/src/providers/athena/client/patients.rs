//! Patient demographics, matching, search, encounter goals and orders.

use ehrbridge_spec::types::{
    EnhancedBestMatchRequest, EnhancedBestMatchResult, Patient, PatientOrder, SearchPatientsResult,
};

use super::{AthenaClient, conversion_failed, exactly_one, require_id, segment};
use crate::encoding::WireValues;
use crate::error::EhrError;
use crate::execution::http::{ContentType, HttpRequest};
use crate::providers::athena::policy::Operation;
use crate::standards::athena::transformers::{
    enhanced_best_match_request_to_athena, enhanced_best_match_result_from_athena,
    patient_from_athena, patient_order_from_athena, patient_to_athena,
    search_patient_result_from_athena,
};
use crate::standards::athena::types::{
    AthenaDiscussionNotes, AthenaEnhancedBestMatchResult, AthenaPatient, AthenaPatientIdRecord,
    AthenaPatientOrder, AthenaSearchPatientsResponse,
};

const SHOW_2015_EDITION_VALUES: &str = "show2015edcehrtvalues";

/// Form body for create/update. Outbound conversion problems are the
/// caller's fault.
fn patient_form(patient: &Patient) -> Result<WireValues, EhrError> {
    let record = patient_to_athena(patient).map_err(|e| {
        EhrError::invalid_argument(format!("failed to build athena patient: {}", e.message()))
    })?;
    WireValues::from_record(&record)
}

impl AthenaClient {
    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient, EhrError> {
        let request = HttpRequest::get(format!("patients/{}", segment(patient_id)))
            .query_param(SHOW_2015_EDITION_VALUES, "true");
        let patients: Vec<AthenaPatient> = self.call(Operation::GetPatient, request).await?;
        let patient = exactly_one(patients)?;
        patient_from_athena(&patient).map_err(conversion_failed("get patient"))
    }

    pub async fn enhanced_best_match(
        &self,
        request: &EnhancedBestMatchRequest,
    ) -> Result<Vec<EnhancedBestMatchResult>, EhrError> {
        let mut query = WireValues::from_record(&enhanced_best_match_request_to_athena(request)?)?;
        query.set(SHOW_2015_EDITION_VALUES, "true");

        let request = HttpRequest::get("patients/enhancedbestmatch").with_query(query);
        let results: Vec<AthenaEnhancedBestMatchResult> =
            self.call(Operation::EnhancedBestMatch, request).await?;
        results
            .iter()
            .map(enhanced_best_match_result_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("enhanced best match"))
    }

    /// Returns the new patient id.
    pub async fn create_patient(&self, patient: &Patient) -> Result<String, EhrError> {
        let request = HttpRequest::post("patients").form(patient_form(patient)?);
        let records: Vec<AthenaPatientIdRecord> =
            self.call(Operation::CreatePatient, request).await?;
        Ok(exactly_one(records)?.patient_id)
    }

    /// Returns the patient id athena reports for the updated record.
    pub async fn update_patient(&self, patient: &Patient) -> Result<String, EhrError> {
        let patient_id = require_id(patient.patient_id.as_deref(), "patient id is empty")?;
        let mut form = patient_form(patient)?;
        form.set(SHOW_2015_EDITION_VALUES, "true");

        let request = HttpRequest::put(format!("patients/{}", segment(&patient_id))).form(form);
        let records: Vec<AthenaPatientIdRecord> =
            self.call(Operation::UpdatePatient, request).await?;
        Ok(exactly_one(records)?.patient_id)
    }

    pub async fn search_patients(
        &self,
        search_term: &str,
    ) -> Result<Vec<SearchPatientsResult>, EhrError> {
        let request = HttpRequest::get("patients/search").query_param("searchterm", search_term);
        let response: AthenaSearchPatientsResponse =
            self.call(Operation::SearchPatients, request).await?;
        response
            .patients
            .iter()
            .map(search_patient_result_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("search patients"))
    }

    /// Discussion notes recorded as the encounter's patient goals.
    pub async fn get_patient_goals(&self, encounter_id: &str) -> Result<String, EhrError> {
        let request = HttpRequest::get(format!(
            "chart/encounter/{}/patientgoals",
            segment(encounter_id)
        ))
        .with_content_type(Some(ContentType::FormUrlEncoded));
        let goals: AthenaDiscussionNotes = self.call(Operation::GetPatientGoals, request).await?;
        Ok(goals.discussion_notes)
    }

    /// Appends to (or replaces) the encounter's discussion notes and returns
    /// the stored text. Replacing with empty notes clears them.
    pub async fn update_patient_discussion_notes(
        &self,
        encounter_id: &str,
        discussion_notes: &str,
        replace_discussion_notes: bool,
    ) -> Result<String, EhrError> {
        let mut query = WireValues::new();
        if discussion_notes.is_empty() && replace_discussion_notes {
            query.insert_raw("discussionnotes");
        } else {
            query.set("discussionnotes", discussion_notes);
        }
        query.set("replacediscussionnotes", replace_discussion_notes.to_string());
        let request = HttpRequest::put(format!(
            "chart/encounter/{}/patientgoals/discussionnotes",
            segment(encounter_id)
        ))
        .with_query(query)
        .with_content_type(Some(ContentType::FormUrlEncoded));
        let notes: AthenaDiscussionNotes = self
            .call(Operation::UpdatePatientDiscussionNotes, request)
            .await?;
        Ok(notes.discussion_notes)
    }

    pub async fn get_patient_order(
        &self,
        patient_id: &str,
        order_id: &str,
    ) -> Result<PatientOrder, EhrError> {
        let request = HttpRequest::get(format!(
            "patients/{}/documents/order/{}",
            segment(patient_id),
            segment(order_id)
        ))
        .with_content_type(Some(ContentType::Json));
        let orders: Vec<AthenaPatientOrder> =
            self.call(Operation::GetPatientOrder, request).await?;
        let order = exactly_one(orders)?;
        Ok(patient_order_from_athena(&order))
    }
}
