//! Lab results, lab documents, change feeds and their subscriptions.

use ehrbridge_spec::types::{
    ChangedLabResult, ChangedParams, ChangedPatient, LabResult, LabResultDocument,
    SubscriptionStatus,
};

use super::{AthenaClient, conversion_failed, segment};
use crate::encoding::WireValues;
use crate::error::EhrError;
use crate::execution::http::HttpRequest;
use crate::providers::athena::policy::Operation;
use crate::standards::athena::transformers::{
    changed_lab_result_from_athena, changed_patient_from_athena, changed_query_to_athena,
    lab_result_document_from_athena, lab_results_from_athena,
};
use crate::standards::athena::types::{
    AthenaChangedLabResults, AthenaChangedPatients, AthenaLabResultDocument, AthenaLabResults,
    AthenaSubscription,
};
use crate::standards::athena::utils::subscription_status_from_label;

const LAB_RESULTS_SUBSCRIPTION: &str = "labresults/changed/subscription";
const PATIENTS_SUBSCRIPTION: &str = "patients/changed/subscription";

impl AthenaClient {
    pub async fn list_patient_lab_results(
        &self,
        patient_id: &str,
        department_id: &str,
        encounter_id: &str,
    ) -> Result<Vec<LabResult>, EhrError> {
        let request = HttpRequest::get(format!("chart/{}/labresults", segment(patient_id)))
            .query_param("departmentid", department_id)
            .query_param("allresultsbyencounterid", encounter_id);
        let response: AthenaLabResults = self
            .call(Operation::ListPatientLabResults, request)
            .await?;
        lab_results_from_athena(&response.lab_results)
            .map_err(conversion_failed("list patient lab results"))
    }

    pub async fn get_patient_lab_result_document(
        &self,
        patient_id: &str,
        lab_result_id: &str,
    ) -> Result<Vec<LabResultDocument>, EhrError> {
        let request = HttpRequest::get(format!(
            "patients/{}/documents/labresult/{}",
            segment(patient_id),
            segment(lab_result_id)
        ));
        let documents: Vec<AthenaLabResultDocument> = self
            .call(Operation::GetPatientLabResultDocument, request)
            .await?;
        documents
            .iter()
            .map(lab_result_document_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("get patient lab result document"))
    }

    /// Drains athena's lab-result change feed.
    pub async fn list_changed_lab_results(
        &self,
        params: &ChangedParams,
    ) -> Result<Vec<ChangedLabResult>, EhrError> {
        let query = WireValues::from_record(&changed_query_to_athena(params))?;
        let request = HttpRequest::get("labresults/changed").with_query(query);
        let response: AthenaChangedLabResults = self
            .call(Operation::ListChangedLabResults, request)
            .await?;
        Ok(response
            .lab_results
            .iter()
            .map(changed_lab_result_from_athena)
            .collect())
    }

    /// Drains athena's patient change feed, including merged-away ids.
    pub async fn list_changed_patients(
        &self,
        params: &ChangedParams,
    ) -> Result<Vec<ChangedPatient>, EhrError> {
        let mut query = WireValues::from_record(&changed_query_to_athena(params))?;
        query.set("showpreviouspatientids", "true");
        let request = HttpRequest::get("patients/changed").with_query(query);
        let response: AthenaChangedPatients = self
            .call(Operation::ListChangedPatients, request)
            .await?;
        Ok(response
            .patients
            .iter()
            .map(changed_patient_from_athena)
            .collect())
    }

    pub async fn check_lab_results_subscription_status(
        &self,
    ) -> Result<SubscriptionStatus, EhrError> {
        let subscription: AthenaSubscription = self
            .call(
                Operation::CheckLabResultsSubscriptionStatus,
                HttpRequest::get(LAB_RESULTS_SUBSCRIPTION),
            )
            .await?;
        Ok(subscription_status_from_label(subscription.status.as_deref()))
    }

    pub async fn subscribe_lab_result_events(&self) -> Result<(), EhrError> {
        self.call_unit(
            Operation::SubscribeLabResultEvents,
            HttpRequest::post(LAB_RESULTS_SUBSCRIPTION),
        )
        .await
    }

    pub async fn check_patients_subscription_status(&self) -> Result<SubscriptionStatus, EhrError> {
        let subscription: AthenaSubscription = self
            .call(
                Operation::CheckPatientsSubscriptionStatus,
                HttpRequest::get(PATIENTS_SUBSCRIPTION),
            )
            .await?;
        Ok(subscription_status_from_label(subscription.status.as_deref()))
    }

    pub async fn subscribe_patient_events(&self) -> Result<(), EhrError> {
        self.call_unit(
            Operation::SubscribePatientEvents,
            HttpRequest::post(PATIENTS_SUBSCRIPTION),
        )
        .await
    }
}
