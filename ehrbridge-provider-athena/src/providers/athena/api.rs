//! Object-safe view of the athena client.
//!
//! Services hold an `Arc<dyn AthenaApi>` so tests can substitute a fake
//! without a network listener.

use async_trait::async_trait;
use ehrbridge_spec::types::{
    CareTeam, ChangedLabResult, ChangedParams, ChangedPatient, ClinicalProviderSearchResult,
    CreditCardInformation, Date, DeleteStoredCardResult, EnhancedBestMatchRequest,
    EnhancedBestMatchResult, Insurance, InsuranceBenefitDetails, LabResult, LabResultDocument,
    Patient, PatientOrder, PaymentInformation, PaymentResult, Pharmacy, RecipientClassesPage,
    SearchClinicalProvidersRequest, SearchPatientsResult, StoredCard, StoredCardUploadResult,
    SubscriptionStatus,
};

use super::client::AthenaClient;
use crate::error::EhrError;

#[async_trait]
pub trait AthenaApi: Send + Sync {
    async fn is_healthy(&self) -> bool;

    // Patients

    async fn get_patient(&self, patient_id: &str) -> Result<Patient, EhrError>;
    async fn enhanced_best_match(
        &self,
        request: &EnhancedBestMatchRequest,
    ) -> Result<Vec<EnhancedBestMatchResult>, EhrError>;
    async fn create_patient(&self, patient: &Patient) -> Result<String, EhrError>;
    async fn update_patient(&self, patient: &Patient) -> Result<String, EhrError>;
    async fn search_patients(&self, search_term: &str)
    -> Result<Vec<SearchPatientsResult>, EhrError>;
    async fn get_patient_goals(&self, encounter_id: &str) -> Result<String, EhrError>;
    async fn update_patient_discussion_notes(
        &self,
        encounter_id: &str,
        discussion_notes: &str,
        replace_discussion_notes: bool,
    ) -> Result<String, EhrError>;
    async fn get_patient_order(
        &self,
        patient_id: &str,
        order_id: &str,
    ) -> Result<PatientOrder, EhrError>;

    // Care team

    async fn get_care_team(&self, patient_id: &str, department_id: &str)
    -> Result<CareTeam, EhrError>;
    async fn update_care_team(
        &self,
        patient_id: &str,
        clinical_provider_id: &str,
        department_id: &str,
        recipient_class_id: &str,
    ) -> Result<(), EhrError>;
    async fn delete_care_team(
        &self,
        patient_id: &str,
        member_id: &str,
        department_id: &str,
    ) -> Result<(), EhrError>;
    async fn list_recipient_classes(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<RecipientClassesPage, EhrError>;

    // Pharmacies

    async fn get_preferred_pharmacies(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Vec<Pharmacy>, EhrError>;
    async fn update_preferred_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError>;
    async fn delete_preferred_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError>;
    async fn get_default_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Pharmacy, EhrError>;
    async fn update_default_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError>;
    async fn search_clinical_providers(
        &self,
        search: &SearchClinicalProvidersRequest,
    ) -> Result<Vec<ClinicalProviderSearchResult>, EhrError>;

    // Insurance

    async fn create_patient_insurance(&self, insurance: &Insurance)
    -> Result<Insurance, EhrError>;
    async fn get_patient_insurances(&self, patient_id: &str) -> Result<Vec<Insurance>, EhrError>;
    async fn update_specific_insurance(&self, insurance: &Insurance) -> Result<(), EhrError>;
    async fn delete_specific_insurance(
        &self,
        patient_id: &str,
        insurance_id: &str,
    ) -> Result<(), EhrError>;
    async fn get_patient_insurance_benefit_details(
        &self,
        patient_id: &str,
        insurance_id: &str,
        service_type_code: &str,
        date_of_service: Option<&Date>,
    ) -> Result<InsuranceBenefitDetails, EhrError>;
    async fn trigger_patient_insurance_eligibility_check(
        &self,
        patient_id: &str,
        insurance_id: &str,
        service_type_code: &str,
        date_of_service: Option<&Date>,
    ) -> Result<(), EhrError>;

    // Labs and change feeds

    async fn list_patient_lab_results(
        &self,
        patient_id: &str,
        department_id: &str,
        encounter_id: &str,
    ) -> Result<Vec<LabResult>, EhrError>;
    async fn get_patient_lab_result_document(
        &self,
        patient_id: &str,
        lab_result_id: &str,
    ) -> Result<Vec<LabResultDocument>, EhrError>;
    async fn list_changed_lab_results(
        &self,
        params: &ChangedParams,
    ) -> Result<Vec<ChangedLabResult>, EhrError>;
    async fn list_changed_patients(
        &self,
        params: &ChangedParams,
    ) -> Result<Vec<ChangedPatient>, EhrError>;
    async fn check_lab_results_subscription_status(&self) -> Result<SubscriptionStatus, EhrError>;
    async fn subscribe_lab_result_events(&self) -> Result<(), EhrError>;
    async fn check_patients_subscription_status(&self) -> Result<SubscriptionStatus, EhrError>;
    async fn subscribe_patient_events(&self) -> Result<(), EhrError>;

    // Payments

    async fn make_patient_payment(
        &self,
        patient_id: &str,
        payment: &PaymentInformation,
    ) -> Result<Vec<PaymentResult>, EhrError>;
    async fn upload_patient_credit_card_details(
        &self,
        patient_id: &str,
        card: &CreditCardInformation,
    ) -> Result<Vec<StoredCardUploadResult>, EhrError>;
    async fn get_patient_credit_card_details(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Vec<StoredCard>, EhrError>;
    async fn delete_stored_credit_card(
        &self,
        patient_id: &str,
        stored_card_id: &str,
        department_id: &str,
    ) -> Result<DeleteStoredCardResult, EhrError>;
}

#[async_trait]
impl AthenaApi for AthenaClient {
    async fn is_healthy(&self) -> bool {
        AthenaClient::is_healthy(self).await
    }

    async fn get_patient(&self, patient_id: &str) -> Result<Patient, EhrError> {
        AthenaClient::get_patient(self, patient_id).await
    }

    async fn enhanced_best_match(
        &self,
        request: &EnhancedBestMatchRequest,
    ) -> Result<Vec<EnhancedBestMatchResult>, EhrError> {
        AthenaClient::enhanced_best_match(self, request).await
    }

    async fn create_patient(&self, patient: &Patient) -> Result<String, EhrError> {
        AthenaClient::create_patient(self, patient).await
    }

    async fn update_patient(&self, patient: &Patient) -> Result<String, EhrError> {
        AthenaClient::update_patient(self, patient).await
    }

    async fn search_patients(
        &self,
        search_term: &str,
    ) -> Result<Vec<SearchPatientsResult>, EhrError> {
        AthenaClient::search_patients(self, search_term).await
    }

    async fn get_patient_goals(&self, encounter_id: &str) -> Result<String, EhrError> {
        AthenaClient::get_patient_goals(self, encounter_id).await
    }

    async fn update_patient_discussion_notes(
        &self,
        encounter_id: &str,
        discussion_notes: &str,
        replace_discussion_notes: bool,
    ) -> Result<String, EhrError> {
        AthenaClient::update_patient_discussion_notes(
            self,
            encounter_id,
            discussion_notes,
            replace_discussion_notes,
        )
        .await
    }

    async fn get_patient_order(
        &self,
        patient_id: &str,
        order_id: &str,
    ) -> Result<PatientOrder, EhrError> {
        AthenaClient::get_patient_order(self, patient_id, order_id).await
    }

    async fn get_care_team(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<CareTeam, EhrError> {
        AthenaClient::get_care_team(self, patient_id, department_id).await
    }

    async fn update_care_team(
        &self,
        patient_id: &str,
        clinical_provider_id: &str,
        department_id: &str,
        recipient_class_id: &str,
    ) -> Result<(), EhrError> {
        AthenaClient::update_care_team(
            self,
            patient_id,
            clinical_provider_id,
            department_id,
            recipient_class_id,
        )
        .await
    }

    async fn delete_care_team(
        &self,
        patient_id: &str,
        member_id: &str,
        department_id: &str,
    ) -> Result<(), EhrError> {
        AthenaClient::delete_care_team(self, patient_id, member_id, department_id).await
    }

    async fn list_recipient_classes(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<RecipientClassesPage, EhrError> {
        AthenaClient::list_recipient_classes(self, limit, offset).await
    }

    async fn get_preferred_pharmacies(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Vec<Pharmacy>, EhrError> {
        AthenaClient::get_preferred_pharmacies(self, patient_id, department_id).await
    }

    async fn update_preferred_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError> {
        AthenaClient::update_preferred_pharmacy(self, patient_id, department_id, clinical_provider_id)
            .await
    }

    async fn delete_preferred_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError> {
        AthenaClient::delete_preferred_pharmacy(self, patient_id, department_id, clinical_provider_id)
            .await
    }

    async fn get_default_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Pharmacy, EhrError> {
        AthenaClient::get_default_pharmacy(self, patient_id, department_id).await
    }

    async fn update_default_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError> {
        AthenaClient::update_default_pharmacy(self, patient_id, department_id, clinical_provider_id)
            .await
    }

    async fn search_clinical_providers(
        &self,
        search: &SearchClinicalProvidersRequest,
    ) -> Result<Vec<ClinicalProviderSearchResult>, EhrError> {
        AthenaClient::search_clinical_providers(self, search).await
    }

    async fn create_patient_insurance(
        &self,
        insurance: &Insurance,
    ) -> Result<Insurance, EhrError> {
        AthenaClient::create_patient_insurance(self, insurance).await
    }

    async fn get_patient_insurances(&self, patient_id: &str) -> Result<Vec<Insurance>, EhrError> {
        AthenaClient::get_patient_insurances(self, patient_id).await
    }

    async fn update_specific_insurance(&self, insurance: &Insurance) -> Result<(), EhrError> {
        AthenaClient::update_specific_insurance(self, insurance).await
    }

    async fn delete_specific_insurance(
        &self,
        patient_id: &str,
        insurance_id: &str,
    ) -> Result<(), EhrError> {
        AthenaClient::delete_specific_insurance(self, patient_id, insurance_id).await
    }

    async fn get_patient_insurance_benefit_details(
        &self,
        patient_id: &str,
        insurance_id: &str,
        service_type_code: &str,
        date_of_service: Option<&Date>,
    ) -> Result<InsuranceBenefitDetails, EhrError> {
        AthenaClient::get_patient_insurance_benefit_details(
            self,
            patient_id,
            insurance_id,
            service_type_code,
            date_of_service,
        )
        .await
    }

    async fn trigger_patient_insurance_eligibility_check(
        &self,
        patient_id: &str,
        insurance_id: &str,
        service_type_code: &str,
        date_of_service: Option<&Date>,
    ) -> Result<(), EhrError> {
        AthenaClient::trigger_patient_insurance_eligibility_check(
            self,
            patient_id,
            insurance_id,
            service_type_code,
            date_of_service,
        )
        .await
    }

    async fn list_patient_lab_results(
        &self,
        patient_id: &str,
        department_id: &str,
        encounter_id: &str,
    ) -> Result<Vec<LabResult>, EhrError> {
        AthenaClient::list_patient_lab_results(self, patient_id, department_id, encounter_id).await
    }

    async fn get_patient_lab_result_document(
        &self,
        patient_id: &str,
        lab_result_id: &str,
    ) -> Result<Vec<LabResultDocument>, EhrError> {
        AthenaClient::get_patient_lab_result_document(self, patient_id, lab_result_id).await
    }

    async fn list_changed_lab_results(
        &self,
        params: &ChangedParams,
    ) -> Result<Vec<ChangedLabResult>, EhrError> {
        AthenaClient::list_changed_lab_results(self, params).await
    }

    async fn list_changed_patients(
        &self,
        params: &ChangedParams,
    ) -> Result<Vec<ChangedPatient>, EhrError> {
        AthenaClient::list_changed_patients(self, params).await
    }

    async fn check_lab_results_subscription_status(&self) -> Result<SubscriptionStatus, EhrError> {
        AthenaClient::check_lab_results_subscription_status(self).await
    }

    async fn subscribe_lab_result_events(&self) -> Result<(), EhrError> {
        AthenaClient::subscribe_lab_result_events(self).await
    }

    async fn check_patients_subscription_status(&self) -> Result<SubscriptionStatus, EhrError> {
        AthenaClient::check_patients_subscription_status(self).await
    }

    async fn subscribe_patient_events(&self) -> Result<(), EhrError> {
        AthenaClient::subscribe_patient_events(self).await
    }

    async fn make_patient_payment(
        &self,
        patient_id: &str,
        payment: &PaymentInformation,
    ) -> Result<Vec<PaymentResult>, EhrError> {
        AthenaClient::make_patient_payment(self, patient_id, payment).await
    }

    async fn upload_patient_credit_card_details(
        &self,
        patient_id: &str,
        card: &CreditCardInformation,
    ) -> Result<Vec<StoredCardUploadResult>, EhrError> {
        AthenaClient::upload_patient_credit_card_details(self, patient_id, card).await
    }

    async fn get_patient_credit_card_details(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Vec<StoredCard>, EhrError> {
        AthenaClient::get_patient_credit_card_details(self, patient_id, department_id).await
    }

    async fn delete_stored_credit_card(
        &self,
        patient_id: &str,
        stored_card_id: &str,
        department_id: &str,
    ) -> Result<DeleteStoredCardResult, EhrError> {
        AthenaClient::delete_stored_credit_card(self, patient_id, stored_card_id, department_id)
            .await
    }
}
