//! Per-operation error policy.
//!
//! Pipeline errors are reshaped before they reach the caller. Which kinds
//! survive depends on the operation; the table lives in [`Operation::policy`].
//! Local validation errors never pass through here.

use crate::error::{Code, EhrError};

/// How pipeline errors of one operation are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Every error becomes `Internal`, prefixed with the operation context.
    CoerceInternal,
    /// `NotFound` propagates unchanged; everything else is coerced.
    PassNotFound,
    /// Every kind except `Unknown` propagates unchanged; `Unknown` is coerced.
    PassKnown,
    /// Every kind propagates unchanged.
    Passthrough,
}

impl ErrorPolicy {
    pub fn apply(self, err: EhrError, context: &str) -> EhrError {
        let keep = match self {
            Self::CoerceInternal => false,
            Self::PassNotFound => err.code() == Code::NotFound,
            Self::PassKnown => err.code() != Code::Unknown,
            Self::Passthrough => true,
        };
        if keep {
            err
        } else {
            EhrError::internal(format!("{context}: {}", err.message()))
        }
    }
}

/// Every remote operation the athena client performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetPatient,
    EnhancedBestMatch,
    GetCareTeam,
    UpdateCareTeam,
    DeleteCareTeam,
    GetPreferredPharmacies,
    UpdatePreferredPharmacy,
    DeletePreferredPharmacy,
    GetDefaultPharmacy,
    UpdateDefaultPharmacy,
    CreatePatient,
    UpdatePatient,
    CreatePatientInsurance,
    GetPatientInsurances,
    UpdateSpecificInsurance,
    DeleteSpecificInsurance,
    SearchClinicalProviders,
    ListChangedLabResults,
    ListChangedPatients,
    CheckLabResultsSubscriptionStatus,
    SubscribeLabResultEvents,
    CheckPatientsSubscriptionStatus,
    SubscribePatientEvents,
    GetPatientGoals,
    UpdatePatientDiscussionNotes,
    ListPatientLabResults,
    ListRecipientClasses,
    SearchPatients,
    GetPatientLabResultDocument,
    GetPatientInsuranceBenefitDetails,
    TriggerPatientInsuranceEligibilityCheck,
    GetPatientOrder,
    MakePatientPayment,
    UploadPatientCreditCardDetails,
    GetPatientCreditCardDetails,
    DeleteStoredCreditCard,
}

impl Operation {
    pub const ALL: [Operation; 36] = [
        Self::GetPatient,
        Self::EnhancedBestMatch,
        Self::GetCareTeam,
        Self::UpdateCareTeam,
        Self::DeleteCareTeam,
        Self::GetPreferredPharmacies,
        Self::UpdatePreferredPharmacy,
        Self::DeletePreferredPharmacy,
        Self::GetDefaultPharmacy,
        Self::UpdateDefaultPharmacy,
        Self::CreatePatient,
        Self::UpdatePatient,
        Self::CreatePatientInsurance,
        Self::GetPatientInsurances,
        Self::UpdateSpecificInsurance,
        Self::DeleteSpecificInsurance,
        Self::SearchClinicalProviders,
        Self::ListChangedLabResults,
        Self::ListChangedPatients,
        Self::CheckLabResultsSubscriptionStatus,
        Self::SubscribeLabResultEvents,
        Self::CheckPatientsSubscriptionStatus,
        Self::SubscribePatientEvents,
        Self::GetPatientGoals,
        Self::UpdatePatientDiscussionNotes,
        Self::ListPatientLabResults,
        Self::ListRecipientClasses,
        Self::SearchPatients,
        Self::GetPatientLabResultDocument,
        Self::GetPatientInsuranceBenefitDetails,
        Self::TriggerPatientInsuranceEligibilityCheck,
        Self::GetPatientOrder,
        Self::MakePatientPayment,
        Self::UploadPatientCreditCardDetails,
        Self::GetPatientCreditCardDetails,
        Self::DeleteStoredCreditCard,
    ];

    pub fn policy(self) -> ErrorPolicy {
        use ErrorPolicy::*;
        match self {
            Self::GetPatient
            | Self::EnhancedBestMatch
            | Self::GetCareTeam
            | Self::UpdateCareTeam
            | Self::DeleteCareTeam
            | Self::UpdateSpecificInsurance
            | Self::ListRecipientClasses
            | Self::SearchPatients
            | Self::TriggerPatientInsuranceEligibilityCheck => CoerceInternal,

            Self::GetPreferredPharmacies
            | Self::GetDefaultPharmacy
            | Self::CheckLabResultsSubscriptionStatus
            | Self::SubscribeLabResultEvents
            | Self::CheckPatientsSubscriptionStatus
            | Self::SubscribePatientEvents
            | Self::GetPatientGoals
            | Self::UpdatePatientDiscussionNotes
            | Self::ListPatientLabResults
            | Self::GetPatientLabResultDocument
            | Self::GetPatientInsuranceBenefitDetails
            | Self::GetPatientOrder
            | Self::GetPatientCreditCardDetails => PassNotFound,

            Self::UpdatePreferredPharmacy
            | Self::DeletePreferredPharmacy
            | Self::DeleteSpecificInsurance
            | Self::SearchClinicalProviders
            | Self::ListChangedLabResults
            | Self::ListChangedPatients
            | Self::MakePatientPayment
            | Self::UploadPatientCreditCardDetails
            | Self::DeleteStoredCreditCard => PassKnown,

            Self::UpdateDefaultPharmacy
            | Self::CreatePatient
            | Self::UpdatePatient
            | Self::CreatePatientInsurance
            | Self::GetPatientInsurances => Passthrough,
        }
    }

    /// Prefix used when an error of this operation is coerced to `Internal`.
    pub fn context(self) -> &'static str {
        match self {
            Self::GetPatient => "failed to get patient",
            Self::EnhancedBestMatch => "failed to query enhanced best match",
            Self::GetCareTeam => "failed to get care team",
            Self::UpdateCareTeam => "failed to update care team",
            Self::DeleteCareTeam => "failed to delete care team",
            Self::GetPreferredPharmacies => "failed to get patient preferred pharmacies",
            Self::UpdatePreferredPharmacy => "failed to update patient preferred pharmacy",
            Self::DeletePreferredPharmacy => "failed to delete patient preferred pharmacy",
            Self::GetDefaultPharmacy => "failed to get patient default pharmacy",
            Self::UpdateDefaultPharmacy => "failed to update default pharmacy",
            Self::CreatePatient => "failed to create patient",
            Self::UpdatePatient => "failed to update patient",
            Self::CreatePatientInsurance => "failed to create patient insurance",
            Self::GetPatientInsurances => "failed to get patient insurances",
            Self::UpdateSpecificInsurance => "failed to update patient insurance",
            Self::DeleteSpecificInsurance => "failed to delete specific patient insurance",
            Self::SearchClinicalProviders => "failed to search clinical providers",
            Self::ListChangedLabResults => "failed to list changed lab results",
            Self::ListChangedPatients => "failed to list changed patients",
            Self::CheckLabResultsSubscriptionStatus => {
                "failed to get changed lab results subscription"
            }
            Self::SubscribeLabResultEvents => "failed to subscribe to changed lab results",
            Self::CheckPatientsSubscriptionStatus => "failed to get changed patients subscription",
            Self::SubscribePatientEvents => "failed to subscribe to changed patients",
            Self::GetPatientGoals => "failed to get patient goals",
            Self::UpdatePatientDiscussionNotes => "failed to update patient discussion notes",
            Self::ListPatientLabResults => "failed to get patient lab results",
            Self::ListRecipientClasses => "failed to get recipient classes",
            Self::SearchPatients => "failed to query patients",
            Self::GetPatientLabResultDocument => "failed to get patient lab result document",
            Self::GetPatientInsuranceBenefitDetails => {
                "failed to get patient insurance benefit details"
            }
            Self::TriggerPatientInsuranceEligibilityCheck => {
                "failed to trigger patient insurance eligibility check"
            }
            Self::GetPatientOrder => "failed to get patient order",
            Self::MakePatientPayment => "failed to make a patient's payment",
            Self::UploadPatientCreditCardDetails => "failed to upload patient credit card details",
            Self::GetPatientCreditCardDetails => "failed to get patient credit card details",
            Self::DeleteStoredCreditCard => "failed to delete patient credit card",
        }
    }

    /// Apply this operation's policy to a pipeline error.
    pub fn reshape(self, err: EhrError) -> EhrError {
        let reshaped = self.policy().apply(err, self.context());
        tracing::debug!(
            operation = ?self,
            code = %reshaped.code(),
            "athena operation failed"
        );
        reshaped
    }
}

/// Policy row for `operation`.
pub fn policy_for(operation: Operation) -> ErrorPolicy {
    operation.policy()
}
