//! Insurance records, benefit details and eligibility checks.

use ehrbridge_spec::types::{Date, Insurance, InsuranceBenefitDetails};

use super::{AthenaClient, conversion_failed, exactly_one, require_id, segment};
use crate::encoding::WireValues;
use crate::encoding::scalars::format_date;
use crate::error::EhrError;
use crate::execution::http::{ContentType, HttpRequest};
use crate::providers::athena::policy::Operation;
use crate::standards::athena::transformers::{
    insurance_benefit_details_from_athena, insurance_from_athena, insurance_to_athena,
};
use crate::standards::athena::types::{
    AthenaInsuranceBenefitDetails, AthenaPatientInsurance, AthenaPatientInsurancesResponse,
};

fn insurances_path(patient_id: &str) -> String {
    format!("patients/{}/insurances", segment(patient_id))
}

fn insurance_path(patient_id: &str, insurance_id: &str) -> String {
    format!("{}/{}", insurances_path(patient_id), segment(insurance_id))
}

fn benefit_details_request(
    request: HttpRequest,
    service_type_code: &str,
    date_of_service: Option<&Date>,
) -> HttpRequest {
    let mut query = WireValues::new();
    query.set_opt("servicetypecode", Some(service_type_code));
    query.set_opt("dateofservice", date_of_service.map(format_date));
    request.with_query(query)
}

impl AthenaClient {
    pub async fn create_patient_insurance(
        &self,
        insurance: &Insurance,
    ) -> Result<Insurance, EhrError> {
        let patient_id = require_id(insurance.patient_id.as_deref(), "patient id is empty")?;
        let form = WireValues::from_record(&insurance_to_athena(insurance))?;

        let request = HttpRequest::post(insurances_path(&patient_id)).form(form);
        let records: Vec<AthenaPatientInsurance> =
            self.call(Operation::CreatePatientInsurance, request).await?;
        let record = exactly_one(records)?;
        insurance_from_athena(&record).map_err(conversion_failed("create patient insurance"))
    }

    pub async fn get_patient_insurances(
        &self,
        patient_id: &str,
    ) -> Result<Vec<Insurance>, EhrError> {
        let request = HttpRequest::get(insurances_path(patient_id));
        let response: AthenaPatientInsurancesResponse =
            self.call(Operation::GetPatientInsurances, request).await?;
        response
            .insurances
            .iter()
            .map(insurance_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("get patient insurances"))
    }

    pub async fn update_specific_insurance(&self, insurance: &Insurance) -> Result<(), EhrError> {
        let patient_id = require_id(insurance.patient_id.as_deref(), "patient id is empty")?;
        let insurance_id = require_id(
            insurance.insurance_id.as_deref(),
            "athena insurance id is empty",
        )?;
        let form = WireValues::from_record(&insurance_to_athena(insurance))?;

        let request = HttpRequest::put(insurance_path(&patient_id, &insurance_id)).form(form);
        self.call_unit(Operation::UpdateSpecificInsurance, request)
            .await
    }

    pub async fn delete_specific_insurance(
        &self,
        patient_id: &str,
        insurance_id: &str,
    ) -> Result<(), EhrError> {
        let request = HttpRequest::delete(insurance_path(patient_id, insurance_id))
            .query_param("patientid", patient_id)
            .query_param("insuranceid", insurance_id)
            .with_content_type(Some(ContentType::Json));
        self.call_unit(Operation::DeleteSpecificInsurance, request)
            .await
    }

    pub async fn get_patient_insurance_benefit_details(
        &self,
        patient_id: &str,
        insurance_id: &str,
        service_type_code: &str,
        date_of_service: Option<&Date>,
    ) -> Result<InsuranceBenefitDetails, EhrError> {
        let request = benefit_details_request(
            HttpRequest::get(format!(
                "{}/benefitdetails",
                insurance_path(patient_id, insurance_id)
            )),
            service_type_code,
            date_of_service,
        );
        let details: AthenaInsuranceBenefitDetails = self
            .call(Operation::GetPatientInsuranceBenefitDetails, request)
            .await?;
        insurance_benefit_details_from_athena(&details)
            .map_err(conversion_failed("get patient insurance benefit details"))
    }

    /// Ask athena to run a fresh eligibility check.
    ///
    /// Disabled unless `enable_insurance_eligibility_check` is set. The call
    /// is bounded by `insurance_eligibility_check_timeout`, which also
    /// replaces the client-wide HTTP timeout for this request.
    pub async fn trigger_patient_insurance_eligibility_check(
        &self,
        patient_id: &str,
        insurance_id: &str,
        service_type_code: &str,
        date_of_service: Option<&Date>,
    ) -> Result<(), EhrError> {
        if patient_id.is_empty() {
            return Err(EhrError::invalid_argument("patientId is empty"));
        }
        if insurance_id.is_empty() {
            return Err(EhrError::invalid_argument("insuranceId is empty"));
        }
        if !self.config().enable_insurance_eligibility_check {
            return Err(EhrError::Unimplemented(
                "insurance eligibility check is disabled for this environment".into(),
            ));
        }

        let deadline = self.config().insurance_eligibility_check_timeout;
        let request = benefit_details_request(
            HttpRequest::post(format!(
                "{}/benefitdetails",
                insurance_path(patient_id, insurance_id)
            )),
            service_type_code,
            date_of_service,
        )
        .with_timeout(deadline);

        let started = tokio::time::Instant::now();
        let outcome = tokio::time::timeout(
            deadline,
            self.call_unit(Operation::TriggerPatientInsuranceEligibilityCheck, request),
        )
        .await;
        let expired = || {
            EhrError::DeadlineExceeded(format!(
                "insurance eligibility check did not finish within {}s",
                deadline.as_secs()
            ))
        };
        match outcome {
            // The transport timeout and the outer deadline race at expiry.
            Ok(Err(_)) if started.elapsed() >= deadline => Err(expired()),
            Ok(result) => result,
            Err(_) => Err(expired()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::test_support::*;
    use crate::error::Code;
    use ehrbridge_spec::types::{Date, Insurance, RelationToPatient};
    use mockito::Matcher;

    fn eligibility_enabled(server: &mockito::ServerGuard) -> crate::AthenaClient {
        client_with(server, |mut config| {
            config.enable_insurance_eligibility_check = true;
            config
        })
    }

    #[tokio::test]
    async fn create_insurance_requires_patient_id() {
        let server = mockito::Server::new_async().await;
        let err = client_for(&server)
            .create_patient_insurance(&Insurance::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(err.message(), "patient id is empty");
    }

    #[tokio::test]
    async fn create_insurance_posts_form() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", path("patients/29/insurances").as_str())
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("insuranceidnumber".into(), "MEM-1".into()),
                Matcher::UrlEncoded("insurancepackageid".into(), "12".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"[{"insuranceid": "900", "insuranceidnumber": "MEM-1", "insurancepackageid": "12", "relationshiptoinsuredid": "1"}]"#,
            )
            .create_async()
            .await;

        let insurance = Insurance {
            patient_id: Some("29".into()),
            member_id: Some("MEM-1".into()),
            package_id: Some(12),
            ..Default::default()
        };
        let created = client_for(&server)
            .create_patient_insurance(&insurance)
            .await
            .unwrap();
        m.assert_async().await;
        assert_eq!(created.insurance_id.as_deref(), Some("900"));
        assert_eq!(
            created.primary_insurance_holder.and_then(|h| h.relation),
            Some(RelationToPatient::SelfRelation)
        );
    }

    #[tokio::test]
    async fn list_insurances() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("patients/29/insurances").as_str())
            .with_status(200)
            .with_body(r#"{"insurances": [{"insuranceid": "900"}, {"insuranceid": "901"}]}"#)
            .create_async()
            .await;

        let insurances = client_for(&server)
            .get_patient_insurances("29")
            .await
            .unwrap();
        assert_eq!(insurances.len(), 2);
    }

    #[tokio::test]
    async fn update_insurance_validates_ids() {
        let server = mockito::Server::new_async().await;
        let client = client_for(&server);

        let err = client
            .update_specific_insurance(&Insurance {
                insurance_id: Some("900".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "patient id is empty");

        let err = client
            .update_specific_insurance(&Insurance {
                patient_id: Some("29".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(err.message(), "athena insurance id is empty");
    }

    #[tokio::test]
    async fn update_insurance_failures_are_internal() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", path("patients/29/insurances/900").as_str())
            .with_status(400)
            .with_body("bad package")
            .create_async()
            .await;

        let err = client_for(&server)
            .update_specific_insurance(&Insurance {
                patient_id: Some("29".into()),
                insurance_id: Some("900".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
        assert!(
            err.message()
                .starts_with("failed to update patient insurance: ")
        );
    }

    #[tokio::test]
    async fn delete_insurance_repeats_ids_in_query() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", path("patients/29/insurances/900").as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("patientid".into(), "29".into()),
                Matcher::UrlEncoded("insuranceid".into(), "900".into()),
            ]))
            .with_status(200)
            .create_async()
            .await;

        client_for(&server)
            .delete_specific_insurance("29", "900")
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn benefit_details_query() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock(
                "GET",
                path("patients/29/insurances/900/benefitdetails").as_str(),
            )
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("servicetypecode".into(), "30".into()),
                Matcher::UrlEncoded("dateofservice".into(), "03/01/2023".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"ansi271": "ISA*00*", "dateofservice": "03/01/2023"}"#)
            .create_async()
            .await;

        let details = client_for(&server)
            .get_patient_insurance_benefit_details(
                "29",
                "900",
                "30",
                Some(&Date::new(2023, 3, 1)),
            )
            .await
            .unwrap();
        m.assert_async().await;
        assert_eq!(details.eligibility_data, "ISA*00*");
    }

    #[tokio::test]
    async fn benefit_details_without_ansi271_is_internal() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock(
                "GET",
                path("patients/29/insurances/900/benefitdetails").as_str(),
            )
            .with_status(200)
            .with_body(r#"{"dateofservice": "03/01/2023"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .get_patient_insurance_benefit_details("29", "900", "", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
        assert!(err.message().contains("ansi271"));
    }

    #[tokio::test]
    async fn eligibility_check_disabled_by_default() {
        let server = mockito::Server::new_async().await;
        let err = client_for(&server)
            .trigger_patient_insurance_eligibility_check("29", "900", "30", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Unimplemented);
        assert_eq!(
            err.message(),
            "insurance eligibility check is disabled for this environment"
        );
    }

    #[tokio::test]
    async fn eligibility_check_validates_ids_first() {
        let server = mockito::Server::new_async().await;
        let err = client_for(&server)
            .trigger_patient_insurance_eligibility_check("", "900", "30", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(err.message(), "patientId is empty");

        let err = client_for(&server)
            .trigger_patient_insurance_eligibility_check("29", "", "30", None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "insuranceId is empty");
    }

    #[tokio::test]
    async fn eligibility_check_posts_when_enabled() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock(
                "POST",
                path("patients/29/insurances/900/benefitdetails").as_str(),
            )
            .match_query(Matcher::UrlEncoded("servicetypecode".into(), "30".into()))
            .with_status(200)
            .with_body(r#"{"success": "true"}"#)
            .create_async()
            .await;

        eligibility_enabled(&server)
            .trigger_patient_insurance_eligibility_check("29", "900", "30", None)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn eligibility_check_errors_are_internal() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock(
                "POST",
                path("patients/29/insurances/900/benefitdetails").as_str(),
            )
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let err = eligibility_enabled(&server)
            .trigger_patient_insurance_eligibility_check("29", "900", "30", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn eligibility_check_deadline() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept connections but never answer.
        std::thread::spawn(move || {
            let mut held = Vec::new();
            for socket in listener.incoming().flatten() {
                held.push(socket);
            }
        });

        let config = crate::AthenaConfig::builder()
            .base_url(format!("http://{addr}"))
            .practice_id(PRACTICE)
            .enable_insurance_eligibility_check(true)
            .insurance_eligibility_check_timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let client = crate::AthenaClientBuilder::new(config)
            .token_provider(std::sync::Arc::new(
                ehrbridge_core::auth::StaticTokenProvider::new("t"),
            ))
            .build()
            .unwrap();

        let err = client
            .trigger_patient_insurance_eligibility_check("29", "900", "30", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::DeadlineExceeded);
    }
}
