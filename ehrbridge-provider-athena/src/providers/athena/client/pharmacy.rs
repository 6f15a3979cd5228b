//! Preferred and default pharmacies, clinical provider search.

use ehrbridge_spec::types::{ClinicalProviderSearchResult, Pharmacy, SearchClinicalProvidersRequest};

use super::{AthenaClient, conversion_failed, segment};
use crate::encoding::WireValues;
use crate::error::EhrError;
use crate::execution::http::HttpRequest;
use crate::providers::athena::policy::Operation;
use crate::standards::athena::transformers::{
    clinical_provider_from_athena, clinical_provider_search_to_athena, pharmacies_from_athena,
    pharmacy_from_athena,
};
use crate::standards::athena::types::{
    AthenaClinicalProviderSearchResponse, AthenaPharmacy, AthenaPreferredPharmacies,
};

fn preferred_path(patient_id: &str) -> String {
    format!("chart/{}/pharmacies/preferred", segment(patient_id))
}

fn default_path(patient_id: &str) -> String {
    format!("chart/{}/pharmacies/default", segment(patient_id))
}

fn pharmacy_query(department_id: &str, clinical_provider_id: &str) -> WireValues {
    WireValues::from_iter([
        ("departmentid", department_id),
        ("clinicalproviderid", clinical_provider_id),
    ])
}

impl AthenaClient {
    pub async fn get_preferred_pharmacies(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Vec<Pharmacy>, EhrError> {
        let request =
            HttpRequest::get(preferred_path(patient_id)).query_param("departmentid", department_id);
        let response: AthenaPreferredPharmacies =
            self.call(Operation::GetPreferredPharmacies, request).await?;
        pharmacies_from_athena(&response.pharmacies)
            .map_err(conversion_failed("get preferred pharmacies"))
    }

    pub async fn update_preferred_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError> {
        let request = HttpRequest::put(preferred_path(patient_id))
            .with_query(pharmacy_query(department_id, clinical_provider_id));
        self.call_unit(Operation::UpdatePreferredPharmacy, request)
            .await
    }

    pub async fn delete_preferred_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError> {
        let request = HttpRequest::delete(preferred_path(patient_id))
            .with_query(pharmacy_query(department_id, clinical_provider_id));
        self.call_unit(Operation::DeletePreferredPharmacy, request)
            .await
    }

    pub async fn get_default_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Pharmacy, EhrError> {
        let request =
            HttpRequest::get(default_path(patient_id)).query_param("departmentid", department_id);
        let pharmacy: AthenaPharmacy = self.call(Operation::GetDefaultPharmacy, request).await?;
        pharmacy_from_athena(&pharmacy).map_err(conversion_failed("get default pharmacy"))
    }

    pub async fn update_default_pharmacy(
        &self,
        patient_id: &str,
        department_id: &str,
        clinical_provider_id: &str,
    ) -> Result<(), EhrError> {
        let request = HttpRequest::put(default_path(patient_id))
            .with_query(pharmacy_query(department_id, clinical_provider_id));
        self.call_unit(Operation::UpdateDefaultPharmacy, request)
            .await
    }

    pub async fn search_clinical_providers(
        &self,
        search: &SearchClinicalProvidersRequest,
    ) -> Result<Vec<ClinicalProviderSearchResult>, EhrError> {
        let query = clinical_provider_search_to_athena(search)
            .map_err(|e| EhrError::invalid_argument(e.message()))?;
        let request =
            HttpRequest::get("clinicalproviders/search").with_query(WireValues::from_record(&query)?);
        let response: AthenaClinicalProviderSearchResponse =
            self.call(Operation::SearchClinicalProviders, request).await?;
        response
            .clinical_providers
            .iter()
            .map(clinical_provider_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("search clinical providers"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::error::Code;
    use ehrbridge_spec::types::{OrderType, SearchClinicalProvidersRequest};
    use mockito::Matcher;

    #[tokio::test]
    async fn preferred_pharmacies_list() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("chart/29/pharmacies/preferred").as_str())
            .match_query(Matcher::UrlEncoded("departmentid".into(), "2".into()))
            .with_status(200)
            .with_body(
                r#"{"pharmacies": [{"clinicalproviderid": "10809198", "clinicalprovidername": "Walgreens", "phonenumber": "3035550123"}], "totalcount": 1}"#,
            )
            .create_async()
            .await;

        let pharmacies = client_for(&server)
            .get_preferred_pharmacies("29", "2")
            .await
            .unwrap();
        assert_eq!(pharmacies.len(), 1);
        assert_eq!(
            pharmacies[0]
                .clinical_provider
                .as_ref()
                .and_then(|p| p.name.as_deref()),
            Some("Walgreens")
        );
    }

    #[tokio::test]
    async fn default_pharmacy_not_found_passes() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("chart/29/pharmacies/default").as_str())
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"error": "no default pharmacy"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .get_default_pharmacy("29", "2")
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn default_pharmacy_other_errors_are_internal() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("chart/29/pharmacies/default").as_str())
            .match_query(Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let err = client_for(&server)
            .get_default_pharmacy("29", "2")
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
        assert!(
            err.message()
                .starts_with("failed to get patient default pharmacy: ")
        );
    }

    #[tokio::test]
    async fn update_preferred_pharmacy_keeps_known_kinds() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", path("chart/29/pharmacies/preferred").as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("departmentid".into(), "2".into()),
                Matcher::UrlEncoded("clinicalproviderid".into(), "12".into()),
            ]))
            .with_status(400)
            .with_body("bad clinical provider")
            .create_async()
            .await;

        let err = client_for(&server)
            .update_preferred_pharmacy("29", "2", "12")
            .await
            .unwrap_err();
        m.assert_async().await;
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn update_preferred_pharmacy_coerces_unknown() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", path("chart/29/pharmacies/preferred").as_str())
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let err = client_for(&server)
            .update_preferred_pharmacy("29", "2", "12")
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn update_default_pharmacy_passes_unknown_through() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("PUT", path("chart/29/pharmacies/default").as_str())
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let err = client_for(&server)
            .update_default_pharmacy("29", "2", "12")
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Unknown);
    }

    #[tokio::test]
    async fn blank_department_is_not_sent() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", path("chart/29/pharmacies/default").as_str())
            .match_query(Matcher::Exact("clinicalproviderid=12".into()))
            .with_status(200)
            .with_body(r#"{"success": "true"}"#)
            .create_async()
            .await;

        client_for(&server)
            .update_default_pharmacy("29", "", "12")
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn delete_preferred_pharmacy() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", path("chart/29/pharmacies/preferred").as_str())
            .match_query(Matcher::UrlEncoded("clinicalproviderid".into(), "12".into()))
            .with_status(200)
            .with_body(r#"{"success": "true"}"#)
            .create_async()
            .await;

        client_for(&server)
            .delete_preferred_pharmacy("29", "2", "12")
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn clinical_provider_search() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", path("clinicalproviders/search").as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("name".into(), "Walgreens".into()),
                Matcher::UrlEncoded("zip".into(), "80202".into()),
                Matcher::UrlEncoded("ordertype".into(), "PRESCRIPTION".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"clinicalproviders": [{"clinicalproviderid": "77", "name": "Walgreens #123", "distance": "1.5"}]}"#,
            )
            .create_async()
            .await;

        let request = SearchClinicalProvidersRequest {
            name: Some("Walgreens".into()),
            zip: Some("80202".into()),
            order_type: OrderType::Prescription,
            ..Default::default()
        };
        let results = client_for(&server)
            .search_clinical_providers(&request)
            .await
            .unwrap();
        m.assert_async().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].distance, Some(1.5));
    }
}
