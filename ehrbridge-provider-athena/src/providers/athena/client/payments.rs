//! Card payments and stored cards.

use ehrbridge_spec::types::{
    CreditCardInformation, DeleteStoredCardResult, PaymentInformation, PaymentResult, StoredCard,
    StoredCardUploadResult,
};

use super::{AthenaClient, conversion_failed, segment};
use crate::encoding::WireValues;
use crate::error::EhrError;
use crate::execution::http::HttpRequest;
use crate::providers::athena::policy::Operation;
use crate::standards::athena::transformers::{
    credit_card_to_athena, delete_stored_card_result_from_athena, payment_information_to_athena,
    payment_result_from_athena, stored_card_from_athena, stored_card_upload_result_from_athena,
};
use crate::standards::athena::types::{
    AthenaDeleteStoredCardResponse, AthenaPaymentResponse, AthenaStoredCard,
    AthenaStoredCardUploadResponse,
};

fn stored_card_path(patient_id: &str) -> String {
    format!("patients/{}/collectpayment/storedcard", segment(patient_id))
}

impl AthenaClient {
    pub async fn make_patient_payment(
        &self,
        patient_id: &str,
        payment: &PaymentInformation,
    ) -> Result<Vec<PaymentResult>, EhrError> {
        let form = WireValues::from_record(&payment_information_to_athena(payment))?;
        let request =
            HttpRequest::post(format!("patients/{}/collectpayment", segment(patient_id))).form(form);
        let responses: Vec<AthenaPaymentResponse> =
            self.call(Operation::MakePatientPayment, request).await?;
        responses
            .iter()
            .map(payment_result_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("make patient payment"))
    }

    pub async fn upload_patient_credit_card_details(
        &self,
        patient_id: &str,
        card: &CreditCardInformation,
    ) -> Result<Vec<StoredCardUploadResult>, EhrError> {
        let form = WireValues::from_record(&credit_card_to_athena(card))?;
        let request = HttpRequest::post(stored_card_path(patient_id)).form(form);
        let responses: Vec<AthenaStoredCardUploadResponse> = self
            .call(Operation::UploadPatientCreditCardDetails, request)
            .await?;
        responses
            .iter()
            .map(stored_card_upload_result_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("upload patient credit card details"))
    }

    pub async fn get_patient_credit_card_details(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<Vec<StoredCard>, EhrError> {
        let request =
            HttpRequest::get(stored_card_path(patient_id)).query_param("departmentid", department_id);
        let cards: Vec<AthenaStoredCard> = self
            .call(Operation::GetPatientCreditCardDetails, request)
            .await?;
        cards
            .iter()
            .map(stored_card_from_athena)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_failed("get patient credit card details"))
    }

    pub async fn delete_stored_credit_card(
        &self,
        patient_id: &str,
        stored_card_id: &str,
        department_id: &str,
    ) -> Result<DeleteStoredCardResult, EhrError> {
        let request = HttpRequest::delete(format!(
            "{}/{}",
            stored_card_path(patient_id),
            segment(stored_card_id)
        ))
        .query_param("departmentid", department_id);
        let response: AthenaDeleteStoredCardResponse = self
            .call(Operation::DeleteStoredCreditCard, request)
            .await?;
        delete_stored_card_result_from_athena(&response)
            .map_err(conversion_failed("delete stored credit card"))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::error::Code;
    use ehrbridge_spec::types::{CreditCardInformation, PaymentInformation};
    use mockito::Matcher;

    fn card() -> CreditCardInformation {
        CreditCardInformation {
            account_number: Some("4111111111111111".into()),
            billing_zip: Some("80202".into()),
            card_security_code: Some(123),
            expiration_month: Some(4),
            expiration_year: Some(2030),
            name_on_card: Some("John Heidenreich".into()),
            department_id: Some(2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn payment_posts_card_form() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", path("patients/29/collectpayment").as_str())
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("accountnumber".into(), "4111111111111111".into()),
                Matcher::UrlEncoded("expirationmonthmm".into(), "4".into()),
                Matcher::UrlEncoded("otheramount".into(), "25.00".into()),
                Matcher::UrlEncoded("departmentid".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"[{"epaymentid": "99", "success": "true"}]"#)
            .create_async()
            .await;

        let payment = PaymentInformation {
            card: card(),
            amount: Some("25.00".into()),
        };
        let results = client_for(&server)
            .make_patient_payment("29", &payment)
            .await
            .unwrap();
        m.assert_async().await;
        assert_eq!(results[0].payment_id.as_deref(), Some("99"));
        assert_eq!(results[0].success, Some(true));
    }

    #[tokio::test]
    async fn payment_declined_keeps_known_code() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", path("patients/29/collectpayment").as_str())
            .with_status(400)
            .with_body(r#"{"error": "card declined"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .make_patient_payment("29", &PaymentInformation::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn stored_card_upload() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", path("patients/29/collectpayment/storedcard").as_str())
            .match_body(Matcher::UrlEncoded("cardsecuritycode".into(), "123".into()))
            .with_status(200)
            .with_body(r#"[{"success": "true", "storedcardid": "7"}]"#)
            .create_async()
            .await;

        let results = client_for(&server)
            .upload_patient_credit_card_details("29", &card())
            .await
            .unwrap();
        m.assert_async().await;
        assert_eq!(results[0].stored_card_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn stored_cards_list() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("patients/29/collectpayment/storedcard").as_str())
            .match_query(Matcher::UrlEncoded("departmentid".into(), "2".into()))
            .with_status(200)
            .with_body(
                r#"[{"storedcardid": "7", "cardtype": "VISA", "preferredcard": "true", "cardnumberlast4digits": "1111"}]"#,
            )
            .create_async()
            .await;

        let cards = client_for(&server)
            .get_patient_credit_card_details("29", "2")
            .await
            .unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].preferred_card, Some(true));
        assert_eq!(cards[0].card_number_last_four_digits.as_deref(), Some("1111"));
    }

    #[tokio::test]
    async fn stored_cards_errors_are_internal() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", path("patients/29/collectpayment/storedcard").as_str())
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let err = client_for(&server)
            .get_patient_credit_card_details("29", "2")
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
        assert!(
            err.message()
                .starts_with("failed to get patient credit card details: ")
        );
    }

    #[tokio::test]
    async fn delete_stored_card() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", path("patients/29/collectpayment/storedcard/7").as_str())
            .match_query(Matcher::UrlEncoded("departmentid".into(), "2".into()))
            .with_status(200)
            .with_body(r#"{"success": "true"}"#)
            .create_async()
            .await;

        let result = client_for(&server)
            .delete_stored_credit_card("29", "7", "2")
            .await
            .unwrap();
        m.assert_async().await;
        assert_eq!(result.success, Some(true));
    }
}
