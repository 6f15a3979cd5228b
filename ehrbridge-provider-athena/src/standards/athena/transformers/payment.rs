//! Payment and stored-card converters.

use ehrbridge_spec::types::{
    CreditCardInformation, DeleteStoredCardResult, PaymentInformation, PaymentResult, StoredCard,
    StoredCardUploadResult,
};

use crate::encoding::scalars::parse_bool_lenient;
use crate::error::EhrError;
use crate::standards::athena::types::{
    AthenaCreditCardInformation, AthenaDeleteStoredCardResponse, AthenaPaymentInformation,
    AthenaPaymentResponse, AthenaStoredCard, AthenaStoredCardUploadResponse,
};

pub fn credit_card_to_athena(card: &CreditCardInformation) -> AthenaCreditCardInformation {
    AthenaCreditCardInformation {
        account_number: card.account_number.clone(),
        billing_address: card.billing_address.clone(),
        billing_zip: card.billing_zip.clone(),
        card_security_code: card.card_security_code,
        expiration_month: card.expiration_month,
        expiration_year: card.expiration_year,
        name_on_card: card.name_on_card.clone(),
        department_id: card.department_id,
    }
}

pub fn payment_information_to_athena(payment: &PaymentInformation) -> AthenaPaymentInformation {
    AthenaPaymentInformation {
        card: credit_card_to_athena(&payment.card),
        amount: payment.amount.clone(),
    }
}

pub fn payment_result_from_athena(
    response: &AthenaPaymentResponse,
) -> Result<PaymentResult, EhrError> {
    Ok(PaymentResult {
        payment_id: response.payment_id.clone(),
        error_text: response.error_text.clone(),
        success: parse_bool_lenient("success", response.success.as_deref())?,
    })
}

pub fn stored_card_upload_result_from_athena(
    response: &AthenaStoredCardUploadResponse,
) -> Result<StoredCardUploadResult, EhrError> {
    Ok(StoredCardUploadResult {
        payment_id: response.payment_id.clone(),
        error_text: response.error_text.clone(),
        success: parse_bool_lenient("success", response.success.as_deref())?,
        stored_card_id: response.stored_card_id.clone(),
    })
}

pub fn stored_card_from_athena(card: &AthenaStoredCard) -> Result<StoredCard, EhrError> {
    Ok(StoredCard {
        stored_card_id: card.stored_card_id.clone(),
        status: card.status.clone(),
        card_type: card.card_type.clone(),
        preferred_card: parse_bool_lenient("preferredcard", card.preferred_card.as_deref())?,
        billing_address: card.billing_address.clone(),
        billing_city: card.billing_city.clone(),
        billing_state: card.billing_state.clone(),
        billing_zip: card.billing_zip.clone(),
        card_expiration_month_year: card.card_expiration_month_year.clone(),
        card_number_last_four_digits: card.card_number_last_four_digits.clone(),
    })
}

pub fn delete_stored_card_result_from_athena(
    response: &AthenaDeleteStoredCardResponse,
) -> Result<DeleteStoredCardResult, EhrError> {
    Ok(DeleteStoredCardResult {
        success: parse_bool_lenient("success", response.success.as_deref())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::WireValues;

    #[test]
    fn payment_form_fields() {
        let payment = PaymentInformation {
            card: CreditCardInformation {
                account_number: Some("4111111111111111".into()),
                billing_zip: Some("80202".into()),
                card_security_code: Some(123),
                expiration_month: Some(4),
                expiration_year: Some(2030),
                name_on_card: Some("John Heidenreich".into()),
                department_id: Some(2),
                ..Default::default()
            },
            amount: Some("25.00".into()),
        };
        let values = WireValues::from_record(&payment_information_to_athena(&payment)).unwrap();
        assert_eq!(values.get("accountnumber"), Some("4111111111111111"));
        assert_eq!(values.get("cardsecuritycode"), Some("123"));
        assert_eq!(values.get("expirationmonthmm"), Some("4"));
        assert_eq!(values.get("expirationyearyyyy"), Some("2030"));
        assert_eq!(values.get("departmentid"), Some("2"));
        assert_eq!(values.get("otheramount"), Some("25.00"));
        assert_eq!(values.get("billingaddress"), None);
    }

    #[test]
    fn stored_card_from_wire() {
        let card: AthenaStoredCard = serde_json::from_value(serde_json::json!({
            "storedcardid": "7",
            "cardtype": "VISA",
            "preferredcard": "true",
            "cardnumberlast4digits": "1111",
            "cardexpirationmmyyyy": "042030"
        }))
        .unwrap();
        let card = stored_card_from_athena(&card).unwrap();
        assert_eq!(card.preferred_card, Some(true));
        assert_eq!(card.card_expiration_month_year.as_deref(), Some("042030"));
    }

    #[test]
    fn payment_result_flags() {
        let response = AthenaPaymentResponse {
            payment_id: Some("99".into()),
            success: Some("false".into()),
            error_text: Some("declined".into()),
        };
        let result = payment_result_from_athena(&response).unwrap();
        assert_eq!(result.success, Some(false));
        assert_eq!(result.error_text.as_deref(), Some("declined"));

        let response = AthenaDeleteStoredCardResponse {
            success: Some("perhaps".into()),
        };
        assert!(delete_stored_card_result_from_athena(&response).is_err());
    }
}
