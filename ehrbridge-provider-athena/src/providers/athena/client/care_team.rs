//! Care team members and recipient classes.

use ehrbridge_spec::types::{CareTeam, RecipientClassesPage};

use super::{AthenaClient, conversion_failed, segment};
use crate::encoding::WireValues;
use crate::error::EhrError;
use crate::execution::http::{ContentType, HttpRequest};
use crate::providers::athena::policy::Operation;
use crate::standards::athena::transformers::{
    care_team_from_athena, recipient_classes_page_from_athena,
};
use crate::standards::athena::types::{AthenaCareTeam, AthenaRecipientClassesResponse};

fn care_team_path(patient_id: &str) -> String {
    format!("chart/{}/careteam", segment(patient_id))
}

impl AthenaClient {
    /// A patient without members is reported as `NotFound`.
    pub async fn get_care_team(
        &self,
        patient_id: &str,
        department_id: &str,
    ) -> Result<CareTeam, EhrError> {
        let request =
            HttpRequest::get(care_team_path(patient_id)).query_param("departmentid", department_id);
        let team: AthenaCareTeam = self.call(Operation::GetCareTeam, request).await?;
        if team.members.is_empty() {
            return Err(EhrError::not_found("patient does not have a care team"));
        }
        care_team_from_athena(&team).map_err(conversion_failed("get care team"))
    }

    pub async fn update_care_team(
        &self,
        patient_id: &str,
        clinical_provider_id: &str,
        department_id: &str,
        recipient_class_id: &str,
    ) -> Result<(), EhrError> {
        let form = WireValues::from_iter([
            ("clinicalproviderid", clinical_provider_id),
            ("departmentid", department_id),
            ("recipientclassid", recipient_class_id),
        ]);
        let request = HttpRequest::put(care_team_path(patient_id)).form(form);
        self.call_unit(Operation::UpdateCareTeam, request).await
    }

    pub async fn delete_care_team(
        &self,
        patient_id: &str,
        member_id: &str,
        department_id: &str,
    ) -> Result<(), EhrError> {
        let request = HttpRequest::delete(care_team_path(patient_id))
            .query_param("memberid", member_id)
            .query_param("departmentid", department_id)
            .with_content_type(Some(ContentType::Json));
        self.call_unit(Operation::DeleteCareTeam, request).await
    }

    pub async fn list_recipient_classes(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> Result<RecipientClassesPage, EhrError> {
        let mut query = WireValues::new();
        query.set_opt("limit", limit.map(|l| l.to_string()));
        query.set_opt("offset", offset.map(|o| o.to_string()));

        let request = HttpRequest::get("chart/configuration/recipientclasses").with_query(query);
        let response: AthenaRecipientClassesResponse =
            self.call(Operation::ListRecipientClasses, request).await?;
        Ok(recipient_classes_page_from_athena(&response))
    }
}
