//! Rule Chain Service - load and save the step list of one chain
//!
//! The editor works on a local `StepList`; this service is the only place
//! that talks to the backend about it.

use std::sync::Arc;

use novelist_domain::{RuleChainId, StepList};
use novelist_protocol::{RuleChainData, SaveRuleChainStepsData, StepTemplateSummaryData};

use crate::application::dto::{steps_to_wire, LoadedRuleChain, StepTemplateSummary};
use crate::application::{ParseResponse, ServiceError};
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct RuleChainService {
    api: Arc<dyn RawApiPort>,
}

impl RuleChainService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch a chain and turn its steps into an editable list
    pub async fn load_chain(&self, id: RuleChainId) -> Result<LoadedRuleChain, ServiceError> {
        let path = format!("/api/rule-chains/{}", id);
        let data: RuleChainData = self.api.get_json(&path).await?.parse()?;
        let chain = LoadedRuleChain::from(data);
        tracing::debug!(chain_id = %chain.id, steps = chain.steps.len(), "Loaded rule chain");
        Ok(chain)
    }

    /// Replace the chain's steps with the editor's list.
    ///
    /// The backend answers with the stored chain so new steps pick up their
    /// backend ids.
    pub async fn save_steps(
        &self,
        id: RuleChainId,
        steps: &StepList,
    ) -> Result<LoadedRuleChain, ServiceError> {
        let path = format!("/api/rule-chains/{}/steps", id);
        let body = SaveRuleChainStepsData {
            steps: steps_to_wire(steps),
        };
        let body = serde_json::to_value(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        let data: RuleChainData = match self.api.put_json(&path, &body).await {
            Ok(value) => value.parse()?,
            Err(e) => {
                tracing::warn!(chain_id = %id, error = %e, "Saving rule chain steps failed");
                return Err(e.into());
            }
        };
        tracing::debug!(chain_id = %id, steps = data.steps.len(), "Saved rule chain steps");
        Ok(LoadedRuleChain::from(data))
    }

    /// Templates available for attaching as steps
    pub async fn list_templates(&self) -> Result<Vec<StepTemplateSummary>, ServiceError> {
        let data: Vec<StepTemplateSummaryData> =
            self.api.get_json("/api/step-templates").await?.parse()?;
        Ok(data.into_iter().map(StepTemplateSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use novelist_domain::{PrivateStepConfig, StepDbId, TaskType, TemplateId, TemplateRef};
    use serde_json::{json, Value};

    fn chain_json() -> Value {
        json!({
            "id": 4,
            "name": "Chapter pipeline",
            "steps": [
                {"dbId": 2, "order": 1, "kind": "template", "templateId": 9, "name": "Cast sweep"},
                {"dbId": 1, "order": 0, "kind": "private", "taskType": "summarize"}
            ]
        })
    }

    fn service(mock: MockRawApiPort) -> RuleChainService {
        RuleChainService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn load_chain_requests_the_chain_path() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/rule-chains/4")
            .times(1)
            .returning(|_| Ok(chain_json()));

        let chain = service(mock).load_chain(RuleChainId::new(4)).await.unwrap();

        assert_eq!(chain.name, "Chapter pipeline");
        let db_ids: Vec<_> = chain.steps.iter().map(|s| s.db_id()).collect();
        assert_eq!(db_ids, vec![Some(StepDbId::new(1)), Some(StepDbId::new(2))]);
    }

    #[tokio::test]
    async fn load_chain_reports_malformed_bodies() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({"id": "four"})));

        let err = service(mock).load_chain(RuleChainId::new(4)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn load_chain_passes_http_errors_through() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Err(ApiError::HttpStatus {
                status: 404,
                body: "missing".to_string(),
            })
        });

        let err = service(mock).load_chain(RuleChainId::new(4)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Api(ApiError::HttpStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn save_steps_sends_ordered_steps_without_session_ids() {
        let mut list = StepList::new();
        list.add_private(PrivateStepConfig::new(TaskType::ExtractEvents));
        list.attach_template(TemplateRef::new(TemplateId::new(9), "Cast sweep"));
        list.move_step(1, 0).unwrap();

        let mut mock = MockRawApiPort::new();
        mock.expect_put_json()
            .withf(|path, body| {
                let steps = body["steps"].as_array().cloned().unwrap_or_default();
                path == "/api/rule-chains/4/steps"
                    && steps.len() == 2
                    && steps[0]["kind"] == "template"
                    && steps[0]["order"] == 0
                    && steps[1]["taskType"] == "extract_events"
                    && steps[1]["order"] == 1
                    && steps.iter().all(|s| s.get("dbId").is_none() && s.get("tempId").is_none())
            })
            .times(1)
            .returning(|_, _| Ok(chain_json()));

        let saved = service(mock)
            .save_steps(RuleChainId::new(4), &list)
            .await
            .unwrap();
        assert_eq!(saved.steps.len(), 2);
    }

    #[tokio::test]
    async fn save_steps_surfaces_request_failures() {
        let mut mock = MockRawApiPort::new();
        mock.expect_put_json()
            .returning(|_, _| Err(ApiError::Request("connection refused".to_string())));

        let err = service(mock)
            .save_steps(RuleChainId::new(4), &StepList::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Api(ApiError::Request(_))));
    }

    #[tokio::test]
    async fn list_templates_decodes_summaries() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/api/step-templates")
            .returning(|_| {
                Ok(json!([
                    {"id": 9, "name": "Cast sweep", "taskType": "extract_characters"},
                    {"id": 10, "name": "Freeform"}
                ]))
            });

        let templates = service(mock).list_templates().await.unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].task_type, Some(TaskType::ExtractCharacters));
        assert_eq!(templates[1].task_type, None);
    }
}
