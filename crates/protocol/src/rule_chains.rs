//! Rule chain and step DTOs
//!
//! Steps are internally tagged by `kind` with the variant payload flattened
//! next to the shared fields:
//!
//! ```json
//! {"dbId": 4, "order": 0, "enabled": true, "kind": "template", "templateId": 2, "name": "Cast sweep"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_true() -> bool {
    true
}

fn default_input_source() -> String {
    "previous_step".to_string()
}

/// A rule chain as returned by `GET /api/rule-chains/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleChainData {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<RuleChainStepData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One step on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleChainStepData {
    /// Backend id; absent for steps that were never saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_id: Option<i64>,
    pub order: u32,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub payload: StepPayloadData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepPayloadData {
    Private(PrivateStepPayloadData),
    Template(TemplateStepPayloadData),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateStepPayloadData {
    pub task_type: String,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instruction: Option<String>,
    #[serde(default)]
    pub post_processing_rules: Vec<String>,
    #[serde(default = "default_input_source")]
    pub input_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_overrides: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_variable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStepPayloadData {
    pub template_id: i64,
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /api/rule-chains/{id}/steps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRuleChainStepsData {
    pub steps: Vec<RuleChainStepData>,
}

/// Entry of `GET /api/step-templates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTemplateSummaryData {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_step_wire_shape() {
        let step = RuleChainStepData {
            db_id: Some(4),
            order: 0,
            enabled: true,
            description: None,
            payload: StepPayloadData::Template(TemplateStepPayloadData {
                template_id: 2,
                name: "Cast sweep".to_string(),
            }),
        };

        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({
                "dbId": 4,
                "order": 0,
                "enabled": true,
                "kind": "template",
                "templateId": 2,
                "name": "Cast sweep"
            })
        );
    }

    #[test]
    fn unsaved_step_omits_db_id() {
        let step = RuleChainStepData {
            db_id: None,
            order: 1,
            enabled: false,
            description: Some("draft".to_string()),
            payload: StepPayloadData::Private(PrivateStepPayloadData {
                task_type: "summarize".to_string(),
                parameters: Map::new(),
                custom_instruction: None,
                post_processing_rules: vec![],
                input_source: "chapter_text".to_string(),
                model_id: None,
                llm_overrides: None,
                constraints: None,
                output_variable: None,
            }),
        };

        let value = serde_json::to_value(&step).unwrap();
        assert!(value.get("dbId").is_none());
        assert_eq!(value["kind"], "private");
        assert_eq!(value["taskType"], "summarize");
        assert_eq!(value["inputSource"], "chapter_text");
    }

    #[test]
    fn private_step_parses_with_defaults() {
        let raw = json!({
            "dbId": 9,
            "order": 3,
            "kind": "private",
            "taskType": "extract_events",
            "parameters": {"window": 2000, "nested": {"a": [1, 2]}}
        });

        let step: RuleChainStepData = serde_json::from_value(raw).unwrap();
        assert!(step.enabled);
        assert_eq!(step.db_id, Some(9));
        let StepPayloadData::Private(payload) = step.payload else {
            panic!("expected private payload");
        };
        assert_eq!(payload.input_source, "previous_step");
        assert_eq!(payload.parameters["window"], json!(2000));
        assert_eq!(payload.parameters["nested"], json!({"a": [1, 2]}));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let raw = json!({"order": 0, "kind": "macro", "taskType": "x"});
        assert!(serde_json::from_value::<RuleChainStepData>(raw).is_err());
    }

    #[test]
    fn chain_parses_without_optional_fields() {
        let chain: RuleChainData =
            serde_json::from_value(json!({"id": 1, "name": "Chapter pipeline"})).unwrap();
        assert!(chain.steps.is_empty());
        assert!(chain.updated_at.is_none());
    }
}
