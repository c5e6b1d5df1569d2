//! Rule chain wire <-> domain mapping
//!
//! Loading assigns fresh session ids and keeps backend ids; saving drops
//! session ids. Both directions switch on the step variant exhaustively.

use chrono::{DateTime, Utc};

use novelist_domain::{
    ChainStep, PrivateStepConfig, RuleChainId, StepBody, StepDbId, StepList, TaskType,
    TemplateId, TemplateRef,
};
use novelist_protocol::{
    PrivateStepPayloadData, RuleChainData, RuleChainStepData, StepPayloadData,
    StepTemplateSummaryData, TemplateStepPayloadData,
};

/// A rule chain opened for editing
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRuleChain {
    pub id: RuleChainId,
    pub name: String,
    pub description: Option<String>,
    pub steps: StepList,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RuleChainData> for LoadedRuleChain {
    fn from(data: RuleChainData) -> Self {
        Self {
            id: RuleChainId::new(data.id),
            name: data.name,
            description: data.description,
            steps: step_list_from_wire(data.steps),
            updated_at: data.updated_at,
        }
    }
}

/// A template that can be attached to a chain
#[derive(Debug, Clone, PartialEq)]
pub struct StepTemplateSummary {
    pub id: TemplateId,
    pub name: String,
    pub description: Option<String>,
    pub task_type: Option<TaskType>,
}

impl StepTemplateSummary {
    pub fn to_ref(&self) -> TemplateRef {
        TemplateRef::new(self.id, self.name.clone())
    }
}

impl From<StepTemplateSummaryData> for StepTemplateSummary {
    fn from(data: StepTemplateSummaryData) -> Self {
        Self {
            id: TemplateId::new(data.id),
            name: data.name,
            description: data.description,
            task_type: data.task_type.map(TaskType::from),
        }
    }
}

/// Build the editable list from wire steps, ordered by their `order` field.
pub fn step_list_from_wire(mut steps: Vec<RuleChainStepData>) -> StepList {
    steps.sort_by_key(|s| s.order);
    StepList::from_steps(steps.into_iter().map(step_from_wire).collect())
}

/// Wire form of every step, in list order.
pub fn steps_to_wire(list: &StepList) -> Vec<RuleChainStepData> {
    list.iter().map(step_to_wire).collect()
}

fn step_from_wire(data: RuleChainStepData) -> ChainStep {
    let body = match data.payload {
        StepPayloadData::Private(p) => StepBody::Private(PrivateStepConfig {
            task_type: TaskType::from(p.task_type),
            parameters: p.parameters,
            custom_instruction: p.custom_instruction,
            post_processing_rules: p.post_processing_rules,
            input_source: p.input_source,
            model_id: p.model_id,
            llm_overrides: p.llm_overrides,
            constraints: p.constraints,
            output_variable: p.output_variable,
        }),
        StepPayloadData::Template(t) => {
            StepBody::Template(TemplateRef::new(TemplateId::new(t.template_id), t.name))
        }
    };
    ChainStep::restored(
        data.db_id.map(StepDbId::new),
        data.enabled,
        data.description,
        body,
    )
}

fn step_to_wire(step: &ChainStep) -> RuleChainStepData {
    let payload = match step.body() {
        StepBody::Private(config) => StepPayloadData::Private(PrivateStepPayloadData {
            task_type: config.task_type.as_str().to_string(),
            parameters: config.parameters.clone(),
            custom_instruction: config.custom_instruction.clone(),
            post_processing_rules: config.post_processing_rules.clone(),
            input_source: config.input_source.clone(),
            model_id: config.model_id.clone(),
            llm_overrides: config.llm_overrides.clone(),
            constraints: config.constraints.clone(),
            output_variable: config.output_variable.clone(),
        }),
        StepBody::Template(template) => StepPayloadData::Template(TemplateStepPayloadData {
            template_id: template.template_id.get(),
            name: template.name.clone(),
        }),
    };
    RuleChainStepData {
        db_id: step.db_id().map(StepDbId::get),
        order: step.order(),
        enabled: step.is_enabled(),
        description: step.description().map(str::to_string),
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novelist_domain::StepKind;
    use serde_json::json;

    fn wire_steps() -> Vec<RuleChainStepData> {
        serde_json::from_value(json!([
            {"dbId": 30, "order": 2, "kind": "private", "taskType": "extract_events"},
            {"dbId": 10, "order": 0, "kind": "template", "templateId": 5, "name": "Cast sweep",
             "enabled": false},
            {"dbId": 20, "order": 1, "kind": "private", "taskType": "score_prose",
             "description": "House metric", "parameters": {"scale": 10}}
        ]))
        .unwrap()
    }

    #[test]
    fn load_sorts_by_wire_order_and_keeps_db_ids() {
        let list = step_list_from_wire(wire_steps());

        let db_ids: Vec<_> = list.iter().map(|s| s.db_id().map(StepDbId::get)).collect();
        assert_eq!(db_ids, vec![Some(10), Some(20), Some(30)]);
        let orders: Vec<_> = list.iter().map(ChainStep::order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(list.steps()[0].kind(), StepKind::Template);
        assert!(!list.steps()[0].is_enabled());
    }

    #[test]
    fn load_densifies_sparse_order() {
        let steps: Vec<RuleChainStepData> = serde_json::from_value(json!([
            {"order": 40, "kind": "private", "taskType": "summarize"},
            {"order": 7, "kind": "private", "taskType": "translate"}
        ]))
        .unwrap();

        let list = step_list_from_wire(steps);
        let orders: Vec<_> = list.iter().map(ChainStep::order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert!(matches!(
            list.steps()[0].body(),
            StepBody::Private(c) if c.task_type == TaskType::Translate
        ));
    }

    #[test]
    fn unknown_task_type_survives_a_round_trip() {
        let list = step_list_from_wire(wire_steps());
        let wire = steps_to_wire(&list);
        let StepPayloadData::Private(payload) = &wire[1].payload else {
            panic!("expected private payload");
        };
        assert_eq!(payload.task_type, "score_prose");
        assert_eq!(payload.parameters["scale"], json!(10));
        assert_eq!(wire[1].description.as_deref(), Some("House metric"));
    }

    #[test]
    fn save_uses_list_order_and_omits_session_ids() {
        let mut list = step_list_from_wire(wire_steps());
        list.move_step(0, 2).unwrap();
        let change = list.duplicate(list.steps()[0].temp_id());
        assert!(change.is_mutation());

        let wire = steps_to_wire(&list);
        let value = serde_json::to_value(&wire).unwrap();

        let orders: Vec<_> = wire.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
        assert_eq!(wire[0].db_id, Some(20));
        assert_eq!(wire[1].db_id, None);
        assert_eq!(wire[3].db_id, Some(10));
        for step in value.as_array().unwrap() {
            assert!(step.get("tempId").is_none());
            assert!(step.get("temp_id").is_none());
        }
    }

    #[test]
    fn chain_conversion_carries_metadata() {
        let data = RuleChainData {
            id: 8,
            name: "Chapter pipeline".to_string(),
            description: Some("Runs per chapter".to_string()),
            steps: wire_steps(),
            updated_at: None,
        };
        let chain = LoadedRuleChain::from(data);
        assert_eq!(chain.id, RuleChainId::new(8));
        assert_eq!(chain.steps.len(), 3);
    }

    #[test]
    fn template_summary_converts_task_type() {
        let summary = StepTemplateSummary::from(StepTemplateSummaryData {
            id: 3,
            name: "Relationship map".to_string(),
            description: None,
            task_type: Some("extract_relationships".to_string()),
        });
        assert_eq!(summary.task_type, Some(TaskType::ExtractRelationships));
        assert_eq!(summary.to_ref(), TemplateRef::new(TemplateId::new(3), "Relationship map"));
    }
}
