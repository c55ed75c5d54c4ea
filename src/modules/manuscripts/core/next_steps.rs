use serde::Serialize;

use crate::modules::manuscripts::core::manuscript::{CurrentStage, WorkflowStage};

/// Server-supplied "what happens next" block, already null-stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextStepsRaw {
    pub action: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NextStepsAdvisory {
    pub current_stage_label: String,
    pub stage_description: String,
    pub action: String,
    pub description: String,
    pub estimated_time: String,
}

struct StageDefault {
    action: &'static str,
    description: &'static str,
    estimated_time: &'static str,
}

fn stage_default(stage: &WorkflowStage) -> Option<StageDefault> {
    let (action, description, estimated_time) = match stage {
        WorkflowStage::Submitted => (
            "Awaiting editor assignment",
            "An editor will be assigned to evaluate the manuscript.",
            "1-2 weeks",
        ),
        WorkflowStage::EditorAssigned => (
            "Awaiting reviewer assignment",
            "The editor is selecting reviewers for the manuscript.",
            "1-2 weeks",
        ),
        WorkflowStage::ReviewerAssigned | WorkflowStage::UnderReview => (
            "Peer review in progress",
            "Reviewers are evaluating the manuscript.",
            "4-6 weeks",
        ),
        WorkflowStage::RevisionRequested => (
            "Submit a revised manuscript",
            "Address the reviewer comments and upload a revision.",
            "",
        ),
        WorkflowStage::Decision => (
            "Awaiting editorial decision",
            "The editor is preparing a decision based on the reviews.",
            "1-2 weeks",
        ),
        WorkflowStage::Accepted => (
            "Preparing for publication",
            "The manuscript has been accepted and is moving to production.",
            "",
        ),
        WorkflowStage::Published | WorkflowStage::Rejected => (
            "No further action required",
            "",
            "",
        ),
        WorkflowStage::Other(_) => return None,
    };
    Some(StageDefault {
        action,
        description,
        estimated_time,
    })
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Server values win field by field; the stage lookup only fills an advisory
/// the server left without an action.
pub fn derive_next_steps(stage: &CurrentStage, raw: Option<&NextStepsRaw>) -> NextStepsAdvisory {
    let action = non_blank(raw.and_then(|raw| raw.action.as_ref()));
    let description = non_blank(raw.and_then(|raw| raw.description.as_ref()));
    let estimated_time = non_blank(raw.and_then(|raw| raw.estimated_time.as_ref()));

    let fallback = match action {
        Some(_) => None,
        None => stage_default(&stage.stage),
    };

    NextStepsAdvisory {
        current_stage_label: stage.name.trim().to_string(),
        stage_description: stage.description.trim().to_string(),
        action: action
            .or_else(|| fallback.as_ref().map(|d| d.action.to_string()))
            .unwrap_or_default(),
        description: description
            .or_else(|| fallback.as_ref().map(|d| d.description.to_string()))
            .unwrap_or_default(),
        estimated_time: estimated_time
            .or_else(|| fallback.as_ref().map(|d| d.estimated_time.to_string()))
            .unwrap_or_default(),
    }
}
