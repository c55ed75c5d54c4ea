// Transport shapes of the journal API's assignment-history document, and the
// decode step into domain types.
//
// Every field is optional on the wire and loosely typed (ids as numbers,
// numbers as strings). Decoding never fails on content: unknown enum values
// become `Unknown`/`Other`, unparseable dates become `None`, and nested blocks
// of the wrong shape are dropped. Only a body that is not a JSON object is
// rejected, by serde, before this module is reached.

use serde::{Deserialize, Serialize};

use crate::modules::manuscripts::core::assignment::{
    AssignmentRecord, AssignmentRole, AssignmentStatus, ReviewerDecision,
};
use crate::modules::manuscripts::core::document::ManuscriptDocument;
use crate::modules::manuscripts::core::manuscript::{CurrentStage, ManuscriptSnapshot};
use crate::modules::manuscripts::core::next_steps::NextStepsRaw;
use crate::modules::manuscripts::core::progress::WorkflowInfo;
use crate::modules::manuscripts::core::summary::SummaryRaw;
use crate::shared::core::primitives::{
    lenient_f64, lenient_i64, lenient_list, lenient_object, lenient_or_default, lenient_string,
    parse_timestamp,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManuscriptDocumentDto {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub manuscript: ManuscriptDto,
    #[serde(default, deserialize_with = "lenient_list")]
    pub assignment_history: Vec<AssignmentDto>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub workflow_info: Option<WorkflowInfoDto>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub summary: Option<SummaryDto>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub next_steps: Option<NextStepsDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManuscriptDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub r#abstract: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub submitted_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub current_stage: Option<CurrentStageDto>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub journal_title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentStageDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_to_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_by_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reviewer_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowInfoDto {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub current_step: Option<i64>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub workflow_progress: Option<WorkflowProgressDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowProgressDto {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub max_steps: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryDto {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub days_since_submission: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_activity: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_editors: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_reviewers: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub accepted_reviewers: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub pending_reviewers: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NextStepsDto {
    #[serde(default, deserialize_with = "lenient_string")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub estimated_time: Option<String>,
}

fn non_negative(value: Option<i64>) -> u32 {
    value
        .map(|value| u32::try_from(value.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn timestamp(field: &'static str, raw: Option<&str>) -> Option<chrono::DateTime<chrono::Utc>> {
    let raw = raw?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::debug!(field, raw, "unparseable timestamp, rendering as sentinel");
    }
    parsed
}

impl From<ManuscriptDto> for ManuscriptSnapshot {
    fn from(dto: ManuscriptDto) -> Self {
        let current_stage = dto
            .current_stage
            .map(|stage| {
                CurrentStage::new(
                    stage.stage.unwrap_or_default(),
                    stage.description.unwrap_or_default(),
                )
            })
            .unwrap_or_default();
        Self {
            submitted_at: timestamp("submitted_at", dto.submitted_at.as_deref()),
            id: dto.id.unwrap_or_default(),
            title: dto.title.unwrap_or_default(),
            abstract_html: dto.r#abstract.unwrap_or_default(),
            current_stage,
            journal_title: dto.journal_title.unwrap_or_default(),
        }
    }
}

impl From<AssignmentDto> for AssignmentRecord {
    fn from(dto: AssignmentDto) -> Self {
        let id = dto.id.unwrap_or_default();
        let role = AssignmentRole::decode(dto.role.as_deref().unwrap_or_default());
        let reviewer_decision = match (&role, dto.reviewer_status.as_deref()) {
            (_, None) => None,
            (AssignmentRole::Reviewer, Some(raw)) => Some(ReviewerDecision::decode(raw)),
            (_, Some(raw)) => {
                tracing::warn!(
                    assignment_id = %id,
                    reviewer_status = raw,
                    "reviewer decision on a non-reviewer assignment, dropping it"
                );
                None
            }
        };
        Self {
            assigned_at: timestamp("assigned_at", dto.assigned_at.as_deref()),
            updated_at: timestamp("updated_at", dto.updated_at.as_deref()),
            status: AssignmentStatus::decode(dto.status.as_deref().unwrap_or_default()),
            id,
            role,
            assigned_to: dto.assigned_to.unwrap_or_default(),
            assigned_to_id: dto.assigned_to_id.unwrap_or_default(),
            assigned_by: dto.assigned_by.unwrap_or_default(),
            assigned_by_id: dto.assigned_by_id.unwrap_or_default(),
            status_text: dto.status_text.unwrap_or_default(),
            reviewer_decision,
        }
    }
}

impl From<WorkflowInfoDto> for WorkflowInfo {
    fn from(dto: WorkflowInfoDto) -> Self {
        let progress = dto.workflow_progress.unwrap_or_default();
        Self {
            current_step: non_negative(dto.current_step),
            max_steps: non_negative(progress.max_steps),
            reported_percentage: progress.percentage,
        }
    }
}

impl From<SummaryDto> for SummaryRaw {
    fn from(dto: SummaryDto) -> Self {
        Self {
            last_activity: timestamp("last_activity", dto.last_activity.as_deref()),
            days_since_submission: dto.days_since_submission,
            total_editors: dto.total_editors,
            total_reviewers: dto.total_reviewers,
            accepted_reviewers: dto.accepted_reviewers,
            pending_reviewers: dto.pending_reviewers,
        }
    }
}

impl From<NextStepsDto> for NextStepsRaw {
    fn from(dto: NextStepsDto) -> Self {
        Self {
            action: dto.action,
            description: dto.description,
            estimated_time: dto.estimated_time,
        }
    }
}

impl From<ManuscriptDocumentDto> for ManuscriptDocument {
    fn from(dto: ManuscriptDocumentDto) -> Self {
        Self {
            manuscript: dto.manuscript.into(),
            assignments: dto.assignment_history.into_iter().map(Into::into).collect(),
            workflow: dto.workflow_info.map(Into::into).unwrap_or_default(),
            summary: dto.summary.map(Into::into),
            next_steps: dto.next_steps.map(Into::into),
        }
    }
}
