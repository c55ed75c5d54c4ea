use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::manuscripts::core::next_steps::NextStepsAdvisory;
use crate::modules::manuscripts::core::progress::WorkflowProgress;
use crate::modules::manuscripts::core::summary::SubmissionSummary;
use crate::modules::manuscripts::core::timeline::{TimelineEntry, TimelineEventKind};
use crate::modules::manuscripts::use_cases::view_manuscript_progress::projection::ManuscriptProgressView;
use crate::shared::core::auth::AuthContext;
use crate::shared::core::cancellation::CancellationToken;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimelineEntry {
    pub step: f64,
    pub step_label: String,
    pub kind: String,
    pub event_label: String,
    pub description: String,
    pub display_date: String,
    pub occurred_at: Option<DateTime<Utc>>,
    pub assignment_id: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub reviewer_decision: Option<String>,
}

impl From<TimelineEntry> for GqlTimelineEntry {
    fn from(entry: TimelineEntry) -> Self {
        let kind = match entry.kind {
            TimelineEventKind::Submission => "submission",
            TimelineEventKind::Assignment => "assignment",
            TimelineEventKind::Response => "response",
        };
        Self {
            step: entry.step.as_f64(),
            step_label: entry.step.to_string(),
            kind: kind.to_string(),
            event_label: entry.event_label,
            description: entry.description,
            display_date: entry.display_date,
            occurred_at: entry.occurred_at,
            assignment_id: entry.assignment_id,
            role: entry.role.map(|role| role.to_string()),
            status: entry.status.map(|status| status.to_string()),
            reviewer_decision: entry.reviewer_decision.map(|decision| decision.to_string()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlWorkflowProgress {
    pub current_step: u32,
    pub max_steps: u32,
    pub percentage: f64,
    pub percentage_label: String,
}

impl From<WorkflowProgress> for GqlWorkflowProgress {
    fn from(progress: WorkflowProgress) -> Self {
        Self {
            percentage_label: progress.percentage_label(),
            current_step: progress.current_step,
            max_steps: progress.max_steps,
            percentage: progress.percentage,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlNextSteps {
    pub current_stage_label: String,
    pub stage_description: String,
    pub action: String,
    pub description: String,
    pub estimated_time: String,
}

impl From<NextStepsAdvisory> for GqlNextSteps {
    fn from(v: NextStepsAdvisory) -> Self {
        Self {
            current_stage_label: v.current_stage_label,
            stage_description: v.stage_description,
            action: v.action,
            description: v.description,
            estimated_time: v.estimated_time,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSubmissionSummary {
    pub days_since_submission: u32,
    pub last_activity: String,
    pub total_editors: u32,
    pub total_reviewers: u32,
    pub accepted_reviewers: u32,
    pub pending_reviewers: u32,
}

impl From<SubmissionSummary> for GqlSubmissionSummary {
    fn from(v: SubmissionSummary) -> Self {
        Self {
            days_since_submission: v.days_since_submission,
            last_activity: v.last_activity,
            total_editors: v.total_editors,
            total_reviewers: v.total_reviewers,
            accepted_reviewers: v.accepted_reviewers,
            pending_reviewers: v.pending_reviewers,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlManuscriptProgress {
    pub manuscript_id: String,
    pub title: String,
    pub journal_title: String,
    pub submitted_display_date: String,
    pub current_stage_label: String,
    pub timeline: Vec<GqlTimelineEntry>,
    pub progress: GqlWorkflowProgress,
    pub next_steps: GqlNextSteps,
    pub summary: GqlSubmissionSummary,
}

impl From<ManuscriptProgressView> for GqlManuscriptProgress {
    fn from(v: ManuscriptProgressView) -> Self {
        Self {
            manuscript_id: v.manuscript.id,
            title: v.manuscript.title,
            journal_title: v.manuscript.journal_title,
            submitted_display_date: v.manuscript.submitted_display_date,
            current_stage_label: v.current_stage_label,
            timeline: v.timeline.into_iter().map(Into::into).collect(),
            progress: v.progress.into(),
            next_steps: v.next_steps.into(),
            summary: v.summary.into(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn manuscript_progress(
        &self,
        context: &Context<'_>,
        manuscript_id: String,
    ) -> GqlResult<GqlManuscriptProgress> {
        let state = context.data_unchecked::<AppState>();
        let auth = context
            .data_opt::<AuthContext>()
            .cloned()
            .unwrap_or_else(|| AuthContext::bearer(""));
        let cancellation = CancellationToken::new();

        let view = state
            .progress_handler
            .handle(&auth, &manuscript_id, &cancellation)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
