// Read model handed to the presentation layer for one manuscript.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::manuscripts::core::document::ManuscriptDocument;
use crate::modules::manuscripts::core::next_steps::{NextStepsAdvisory, derive_next_steps};
use crate::modules::manuscripts::core::progress::{WorkflowProgress, compute_progress};
use crate::modules::manuscripts::core::summary::{SubmissionSummary, reconcile, summarize};
use crate::modules::manuscripts::core::timeline::{TimelineEntry, TimelineOptions, build_timeline};
use crate::shared::core::primitives::format_display_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManuscriptHeader {
    pub id: String,
    pub title: String,
    pub abstract_html: String,
    pub journal_title: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub submitted_display_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManuscriptProgressView {
    pub manuscript: ManuscriptHeader,
    pub timeline: Vec<TimelineEntry>,
    pub progress: WorkflowProgress,
    pub progress_label: String,
    pub current_stage_label: String,
    pub next_steps: NextStepsAdvisory,
    pub summary: SubmissionSummary,
}

pub fn project(
    document: &ManuscriptDocument,
    options: &TimelineOptions,
    now: DateTime<Utc>,
) -> ManuscriptProgressView {
    let manuscript = &document.manuscript;
    let progress = compute_progress(&document.workflow);
    let next_steps = derive_next_steps(&manuscript.current_stage, document.next_steps.as_ref());
    let summary = reconcile(
        summarize(manuscript, &document.assignments, now),
        document.summary.as_ref(),
    );

    ManuscriptProgressView {
        manuscript: ManuscriptHeader {
            id: manuscript.id.clone(),
            title: manuscript.title.clone(),
            abstract_html: manuscript.abstract_html.clone(),
            journal_title: manuscript.journal_title.clone(),
            submitted_at: manuscript.submitted_at,
            submitted_display_date: format_display_date(manuscript.submitted_at),
        },
        timeline: build_timeline(manuscript, &document.assignments, options),
        progress_label: progress.percentage_label(),
        progress,
        current_stage_label: next_steps.current_stage_label.clone(),
        next_steps,
        summary,
    }
}
