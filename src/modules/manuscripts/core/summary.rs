use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::manuscripts::core::assignment::{AssignmentRecord, AssignmentRole};
use crate::modules::manuscripts::core::manuscript::ManuscriptSnapshot;
use crate::shared::core::primitives::format_display_date;

/// Summary block as the API reported it; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRaw {
    pub days_since_submission: Option<i64>,
    pub last_activity: Option<DateTime<Utc>>,
    pub total_editors: Option<i64>,
    pub total_reviewers: Option<i64>,
    pub accepted_reviewers: Option<i64>,
    pub pending_reviewers: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub days_since_submission: u32,
    pub last_activity: String,
    pub total_editors: u32,
    pub total_reviewers: u32,
    pub accepted_reviewers: u32,
    pub pending_reviewers: u32,
}

fn count(raw: Option<i64>) -> Option<u32> {
    raw.map(|value| u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

fn tally<F>(assignments: &[AssignmentRecord], predicate: F) -> u32
where
    F: Fn(&AssignmentRecord) -> bool,
{
    let total = assignments.iter().filter(|record| predicate(record)).count();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Derives the summary from the snapshot and assignment history alone.
pub fn summarize(
    snapshot: &ManuscriptSnapshot,
    assignments: &[AssignmentRecord],
    now: DateTime<Utc>,
) -> SubmissionSummary {
    let days_since_submission = snapshot
        .submitted_at
        .map(|submitted_at| (now - submitted_at).num_days().max(0))
        .map(|days| u32::try_from(days).unwrap_or(u32::MAX))
        .unwrap_or(0);

    let last_activity = assignments
        .iter()
        .filter_map(AssignmentRecord::last_touched_at)
        .chain(snapshot.submitted_at)
        .max();

    let is_reviewer = |record: &AssignmentRecord| record.role == AssignmentRole::Reviewer;

    SubmissionSummary {
        days_since_submission,
        last_activity: format_display_date(last_activity),
        total_editors: tally(assignments, |record| record.role == AssignmentRole::Editor),
        total_reviewers: tally(assignments, is_reviewer),
        accepted_reviewers: tally(assignments, |record| {
            is_reviewer(record) && record.status.is_accepted()
        }),
        pending_reviewers: tally(assignments, |record| {
            is_reviewer(record) && record.status.is_pending()
        }),
    }
}

/// Prefers server-reported values, falling back to `derived` per field.
pub fn reconcile(derived: SubmissionSummary, reported: Option<&SummaryRaw>) -> SubmissionSummary {
    let Some(reported) = reported else {
        return derived;
    };
    SubmissionSummary {
        days_since_submission: count(reported.days_since_submission)
            .unwrap_or(derived.days_since_submission),
        last_activity: reported
            .last_activity
            .map(|at| format_display_date(Some(at)))
            .unwrap_or(derived.last_activity),
        total_editors: count(reported.total_editors).unwrap_or(derived.total_editors),
        total_reviewers: count(reported.total_reviewers).unwrap_or(derived.total_reviewers),
        accepted_reviewers: count(reported.accepted_reviewers)
            .unwrap_or(derived.accepted_reviewers),
        pending_reviewers: count(reported.pending_reviewers).unwrap_or(derived.pending_reviewers),
    }
}
