// Assignment timeline projection.
//
// Purpose
// - Turn a manuscript snapshot and its assignment history into an ordered
//   list of displayable events.
//
// Ordering
// - Step 1 is always the submission.
// - Assignment k (0-based, after optional reordering) sits at step k + 2.
// - Its response, if any, sits at step k + 2.5 directly after it.
// - `Step` derives `Ord` over (index, response) so sorting by step and
//   construction order agree.
// - `Chronological` orders the assignment entries by `assigned_at`. A
//   response stays at k + 2.5 even when it postdates the next assignment,
//   so response entries may interleave out of date order.
// - Records are not merged by id; every history row yields its own entries.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::modules::manuscripts::core::assignment::{
    AssignmentRecord, AssignmentRole, AssignmentStatus, ReviewerDecision,
};
use crate::modules::manuscripts::core::manuscript::ManuscriptSnapshot;
use crate::shared::core::primitives::format_display_date;

pub const SUBMISSION_LABEL: &str = "Manuscript Submitted";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step {
    pub index: u32,
    pub response: bool,
}

impl Step {
    pub fn primary(index: u32) -> Self {
        Self {
            index,
            response: false,
        }
    }

    pub fn response(index: u32) -> Self {
        Self {
            index,
            response: true,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.index) + if self.response { 0.5 } else { 0.0 }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.response {
            write!(f, "{}.5", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.response {
            serializer.serialize_f64(self.as_f64())
        } else {
            serializer.serialize_u32(self.index)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    Submission,
    Assignment,
    Response,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub step: Step,
    pub kind: TimelineEventKind,
    pub event_label: String,
    pub description: String,
    pub display_date: String,
    pub occurred_at: Option<DateTime<Utc>>,
    pub assignment_id: Option<String>,
    pub role: Option<AssignmentRole>,
    pub status: Option<AssignmentStatus>,
    pub reviewer_decision: Option<ReviewerDecision>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimelineOrder {
    /// Keep the order the API returned the assignments in.
    #[default]
    AsReceived,
    /// Stable sort by `assigned_at`; records without a parseable date go last.
    Chronological,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineOptions {
    pub order: TimelineOrder,
}

impl TimelineOptions {
    pub fn sorted(sort_by_timestamp: bool) -> Self {
        Self {
            order: if sort_by_timestamp {
                TimelineOrder::Chronological
            } else {
                TimelineOrder::AsReceived
            },
        }
    }
}

fn submission_entry(snapshot: &ManuscriptSnapshot) -> TimelineEntry {
    let journal = snapshot.journal_title.trim();
    let description = if journal.is_empty() {
        "Manuscript submitted".to_string()
    } else {
        format!("Submitted to {journal}")
    };
    TimelineEntry {
        step: Step::primary(1),
        kind: TimelineEventKind::Submission,
        event_label: SUBMISSION_LABEL.to_string(),
        description,
        display_date: format_display_date(snapshot.submitted_at),
        occurred_at: snapshot.submitted_at,
        assignment_id: None,
        role: None,
        status: None,
        reviewer_decision: None,
    }
}

fn assignment_entries(index: u32, record: &AssignmentRecord) -> Vec<TimelineEntry> {
    let assigned = TimelineEntry {
        step: Step::primary(index),
        kind: TimelineEventKind::Assignment,
        event_label: format!(
            "{} Assigned: {} (ID: {})",
            record.role, record.assigned_to, record.assigned_to_id
        ),
        description: record.status_text.clone(),
        display_date: format_display_date(record.assigned_at),
        occurred_at: record.assigned_at,
        assignment_id: Some(record.id.clone()),
        role: Some(record.role.clone()),
        status: Some(record.status.clone()),
        reviewer_decision: record.reviewer_decision.clone(),
    };
    if !record.has_response() {
        return vec![assigned];
    }
    if let (Some(assigned_at), Some(updated_at)) = (record.assigned_at, record.updated_at) {
        if updated_at < assigned_at {
            tracing::warn!(
                assignment_id = %record.id,
                %assigned_at,
                %updated_at,
                "assignment updated before it was assigned"
            );
        }
    }
    let response = TimelineEntry {
        step: Step::response(index),
        kind: TimelineEventKind::Response,
        event_label: format!("{} Response", record.role),
        description: record.status_text.clone(),
        display_date: format_display_date(record.updated_at),
        occurred_at: record.updated_at,
        ..assigned.clone()
    };
    vec![assigned, response]
}

pub fn build_timeline(
    snapshot: &ManuscriptSnapshot,
    assignments: &[AssignmentRecord],
    options: &TimelineOptions,
) -> Vec<TimelineEntry> {
    let mut ordered: Vec<&AssignmentRecord> = assignments.iter().collect();
    if options.order == TimelineOrder::Chronological {
        // `None` sorts before `Some`, so key on (is_none, date) to push undated records last.
        ordered.sort_by_key(|record| (record.assigned_at.is_none(), record.assigned_at));
    }

    let mut timeline = Vec::with_capacity(1 + assignments.len() * 2);
    timeline.push(submission_entry(snapshot));
    for (position, record) in ordered.into_iter().enumerate() {
        let index = u32::try_from(position)
            .unwrap_or(u32::MAX)
            .saturating_add(2);
        timeline.extend(assignment_entries(index, record));
    }
    timeline
}
