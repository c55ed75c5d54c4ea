use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercases and collapses `_`, `-` and whitespace so "Minor_Revision",
/// "minor-revision" and "minor revision" decode to the same key.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentRole {
    Editor,
    Reviewer,
    Unknown(String),
}

impl AssignmentRole {
    pub fn decode(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "editor" => Self::Editor,
            "reviewer" => Self::Reviewer,
            _ => {
                tracing::debug!(raw, "unrecognized assignment role");
                Self::Unknown(raw.trim().to_string())
            }
        }
    }
}

impl fmt::Display for AssignmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editor => f.write_str("Editor"),
            Self::Reviewer => f.write_str("Reviewer"),
            Self::Unknown(raw) if raw.is_empty() => f.write_str("Assignee"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Unknown(String),
}

impl AssignmentStatus {
    /// Accepts the status names and the legacy numeric codes ("0".."3").
    pub fn decode(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "0" | "pending" | "assigned" | "invited" => Self::Pending,
            "1" | "accepted" | "accept" => Self::Accepted,
            "2" | "rejected" | "reject" | "declined" => Self::Rejected,
            "3" | "completed" | "complete" | "done" => Self::Completed,
            _ => {
                tracing::debug!(raw, "unrecognized assignment status");
                Self::Unknown(raw.trim().to_string())
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted | Self::Completed)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Accepted => f.write_str("Accepted"),
            Self::Rejected => f.write_str("Rejected"),
            Self::Completed => f.write_str("Completed"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewerDecision {
    Accept,
    MinorRevision,
    MajorRevision,
    Reject,
    Pending,
    Unknown(String),
}

impl ReviewerDecision {
    pub fn decode(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "accept" | "accepted" => Self::Accept,
            "minorrevision" | "minor" => Self::MinorRevision,
            "majorrevision" | "major" => Self::MajorRevision,
            "reject" | "rejected" => Self::Reject,
            "" | "pending" => Self::Pending,
            _ => {
                tracing::debug!(raw, "unrecognized reviewer decision");
                Self::Unknown(raw.trim().to_string())
            }
        }
    }
}

impl fmt::Display for ReviewerDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => f.write_str("Accept"),
            Self::MinorRevision => f.write_str("Minor Revision"),
            Self::MajorRevision => f.write_str("Major Revision"),
            Self::Reject => f.write_str("Reject"),
            Self::Pending => f.write_str("Pending"),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// One editor or reviewer assignment as reported by the journal API.
///
/// `reviewer_decision` is only ever `Some` for `AssignmentRole::Reviewer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: String,
    pub role: AssignmentRole,
    pub assigned_to: String,
    pub assigned_to_id: String,
    pub assigned_by: String,
    pub assigned_by_id: String,
    pub assigned_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: AssignmentStatus,
    pub status_text: String,
    pub reviewer_decision: Option<ReviewerDecision>,
}

impl AssignmentRecord {
    /// True when the assignee acted on the assignment after it was made.
    pub fn has_response(&self) -> bool {
        match (self.assigned_at, self.updated_at) {
            (_, None) => false,
            (Some(assigned_at), Some(updated_at)) => updated_at != assigned_at,
            (None, Some(_)) => true,
        }
    }

    /// Latest known moment this record changed.
    pub fn last_touched_at(&self) -> Option<DateTime<Utc>> {
        self.assigned_at.max(self.updated_at)
    }
}
