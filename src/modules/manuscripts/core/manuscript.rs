use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named lifecycle phase. The lifecycle itself is owned by the journal API;
/// this only gives the names it reports a closed shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowStage {
    Submitted,
    EditorAssigned,
    ReviewerAssigned,
    UnderReview,
    RevisionRequested,
    Decision,
    Accepted,
    Published,
    Rejected,
    Other(String),
}

impl WorkflowStage {
    pub fn decode(raw: &str) -> Self {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "submitted" | "new" | "submission" => Self::Submitted,
            "editorassigned" => Self::EditorAssigned,
            "reviewerassigned" | "reviewersassigned" => Self::ReviewerAssigned,
            "underreview" | "inreview" | "review" => Self::UnderReview,
            "revisionrequested" | "revision" | "revisionsrequested" => Self::RevisionRequested,
            "decision" | "decisionpending" | "awaitingdecision" => Self::Decision,
            "accepted" => Self::Accepted,
            "published" => Self::Published,
            "rejected" => Self::Rejected,
            _ => {
                tracing::debug!(raw, "unrecognized workflow stage");
                Self::Other(raw.trim().to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStage {
    /// Stage name exactly as the API reported it, used for display.
    pub name: String,
    pub description: String,
    pub stage: WorkflowStage,
}

impl CurrentStage {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let stage = WorkflowStage::decode(&name);
        Self {
            name,
            description: description.into(),
            stage,
        }
    }
}

impl Default for CurrentStage {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// Immutable view of a manuscript as fetched. `title` and `abstract_html`
/// are rich-text payloads carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManuscriptSnapshot {
    pub id: String,
    pub title: String,
    pub abstract_html: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub current_stage: CurrentStage,
    pub journal_title: String,
}
