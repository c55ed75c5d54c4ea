// Shared test fixtures for assignment records and manuscript snapshots.
// Compiled into the crate only for tests (see `tests` in src/lib.rs).

use crate::modules::manuscripts::core::assignment::{
    AssignmentRecord, AssignmentRole, AssignmentStatus, ReviewerDecision,
};
use crate::modules::manuscripts::core::manuscript::{CurrentStage, ManuscriptSnapshot};
use crate::shared::core::primitives::parse_timestamp;

pub fn make_snapshot(submitted_at: &str) -> ManuscriptSnapshot {
    ManuscriptSnapshot {
        id: "ms-fixed-0001".to_string(),
        title: "<p>On Fixtures</p>".to_string(),
        abstract_html: "<p>A study of fixed inputs.</p>".to_string(),
        submitted_at: parse_timestamp(submitted_at),
        current_stage: CurrentStage::new("Submitted", "Received by the journal"),
        journal_title: "Journal of Fixtures".to_string(),
    }
}

pub struct AssignmentRecordBuilder {
    inner: AssignmentRecord,
}

#[allow(dead_code)]
impl AssignmentRecordBuilder {
    fn with_role(role: AssignmentRole) -> Self {
        Self {
            inner: AssignmentRecord {
                id: "asg-fixed-0001".to_string(),
                role,
                assigned_to: "Dr. Fixed Assignee".to_string(),
                assigned_to_id: "user-fixed-0001".to_string(),
                assigned_by: "Fixed Admin".to_string(),
                assigned_by_id: "admin-fixed-0001".to_string(),
                assigned_at: parse_timestamp("2024-01-02"),
                updated_at: parse_timestamp("2024-01-02"),
                status: AssignmentStatus::Pending,
                status_text: "Awaiting response".to_string(),
                reviewer_decision: None,
            },
        }
    }

    pub fn editor() -> Self {
        Self::with_role(AssignmentRole::Editor)
    }

    pub fn reviewer() -> Self {
        Self::with_role(AssignmentRole::Reviewer)
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn assigned_to(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.inner.assigned_to = name.into();
        self.inner.assigned_to_id = id.into();
        self
    }

    pub fn assigned_at(mut self, raw: &str) -> Self {
        self.inner.assigned_at = parse_timestamp(raw);
        self
    }

    pub fn updated_at(mut self, raw: &str) -> Self {
        self.inner.updated_at = parse_timestamp(raw);
        self
    }

    pub fn no_updated_at(mut self) -> Self {
        self.inner.updated_at = None;
        self
    }

    pub fn status(mut self, raw: &str) -> Self {
        self.inner.status = AssignmentStatus::decode(raw);
        self
    }

    pub fn status_text(mut self, v: impl Into<String>) -> Self {
        self.inner.status_text = v.into();
        self
    }

    pub fn reviewer_decision(mut self, v: ReviewerDecision) -> Self {
        self.inner.reviewer_decision = Some(v);
        self
    }

    pub fn build(self) -> AssignmentRecord {
        self.inner
    }
}

#[cfg(test)]
mod assignment_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let record = AssignmentRecordBuilder::reviewer()
            .id("asg-9")
            .assigned_to("Dr. Who", "u-9")
            .assigned_at("2024-05-01")
            .updated_at("2024-05-03")
            .status("2")
            .status_text("Declined")
            .reviewer_decision(ReviewerDecision::Reject)
            .build();

        assert_eq!(record.id, "asg-9");
        assert_eq!(record.role, AssignmentRole::Reviewer);
        assert_eq!(record.assigned_to_id, "u-9");
        assert_eq!(record.status, AssignmentStatus::Rejected);
        assert_eq!(record.reviewer_decision, Some(ReviewerDecision::Reject));
        assert!(record.has_response());
    }
}
