// Canonical assignment-history document as returned by the journal API.

use chrono::{DateTime, TimeZone, Utc};

use crate::modules::manuscripts::adapters::wire::ManuscriptDocumentDto;

pub const SAMPLE_DOCUMENT: &str = r#"{
    "manuscript": {
        "id": 301,
        "title": "<p>Stable Orderings of Editorial Events</p>",
        "abstract": "<p>We study timelines.</p>",
        "submitted_at": "2024-01-01T09:00:00Z",
        "current_stage": {"stage": "Under Review", "description": "Reviewers are evaluating the manuscript"},
        "journal_title": "Journal of Applied Examples"
    },
    "assignment_history": [
        {
            "id": 11, "role": "editor",
            "assigned_to": "Dr. Ada Editor", "assigned_to_id": 17,
            "assigned_by": "Site Admin", "assigned_by_id": 1,
            "assigned_at": "2024-01-02 10:00:00", "updated_at": "2024-01-05 16:30:00",
            "status": "1", "status_text": "Editor accepted the assignment"
        },
        {
            "id": 12, "role": "reviewer",
            "assigned_to": "Dr. Rui Reviewer", "assigned_to_id": 23,
            "assigned_by": "Dr. Ada Editor", "assigned_by_id": 17,
            "assigned_at": "2024-01-08 08:00:00", "updated_at": "2024-01-20 12:00:00",
            "status": "accepted", "status_text": "Review submitted",
            "reviewer_status": "minor_revision"
        },
        {
            "id": 13, "role": "reviewer",
            "assigned_to": "Dr. Pat Pending", "assigned_to_id": 24,
            "assigned_by": "Dr. Ada Editor", "assigned_by_id": 17,
            "assigned_at": "2024-01-10 08:00:00", "updated_at": "2024-01-10 08:00:00",
            "status": "0", "status_text": "Invitation sent",
            "reviewer_status": null
        }
    ],
    "workflow_info": {"current_step": 3, "workflow_progress": {"percentage": "50.00", "max_steps": 6}},
    "summary": {
        "days_since_submission": null,
        "last_activity": "2024-01-20 12:00:00",
        "total_editors": 1,
        "total_reviewers": 2,
        "accepted_reviewers": 1,
        "pending_reviewers": 1
    },
    "next_steps": {
        "action": "Awaiting reviewer reports",
        "description": "One review is still outstanding",
        "estimated_time": "2-3 weeks"
    }
}"#;

pub fn make_sample_document() -> ManuscriptDocumentDto {
    serde_json::from_str(SAMPLE_DOCUMENT).unwrap()
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}
