use crate::modules::manuscripts::core::assignment::AssignmentRecord;
use crate::modules::manuscripts::core::manuscript::ManuscriptSnapshot;
use crate::modules::manuscripts::core::next_steps::NextStepsRaw;
use crate::modules::manuscripts::core::progress::WorkflowInfo;
use crate::modules::manuscripts::core::summary::SummaryRaw;

/// Everything one fetch of a manuscript's assignment history yields, decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ManuscriptDocument {
    pub manuscript: ManuscriptSnapshot,
    pub assignments: Vec<AssignmentRecord>,
    pub workflow: WorkflowInfo,
    pub summary: Option<SummaryRaw>,
    pub next_steps: Option<NextStepsRaw>,
}
