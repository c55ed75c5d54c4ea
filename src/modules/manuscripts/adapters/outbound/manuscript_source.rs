use async_trait::async_trait;
use thiserror::Error;

use crate::modules::manuscripts::adapters::wire::ManuscriptDocumentDto;
use crate::shared::core::auth::AuthContext;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("not authorized to read manuscript")]
    Unauthorized,

    #[error("manuscript {0} not found")]
    NotFound(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Port to the journal API that owns manuscripts and their workflow.
#[async_trait]
pub trait ManuscriptSource: Send + Sync {
    async fn fetch_assignment_history(
        &self,
        auth: &AuthContext,
        manuscript_id: &str,
    ) -> Result<ManuscriptDocumentDto, SourceError>;
}
