// In memory implementation of the ManuscriptSource port.
//
// Purpose
// - Exercise the progress use case and the inbound adapters without the
//   journal API.
//
// Responsibilities
// - Serve stored documents by manuscript id.
// - Optionally require a specific bearer token.
// - Simulate an offline or slow upstream.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::modules::manuscripts::adapters::outbound::manuscript_source::{
    ManuscriptSource, SourceError,
};
use crate::modules::manuscripts::adapters::wire::ManuscriptDocumentDto;
use crate::shared::core::auth::AuthContext;

#[derive(Default)]
pub struct InMemoryManuscriptSource {
    documents: RwLock<HashMap<String, ManuscriptDocumentDto>>,
    required_token: Option<String>,
    delay_fetch_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryManuscriptSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requiring_token(token: impl Into<String>) -> Self {
        Self {
            required_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub async fn insert(&self, manuscript_id: impl Into<String>, document: ManuscriptDocumentDto) {
        self.documents
            .write()
            .await
            .insert(manuscript_id.into(), document);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_fetch_ms(&self, ms: u64) {
        self.delay_fetch_ms.store(ms, Ordering::Relaxed);
    }
}

#[async_trait]
impl ManuscriptSource for InMemoryManuscriptSource {
    async fn fetch_assignment_history(
        &self,
        auth: &AuthContext,
        manuscript_id: &str,
    ) -> Result<ManuscriptDocumentDto, SourceError> {
        let delay = self.delay_fetch_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(SourceError::Backend("Manuscript source offline".into()));
        }
        if let Some(required) = &self.required_token {
            if auth.token() != required {
                return Err(SourceError::Unauthorized);
            }
        }
        self.documents
            .read()
            .await
            .get(manuscript_id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(manuscript_id.to_string()))
    }
}
