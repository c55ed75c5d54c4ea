use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::modules::manuscripts::adapters::outbound::manuscript_source::{
    ManuscriptSource, SourceError,
};
use crate::modules::manuscripts::core::document::ManuscriptDocument;
use crate::modules::manuscripts::core::timeline::TimelineOptions;
use crate::modules::manuscripts::use_cases::view_manuscript_progress::projection::{
    ManuscriptProgressView, project,
};
use crate::shared::core::auth::AuthContext;
use crate::shared::core::cancellation::CancellationToken;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("missing bearer token")]
    Unauthorized,

    #[error("request cancelled")]
    Cancelled,
}

pub struct ViewManuscriptProgressHandler<TSource>
where
    TSource: ManuscriptSource + ?Sized + 'static,
{
    source: Arc<TSource>,
    options: TimelineOptions,
    clock: fn() -> DateTime<Utc>,
}

impl<TSource> ViewManuscriptProgressHandler<TSource>
where
    TSource: ManuscriptSource + ?Sized + 'static,
{
    pub fn new(source: Arc<TSource>, options: TimelineOptions) -> Self {
        Self {
            source,
            options,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Fetches, decodes and projects one manuscript.
    ///
    /// The fetch is the only await point. If `cancellation` fires while it is
    /// in flight, or before its result is applied, no view is produced.
    pub async fn handle(
        &self,
        auth: &AuthContext,
        manuscript_id: &str,
        cancellation: &CancellationToken,
    ) -> Result<ManuscriptProgressView, ApplicationError> {
        if !auth.is_present() {
            return Err(ApplicationError::Unauthorized);
        }
        if cancellation.is_cancelled() {
            return Err(ApplicationError::Cancelled);
        }

        let fetched = tokio::select! {
            biased;
            _ = cancellation.cancelled() => Err(ApplicationError::Cancelled),
            result = self.source.fetch_assignment_history(auth, manuscript_id) => {
                result.map_err(ApplicationError::from)
            }
        };

        if cancellation.is_cancelled() {
            tracing::debug!(manuscript_id, "dropping stale manuscript fetch");
            return Err(ApplicationError::Cancelled);
        }

        let document: ManuscriptDocument = match fetched {
            Ok(dto) => dto.into(),
            Err(error) => {
                tracing::warn!(manuscript_id, %error, "manuscript fetch failed");
                return Err(error);
            }
        };

        let view = project(&document, &self.options, self.now());
        tracing::info!(
            manuscript_id,
            timeline_entries = view.timeline.len(),
            percentage = view.progress.percentage,
            stage = %view.current_stage_label,
            "projected manuscript progress"
        );
        Ok(view)
    }
}
