// HTTP implementation of the ManuscriptSource port.
//
// Talks to `GET {base_url}/manuscripts/{id}/assignment-history` with the
// caller's bearer token. Status codes map onto SourceError; the body is
// handed back in wire shape for the use case to decode.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use crate::modules::manuscripts::adapters::outbound::manuscript_source::{
    ManuscriptSource, SourceError,
};
use crate::modules::manuscripts::adapters::wire::ManuscriptDocumentDto;
use crate::shared::core::auth::AuthContext;

pub struct RestManuscriptSource {
    client: Client,
    base_url: Url,
}

impl RestManuscriptSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::Backend(format!("invalid base url {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::Backend(format!(
                "base url {base_url} cannot carry a path"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Backend(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn assignment_history_url(&self, manuscript_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejected cannot-be-a-base urls, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["manuscripts", manuscript_id, "assignment-history"]);
        }
        url
    }
}

#[async_trait]
impl ManuscriptSource for RestManuscriptSource {
    async fn fetch_assignment_history(
        &self,
        auth: &AuthContext,
        manuscript_id: &str,
    ) -> Result<ManuscriptDocumentDto, SourceError> {
        let url = self.assignment_history_url(manuscript_id);
        tracing::debug!(%url, "fetching assignment history");

        let response = self
            .client
            .get(url)
            .bearer_auth(auth.token())
            .send()
            .await
            .map_err(|e| SourceError::Backend(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SourceError::Unauthorized),
            StatusCode::NOT_FOUND => Err(SourceError::NotFound(manuscript_id.to_string())),
            status if !status.is_success() => Err(SourceError::Backend(format!(
                "journal api responded with {status}"
            ))),
            _ => response
                .json::<ManuscriptDocumentDto>()
                .await
                .map_err(|e| SourceError::Decode(e.to_string())),
        }
    }
}
