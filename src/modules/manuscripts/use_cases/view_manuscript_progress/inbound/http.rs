use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::modules::manuscripts::adapters::outbound::manuscript_source::SourceError;
use crate::modules::manuscripts::adapters::wire::ManuscriptDocumentDto;
use crate::modules::manuscripts::core::document::ManuscriptDocument;
use crate::modules::manuscripts::use_cases::view_manuscript_progress::handler::ApplicationError;
use crate::modules::manuscripts::use_cases::view_manuscript_progress::projection::project;
use crate::shared::core::auth::AuthContext;
use crate::shared::core::cancellation::CancellationToken;
use crate::shell::state::AppState;

pub fn auth_from_headers(headers: &HeaderMap) -> Option<AuthContext> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(AuthContext::from_authorization_header)
}

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Unauthorized | ApplicationError::Source(SourceError::Unauthorized) => {
            StatusCode::UNAUTHORIZED
        }
        ApplicationError::Source(SourceError::NotFound(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Source(SourceError::Decode(_) | SourceError::Backend(_)) => {
            StatusCode::BAD_GATEWAY
        }
        ApplicationError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(manuscript_id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_id = Uuid::now_v7();
    let Some(auth) = auth_from_headers(&headers) else {
        return with_request_id(StatusCode::UNAUTHORIZED.into_response(), request_id);
    };
    // Axum drops this future when the client goes away; the token covers
    // callers that share the handler outside a request scope.
    let cancellation = CancellationToken::new();
    let span = tracing::info_span!("view_manuscript_progress", %request_id, %manuscript_id);

    let response = match state
        .progress_handler
        .handle(&auth, &manuscript_id, &cancellation)
        .instrument(span)
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(error) => status_for(&error).into_response(),
    };
    with_request_id(response, request_id)
}

fn with_request_id(mut response: Response, request_id: Uuid) -> Response {
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Projects a document supplied in the request body, skipping the upstream fetch.
pub async fn project_document(
    State(state): State<AppState>,
    body: Result<Json<ManuscriptDocumentDto>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected manuscript document");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    let document: ManuscriptDocument = body.into();
    let handler = &state.progress_handler;
    Json(project(&document, handler.options(), handler.now())).into_response()
}
