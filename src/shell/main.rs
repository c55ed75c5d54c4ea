use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use manuscript_workflow::modules::manuscripts::adapters::outbound::manuscript_source::ManuscriptSource;
use manuscript_workflow::modules::manuscripts::adapters::outbound::manuscript_source_rest::RestManuscriptSource;
use manuscript_workflow::modules::manuscripts::use_cases::view_manuscript_progress::handler::ViewManuscriptProgressHandler;
use manuscript_workflow::modules::manuscripts::use_cases::view_manuscript_progress::inbound::http::auth_from_headers;
use manuscript_workflow::shell::config::AppConfig;
use manuscript_workflow::shell::graphql::{AppSchema, schema};
use manuscript_workflow::shell::http::router;
use manuscript_workflow::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::load()?;

    let source: Arc<dyn ManuscriptSource> = Arc::new(RestManuscriptSource::new(
        &config.api.base_url,
        config.request_timeout(),
    )?);
    let state = AppState {
        progress_handler: Arc::new(ViewManuscriptProgressHandler::new(
            source,
            config.timeline_options(),
        )),
    };

    let app = router(state.clone())
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    tracing::info!(api = %config.api.base_url, "GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(auth) = auth_from_headers(&headers) {
        request = request.data(auth);
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
