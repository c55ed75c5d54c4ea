use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub use crate::modules::manuscripts::use_cases::view_manuscript_progress::inbound::graphql::QueryRoot;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}
