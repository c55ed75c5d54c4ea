use crate::modules::manuscripts::adapters::outbound::manuscript_source::ManuscriptSource;
use crate::modules::manuscripts::use_cases::view_manuscript_progress::handler::ViewManuscriptProgressHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub progress_handler: Arc<ViewManuscriptProgressHandler<dyn ManuscriptSource>>,
}
