use crate::{
    Error, Result,
    api::DocumentApi,
    form::{FileInput, SubmitEvent, TextInput},
    handlers::{self, Notification, QueryOutcome},
    screen::Screen,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// The two forms bound to their handlers.
///
/// Submissions share nothing but the screen, so overlapping submissions
/// finish in whatever order their requests do.
#[derive(Clone)]
pub struct Page {
    api: Arc<dyn DocumentApi>,
    screen: Arc<dyn Screen>,
}

impl Page {
    pub fn new(api: Arc<dyn DocumentApi>, screen: Arc<dyn Screen>) -> Self {
        Self { api, screen }
    }

    /// Reports a failure that happened before any form could be submitted.
    pub fn report_error(&self, error: &Error) {
        self.screen.report_error(error);
    }

    pub async fn submit_ingest(
        &self,
        event: &mut SubmitEvent,
        input: &FileInput,
    ) -> Result<Notification> {
        event.prevent_default();
        let submission = Uuid::new_v4();
        info!(
            "Ingest submission {} for {}",
            submission,
            input.first().map(|f| f.file_name.as_str()).unwrap_or("<none>")
        );

        match handlers::ingest(self.api.as_ref(), input.first()).await {
            Ok(notification) => {
                self.screen.alert(&notification.message);
                info!("Ingest submission {} completed", submission);
                Ok(notification)
            }
            Err(e) => {
                error!("Ingest submission {} failed: {}", submission, e);
                self.screen.report_error(&e);
                Err(e)
            }
        }
    }

    pub async fn submit_query(
        &self,
        event: &mut SubmitEvent,
        input: &TextInput,
    ) -> Result<QueryOutcome> {
        event.prevent_default();
        let submission = Uuid::new_v4();
        info!("Query submission {} for '{}'", submission, input.value());

        match handlers::query(self.api.as_ref(), input.value()).await {
            Ok(outcome) => {
                self.screen.set_results(outcome.text());
                info!("Query submission {} completed", submission);
                Ok(outcome)
            }
            Err(e) => {
                error!("Query submission {} failed: {}", submission, e);
                self.screen.report_error(&e);
                Err(e)
            }
        }
    }
}
