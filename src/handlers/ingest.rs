use crate::{
    Error, Result,
    api::{DocumentApi, SelectedFile},
};
use tracing::{info, warn};

/// What the user is shown after an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub doc_id: Option<String>,
}

/// Uploads `file` and returns the backend's `message`.
///
/// A non-2xx reply still yields its `message`; the status and any `error`
/// detail are only logged.
pub async fn ingest(api: &dyn DocumentApi, file: Option<&SelectedFile>) -> Result<Notification> {
    let file = file.ok_or(Error::NoFileSelected)?;

    let reply = api.ingest(file).await?;

    if !reply.is_success() {
        warn!(
            "Ingest of {} returned status {}: {}",
            file.file_name,
            reply.status,
            reply.body.error.as_deref().unwrap_or("no error detail")
        );
    }

    let message = reply
        .body
        .message
        .ok_or_else(|| Error::missing_field("message"))?;

    if let Some(doc_id) = &reply.body.doc_id {
        info!("Ingested {} as document {}", file.file_name, doc_id);
    }

    Ok(Notification {
        message,
        doc_id: reply.body.doc_id,
    })
}
