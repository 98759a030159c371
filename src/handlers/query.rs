use crate::{Error, Result, api::DocumentApi};
use serde_json::Value;
use tracing::{debug, warn};

/// Text destined for the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Pretty-printed `query_results`.
    Results(String),
    /// The backend answered with a message instead of results.
    Message(String),
}

impl QueryOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Results(text) | Self::Message(text) => text,
        }
    }
}

/// Two-space indented JSON, keys in the order the backend sent them.
pub fn render_results(results: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Runs `query` and renders whatever the backend returned.
pub async fn query(api: &dyn DocumentApi, query: &str) -> Result<QueryOutcome> {
    let reply = api.query(query).await?;

    if !reply.is_success() {
        warn!("Query '{}' returned status {}", query, reply.status);
    }

    match (reply.body.query_results, reply.body.message) {
        (Some(results), _) => {
            debug!("Rendering results for query '{}'", query);
            Ok(QueryOutcome::Results(render_results(&results)?))
        }
        (None, Some(message)) => Ok(QueryOutcome::Message(message)),
        (None, None) => Err(Error::missing_field("query_results")),
    }
}
