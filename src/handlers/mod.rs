mod ingest;
mod query;

pub use ingest::{Notification, ingest};
pub use query::{QueryOutcome, query, render_results};
