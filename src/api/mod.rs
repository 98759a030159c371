mod client;
mod types;

pub use client::{DocumentApi, HttpDocumentApi};
#[cfg(test)]
pub use client::MockDocumentApi;
pub use types::*;
