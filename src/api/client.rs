use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::{
    Client, Url,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP capability the form handlers run against.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// Uploads `file` to the ingest route as a multipart body.
    async fn ingest(&self, file: &SelectedFile) -> Result<Reply<IngestResponse>>;

    /// Sends `query` to the query route as a URL parameter.
    async fn query(&self, query: &str) -> Result<Reply<QueryResponse>>;
}

pub struct HttpDocumentApi {
    client: Client,
    ingest_url: Url,
    query_url: Url,
}

impl HttpDocumentApi {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            ingest_url: route_url(&config.base_url, &config.ingest_path)?,
            query_url: route_url(&config.base_url, &config.query_path)?,
        })
    }

    pub fn ingest_url(&self) -> &Url {
        &self.ingest_url
    }

    pub fn query_url(&self) -> &Url {
        &self.query_url
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<Reply<T>> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        let body = serde_json::from_str(&text).map_err(|e| {
            warn!("Response with status {} is not valid JSON: {}", status, e);
            Error::unexpected_response(status, &text)
        })?;

        Ok(Reply { status, body })
    }
}

fn route_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| Error::config(format!("Invalid backend URL '{}': {}", joined, e)))
}

#[async_trait]
impl DocumentApi for HttpDocumentApi {
    async fn ingest(&self, file: &SelectedFile) -> Result<Reply<IngestResponse>> {
        debug!(
            "Uploading {} ({} bytes) to {}",
            file.file_name,
            file.contents.len(),
            self.ingest_url
        );

        let part = Part::bytes(file.contents.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(self.ingest_url.clone())
            .multipart(form)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn query(&self, query: &str) -> Result<Reply<QueryResponse>> {
        debug!("Querying {} with: {}", self.query_url, query);

        let response = self
            .client
            .get(self.query_url.clone())
            .query(&[(QUERY_PARAM, query)])
            .send()
            .await?;

        Self::decode(response).await
    }
}
