use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Multipart field name carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// URL parameter carrying the query text.
pub const QUERY_PARAM: &str = "query";

/// A file picked for upload, held in memory for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            file_name,
            content_type,
            contents: contents.into(),
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, contents))
    }
}

/// Best-effort MIME type from the file extension.
pub fn content_type_for(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// A decoded response body together with the status it arrived with.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub status: u16,
    pub body: T,
}

impl<T> Reply<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// `Some(Value::Null)` when the backend sent an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub query_results: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
