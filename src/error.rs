use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Longest response body excerpt carried by [`Error::UnexpectedResponse`].
const BODY_EXCERPT_LEN: usize = 512;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Unexpected response (status {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Response is missing field: {field}")]
    MissingField { field: String },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn unexpected_response(status: u16, body: &str) -> Self {
        let body = match body.char_indices().nth(BODY_EXCERPT_LEN) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        Self::UnexpectedResponse { status, body }
    }
}
